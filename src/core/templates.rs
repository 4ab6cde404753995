//! Configuration file renderers
//!
//! Output is always a complete file; nothing is merged with what is on disk.

use crate::{config::Settings, core::types::GeneratedCredentials};

const HEADER: &str = "# auto-generated by spiro software\n";

/// hostapd.conf: WPA2-PSK network on the AP interface
pub fn render_hostapd(settings: &Settings, credentials: &GeneratedCredentials) -> String {
    format!(
        "{HEADER}\
         interface={interface}\n\
         driver={driver}\n\
         ssid={ssid}\n\
         hw_mode={hw_mode}\n\
         channel={channel}\n\
         wmm_enabled=0\n\
         macaddr_acl=0\n\
         auth_algs=1\n\
         ignore_broadcast_ssid=0\n\
         wpa=2\n\
         wpa_passphrase={passphrase}\n\
         wpa_key_mgmt=WPA-PSK\n\
         wpa_pairwise=TKIP\n\
         rsn_pairwise=CCMP\n",
        interface = settings.interface,
        driver = settings.driver,
        ssid = credentials.ssid,
        hw_mode = settings.hw_mode,
        channel = settings.channel,
        passphrase = credentials.passphrase,
    )
}

/// dnsmasq.conf: DHCP on the AP interface, every name resolves to the gateway
pub fn render_dnsmasq(settings: &Settings) -> String {
    format!(
        "{HEADER}\
         interface={interface}\n\
         dhcp-range={start},{end},{lease}\n\
         address=/#/{gateway}\n\
         no-resolv\n\
         no-poll\n\
         no-hosts\n\
         domain={domain}\n",
        interface = settings.interface,
        start = settings.dhcp_range_start,
        end = settings.dhcp_range_end,
        lease = settings.dhcp_lease,
        gateway = settings.gateway,
        domain = settings.domain,
    )
}

/// dhcpcd.conf: stock client options, plus a static address on the AP
/// interface when `static_ip` is set
pub fn render_dhcpcd(settings: &Settings, static_ip: bool) -> String {
    let mut conf = format!(
        "{HEADER}\
         hostname\n\
         clientid\n\
         persistent\n\
         option rapid_commit\n\
         option domain_name_servers, domain_name, domain_search, host_name\n\
         option classless_static_routes\n\
         option interface_mtu\n\
         option ntp_servers\n\
         require dhcp_server_identifier\n\
         slaac private\n"
    );

    if static_ip {
        conf.push_str(&format!(
            "interface {interface}\n\
             static ip_address={gateway}/{prefix_len}\n\
             nohook wpa_supplicant\n",
            interface = settings.interface,
            gateway = settings.gateway,
            prefix_len = settings.prefix_len,
        ));
    }

    conf
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn credentials() -> GeneratedCredentials {
        GeneratedCredentials {
            ssid: "spiro-ced846".to_string(),
            passphrase: "c232ab00".to_string(),
        }
    }

    #[test]
    fn test_render_hostapd() {
        let conf = render_hostapd(&Settings::default(), &credentials());

        assert_eq!(
            conf,
            "# auto-generated by spiro software\n\
             interface=wlan0\n\
             driver=nl80211\n\
             ssid=spiro-ced846\n\
             hw_mode=g\n\
             channel=7\n\
             wmm_enabled=0\n\
             macaddr_acl=0\n\
             auth_algs=1\n\
             ignore_broadcast_ssid=0\n\
             wpa=2\n\
             wpa_passphrase=c232ab00\n\
             wpa_key_mgmt=WPA-PSK\n\
             wpa_pairwise=TKIP\n\
             rsn_pairwise=CCMP\n"
        );
    }

    #[test]
    fn test_render_dnsmasq() {
        let conf = render_dnsmasq(&Settings::default());

        assert_eq!(
            conf,
            "# auto-generated by spiro software\n\
             interface=wlan0\n\
             dhcp-range=192.168.138.10,192.168.138.254,12h\n\
             address=/#/192.168.138.1\n\
             no-resolv\n\
             no-poll\n\
             no-hosts\n\
             domain=spiro.local\n"
        );
        assert_eq!(conf, render_dnsmasq(&Settings::default()));
    }

    #[test]
    fn test_render_dhcpcd_static_block() {
        let settings = Settings::default();
        let dynamic = render_dhcpcd(&settings, false);
        let fixed = render_dhcpcd(&settings, true);

        assert!(fixed.starts_with(&dynamic));
        assert_eq!(
            &fixed[dynamic.len()..],
            "interface wlan0\n\
             static ip_address=192.168.138.1/24\n\
             nohook wpa_supplicant\n"
        );
        assert!(dynamic.ends_with("slaac private\n"));
    }

    #[test]
    fn test_templates_follow_interface() {
        let settings = Settings {
            interface: "wlan1".to_string(),
            ..Settings::default()
        };

        assert!(render_hostapd(&settings, &credentials()).contains("\ninterface=wlan1\n"));
        assert!(render_dnsmasq(&settings).contains("\ninterface=wlan1\n"));
        assert!(render_dhcpcd(&settings, true).contains("\ninterface wlan1\n"));
    }
}
