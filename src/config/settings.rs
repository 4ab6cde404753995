//! Runtime settings

use std::{net::Ipv4Addr, path::PathBuf};

use crate::config::CliArgs;

/// Access point configuration
///
/// Every path and network constant the setup touches lives here so tests can
/// redirect file output into a scratch directory.
#[derive(Debug, Clone)]
pub struct Settings {
    pub interface: String,
    pub driver: String,
    pub hw_mode: String,
    pub channel: u8,
    pub ssid_prefix: String,
    pub gateway: Ipv4Addr,
    pub prefix_len: u8,
    pub dhcp_range_start: Ipv4Addr,
    pub dhcp_range_end: Ipv4Addr,
    pub dhcp_lease: String,
    pub domain: String,
    pub web_ui_url: String,
    pub hostapd_conf: PathBuf,
    pub dnsmasq_conf: PathBuf,
    pub dhcpcd_conf: PathBuf,
    /// Directory holding `<interface>/address` (MAC source for the UUID node id)
    pub sysfs_net_dir: PathBuf,
    /// Abort `start` when a required package fails to install
    pub strict_dependencies: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interface: "wlan0".to_string(),
            driver: "nl80211".to_string(),
            hw_mode: "g".to_string(),
            channel: 7,
            ssid_prefix: "spiro-".to_string(),
            gateway: Ipv4Addr::new(192, 168, 138, 1),
            prefix_len: 24,
            dhcp_range_start: Ipv4Addr::new(192, 168, 138, 10),
            dhcp_range_end: Ipv4Addr::new(192, 168, 138, 254),
            dhcp_lease: "12h".to_string(),
            domain: "spiro.local".to_string(),
            web_ui_url: "http://spiro.local".to_string(),
            hostapd_conf: PathBuf::from("/etc/hostapd/hostapd.conf"),
            dnsmasq_conf: PathBuf::from("/etc/dnsmasq.conf"),
            dhcpcd_conf: PathBuf::from("/etc/dhcpcd.conf"),
            sysfs_net_dir: PathBuf::from("/sys/class/net"),
            strict_dependencies: false,
        }
    }
}

impl From<&CliArgs> for Settings {
    fn from(args: &CliArgs) -> Self {
        Settings {
            interface: args.interface.clone(),
            strict_dependencies: args.strict_dependencies(),
            ..Settings::default()
        }
    }
}
