//! Domain types for access point setup

use serde::Serialize;

/// A system service managed through systemd
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Interface configuration daemon
    Dhcpcd,
    /// DHCP and DNS resolver
    Dnsmasq,
    /// Access point daemon
    Hostapd,
}

impl Service {
    /// systemd unit name, also the Debian package name
    pub fn unit_name(&self) -> &'static str {
        match self {
            Service::Dhcpcd => "dhcpcd",
            Service::Dnsmasq => "dnsmasq",
            Service::Hostapd => "hostapd",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.unit_name())
    }
}

/// Packages installed on demand, in installation order
pub const REQUIRED_PACKAGES: [Service; 2] = [Service::Dnsmasq, Service::Hostapd];

/// Services restarted after a configuration pass, in restart order
pub const RESTART_ORDER: [Service; 3] = [Service::Dhcpcd, Service::Dnsmasq, Service::Hostapd];

/// Services enabled on start and disabled on stop
pub const MANAGED_SERVICES: [Service; 2] = [Service::Dnsmasq, Service::Hostapd];

/// Network name and passphrase of the access point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCredentials {
    pub ssid: String,
    pub passphrase: String,
}

/// Result of a start attempt that got as far as restarting services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started(GeneratedCredentials),
    RestartFailed,
}

impl StartOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            StartOutcome::Started(_) => 0,
            StartOutcome::RestartFailed => 1,
        }
    }
}
