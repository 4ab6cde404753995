//! Spiro access point setup
//!
//! Turns a Linux host into a captive-portal WiFi access point:
//! - hostapd broadcasts a WPA2 network with per-run credentials
//! - dnsmasq hands out leases and resolves every name to the gateway
//! - dhcpcd pins the AP interface to a static address

pub mod backend;
pub mod config;
pub mod core;

pub use crate::core::{
    error::{ApError, CommandError, InstallError},
    manager::{AccessPointManager, Reporter, TracingReporter},
    types::{GeneratedCredentials, Service, StartOutcome},
};
