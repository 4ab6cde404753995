//! Command-line argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[clap(name = "spiro-ap", version)]
#[clap(about = "Set up or tear down the spiro WiFi access point")]
pub struct CliArgs {
    /// Wireless network interface used for the access point
    #[clap(short, long, global = true, default_value = "wlan0")]
    pub interface: String,

    #[clap(subcommand)]
    pub command: ApCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ApCommand {
    /// Install dependencies, write configuration and start the access point
    Start {
        /// Print the generated credentials as JSON on stdout
        #[clap(long)]
        json: bool,

        /// Abort if hostapd or dnsmasq cannot be installed
        #[clap(long)]
        strict_dependencies: bool,
    },

    /// Stop and disable the access point services
    Stop {
        /// Hand the interface back to dynamic address configuration
        #[clap(long)]
        release_static_ip: bool,
    },
}

impl CliArgs {
    pub fn strict_dependencies(&self) -> bool {
        matches!(
            self.command,
            ApCommand::Start {
                strict_dependencies: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stop() {
        let args = CliArgs::parse_from(["spiro-ap", "stop", "--release-static-ip"]);
        assert!(matches!(
            args.command,
            ApCommand::Stop {
                release_static_ip: true
            }
        ));
        assert!(!args.strict_dependencies());
    }

    #[test]
    fn test_parse_start_json() {
        let args = CliArgs::parse_from(["spiro-ap", "start", "--json", "-i", "wlan1"]);
        assert_eq!(args.interface, "wlan1");
        assert!(matches!(
            args.command,
            ApCommand::Start {
                json: true,
                strict_dependencies: false
            }
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["spiro-ap"]).is_err());
    }
}
