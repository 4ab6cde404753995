//! Access point setup and teardown
//!
//! Steps run strictly one after another. Each command is attempted once,
//! with no timeout.

use std::{path::Path, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    backend::{CommandRunner, PackageManager, ServiceManager, UnitAction},
    config::Settings,
    core::{
        credentials,
        error::{ApError, ApResult, InstallError},
        templates,
        types::{
            GeneratedCredentials, MANAGED_SERVICES, REQUIRED_PACKAGES, RESTART_ORDER, Service,
            StartOutcome,
        },
    },
};

/// Destination for user-facing progress messages
pub trait Reporter: Send + Sync {
    fn report(&self, line: &str);
}

/// Reports progress as `info` level log events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, line: &str) {
        info!("{}", line);
    }
}

/// Stands up or tears down the WiFi access point
pub struct AccessPointManager<R: CommandRunner> {
    settings: Settings,
    services: ServiceManager<R>,
    packages: PackageManager<R>,
    reporter: Arc<dyn Reporter>,
}

impl<R: CommandRunner> AccessPointManager<R> {
    pub fn new(settings: Settings, runner: Arc<R>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            settings,
            services: ServiceManager::new(runner.clone()),
            packages: PackageManager::new(runner),
            reporter,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reload systemd unit definitions
    pub async fn prepare_environment(&self) {
        self.services.daemon_reload().await;
    }

    /// Install dnsmasq and hostapd if missing
    ///
    /// Stops at the first failed install. Freshly installed services are
    /// stopped right away since they are not configured yet.
    pub async fn ensure_dependencies(&self) -> Result<(), InstallError> {
        for service in REQUIRED_PACKAGES {
            let package = service.unit_name();
            if self.packages.is_installed(package).await {
                continue;
            }

            self.packages.install(package).await?;
            self.services.best_effort(UnitAction::Stop, service).await;
        }

        Ok(())
    }

    /// Write hostapd.conf with freshly generated credentials
    pub async fn write_ap_config(&self) -> ApResult<GeneratedCredentials> {
        let credentials = credentials::generate(
            &self.settings.ssid_prefix,
            &self.settings.sysfs_net_dir,
            &self.settings.interface,
        )
        .await;

        write_config(
            &self.settings.hostapd_conf,
            templates::render_hostapd(&self.settings, &credentials),
        )
        .await?;

        Ok(credentials)
    }

    /// Write dnsmasq.conf
    pub async fn write_resolver_config(&self) -> ApResult<()> {
        write_config(
            &self.settings.dnsmasq_conf,
            templates::render_dnsmasq(&self.settings),
        )
        .await
    }

    /// Write dhcpcd.conf, pinning the AP interface address if `enable_static_ip`
    pub async fn write_interface_daemon_config(&self, enable_static_ip: bool) -> ApResult<()> {
        write_config(
            &self.settings.dhcpcd_conf,
            templates::render_dhcpcd(&self.settings, enable_static_ip),
        )
        .await
    }

    /// Restart dhcpcd, dnsmasq and hostapd
    ///
    /// Every service is restarted even if an earlier one fails. Returns true
    /// iff all restarts exit with status zero.
    pub async fn restart_services(&self) -> bool {
        let mut codes = Vec::with_capacity(RESTART_ORDER.len());

        for service in RESTART_ORDER {
            let code = self.services.checked(UnitAction::Restart, service).await;
            debug!("Restarted service {} with status code {:?}", service, code);
            codes.push(code);
        }

        codes.iter().all(|code| *code == Some(0))
    }

    pub async fn enable_services(&self) {
        for service in MANAGED_SERVICES {
            self.services.best_effort(UnitAction::Unmask, service).await;
            self.services.best_effort(UnitAction::Enable, service).await;
        }
    }

    pub async fn disable_services(&self) {
        for service in MANAGED_SERVICES {
            self.services.best_effort(UnitAction::Stop, service).await;
            self.services.best_effort(UnitAction::Disable, service).await;
        }
    }

    /// Bring the access point up
    ///
    /// A failed dependency install is only logged unless
    /// `strict_dependencies` is set.
    pub async fn start_access_point(&self) -> ApResult<StartOutcome> {
        self.reporter.report("Setting up dependencies...");
        self.prepare_environment().await;

        if let Err(e) = self.ensure_dependencies().await {
            if self.settings.strict_dependencies {
                return Err(e.into());
            }
            warn!(
                "Continuing without {}; installer output:\n{}",
                e.package, e.failed_output
            );
        }

        self.reporter.report("Configuring system...");
        self.write_interface_daemon_config(true).await?;
        self.write_resolver_config().await?;
        let credentials = self.write_ap_config().await?;

        self.reporter.report("Starting services...");
        self.enable_services().await;

        if !self.restart_services().await {
            self.reporter.report("Failed to restart services.");
            self.reporter.report("Setting up access point failed.");
            return Ok(StartOutcome::RestartFailed);
        }

        self.reporter.report(
            "Access point configured and enabled. Below are the details for connecting to it:",
        );
        self.reporter.report(&format!("SSID:     {}", credentials.ssid));
        self.reporter
            .report(&format!("Password: {}", credentials.passphrase));
        self.reporter.report(&format!(
            "Connect to the web interface using the address {}",
            self.settings.web_ui_url
        ));

        Ok(StartOutcome::Started(credentials))
    }

    /// Take the access point down
    ///
    /// The static address stays in dhcpcd.conf unless `release_static_ip`
    /// is set, in which case dhcpcd is reconfigured and restarted.
    pub async fn stop_access_point(&self, release_static_ip: bool) -> ApResult<()> {
        self.reporter.report("Disabling services...");
        self.disable_services().await;

        if release_static_ip {
            self.write_interface_daemon_config(false).await?;
            self.services
                .best_effort(UnitAction::Restart, Service::Dhcpcd)
                .await;
        }

        self.reporter.report("Access point disabled.");
        Ok(())
    }
}

async fn write_config(path: &Path, contents: String) -> ApResult<()> {
    debug!("Writing {}", path.display());
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ApError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
}
