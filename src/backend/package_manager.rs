//! Debian package queries and installation

use std::sync::Arc;

use tracing::{debug, info};

use crate::{backend::CommandRunner, core::error::InstallError};

/// Wrapper over `dpkg` (query) and `apt` (install)
pub struct PackageManager<R: CommandRunner> {
    runner: Arc<R>,
}

impl<R: CommandRunner> PackageManager<R> {
    pub fn new(runner: Arc<R>) -> Self {
        Self { runner }
    }

    /// Whether `dpkg -l` reports the package
    ///
    /// A failed query, including a missing `dpkg`, counts as not installed.
    pub async fn is_installed(&self, package: &str) -> bool {
        match self.runner.run("dpkg", &["-l", package]).await {
            Ok(out) => {
                debug!("dpkg -l {} exited with {:?}", package, out.code);
                out.success()
            }
            Err(e) => {
                debug!("Package query for {} failed: {}", package, e);
                false
            }
        }
    }

    /// Install a package non-interactively
    pub async fn install(&self, package: &str) -> Result<(), InstallError> {
        info!("Installing {}", package);

        match self.runner.run("apt", &["install", "-y", package]).await {
            Ok(out) if out.success() => Ok(()),
            Ok(out) => Err(InstallError {
                package: package.to_string(),
                failed_output: out.output,
            }),
            Err(e) => Err(InstallError {
                package: package.to_string(),
                failed_output: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockRunner;

    #[tokio::test]
    async fn test_is_installed() {
        let runner = Arc::new(MockRunner::new());
        runner.set_exit_code("dpkg -l hostapd", 1).await;
        let packages = PackageManager::new(runner);

        assert!(packages.is_installed("dnsmasq").await);
        assert!(!packages.is_installed("hostapd").await);
    }

    #[tokio::test]
    async fn test_missing_dpkg_means_not_installed() {
        let runner = Arc::new(MockRunner::new());
        runner.set_missing_program("dpkg").await;
        let packages = PackageManager::new(runner);

        assert!(!packages.is_installed("dnsmasq").await);
    }

    #[tokio::test]
    async fn test_install_failure_carries_output() {
        let runner = Arc::new(MockRunner::new());
        runner
            .set_response("apt install -y hostapd", Some(100), "E: Unable to locate package hostapd\n")
            .await;
        let packages = PackageManager::new(runner);

        let err = packages.install("hostapd").await.unwrap_err();
        assert_eq!(err.package, "hostapd");
        assert_eq!(err.failed_output, "E: Unable to locate package hostapd\n");
    }

    #[tokio::test]
    async fn test_install_spawn_failure() {
        let runner = Arc::new(MockRunner::new());
        runner.set_missing_program("apt").await;
        let packages = PackageManager::new(runner);

        let err = packages.install("dnsmasq").await.unwrap_err();
        assert!(err.failed_output.contains("Failed to spawn apt"));
    }
}
