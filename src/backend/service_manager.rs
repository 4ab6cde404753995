//! systemd service control
//!
//! Calls fall into two categories. Best-effort calls log their result and
//! discard it. Checked calls hand the exit code back to the caller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{backend::CommandRunner, core::types::Service};

const SYSTEMCTL: &str = "systemctl";

/// Unit-level systemctl verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitAction {
    Stop,
    Restart,
    Enable,
    Disable,
    Unmask,
}

impl UnitAction {
    pub fn verb(&self) -> &'static str {
        match self {
            UnitAction::Stop => "stop",
            UnitAction::Restart => "restart",
            UnitAction::Enable => "enable",
            UnitAction::Disable => "disable",
            UnitAction::Unmask => "unmask",
        }
    }
}

/// Thin wrapper over `systemctl`
pub struct ServiceManager<R: CommandRunner> {
    runner: Arc<R>,
}

impl<R: CommandRunner> ServiceManager<R> {
    pub fn new(runner: Arc<R>) -> Self {
        Self { runner }
    }

    /// Reload unit definitions (best effort)
    pub async fn daemon_reload(&self) {
        match self.runner.run(SYSTEMCTL, &["daemon-reload"]).await {
            Ok(out) => debug!("systemctl daemon-reload exited with {:?}", out.code),
            Err(e) => warn!("Ignoring daemon-reload failure: {}", e),
        }
    }

    /// Apply `action` to `service`, ignoring the outcome
    pub async fn best_effort(&self, action: UnitAction, service: Service) {
        match self
            .runner
            .run(SYSTEMCTL, &[action.verb(), service.unit_name()])
            .await
        {
            Ok(out) => debug!(
                "systemctl {} {} exited with {:?}",
                action.verb(),
                service,
                out.code
            ),
            Err(e) => warn!("Ignoring {} {} failure: {}", action.verb(), service, e),
        }
    }

    /// Apply `action` to `service` and return its exit code
    ///
    /// `None` means the command was killed by a signal or could not be spawned.
    pub async fn checked(&self, action: UnitAction, service: Service) -> Option<i32> {
        match self
            .runner
            .run(SYSTEMCTL, &[action.verb(), service.unit_name()])
            .await
        {
            Ok(out) => out.code,
            Err(e) => {
                warn!("{} {} failed: {}", action.verb(), service, e);
                None
            }
        }
    }
}
