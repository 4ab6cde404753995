//! Spiro access point - Main Entry Point

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use spiro_ap::{
    AccessPointManager, StartOutcome, TracingReporter,
    backend::SystemRunner,
    config::{ApCommand, CliArgs, Settings},
};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();
    let settings = Settings::from(&args);
    debug!(?settings, "Resolved settings");

    let manager = AccessPointManager::new(
        settings,
        Arc::new(SystemRunner::new()),
        Arc::new(TracingReporter),
    );

    match args.command {
        ApCommand::Start { json, .. } => match manager.start_access_point().await {
            Ok(outcome) => {
                if let (true, StartOutcome::Started(credentials)) = (json, &outcome) {
                    match serde_json::to_string(credentials) {
                        Ok(line) => println!("{}", line),
                        Err(e) => error!("Failed to serialize credentials: {}", e),
                    }
                }
                ExitCode::from(outcome.exit_code())
            }
            Err(e) => {
                error!("Setting up access point failed: {}", e);
                ExitCode::FAILURE
            }
        },
        ApCommand::Stop { release_static_ip } => {
            if let Err(e) = manager.stop_access_point(release_static_ip).await {
                error!("Stopping access point failed: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
