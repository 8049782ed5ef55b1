//! # catpointd: catpoint simulator
//!
//! Composition root that wires the adapters together and replays a scenario
//! against the security service.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars, first CLI argument)
//! - Initialise logging
//! - Construct the repository and classifier implementations (adapters)
//! - Construct the security service, injecting them via port traits
//! - Register the log and transcript listeners
//! - Replay the scenario and print a JSON report on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no alarm logic belongs here.

mod config;
mod listener;
mod report;
mod scenario;

use catpoint_adapter_memory::InMemorySecurityRepository;
use catpoint_adapter_virtual::VirtualCatDetector;
use catpoint_app::services::security_service::SecurityService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::listener::{LoggingStatusListener, Transcript};
use crate::report::Report;
use crate::scenario::Scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.scenario.path = Some(path.into());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let scenario = match &config.scenario.path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scenario");
            Scenario::load(path)?
        }
        None => {
            tracing::info!("no scenario configured, running the built-in demo");
            Scenario::demo()
        }
    };

    // Adapters
    let repo = InMemorySecurityRepository::with_sensors(config.sensors);
    let detector = VirtualCatDetector::new();

    // Service
    let mut service = SecurityService::with_config(repo, detector, config.service)?;
    service.add_status_listener(Box::new(LoggingStatusListener));
    let transcript = Transcript::new();
    service.add_status_listener(Box::new(transcript.clone()));

    scenario.run(&mut service)?;

    let report = Report::capture(&service, &transcript)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
