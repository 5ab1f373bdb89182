//! Mars rover host program.
//!
//! Loads a mission from the TOML file given as the first argument, or runs
//! the built-in border-loop mission when none is given, then prints the
//! travel report and the error (if any).
//!
//! Run with:
//!   cargo run --example mars_rover
//!   cargo run --example mars_rover -- mission.toml
//!
//! Set `RUST_LOG=rover_nav=trace` to see every applied command.

use rover::mission::{MissionConfig, MissionError};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mars_rover=info,rover=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading mission from {path}");
            MissionConfig::load(Path::new(&path))
        }
        None => {
            info!("Using built-in mission");
            Ok(MissionConfig::default())
        }
    };

    match config.and_then(|c| c.run()) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            println!();
            println!("{err}");
            if let MissionError::Io { .. } | MissionError::Parse(_) = err {
                std::process::exit(2);
            }
        }
    }
}
