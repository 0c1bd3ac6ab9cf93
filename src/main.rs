//! Waymark - waypoint manager
//!
//! Main application entry point with a CLI over the waypoint store.

mod commands;

use clap::{Arg, Command, value_parser};
use std::path::PathBuf;
use tracing::debug;
use waymark::{WaypointStore, config::Config, error, logging};

fn main() -> color_eyre::Result<()> {
    // Initialize error handling
    error::install_error_handlers()?;

    // Load configuration from file and/or environment variables
    let mut config = Config::load().map_err(error::WaymarkError::from)?;

    // Define base CLI structure
    let base_app = Command::new("Waymark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-dimension 3D waypoint manager")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the waypoint file (overrides WAYMARK_STORE__DATA_DIR)"),
        );

    // Register all command modules
    let app = commands::register_commands(base_app);

    // Parse command line arguments
    let matches = app.get_matches();

    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config.store.data_dir = dir.clone();
    }

    // Initialize logging
    logging::init(&config.logging);
    debug!("Store file: {}", config.store.file_path().display());

    let store = WaypointStore::open(&config.store);

    // Handle commands based on matches
    commands::handle_commands(&matches, &store)?;

    Ok(())
}
