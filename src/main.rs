use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use waypoint::core::config::{self, CliOverrides};
use waypoint::tui;

#[derive(Parser)]
#[command(name = "waypoint", about = "Type-safe screen navigation demo")]
struct Args {
    /// Prefill the login email field
    #[arg(short, long)]
    email: Option<String>,

    /// Config file to use instead of ~/.waypoint/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs here instead of waypoint.log
    #[arg(long)]
    log_file: Option<String>,

    /// Don't show transient notices
    #[arg(long)]
    no_notices: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet; hold everything worth reporting until it is
    let (file_config, load_notes, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => (loaded.config, loaded.notes, None),
        Err(e) => (config::WaypointConfig::default(), Vec::new(), Some(e)),
    };
    let cli = CliOverrides {
        email: args.email,
        log_file: args.log_file,
        no_notices: args.no_notices,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    for note in load_notes.iter().chain(&resolved.notes) {
        note.log();
    }
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }
    log::debug!("Config: {:?}", file_config);
    log::info!("Waypoint starting up (notices: {})", resolved.notices_enabled);

    tui::run(resolved)
}
