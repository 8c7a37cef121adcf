//! org-folders CLI
//!
//! Command-line interface for listing and paging organization folders

use clap::Parser;
use org_folders::cli::{Cli, Runner};
use org_folders::config::Settings;

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let level: tracing::Level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        settings.log_level.into()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let runner = Runner::new(cli, settings);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
