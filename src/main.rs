mod app;
mod charts;
mod config;
mod intake;
mod logging;
mod routes;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use dioxus::prelude::*;

use crate::config::AppConfig;

/// GenomeLab: upload, explore and chart FASTA sequence data.
#[derive(Parser, Debug)]
#[command(name = "genomelab", version, about)]
struct Cli {
    /// Config file (defaults to <config dir>/GenomeLab/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. "genomelab=debug". RUST_LOG wins if set.
    #[arg(long)]
    log_filter: Option<String>,
}

/// Why this build cannot open a window, if it cannot.
fn missing_renderer() -> Option<&'static str> {
    if cfg!(feature = "desktop") {
        None
    } else {
        Some("built without a window renderer; rebuild with `--features desktop`")
    }
}

fn main() {
    let cli = Cli::parse();

    let (config, source) = match AppConfig::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("genomelab: {e}");
            std::process::exit(2);
        }
    };

    logging::init(&config.log, cli.log_filter.as_deref());
    match &source {
        Some(path) => tracing::info!(config = ?path, "config loaded"),
        None => tracing::info!("no config file, using defaults"),
    }

    if let Some(reason) = missing_renderer() {
        tracing::error!(reason, "cannot launch");
        eprintln!("genomelab: {reason}");
        std::process::exit(1);
    }

    tracing::info!(extensions = ?config.intake.accepted_extensions, "starting GenomeLab");
    LaunchBuilder::new().with_context(config).launch(app::App);
}
