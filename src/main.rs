mod config;
mod controller;
mod document_model;
mod edit_commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use config::{RcConfig, RcLoader};
use controller::SessionController;
use crossterm::tty::IsTty;
use std::io;
use std::path::PathBuf;

/// Tiny word editor with undo and redo
#[derive(Parser, Debug)]
#[command(name = "memento-pad", version, about)]
struct Args {
    /// Load settings from this rc file instead of searching for .mementorc
    #[arg(long, value_name = "PATH", conflicts_with = "no_rc")]
    rc: Option<PathBuf>,

    /// Skip rc file discovery and use built-in defaults
    #[arg(long)]
    no_rc: bool,

    /// Maximum undo snapshots to keep (0 for unlimited)
    #[arg(long, value_name = "N")]
    undo_levels: Option<usize>,

    /// Disable styled output
    #[arg(long)]
    no_color: bool,

    /// Print a sample .mementorc and exit
    #[arg(long)]
    sample_rc: bool,
}

fn load_config(args: &Args) -> Result<RcConfig> {
    let mut config = if let Some(path) = &args.rc {
        RcLoader::load_from_path(path)
            .with_context(|| format!("failed to read rc file {}", path.display()))?
    } else if args.no_rc {
        RcConfig::default()
    } else {
        RcLoader::load_config()
    };

    // Command-line flags override the rc file
    if let Some(levels) = args.undo_levels {
        config.undo_levels = (levels > 0).then_some(levels);
    }
    if args.no_color {
        config.color = false;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.sample_rc {
        print!("{}", RcLoader::generate_sample_rc());
        return Ok(());
    }

    logging::init();

    let mut config = load_config(&args)?;
    if !io::stdout().is_tty() {
        config.color = false;
    }
    tracing::debug!(?config, "configuration loaded");

    let mut session = SessionController::new(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    session
        .run(&mut input, &mut output)
        .context("session terminated by an I/O error")
}
