//! deskcalc: a two-line pocket calculator for the terminal.
//!
//! Folds calculator key presses into an expression line and a result
//! line, exactly like the pocket calculator it mimics: strict
//! left-to-right arithmetic, a live preview while typing, and a single
//! remembered result to continue from.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod calculator;
mod config;
mod ui;

use crate::config::Config;

/// Two-line pocket calculator for the terminal
#[derive(Debug, Parser)]
#[command(name = "deskcalc")]
#[command(about = "Fold calculator key presses into a two-line display", long_about = None)]
#[command(version)]
struct Args {
    /// Key script to run instead of starting the interactive loop,
    /// e.g. "12+34=" or "200+50%="
    script: Option<String>,

    /// Evaluate one space-joined expression (e.g. "2 + 3 × 4") and exit
    #[arg(long, value_name = "EXPR", conflicts_with = "script")]
    expr: Option<String>,

    /// Path to config.toml (default: the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::load(args.config.as_deref())?;
    let mut session = calculator::Session::new(config.display.max_digits);

    if let Some(expr) = &args.expr {
        let tokens = calculator::parse_expression(expr)?;
        let value = calculator::evaluate(&tokens)?;
        println!(
            "{}",
            calculator::format_number(value, config.display.max_digits)
        );
        return Ok(());
    }

    if let Some(script) = &args.script {
        let frame = ui::run_script(&mut session, script)?;
        ui::print_frame(&frame);
        return Ok(());
    }

    ui::run_interactive(&mut session, config.clipboard.copy_on_equals)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
