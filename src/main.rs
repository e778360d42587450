//! Terminal falltris runner (default binary).
//!
//! Reads `FALLTRIS_*` configuration, optionally logs to a file, and runs the
//! frame loop against the real terminal.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use falltris::core::GameState;
use falltris::engine::{run, Config, RunOptions, RunSummary};
use falltris::input::TerminalInput;
use falltris::term::TerminalSink;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    config.report();

    let mut sink = TerminalSink::new();
    sink.enter()?;

    let result = play(&config, &mut sink);

    // Always try to restore terminal state.
    let _ = sink.exit();

    let summary = result?;
    println!(
        "score {}  level {}  lines {}  (seed {})",
        summary.score, summary.level, summary.lines, config.seed
    );
    Ok(())
}

/// The terminal is in raw mode on the alternate screen, so logs only go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let log_file =
        File::create(path).with_context(|| format!("failed to create log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn play(config: &Config, sink: &mut TerminalSink) -> Result<RunSummary> {
    let mut game = GameState::new(config.seed);
    let mut input = TerminalInput::new();
    run(&mut game, &mut input, sink, &RunOptions::from(config))
}
