use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfsift_core::{InputDocument, RunOutcome};

mod chain;
mod settings;

use settings::{DEFAULT_LOG_FILTER, resolve_log_filter};

/// Extract text from assets/docs/registration.pdf, falling back across three
/// extraction libraries
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Diagnostic log filter for stderr, e.g. "debug" or "pdfsift_core=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter = resolve_log_filter(cli.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&filter);

    match extract(&InputDocument::default()) {
        Ok(outcome) => tracing::debug!(?outcome, "run finished"),
        Err(e) => tracing::error!(error = %format!("{e:#}"), "run aborted"),
    }

    // Every outcome exits 0; only stdout tells them apart.
    ExitCode::SUCCESS
}

fn extract(input: &InputDocument) -> anyhow::Result<RunOutcome> {
    let runner = chain::default_chain();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = runner
        .run(input, &mut out)
        .with_context(|| format!("writing extraction of {}", input.path().display()))?;
    out.flush().context("flushing stdout")?;
    Ok(outcome)
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {filter:?} ({e}), using {DEFAULT_LOG_FILTER:?}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Library panics are caught and reported on stdout; keep the default
    // hook's backtrace banner off stderr.
    std::panic::set_hook(Box::new(|info| {
        tracing::warn!(panic = %info, "extraction library panicked");
    }));
}
