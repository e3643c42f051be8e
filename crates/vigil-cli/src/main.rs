//! Vigil - pre-execution policy guard for agent tool calls.
//!
//! The binary is one leg of the host agent's hook protocol: it reads a
//! single JSON tool call from stdin, evaluates it against the guard rules,
//! writes a single JSON verdict to stdout, and appends the verdict to the
//! branch-scoped audit log. stdout carries nothing but the verdict; all
//! diagnostics go to stderr.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod protocol;

use anyhow::Result;
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::warn;

use vigil_audit::{JsonlSink, LogScope, record_verdict};
use vigil_core::{GuardConfig, ProjectDir, ToolCall, Verdict, VigilHome};

/// Pre-execution policy guard for agent tool calls.
#[derive(Parser)]
#[command(name = "vigil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Evaluate only; skip the audit log
    #[arg(long)]
    no_audit: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;

    let config = GuardConfig::from_env();
    let (call, verdict) = protocol::decide(&input, &config);

    // stdout is the protocol channel: exactly one JSON verdict, nothing else.
    println!("{}", serde_json::to_string(&verdict)?);

    // The verdict has already been emitted; audit failures are warnings.
    if !cli.no_audit
        && let Some(call) = call.as_ref()
        && let Err(err) = record(call, &verdict).await
    {
        warn!(error = %err, "audit record dropped");
    }

    Ok(())
}

/// Append the verdict to `~/.vigil/logs/<project>/<branch>/`.
async fn record(call: &ToolCall, verdict: &Verdict) -> Result<()> {
    let home = VigilHome::resolve()?;
    home.ensure()?;
    let project = ProjectDir::detect(&std::env::current_dir()?);
    let scope = LogScope::detect(&project).await;
    let sink = JsonlSink::new(scope.dir_under(&home.logs_dir()));
    record_verdict(&sink, call, verdict)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("VIGIL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
