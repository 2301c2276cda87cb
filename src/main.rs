use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use release_watch::reconcile::{Sources, reconcile};
use release_watch::{config, report, snapshot};

#[derive(Parser)]
#[command(name = "release-watch")]
#[command(version, about = "Aggregates upstream release status into a static report")]
struct Cli {
    /// Package list to check
    #[arg(long, default_value = "packages.yaml")]
    config: PathBuf,

    /// Snapshot file written after each successful run
    #[arg(long, default_value = "releases.json")]
    snapshot: PathBuf,

    /// Template for the HTML report
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Rendered report output
    #[arg(long, default_value = "index.html")]
    output: PathBuf,

    /// Skip all registry queries and re-render from the last snapshot
    #[arg(long)]
    render_only: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // One package at a time, up to three blocking calls each; a single
    // thread is all the runtime needs.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let now = Utc::now();

    let summaries = if cli.render_only {
        info!("Render-only mode, reading {}", cli.snapshot.display());
        snapshot::load(&cli.snapshot)?
    } else {
        let packages = config::load_packages(&cli.config)?;
        let summaries = reconcile(&packages, &Sources::from_env(), now).await?;
        snapshot::write(&cli.snapshot, &summaries)?;
        info!("Snapshot written to {}", cli.snapshot.display());
        summaries
    };

    let html = report::render(&cli.template, &summaries, now)?;
    report::write(&cli.output, &html)?;
    info!("Report written to {}", cli.output.display());

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
