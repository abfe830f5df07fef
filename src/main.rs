// Draftboard pipeline entry point.
//
// Subcommands:
//   fetch - download the raw player directory and store it verbatim
//   build - run the offline matching pipeline over the stored inputs
//   run   - fetch, then build

use std::path::Path;

use anyhow::Context;
use tracing::info;

use draftboard_pipeline::config::PipelineConfig;
use draftboard_pipeline::{fetch, pipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let command = std::env::args().nth(1).unwrap_or_else(|| "build".to_string());

    let config = PipelineConfig::load_or_default().context("failed to load configuration")?;
    info!(
        "config: players={}, rankings={}, output={}",
        config.paths.players, config.paths.rankings, config.paths.output
    );

    match command.as_str() {
        "fetch" => do_fetch(&config).await?,
        "build" => do_build(&config)?,
        "run" => {
            do_fetch(&config).await?;
            do_build(&config)?;
        }
        other => {
            eprintln!("unknown command '{other}'");
            eprintln!("usage: draftboard [fetch|build|run]");
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn do_fetch(config: &PipelineConfig) -> anyhow::Result<()> {
    fetch::fetch_directory(&config.fetch.players_url, Path::new(&config.paths.players))
        .await
        .context("directory fetch failed")?;
    println!("player directory saved to {}", config.paths.players);
    Ok(())
}

fn do_build(config: &PipelineConfig) -> anyhow::Result<()> {
    let report = pipeline::run(config).context("pipeline run failed")?;
    println!(
        "{} players written to {} ({} matched, {} unmatched ranking rows)",
        report.clean.len(),
        config.paths.output,
        report.matched_players,
        report.unmatched.len()
    );
    Ok(())
}

/// Log to stderr so stdout stays clean for the summary line.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draftboard_pipeline=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
