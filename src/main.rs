// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "warn" so a good run prints nothing)
// 2. Parse command-line arguments and turn them into a validated Config
// 3. Run the pipeline: settings -> fetch -> count -> write
// 4. Exit with proper code (0 = success or disabled, 1 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - validated run configuration
mod github;    // src/github/ - repository listing
mod pipeline;  // src/pipeline.rs - the four stages, in order
mod report;    // src/report/ - README block and next-update strategies
mod settings;  // src/settings/ - persisted JSON settings
mod stats;     // src/stats/ - per-language counting

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use github::GitHubClient;
use pipeline::Outcome;

// Everything is sequential, so a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    match execute(Cli::parse()).await? {
        Outcome::Disabled => println!("{}", pipeline::DISABLED_NOTICE),
        Outcome::Updated(stats) => tracing::info!(
            "README updated: {} repositories, {} with a language",
            stats.total,
            stats.languages.counted()
        ),
    }

    Ok(())
}

// Turns the parsed arguments into a finished run
//
// The kill switch comes first: when it is on, no option is validated, no
// HTTP client is built and no file is opened.
async fn execute(cli: Cli) -> Result<Outcome> {
    if cli.disabled {
        return Ok(Outcome::Disabled);
    }

    // Validate every option before any network or file access
    let config = Config::try_from(cli)?;
    let client = GitHubClient::new(&config)?;

    pipeline::run(&config, &client, chrono::Utc::now()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_wins_over_invalid_options() {
        let cli = Cli::try_parse_from([
            "readme-stats",
            "--disabled",
            "--api-url",
            "not a url",
            "--user",
            " ",
            "--utc-offset",
            "99",
        ])
        .unwrap();

        let outcome = execute(cli).await.unwrap();
        assert!(matches!(outcome, Outcome::Disabled));
    }
}
