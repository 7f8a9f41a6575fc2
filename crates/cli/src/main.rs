//! `cf` binary entrypoint.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use cfkit_core::Session;
use cfkit_infra::{config, HttpClient, JsonConfigStore, RepositoryLocator};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use cfkit_cli::cli::Cli;
use cfkit_cli::ui::Ui;
use cfkit_cli::{commands, CliError};

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let mut ui = Ui::new(io::stdout().lock());

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli, &mut ui)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            // Nothing left to report to if stdout is gone.
            let _ = ui.failed(err.to_string());
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` filters; `CF_TRACE=true` adds request tracing.
fn init_tracing() {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let trace = std::env::var("CF_TRACE")
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false);
    if trace {
        if let Ok(directive) = "cfkit_infra=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

async fn run<W: io::Write>(cli: Cli, ui: &mut Ui<W>) -> Result<(), CliError> {
    let path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    debug!(path = %path.display(), "loading configuration");

    let configuration = config::load(&path)?;
    let client = HttpClient::from_configuration(&configuration)?;
    let store = Arc::new(JsonConfigStore::new(path));
    let locator = RepositoryLocator::new(Session::new(configuration), client, store);

    commands::run(cli.command, &locator, ui).await
}
