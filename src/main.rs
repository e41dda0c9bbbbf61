use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use theater_billing::api::{AppState, create_router};
use theater_billing::config::DataLoader;
use theater_billing::render_batch;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "theater_billing=info";

/// Directive appended by `--verbose`, after any `RUST_LOG` directives.
const VERBOSE_LOG_DIRECTIVE: &str = "theater_billing=debug";

/// Renders billing statements for theater performance invoices.
#[derive(Debug, Parser)]
#[command(name = "theater-billing", version, about)]
struct Cli {
    /// Enable debug logging for this crate, even when RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print text statements, then HTML statements, for every invoice
    Render {
        /// Directory holding plays.json and invoices.json
        #[arg(short, long, default_value = "./data")]
        data: PathBuf,

        /// Stop at the first invoice that fails instead of skipping it
        #[arg(long)]
        fail_fast: bool,
    },
    /// Serve the statement API
    Serve {
        /// Play catalog file (JSON or YAML)
        #[arg(short, long, default_value = "./data/plays.json")]
        plays: PathBuf,

        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

/// Builds the log filter from `RUST_LOG` (if any), then applies `--verbose`.
///
/// A later directive for the same target replaces an earlier one, so
/// `--verbose` raises this crate to debug whatever `RUST_LOG` says about it.
fn log_filter(verbose: bool, env_directives: Option<String>) -> EnvFilter {
    let mut directives = env_directives
        .filter(|directives| EnvFilter::try_new(directives).is_ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    if verbose {
        directives.push(',');
        directives.push_str(VERBOSE_LOG_DIRECTIVE);
    }

    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logger(verbose: bool) {
    let filter = log_filter(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn render(data: PathBuf, fail_fast: bool) -> ExitCode {
    let loader = match DataLoader::load(&data) {
        Ok(loader) => loader,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load billing data");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let batch = match render_batch(loader.invoices(), loader.plays(), fail_fast) {
        Ok(batch) => batch,
        Err(err) => {
            tracing::error!(error = %err, "Aborting on first failed statement");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    for output in batch.outputs() {
        println!("{output}");
    }

    if batch.failed > 0 {
        tracing::warn!(failed = batch.failed, "Some statements could not be produced");
    }
    ExitCode::SUCCESS
}

async fn serve(plays: PathBuf, addr: SocketAddr) -> ExitCode {
    let catalog = match DataLoader::load_plays(&plays) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load play catalog");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let router = create_router(AppState::new(catalog));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, "Statement API listening");
    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Render { data, fail_fast } => render(data, fail_fast),
        Command::Serve { plays, addr } => serve(plays, addr).await,
    }
}
