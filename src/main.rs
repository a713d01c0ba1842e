//! FalconBowl backend entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use falconbowl::api::{create_router, openapi_json};
use falconbowl::config::Config;
use falconbowl::metrics;
use falconbowl::quiz::{QuestionBank, LIGHTNING_SECONDS};
use falconbowl::utils::shutdown_signal;

/// FalconBowl quiz-bowl backend.
#[derive(Parser, Debug)]
#[command(name = "falconbowl")]
#[command(about = "HTTP backend for the FalconBowl quiz-bowl game")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Validate a question bank file and summarize it.
    CheckQuestions {
        /// Path to the question bank JSON file.
        file: PathBuf,
    },

    /// Print the OpenAPI document.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.json_logs);

    match args.command {
        Some(Command::Serve { port }) => cmd_serve(port.or(args.port)).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::CheckQuestions { file }) => cmd_check_questions(file),
        Some(Command::Openapi) => cmd_openapi(),
        None => cmd_serve(args.port).await,
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("falconbowl=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    config.validate().map_err(|e| {
        error!("{}", e);
        e
    })?;

    match config.metrics_addr() {
        Some(addr) => metrics::install_prometheus(addr)?,
        None => info!("Metrics exporter disabled (METRICS_PORT not set)"),
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("FALCONBOWL - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Host:          {}", config.host);
    println!("  Port:          {}", config.port);
    match config.metrics_port {
        Some(port) => println!("  Metrics port:  {}", port),
        None => println!("  Metrics port:  disabled"),
    }
    println!("  Log level:     {}", config.rust_log);
    println!("======================================================================");

    Ok(())
}

/// Validate a question bank file.
fn cmd_check_questions(file: PathBuf) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("FALCONBOWL - QUESTION BANK CHECK");
    println!("======================================================================");

    print!("Loading {}... ", file.display());
    let bank = match QuestionBank::load(&file) {
        Ok(b) => {
            println!("OK");
            b
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Question bank load failed"));
        }
    };

    print!("Validating question bank... ");
    match bank.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Question bank validation failed"));
        }
    }

    let counts = bank.quarter_counts();
    println!("----------------------------------------------------------------------");
    println!("Question Bank Summary:");
    println!("  Total questions: {}", bank.questions.len());
    for (i, count) in counts.iter().enumerate() {
        println!("  Quarter {}:       {}", i + 1, count);
    }

    if counts[2] > 0 {
        println!("  Lightning round: {}s clock", LIGHTNING_SECONDS);
        if bank.categories.is_empty() {
            warn!("Bank has lightning-round questions but no categories");
            println!("  Categories:      none (lightning round plays in file order)");
        } else {
            println!("  Categories:");
            for (i, name) in bank.categories.iter().enumerate() {
                println!("    {}. {}", i + 1, name);
            }
        }
    }
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", openapi_json()?);
    Ok(())
}
