//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_records` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use domain_records::config::{BATCH_SIZE, DEFAULT_DOH_ENDPOINT, DEFAULT_USER_AGENT};
use domain_records::initialization::init_logger_with;
use domain_records::{run_headers, run_pull, run_update, Config, LogFormat, LogLevel};

/// Fills a CSV sheet of domains with their DNS records.
#[derive(Debug, Parser)]
#[command(
    name = "domain_records",
    about = "Fills a CSV sheet of domains with MX, TXT, SPF, A, CNAME, NS, DKIM, DMARC and AAAA records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Refresh every domain of the sheet (committed every --batch-size rows)
    Pull {
        /// CSV sheet, one domain per row in the first column
        sheet: PathBuf,
    },
    /// Refresh a single row of the sheet
    Update {
        /// CSV sheet, one domain per row in the first column
        sheet: PathBuf,
        /// 1-based row number (row 1 is the header)
        #[arg(long)]
        row: usize,
    },
    /// Write the header row only
    Headers {
        /// CSV sheet to initialize
        sheet: PathBuf,
    },
}

#[derive(Debug, Args)]
struct GlobalOptions {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, global = true, default_value = DEFAULT_DOH_ENDPOINT)]
    endpoint: String,

    /// Rows processed between two sheet commits
    #[arg(long, global = true, default_value_t = BATCH_SIZE)]
    batch_size: usize,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl From<GlobalOptions> for Config {
    fn from(options: GlobalOptions) -> Self {
        Config {
            endpoint: options.endpoint,
            batch_size: options.batch_size,
            user_agent: options.user_agent,
            log_level: options.log_level,
            log_format: options.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from(cli.options);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("domain_records error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Pull { sheet } => {
            let report = run_pull(config, &sheet).await?;
            println!(
                "Processed {} domain{} ({} succeeded, {} failed) in {:.1}s",
                report.domains_processed,
                if report.domains_processed == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            for failure in report.failures() {
                if let Err(e) = &failure.result {
                    println!("   row {} ({}): {}", failure.row, failure.domain, e);
                }
            }
            println!("Results saved in {}", sheet.display());
        }
        Command::Update { sheet, row } => {
            if run_update(config, &sheet, row).await? {
                println!("Row {} of {} updated", row, sheet.display());
            } else {
                println!("Row {} of {} has no domain", row, sheet.display());
            }
        }
        Command::Headers { sheet } => {
            if run_headers(&sheet)? {
                println!("Header row written to {}", sheet.display());
            } else {
                println!("Header row of {} already up to date", sheet.display());
            }
        }
    }
    Ok(())
}
