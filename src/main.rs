//! Sprint Sheet - Main Entry Point
//!
//! Serves the normalized sprint sheet over MCP stdio, or with `--check`
//! runs a single load cycle and prints the result.
//! The actual implementation is in the `sprint_sheet` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use sprint_sheet::logging::{LogConfig, LogFormat, init_logging};
use sprint_sheet::sheet::TableKind;
use sprint_sheet::{SheetConfig, SprintServerHandler, formatting};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Sprint Sheet - sprint planning spreadsheet exports via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing config.csv, members.csv, tasks.csv and milestones.csv
    #[arg(conflicts_with = "config")]
    directory: Option<PathBuf>,

    /// TOML file describing where the table exports live
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load once, print the summary and validation report, then exit
    #[arg(long)]
    check: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    let log_config = LogConfig::from_verbosity(args.verbose, args.quiet)
        .with_format(args.log_format)
        .with_ansi(std::io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: {}", e);
    }

    let sheet_config = match (&args.config, &args.directory) {
        (Some(path), _) => SheetConfig::load(path)?,
        (None, Some(dir)) => SheetConfig::for_directory(dir),
        (None, None) => SheetConfig::default(),
    };

    for table in TableKind::ALL {
        match sheet_config.path_for(table) {
            Some(path) => debug!(%table, path = %path.display(), "table export"),
            None if table.is_required() => warn!(%table, "no export configured for required table"),
            None => debug!(%table, "table disabled"),
        }
    }

    let handler = SprintServerHandler::new(sheet_config);
    let outcome = handler.reload_now().await;

    if args.check {
        print!("{}", formatting::format_overview(&outcome.dataset));
        println!();
        println!("{}", formatting::format_report(&outcome.report));
        std::process::exit(if outcome.used_fallback() { 1 } else { 0 });
    }

    serve_stdio(handler).await?;
    Ok(())
}
