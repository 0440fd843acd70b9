use anyhow::Result;
use clap::Parser;
use golens::app::engine::NavEngine;
use golens::cli::{self, Cli, Command};
use golens::config::Settings;
use golens::server::{http, mcp::GoLensMcpServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stderr only: stdout carries command output and the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("golens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let engine = NavEngine::new(Settings::from(args.settings))?;

    match args.command {
        Command::Hints { file, json } => cli::display_hints(&engine, &file, json),
        Command::Scan { file, json } => cli::display_scan(&engine, &file, json),
        Command::Navigate {
            file,
            line,
            column,
            json,
        } => cli::navigate(&engine, &file, line, column, json).await,
        Command::Serve { addr } => http::serve(engine, addr).await,
        Command::Mcp => GoLensMcpServer::new(engine).serve_stdio().await,
    }
}
