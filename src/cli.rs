//! Command-line front end. Lines and columns are 1-based here and 0-based
//! everywhere else.

use crate::app::dto::{DocumentRequest, HintsResponse, NavigateRequest, NavigateResponse, ScanResponse};
use crate::app::engine::NavEngine;
use crate::config::SettingsArgs;
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "golens",
    version,
    about = "Navigate between Go interface methods and their implementations",
    long_about = "golens scans Go source for interface method signatures and receiver methods, \
                  and resolves go-to-implementation / go-to-interface jumps through an oracle \
                  (lexical name matching or gopls)."
)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List navigation hints in a Go file
    Hints {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show interface blocks and receiver methods found in a Go file
    Scan {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Jump from the method declared on LINE to its implementations or interfaces
    Navigate {
        file: PathBuf,
        /// 1-based line
        line: usize,
        /// 1-based column on the method name
        #[arg(long)]
        column: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:7878")]
        addr: SocketAddr,
    },
    /// Serve MCP tools over stdio
    Mcp,
}

fn document_request(file: &std::path::Path) -> DocumentRequest {
    DocumentRequest {
        path: Some(file.to_string_lossy().into_owned()),
        text: None,
    }
}

pub fn display_hints(engine: &NavEngine, file: &std::path::Path, json: bool) -> Result<()> {
    let result = engine.hints(document_request(file))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_hints(&result);
    Ok(())
}

fn print_hints(result: &HintsResponse) {
    if result.hints.is_empty() {
        println!("No interface or receiver methods found.");
        return;
    }
    for hint in &result.hints {
        let side = if hint.kind == "interface_side" {
            "implementations"
        } else {
            "interfaces"
        };
        println!(
            "{:>5}:{:<4} {}.{}  -> {}",
            hint.anchor_line + 1,
            hint.anchor_start_col + 1,
            hint.context,
            hint.method_name,
            side
        );
    }
}

pub fn display_scan(engine: &NavEngine, file: &std::path::Path, json: bool) -> Result<()> {
    let result = engine.scan(document_request(file))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_scan(&result);
    Ok(())
}

fn print_scan(result: &ScanResponse) {
    println!("Interfaces: {}", result.interfaces.len());
    for block in &result.interfaces {
        println!(
            "  {} (lines {}-{})",
            block.name,
            block.start_line + 1,
            block.end_line + 1
        );
        for m in &block.methods {
            println!("    {} (lines {}-{})", m.name, m.line + 1, m.span_end_line + 1);
        }
    }
    println!("Receiver methods: {}", result.receiver_methods.len());
    for d in &result.receiver_methods {
        println!(
            "  {}.{} (lines {}-{})",
            d.receiver_type,
            d.name,
            d.start_line + 1,
            d.end_line + 1
        );
    }
}

pub async fn navigate(
    engine: &NavEngine,
    file: &std::path::Path,
    line: usize,
    column: Option<usize>,
    json: bool,
) -> Result<()> {
    if line == 0 || column == Some(0) {
        bail!("Lines and columns are 1-based");
    }
    let result = engine
        .navigate(NavigateRequest {
            path: file.to_string_lossy().into_owned(),
            line: line - 1,
            column: column.map(|c| c - 1),
        })
        .await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_navigation(&result);
    Ok(())
}

fn print_navigation(result: &NavigateResponse) {
    println!("{}.{}", result.hint.context, result.hint.method_name);
    if let Some(message) = &result.message {
        println!("  {message}");
        return;
    }
    for target in &result.targets {
        println!(
            "  {}  {}:{}:{}",
            target.label,
            target.location.document,
            target.location.start_line + 1,
            target.location.start_column + 1
        );
    }
}
