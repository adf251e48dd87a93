use anyhow::{Context, Result};
use casfolio_core::{consolidate, Ledger, ParsedDocument};
use casfolio_ingest::{open_document, BalancePolicy, Pipeline};
use casfolio_report::{to_json, write_csv};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "casfolio", version, about = "Consolidated account statement analyzer")]
struct Cli {
    /// Config file (default: ~/.casfolio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statements and print a consolidated summary or export the ledger
    Analyze {
        /// Statement files (.pdf, or already-extracted text)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// What to do with an unparseable Balance column (overrides config)
        #[arg(long, value_enum)]
        balance_policy: Option<BalanceArg>,

        /// List every dropped candidate line with its reason
        #[arg(long)]
        show_drops: bool,
    },

    /// Write a default config to ~/.casfolio/config.toml
    InitConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BalanceArg {
    Keep,
    Drop,
}

impl From<BalanceArg> for BalancePolicy {
    fn from(arg: BalanceArg) -> Self {
        match arg {
            BalanceArg::Keep => BalancePolicy::Keep,
            BalanceArg::Drop => BalancePolicy::Drop,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,casfolio=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::InitConfig => {
            config::init_config()?;
        }

        Command::Analyze {
            files,
            format,
            balance_policy,
            show_drops,
        } => {
            let mut cfg = config::load_config(cli.config.as_deref())?;
            if let Some(policy) = balance_policy {
                cfg.parse.balance_policy = policy.into();
            }
            let format = format.unwrap_or(cfg.output.format);
            let show_drops = show_drops || cfg.output.show_drops;

            let pipeline = Arc::new(Pipeline::new(cfg.parse.to_options()));
            let ledger = analyze(pipeline, files).await?;

            match format {
                OutputFormat::Table => print!("{}", render::render_summary(&ledger)),
                OutputFormat::Csv => write_csv(ledger.records(), std::io::stdout().lock())?,
                OutputFormat::Json => println!("{}", to_json(&ledger)?),
            }

            if show_drops {
                eprint!("\n{}", render::render_drops(ledger.drop_report()));
            }
        }
    }

    Ok(())
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn parse_file(pipeline: &Pipeline, path: &Path) -> Result<ParsedDocument> {
    let source = open_document(path).with_context(|| format!("opening {}", path.display()))?;
    pipeline
        .parse_document(&document_name(path), &*source)
        .with_context(|| format!("extracting {}", path.display()))
}

/// Parse every document on the blocking pool, then consolidate in submission order.
async fn analyze(pipeline: Arc<Pipeline>, files: Vec<PathBuf>) -> Result<Ledger> {
    let handles: Vec<_> = files
        .into_iter()
        .map(|path| {
            let pipeline = Arc::clone(&pipeline);
            tokio::task::spawn_blocking(move || parse_file(&pipeline, &path))
        })
        .collect();

    let mut documents = Vec::with_capacity(handles.len());
    for handle in handles {
        documents.push(handle.await.context("statement worker panicked")??);
    }

    let ledger = consolidate(documents);
    info!(
        documents = ledger.documents().len(),
        records = ledger.len(),
        dropped = ledger.drop_report().count(),
        "consolidated ledger"
    );
    Ok(ledger)
}
