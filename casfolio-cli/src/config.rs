use anyhow::{Context, Result};
use casfolio_ingest::{BalancePolicy, ParseOptions};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParseSection {
    pub balance_policy: BalancePolicy,
    /// Thousands separators stripped from numeric columns
    pub separators: Vec<char>,
    /// Tolerate indented rows by stripping outer whitespace first
    pub trim_lines: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    pub show_drops: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl Default for ParseSection {
    fn default() -> Self {
        let defaults = ParseOptions::default();
        Self {
            balance_policy: defaults.balance_policy,
            separators: defaults.separators,
            trim_lines: defaults.trim_lines,
        }
    }
}

impl ParseSection {
    pub fn to_options(&self) -> ParseOptions {
        ParseOptions {
            balance_policy: self.balance_policy,
            separators: self.separators.clone(),
            trim_lines: self.trim_lines,
        }
    }
}

pub fn casfolio_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".casfolio"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(casfolio_home()?.join("config.toml"))
}

/// Load config from `path`, or the default location. A missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if !p.exists() {
        if path.is_some() {
            anyhow::bail!("config not found: {}", p.display());
        }
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn init_config() -> Result<()> {
    let p = default_config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let dir = casfolio_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}
