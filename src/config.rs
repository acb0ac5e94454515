//! Configuration management for the canvas renderer.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file with render defaults and size limits

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{OutputFormat, RenderOptions};
use crate::validation::Limits;

/// Command-line arguments for the canvas renderer
#[derive(Debug, Default, Parser)]
#[command(name = "canvas-render")]
#[command(about = "Render canvas definitions to text grids")]
#[command(version)]
pub struct Args {
    /// Canvas files to render (.json or .toml)
    #[arg(required = true, help = "Canvas definition files (.json or .toml)")]
    pub inputs: Vec<PathBuf>,

    /// Character used for empty cells and omitted fill/outline
    #[arg(long, help = "Filler character for uncovered cells")]
    pub filler: Option<char>,

    /// String placed between rows
    #[arg(long, help = "Row separator (\\n, \\t and \\r escapes are understood)")]
    pub separator: Option<String>,

    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    /// Render without running the validator first
    #[arg(long, help = "Skip canvas validation")]
    pub no_validate: bool,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the renderer
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of the TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub render: RenderSection,
    pub limits: Limits,
}

/// `[render]` section of the config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub filler: Option<char>,
    pub separator: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub render: RenderOptions,
    pub limits: Limits,
    /// Run the validator before rendering
    pub validate: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = Self::resolve_file(args.config.as_deref())?;
        Ok(Self::merge(args, file))
    }

    /// Load the explicit config file, else the default one when it exists
    pub fn resolve_file(explicit: Option<&Path>) -> Result<FileConfig> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::load_file(&path),
                None => Ok(FileConfig::default()),
            },
        }
    }

    /// Read and parse a TOML config file
    pub fn load_file(path: &Path) -> Result<FileConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Command line wins over the config file, which wins over the format preset
    pub fn merge(args: Args, file: FileConfig) -> Self {
        let format = args.format.or(file.render.format).unwrap_or_default();
        let preset = RenderOptions::for_format(format);

        let filler = args.filler.or(file.render.filler).unwrap_or(preset.filler);
        let separator = args
            .separator
            .map(|s| unescape_separator(&s))
            .or(file.render.separator)
            .unwrap_or(preset.separator);

        Config {
            inputs: args.inputs,
            render: RenderOptions {
                filler,
                separator,
                format,
            },
            limits: file.limits,
            validate: !args.no_validate,
            log_level: args.log_level,
        }
    }
}

/// `<config dir>/canvas-illustrator/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("canvas-illustrator").join("config.toml"))
}

/// Turn the shell-friendly escapes `\n`, `\r`, `\t` and `\\` into characters
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
