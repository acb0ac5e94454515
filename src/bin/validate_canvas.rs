use std::path::PathBuf;

use anyhow::{Context, Result};
use canvas_illustrator::canvas::{decode, CanvasFormat};
use canvas_illustrator::config::Config;
use canvas_illustrator::validation::{Severity, ValidationResult, Validator};
use clap::Parser;

/// Command-line arguments for the canvas validator
#[derive(Debug, Parser)]
#[command(name = "validate-canvas")]
#[command(about = "Report every validation violation of a canvas file")]
#[command(version)]
struct ValidateArgs {
    /// Canvas file to check (.json or .toml)
    #[arg(help = "Canvas definition file (.json or .toml)")]
    input: PathBuf,

    #[arg(long, help = "Path to a TOML config file with [limits]")]
    config: Option<PathBuf>,
}

/// Decode `args.input` and validate it against the configured limits
fn validate_file(args: &ValidateArgs) -> Result<(String, ValidationResult)> {
    let limits = Config::resolve_file(args.config.as_deref())?.limits;

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let canvas = decode(&content, CanvasFormat::from_path(&args.input))
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    Ok((canvas.name.clone(), Validator::new(limits).validate(&canvas)))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = ValidateArgs::parse();
    let (name, result) = validate_file(&args)?;

    println!("Validation result for '{}':", name);
    println!("Total violations: {}", result.violations.len());

    for violation in &result.violations {
        let severity = match violation.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("{} [{}] {}", violation.field, severity, violation.message);
    }

    if !result.is_valid() {
        anyhow::bail!(
            "{} is invalid: {} errors",
            args.input.display(),
            result.errors().count()
        );
    }

    Ok(())
}
