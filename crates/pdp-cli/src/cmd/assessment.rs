use crate::output::{print_json, print_yaml};
use anyhow::Context;
use clap::Subcommand;
use pdp_core::assessment::Assessment;
use pdp_core::config::Config;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum AssessmentSubcommand {
    /// Print a filled-in sample assessment
    Template,

    /// Validate an assessment file
    Check {
        /// Assessment YAML file
        file: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: AssessmentSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        AssessmentSubcommand::Template => template(json),
        AssessmentSubcommand::Check { file } => check(root, &file, json),
    }
}

/// Read and parse an assessment file.
pub fn load(file: &Path) -> anyhow::Result<Assessment> {
    Assessment::load(file).with_context(|| format!("failed to read assessment {}", file.display()))
}

// ---------------------------------------------------------------------------
// template
// ---------------------------------------------------------------------------

fn template(json: bool) -> anyhow::Result<()> {
    let sample = Assessment::sample();
    if json {
        print_json(&sample)
    } else {
        print_yaml(&sample)
    }
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

fn check(root: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let assessment = load(file)?;
    let require = config.generation.require_complete_ratings;
    let result = assessment.validate(require);
    let missing = assessment.missing_ratings();

    if json {
        print_json(&serde_json::json!({
            "file": file.display().to_string(),
            "valid": result.is_ok(),
            "error": result.as_ref().err().map(|e| e.to_string()),
            "missing_ratings": missing,
        }))?;
    } else if result.is_ok() {
        println!("{}: valid", file.display());
        for tier in &missing {
            println!("  note: no self rating for {tier}; Mastery content at base duration");
        }
    }

    result.with_context(|| format!("{} is not a valid assessment", file.display()))
}
