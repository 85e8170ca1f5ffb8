//! Check command implementation.

use anyhow::{Context, Result};
use conv_lint_core::{Analyzer, Config};
use conv_lint_rules::default_rules;
use std::path::Path;

use crate::OutputFormat;

/// Config file names to search for next to the analyzed path.
const CONFIG_CANDIDATES: &[&str] = &["conv-lint.toml", ".conv-lint.toml"];

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    strict_parse: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(path, config_path)?;

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fail_on_parse_error(strict_parse);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in default_rules() {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} rule evaluator(s)",
        path,
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the config from an explicit path, a candidate next to the
/// analyzed path, or defaults.
fn resolve_config(path: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(config_path) = explicit {
        return Config::from_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()));
    }

    for candidate in CONFIG_CANDIDATES {
        let candidate_path = path.join(candidate);
        if candidate_path.exists() {
            tracing::debug!("Using config: {}", candidate_path.display());
            return Config::from_file(&candidate_path)
                .with_context(|| format!("Failed to load config: {}", candidate_path.display()));
        }
    }

    Ok(Config::default())
}
