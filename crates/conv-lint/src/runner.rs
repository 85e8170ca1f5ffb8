//! Internal runner for `check!()` macro integration.
//!
//! This module is `#[doc(hidden)]` and not part of the public API.
//! It is called by the test function generated by `conv_lint::check!()`.

use conv_lint_core::{Analyzer, Config, Severity};
use conv_lint_rules::default_rules;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["conv-lint.toml", ".conv-lint.toml"];

/// Runs conv-lint analysis as part of `cargo test`.
///
/// Called by the `check!()` macro-generated test function.
/// Panics with a formatted report if violations are found.
///
/// # Panics
///
/// Panics if violations at or above `fail_on` severity are found,
/// or if the analyzer cannot be built.
pub fn run_check(config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    let config = read_config(&root, config_path);
    let effective_fail_on = resolve_fail_on(fail_on, &config);

    let mut builder = Analyzer::builder().root(&root).config(config);
    for rule in default_rules() {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().unwrap_or_else(|e| {
        panic!("conv-lint: failed to build analyzer: {e}");
    });

    let result = analyzer.analyze().unwrap_or_else(|e| {
        panic!("conv-lint: analysis failed: {e}");
    });

    if result.has_violations_at(effective_fail_on) {
        let report = result.format_test_report(effective_fail_on);
        panic!("{report}");
    }
}

/// Reads the configuration, or defaults when no file is found.
fn read_config(root: &Path, explicit_path: Option<&str>) -> Config {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return Config::from_file(&full_path).unwrap_or_else(|e| {
            panic!("conv-lint: failed to load config: {e}");
        });
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            return Config::from_file(&path).unwrap_or_else(|e| {
                panic!("conv-lint: failed to load config: {e}");
            });
        }
    }

    Config::default()
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        // No workspace root found — use manifest dir itself
        return manifest_path;
    }

    // Fallback: current directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves the effective `fail_on` severity from macro arg > config > default.
fn resolve_fail_on(macro_arg: Option<&str>, config: &Config) -> Severity {
    let name = macro_arg.or(config.fail_on.as_deref()).unwrap_or("error");

    match name {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        "info" => Severity::Info,
        other => {
            panic!("conv-lint: unknown severity `{other}`. Valid values: error, warning, info")
        }
    }
}
