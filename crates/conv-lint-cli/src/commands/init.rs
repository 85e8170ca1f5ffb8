//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# conv-lint configuration
#
# Convention rules are declared in your source files, not here:
#
#     Conventions::for_namespace("crate::models")
#         .for_all_properties()
#         .require_nullable_properties("Model fields must be optional");

# Severity threshold for check!() test failure (error | warning | info)
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("conv-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created conv-lint.toml");
    println!("\nNext steps:");
    println!("  1. Declare conventions in your source with conv_lint::dsl::Conventions");
    println!("  2. Run: conv-lint check");

    Ok(())
}
