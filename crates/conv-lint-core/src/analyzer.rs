//! Core analyzer for orchestrating convention checking.
//!
//! Analysis runs in two passes over the same parsed files: first the
//! declaration universe is collected from every file, then each file's
//! call expressions are decoded and evaluated against that universe.
//! A chain in one file can therefore constrain declarations in any
//! other file under the root.

use crate::chain::{self, ConfigChain};
use crate::config::Config;
use crate::context::FileContext;
use crate::emit;
use crate::rule::{ConventionRule, ConventionRuleBox};
use crate::scope;
use crate::types::{LintResult, Violation};
use crate::universe::DeclUniverse;

use std::path::{Path, PathBuf};
use syn::visit::Visit;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Rust source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<ConventionRuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Registers a rule evaluator.
    #[must_use]
    pub fn rule<R: ConventionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule evaluator.
    #[must_use]
    pub fn rule_box(mut self, rule: ConventionRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/vendor/**".to_string()]);
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// A successfully parsed source file awaiting evaluation.
struct ParsedFile {
    context: FileContext,
    ast: syn::File,
}

/// Collects decoded configuration chains from one file's expressions.
#[derive(Default)]
struct ChainVisitor {
    chains: Vec<ConfigChain>,
}

impl<'ast> Visit<'ast> for ChainVisitor {
    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        if let Some(decoded) = chain::decode(node) {
            self.chains.push(decoded);
        }
        syn::visit::visit_expr_method_call(self, node);
    }
}

/// The main analyzer that orchestrates convention checking.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<ConventionRuleBox>,
    exclude_patterns: Vec<String>,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rule evaluators.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files under the root and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or on the first parse
    /// error when `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let mut parsed = Vec::new();
        for path in &files {
            match self.parse_file(path) {
                Ok(file) => parsed.push(file),
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        let mut universe = DeclUniverse::new();
        for file in &parsed {
            universe.add_file(&file.context.namespace, &file.ast);
        }
        debug!("Collected {} type declaration(s)", universe.len());

        let mut result = LintResult::new();
        result.files_checked = parsed.len();

        for file in &parsed {
            let mut visitor = ChainVisitor::default();
            visitor.visit_file(&file.ast);

            for decoded in &visitor.chains {
                result.violations.extend(self.evaluate_chain(
                    decoded,
                    &universe,
                    &file.context.relative_path,
                ));
            }
        }

        // Sort violations by file, then message, for deterministic output
        result
            .violations
            .sort_by(|a, b| {
                a.location
                    .file
                    .cmp(&b.location.file)
                    .then_with(|| a.message.cmp(&b.message))
            });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Parses a single file.
    fn parse_file(&self, path: &Path) -> Result<ParsedFile, AnalyzerError> {
        debug!("Parsing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let ast = syn::parse_file(&content).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(ParsedFile {
            context: FileContext::new(path, &self.root),
            ast,
        })
    }

    /// Evaluates one decoded chain, reporting against the file it was
    /// declared in.
    fn evaluate_chain(
        &self,
        decoded: &ConfigChain,
        universe: &DeclUniverse,
        unit: &Path,
    ) -> Vec<Violation> {
        let Some(rule) = self
            .rules
            .iter()
            .find(|r| r.kind() == decoded.rule.kind())
        else {
            debug!(
                "No evaluator registered for {:?}, chain dropped",
                decoded.rule.kind()
            );
            return Vec::new();
        };

        if rule.target() != decoded.target {
            debug!(
                "Rule {} expects {:?} but chain targets {:?}, chain dropped",
                rule.name(),
                rule.target(),
                decoded.target
            );
            return Vec::new();
        }

        let matched = scope::resolve(universe, &decoded.scope);
        debug!(
            "Scope {} matched {} declaration(s)",
            decoded.scope.namespace,
            matched.len()
        );

        match rule.evaluate(decoded, &matched) {
            Ok(found) => found
                .into_iter()
                .map(|violation| emit::emit(violation, unit))
                .collect(),
            Err(e) => {
                // Invalid rule parameters abort only this chain
                warn!("Skipping convention chain in {}: {}", unit.display(), e);
                Vec::new()
            }
        }
    }

    /// Discovers all Rust source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let pattern = format!("{}/**/*.rs", self.root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}
