//! Lint configuration: per-rule severity overrides.
//!
//! Loaded from the `[lint.rules]` table of a TOML file:
//!
//! ```toml
//! [lint.rules]
//! check-try-catch-clause = "warn"
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use super::rule::Severity;

/// Errors that can occur while loading lint configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read lint config: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse lint config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An override names a rule the linter does not know
    #[error("Unknown lint rule: {0}")]
    UnknownRule(String),
}

/// Configuration for the linter.
#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    /// Per-rule severity overrides. Key = rule name (e.g. "check-try-catch-clause").
    overrides: FxHashMap<String, Severity>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    lint: LintSection,
}

#[derive(Debug, Default, Deserialize)]
struct LintSection {
    #[serde(default)]
    rules: FxHashMap<String, Severity>,
}

impl LintConfig {
    /// Create a new empty config (all rules use their default severity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text. A document without a `[lint]`
    /// table yields an empty config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Self {
            overrides: file.lint.rules,
        })
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the severity for a specific rule.
    pub fn set_severity(&mut self, rule_name: &str, severity: Severity) {
        self.overrides.insert(rule_name.to_string(), severity);
    }

    /// Get the effective severity for a rule, falling back to its default.
    pub fn effective_severity(&self, rule_name: &str, default: Severity) -> Severity {
        self.overrides.get(rule_name).copied().unwrap_or(default)
    }

    /// Check if a rule is explicitly disabled.
    pub fn is_disabled(&self, rule_name: &str) -> bool {
        self.overrides.get(rule_name) == Some(&Severity::Off)
    }

    /// Names of all rules with an override.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }
}
