//! Catchguard linter
//!
//! Tree-based lint analysis over syntax trees produced by a host front end.
//!
//! # Architecture
//!
//! - Each rule implements [`LintRule`]: it names the node kinds it wants
//!   and inspects only those.
//! - The dispatch table is built once per [`Linter`] from the rules'
//!   subscriptions; disabled rules are left out.
//! - The runner walks each compilation unit once and hands every node to
//!   the rules subscribed to its kind.
//! - Issues go to an [`IssueSink`]; [`Linter::lint_unit`] collects them
//!   into a [`LintResult`].
//!
//! # Example
//!
//! ```ignore
//! use catchguard::linter::Linter;
//! use catchguard::Semantics;
//!
//! let linter = Linter::new();
//! let result = linter.lint_unit(&unit, &interner, Semantics::Resolved, "Job.java");
//! for d in &result.diagnostics {
//!     println!("[{}] {}: {}", d.code, d.rule, d.message);
//! }
//! ```

pub mod config;
pub mod rule;
pub mod rules;
mod runner;

pub use config::{ConfigError, LintConfig};
pub use rule::{
    Category, IssueSink, LintContext, LintDiagnostic, LintRule, Reporter, RuleMeta, Severity,
};

use serde::Serialize;

use crate::semantic::Semantics;
use crate::tree::{CompilationUnit, Interner};
use runner::{LintRunner, SubscriptionTable};

/// Result of linting a single file.
#[derive(Debug, Serialize)]
pub struct LintResult {
    /// All diagnostics emitted for this file, in tree order.
    pub diagnostics: Vec<LintDiagnostic>,
    /// File path that was linted.
    pub file_path: String,
}

impl LintResult {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// The linter. Holds the rules and the dispatch table built from their
/// subscriptions and the configuration.
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    table: SubscriptionTable,
}

impl Linter {
    /// Create a linter with all default rules and default severities.
    pub fn new() -> Self {
        Self::with_config(LintConfig::new())
    }

    /// Create a linter with configuration overrides. Overrides naming
    /// unknown rules are ignored.
    pub fn with_config(config: LintConfig) -> Self {
        Self::with_rules(rules::all_rules(), &config)
    }

    /// Like [`Linter::with_config`], but rejects overrides for rules that
    /// do not exist.
    pub fn try_with_config(config: LintConfig) -> Result<Self, ConfigError> {
        let rules = rules::all_rules();
        if let Some(unknown) = config
            .rule_names()
            .find(|name| !rules.iter().any(|r| r.meta().name == *name))
        {
            return Err(ConfigError::UnknownRule(unknown.to_string()));
        }
        Ok(Self::with_rules(rules, &config))
    }

    /// Create a linter running exactly `rules`.
    pub fn with_rules(rules: Vec<Box<dyn LintRule>>, config: &LintConfig) -> Self {
        let table = SubscriptionTable::build(&rules, config);
        tracing::debug!(
            rules = rules.len(),
            active = !table.is_empty(),
            "built lint dispatch table"
        );
        Self { rules, table }
    }

    /// Metadata of every rule this linter carries, enabled or not.
    pub fn rules(&self) -> impl Iterator<Item = &RuleMeta> {
        self.rules.iter().map(|r| r.meta())
    }

    /// Lint a compilation unit and collect the diagnostics.
    ///
    /// The caller provides the tree, the interner its identifiers were
    /// interned in, and whether semantics were resolved for the file.
    pub fn lint_unit(
        &self,
        unit: &CompilationUnit,
        interner: &Interner,
        semantics: Semantics,
        file_path: &str,
    ) -> LintResult {
        let mut diagnostics = Vec::new();
        self.lint_unit_into(unit, interner, semantics, file_path, &mut diagnostics);
        tracing::debug!(file = file_path, issues = diagnostics.len(), "lint finished");
        LintResult {
            diagnostics,
            file_path: file_path.to_string(),
        }
    }

    /// Lint a compilation unit, streaming diagnostics into `sink`.
    pub fn lint_unit_into(
        &self,
        unit: &CompilationUnit,
        interner: &Interner,
        semantics: Semantics,
        file_path: &str,
        sink: &mut dyn IssueSink,
    ) {
        tracing::debug!(file = file_path, ?semantics, "linting");
        let ctx = LintContext {
            interner,
            semantics,
            file_path,
        };
        LintRunner::new(&self.rules, &self.table, ctx, sink).run(unit);
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
