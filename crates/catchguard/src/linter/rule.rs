//! Lint rule trait and supporting types.
//!
//! Each lint rule implements `LintRule`: it declares static metadata
//! (`RuleMeta`), the node kinds it subscribes to, and a `visit_node` hook
//! that reports issues through a `Reporter`.

use serde::{Deserialize, Serialize};

use crate::semantic::Semantics;
use crate::tree::{Interner, Node, NodeKind, Span};

/// Severity level for a lint diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Reports as a warning (does not affect exit code).
    #[serde(alias = "warning")]
    Warn,
    /// Reports as an error (causes non-zero exit code).
    Error,
}

/// Category of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Likely bugs or logic errors.
    Correctness,
    /// Naming and formatting conventions.
    Style,
    /// Language idioms and recommended patterns.
    BestPractice,
}

/// Static metadata for a lint rule.
#[derive(Debug)]
pub struct RuleMeta {
    /// Rule name used in configuration, e.g. "check-try-catch-clause".
    pub name: &'static str,
    /// Stable key for external rule registries, e.g. "CheckTryCatchClause".
    pub key: &'static str,
    /// Lint code, e.g. "L1001".
    pub code: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    pub category: Category,
    /// Default severity when no config override is set.
    pub default_severity: Severity,
    /// Free-form tags, e.g. `["bug"]`.
    pub tags: &'static [&'static str],
}

/// Context passed to each rule during lint checking.
pub struct LintContext<'a> {
    /// String interner (resolve Symbol → &str).
    pub interner: &'a Interner,
    /// Whether the host resolved semantics for this file.
    pub semantics: Semantics,
    /// Path of the file being linted.
    pub file_path: &'a str,
}

/// A single lint diagnostic emitted by a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintDiagnostic {
    /// Rule name (e.g. "check-try-catch-clause").
    pub rule: &'static str,
    /// Lint code (e.g. "L1001").
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Anchor location.
    pub span: Span,
    /// Effective severity after config overrides.
    pub severity: Severity,
}

/// Receiver of emitted diagnostics.
///
/// Emission is fire-and-forget: rules never observe what the sink does
/// with a diagnostic.
pub trait IssueSink {
    fn accept(&mut self, diagnostic: LintDiagnostic);
}

impl IssueSink for Vec<LintDiagnostic> {
    fn accept(&mut self, diagnostic: LintDiagnostic) {
        self.push(diagnostic);
    }
}

/// Handle a rule reports through. Stamps the rule's identity and effective
/// severity onto every diagnostic before handing it to the sink.
pub struct Reporter<'r> {
    meta: &'r RuleMeta,
    severity: Severity,
    sink: &'r mut dyn IssueSink,
}

impl<'r> Reporter<'r> {
    pub fn new(meta: &'r RuleMeta, severity: Severity, sink: &'r mut dyn IssueSink) -> Self {
        Self {
            meta,
            severity,
            sink,
        }
    }

    /// Report an issue anchored at `span`.
    pub fn report(&mut self, span: Span, message: impl Into<String>) {
        self.sink.accept(LintDiagnostic {
            rule: self.meta.name,
            code: self.meta.code,
            message: message.into(),
            span,
            severity: self.severity,
        });
    }
}

/// Trait that every lint rule must implement.
///
/// The runner calls `nodes_to_visit` once when the linter is built and
/// afterwards calls `visit_node` only for nodes of those kinds. Rules keep
/// no state between calls, so one instance serves many files at once.
pub trait LintRule: Send + Sync {
    /// Static metadata for this rule.
    fn meta(&self) -> &RuleMeta;

    /// Node kinds this rule wants to be notified about.
    fn nodes_to_visit(&self) -> &'static [NodeKind] {
        &[]
    }

    /// Inspect a node of a subscribed kind.
    fn visit_node(&self, _node: Node<'_>, _ctx: &LintContext<'_>, _reporter: &mut Reporter<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    static META: RuleMeta = RuleMeta {
        name: "test-rule",
        key: "TestRule",
        code: "T0001",
        description: "test only",
        category: Category::Style,
        default_severity: Severity::Warn,
        tags: &[],
    };

    #[test]
    fn test_reporter_stamps_rule_identity() {
        let mut sink: Vec<LintDiagnostic> = Vec::new();
        let mut reporter = Reporter::new(&META, Severity::Error, &mut sink);
        reporter.report(Span::new(1, 2, 3, 4), "bad");

        assert_eq!(
            sink,
            vec![LintDiagnostic {
                rule: "test-rule",
                code: "T0001",
                message: "bad".to_string(),
                span: Span::new(1, 2, 3, 4),
                severity: Severity::Error,
            }]
        );
    }

    #[test]
    fn test_default_rule_subscribes_to_nothing() {
        struct Silent;
        impl LintRule for Silent {
            fn meta(&self) -> &RuleMeta {
                &META
            }
        }
        assert!(Silent.nodes_to_visit().is_empty());
    }
}
