//! Catchguard
//!
//! Lint rule that requires the first `catch` clause of every `try`
//! statement to rethrow a `ServiceException`. The host front end supplies
//! a resolved syntax tree ([`tree`]) and a per-file [`Semantics`] flag; the
//! [`Linter`] walks the tree and reports [`LintDiagnostic`]s.

pub mod linter;
pub mod semantic;
pub mod tree;

pub use linter::{IssueSink, LintConfig, LintDiagnostic, LintResult, Linter, Severity};
pub use semantic::Semantics;
