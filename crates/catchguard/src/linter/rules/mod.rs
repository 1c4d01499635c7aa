//! Rule registry: all available lint rules.

pub mod check_try_catch_clause;

use super::rule::LintRule;

/// Returns all available lint rules with their default configuration.
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        // Correctness
        Box::new(check_try_catch_clause::CheckTryCatchClause),
    ]
}
