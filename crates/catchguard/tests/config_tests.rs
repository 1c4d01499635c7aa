//! Loading lint configuration from files.

use std::io::Write;

use catchguard::linter::ConfigError;
use catchguard::tree::TreeBuilder;
use catchguard::{LintConfig, Linter, Semantics, Severity};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_overrides_severity() {
    let file = write_config(
        r#"
        [package]
        name = "billing"

        [lint.rules]
        check-try-catch-clause = "warn"
        "#,
    );
    let config = LintConfig::from_file(file.path()).unwrap();

    let mut b = TreeBuilder::new();
    let body = b.block(vec![]);
    let clause = b.catch_clause("Exception", "e", body);
    let try_body = b.block(vec![]);
    let try_stmt = b.try_stmt(try_body, vec![clause], None);
    let unit = b.unit_with_body(vec![try_stmt]);

    let linter = Linter::try_with_config(config).unwrap();
    let result = linter.lint_unit(&unit, b.interner(), Semantics::Resolved, "Billing.java");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Warn);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LintConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {:?}", err);
}

#[test]
fn test_malformed_config_file_is_parse_error() {
    let file = write_config("[lint.rules\ncheck-try-catch-clause = ");
    let err = LintConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("Failed to parse lint config"));
}

#[test]
fn test_unknown_rule_in_file_is_rejected() {
    let file = write_config("[lint.rules]\nno-empty-catch = \"error\"\n");
    let config = LintConfig::from_file(file.path()).unwrap();

    let err = Linter::try_with_config(config.clone()).err().expect("unknown rule rejected");
    assert_eq!(err.to_string(), "Unknown lint rule: no-empty-catch");

    // The lenient constructor ignores it.
    let linter = Linter::with_config(config);
    assert_eq!(linter.rules().count(), 1);
}
