//! Lint runner: single-pass tree visitor that dispatches each node to the
//! rules subscribed to its kind.

use rustc_hash::FxHashMap;

use crate::tree::visitor::{self, Visitor};
use crate::tree::{
    Block, CatchClause, ClassDecl, CompilationUnit, Expression, MethodDecl, Node, NodeKind, Statement,
};

use super::config::LintConfig;
use super::rule::{IssueSink, LintContext, LintRule, Reporter, Severity};

/// Rule indices by node kind, with each rule's effective severity.
///
/// Built once per linter from `LintRule::nodes_to_visit`. Disabled rules
/// are not subscribed at all.
#[derive(Debug, Default)]
pub(crate) struct SubscriptionTable {
    by_kind: FxHashMap<NodeKind, Vec<usize>>,
    severities: Vec<Severity>,
}

impl SubscriptionTable {
    pub(crate) fn build(rules: &[Box<dyn LintRule>], config: &LintConfig) -> Self {
        let mut table = Self::default();
        for (index, rule) in rules.iter().enumerate() {
            let meta = rule.meta();
            let severity = config.effective_severity(meta.name, meta.default_severity);
            table.severities.push(severity);
            if severity == Severity::Off {
                continue;
            }
            for &kind in rule.nodes_to_visit() {
                let subscribers = table.by_kind.entry(kind).or_default();
                if !subscribers.contains(&index) {
                    subscribers.push(index);
                }
            }
        }
        table
    }

    pub(crate) fn subscribers(&self, kind: NodeKind) -> &[usize] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn severity(&self, index: usize) -> Severity {
        self.severities.get(index).copied().unwrap_or(Severity::Off)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}

/// Runs all subscribed rules over one compilation unit in a single traversal.
pub(crate) struct LintRunner<'a> {
    rules: &'a [Box<dyn LintRule>],
    table: &'a SubscriptionTable,
    ctx: LintContext<'a>,
    sink: &'a mut dyn IssueSink,
}

impl<'a> LintRunner<'a> {
    pub(crate) fn new(
        rules: &'a [Box<dyn LintRule>],
        table: &'a SubscriptionTable,
        ctx: LintContext<'a>,
        sink: &'a mut dyn IssueSink,
    ) -> Self {
        Self {
            rules,
            table,
            ctx,
            sink,
        }
    }

    /// Walk the unit, handing every subscribed node to its rules.
    pub(crate) fn run(mut self, unit: &CompilationUnit) {
        if self.table.is_empty() {
            return;
        }
        self.visit_unit(unit);
    }

    fn dispatch(&mut self, node: Node<'_>) {
        let kind = node.kind();
        let (rules, table) = (self.rules, self.table);
        for &index in table.subscribers(kind) {
            let Some(rule) = rules.get(index) else {
                continue;
            };
            tracing::trace!(rule = rule.meta().name, ?kind, line = node.span().line, "dispatch");
            let mut reporter = Reporter::new(rule.meta(), table.severity(index), &mut *self.sink);
            rule.visit_node(node, &self.ctx, &mut reporter);
        }
    }
}

impl Visitor for LintRunner<'_> {
    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        self.dispatch(Node::Class(decl));
        visitor::walk_class_decl(self, decl);
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        self.dispatch(Node::Method(decl));
        visitor::walk_method_decl(self, decl);
    }

    fn visit_block(&mut self, block: &Block) {
        self.dispatch(Node::Block(block));
        visitor::walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        // Nested blocks are dispatched from visit_block.
        if !matches!(stmt, Statement::Block(_)) {
            self.dispatch(Node::Statement(stmt));
        }
        visitor::walk_statement(self, stmt);
    }

    fn visit_catch_clause(&mut self, clause: &CatchClause) {
        self.dispatch(Node::CatchClause(clause));
        visitor::walk_catch_clause(self, clause);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.dispatch(Node::Expression(expr));
        visitor::walk_expression(self, expr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::rule::{Category, LintDiagnostic, RuleMeta};
    use crate::semantic::Semantics;
    use crate::tree::TreeBuilder;

    /// A trivial test rule that flags every throw statement.
    struct FlagThrows;

    static FLAG_THROWS_META: RuleMeta = RuleMeta {
        name: "flag-throws",
        key: "FlagThrows",
        code: "T0001",
        description: "Flags every throw statement (test only)",
        category: Category::Correctness,
        default_severity: Severity::Warn,
        tags: &[],
    };

    impl LintRule for FlagThrows {
        fn meta(&self) -> &RuleMeta {
            &FLAG_THROWS_META
        }

        fn nodes_to_visit(&self) -> &'static [NodeKind] {
            &[NodeKind::ThrowStatement, NodeKind::ThrowStatement]
        }

        fn visit_node(&self, node: Node<'_>, _ctx: &LintContext<'_>, reporter: &mut Reporter<'_>) {
            reporter.report(node.span(), "flagged");
        }
    }

    fn run(
        rules: &[Box<dyn LintRule>],
        config: &LintConfig,
        b: TreeBuilder,
        unit: &CompilationUnit,
    ) -> Vec<LintDiagnostic> {
        let interner = b.into_interner();
        let table = SubscriptionTable::build(rules, config);
        let ctx = LintContext {
            interner: &interner,
            semantics: Semantics::Resolved,
            file_path: "Test.java",
        };
        let mut diags = Vec::new();
        LintRunner::new(rules, &table, ctx, &mut diags).run(unit);
        diags
    }

    fn two_throws() -> (TreeBuilder, CompilationUnit) {
        let mut b = TreeBuilder::new();
        let e = b.name("e");
        let first = b.throw(e);
        let e = b.name("e");
        let second = b.throw(e);
        let nested = b.block_stmt(vec![second]);
        let unit = b.unit_with_body(vec![first, nested]);
        (b, unit)
    }

    #[test]
    fn test_runner_dispatches_subscribed_kinds_once() {
        let rules: Vec<Box<dyn LintRule>> = vec![Box::new(FlagThrows)];
        let (b, unit) = two_throws();
        let diags = run(&rules, &LintConfig::new(), b, &unit);

        // Duplicate subscription entries must not double-report.
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.code == "T0001" && d.severity == Severity::Warn));
        assert!(diags[0].span.start < diags[1].span.start);
    }

    #[test]
    fn test_runner_skips_disabled_rules() {
        let rules: Vec<Box<dyn LintRule>> = vec![Box::new(FlagThrows)];
        let mut config = LintConfig::new();
        config.set_severity("flag-throws", Severity::Off);
        let (b, unit) = two_throws();

        let table = SubscriptionTable::build(&rules, &config);
        assert!(table.is_empty());
        assert!(run(&rules, &config, b, &unit).is_empty());
    }

    #[test]
    fn test_runner_applies_severity_override() {
        let rules: Vec<Box<dyn LintRule>> = vec![Box::new(FlagThrows)];
        let mut config = LintConfig::new();
        config.set_severity("flag-throws", Severity::Error);
        let (b, unit) = two_throws();

        let diags = run(&rules, &config, b, &unit);
        assert!(diags.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn test_runner_empty_rules() {
        let rules: Vec<Box<dyn LintRule>> = vec![];
        let (b, unit) = two_throws();
        assert!(run(&rules, &LintConfig::new(), b, &unit).is_empty());
    }
}
