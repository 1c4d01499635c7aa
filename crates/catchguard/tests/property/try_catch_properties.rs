use catchguard::linter::rules::check_try_catch_clause::MESSAGE;
use catchguard::tree::{CompilationUnit, Span, Statement, TreeBuilder};
use catchguard::{LintDiagnostic, Linter, Semantics};
use proptest::prelude::*;

/// Shapes a top-level catch-block statement can take.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Call,
    ThrowService,
    ThrowOther,
    ThrowVariable,
    GuardedThrowService,
    NestedBlockThrowService,
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Call),
        Just(Shape::ThrowService),
        Just(Shape::ThrowOther),
        Just(Shape::ThrowVariable),
        Just(Shape::GuardedThrowService),
        Just(Shape::NestedBlockThrowService),
    ]
}

fn build(b: &mut TreeBuilder, shape: Shape) -> Statement {
    match shape {
        Shape::Call => {
            let call = b.call("log", vec![]);
            b.expr_stmt(call)
        }
        Shape::ThrowService => {
            let ty = b.simple_type("ServiceException");
            let thrown = b.new_class(ty);
            b.throw(thrown)
        }
        Shape::ThrowOther => {
            let ty = b.simple_type("OtherException");
            let thrown = b.new_class(ty);
            b.throw(thrown)
        }
        Shape::ThrowVariable => {
            let e = b.name("e");
            b.throw(e)
        }
        Shape::GuardedThrowService => {
            let inner = build(b, Shape::ThrowService);
            let cond = b.name("x");
            b.if_stmt(cond, inner, None)
        }
        Shape::NestedBlockThrowService => {
            let inner = build(b, Shape::ThrowService);
            b.block_stmt(vec![inner])
        }
    }
}

fn is_top_level_throw(shape: Shape) -> bool {
    matches!(
        shape,
        Shape::ThrowService | Shape::ThrowOther | Shape::ThrowVariable
    )
}

struct Fixture {
    builder: TreeBuilder,
    unit: CompilationUnit,
    block_span: Span,
    first_stmt_span: Option<Span>,
}

fn fixture(shapes: &[Shape]) -> Fixture {
    let mut b = TreeBuilder::new();
    let stmts: Vec<Statement> = shapes.iter().map(|&s| build(&mut b, s)).collect();
    let first_stmt_span = stmts.first().map(|s| *s.span());
    let body = b.block(stmts);
    let block_span = body.span;
    let clause = b.catch_clause("Exception", "e", body);
    let try_body = b.block(vec![]);
    let try_stmt = b.try_stmt(try_body, vec![clause], None);
    let unit = b.unit_with_body(vec![try_stmt]);
    Fixture {
        builder: b,
        unit,
        block_span,
        first_stmt_span,
    }
}

/// Expected anchor per the shallow-scan model, `None` for a pass.
fn expected_anchor(shapes: &[Shape], fx: &Fixture) -> Option<Span> {
    match shapes.iter().copied().find(|&s| is_top_level_throw(s)) {
        None => Some(fx.block_span),
        Some(Shape::ThrowService) => None,
        Some(_) => fx.first_stmt_span,
    }
}

fn lint(fx: &Fixture, semantics: Semantics) -> Vec<LintDiagnostic> {
    Linter::new()
        .lint_unit(&fx.unit, fx.builder.interner(), semantics, "Prop.java")
        .diagnostics
}

proptest! {
    #[test]
    fn at_most_one_issue_matching_model(shapes in prop::collection::vec(shape(), 0..6)) {
        let fx = fixture(&shapes);
        let diags = lint(&fx, Semantics::Resolved);

        prop_assert!(diags.len() <= 1, "more than one issue: {:?}", diags);
        let got = diags.first().map(|d| d.span);
        prop_assert_eq!(got, expected_anchor(&shapes, &fx));
        for d in &diags {
            prop_assert_eq!(d.message.as_str(), MESSAGE);
        }
    }

    #[test]
    fn linting_is_idempotent(shapes in prop::collection::vec(shape(), 0..6)) {
        let fx = fixture(&shapes);
        let before = fx.unit.clone();
        let first = lint(&fx, Semantics::Resolved);
        let second = lint(&fx, Semantics::Resolved);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&fx.unit, &before);
    }

    #[test]
    fn no_issues_without_semantics(shapes in prop::collection::vec(shape(), 0..6)) {
        let fx = fixture(&shapes);
        prop_assert!(lint(&fx, Semantics::Unresolved).is_empty());
    }
}
