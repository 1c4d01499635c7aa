//! Rule: check-try-catch-clause (L1001)
//!
//! The first `catch` clause of every `try` statement must rethrow a
//! `ServiceException` built in place:
//!
//! ```java
//! try { ... } catch (Exception e) { log(e); throw new ServiceException(e); }
//! ```
//!
//! Only the top-level statements of the catch block are searched, and the
//! thrown class is matched by its simple name as written. Subclasses,
//! qualified names, generic types and rethrown variables do not count.
//! A `try` without catch clauses is ignored.

use crate::linter::rule::*;
use crate::tree::{
    CatchClause, Expression, Interner, Node, NodeKind, Span, Statement, ThrowStatement,
    TryStatement, TypeRef,
};

/// Exception class the first catch clause has to throw.
pub const EXPECTED_EXCEPTION: &str = "ServiceException";

/// Message attached to every issue of this rule.
pub const MESSAGE: &str = "Catch clause must throw ServiceException";

pub struct CheckTryCatchClause;

static META: RuleMeta = RuleMeta {
    name: "check-try-catch-clause",
    key: "CheckTryCatchClause",
    code: "L1001",
    description: "Catch clause must throw ServiceException.",
    category: Category::Correctness,
    default_severity: Severity::Error,
    tags: &["bug"],
};

/// Verdict for one `try` statement that has at least one catch clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    /// The first catch clause throws `new ServiceException(...)`.
    Pass,
    /// No top-level throw in the first catch block; anchored at the block.
    MissingThrow { anchor: Span },
    /// A throw was found but it is not `new ServiceException(...)`;
    /// anchored at the first statement of the block.
    WrongType { anchor: Span },
}

impl CatchOutcome {
    pub fn anchor(&self) -> Option<Span> {
        match self {
            CatchOutcome::Pass => None,
            CatchOutcome::MissingThrow { anchor } | CatchOutcome::WrongType { anchor } => {
                Some(*anchor)
            }
        }
    }
}

impl LintRule for CheckTryCatchClause {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn nodes_to_visit(&self) -> &'static [NodeKind] {
        &[NodeKind::TryStatement]
    }

    fn visit_node(&self, node: Node<'_>, ctx: &LintContext<'_>, reporter: &mut Reporter<'_>) {
        let Node::Statement(Statement::Try(try_stmt)) = node else {
            return;
        };

        if !ctx.semantics.is_available() {
            tracing::trace!(file = ctx.file_path, "no semantics, skipping try statement");
            return;
        }

        if let Some(anchor) = evaluate(try_stmt, ctx.interner).and_then(|o| o.anchor()) {
            reporter.report(anchor, MESSAGE);
        }
    }
}

/// Check the first catch clause of `try_stmt`.
///
/// Returns `None` when the statement has no catch clause at all
/// (try-finally, try-with-resources); such a statement cannot violate
/// the rule.
pub fn evaluate(try_stmt: &TryStatement, interner: &Interner) -> Option<CatchOutcome> {
    let clause = try_stmt.catches.first()?;

    let outcome = match find_throw(clause) {
        None => CatchOutcome::MissingThrow {
            anchor: clause.body.span,
        },
        Some(throw) if thrown_class_name(throw, interner) == Some(EXPECTED_EXCEPTION) => {
            CatchOutcome::Pass
        }
        Some(throw) => CatchOutcome::WrongType {
            // A throw was found, so the block has a first statement.
            anchor: clause
                .body
                .statements
                .first()
                .map_or(throw.span, |stmt| *stmt.span()),
        },
    };
    Some(outcome)
}

/// First `throw` among the direct statements of the catch block.
///
/// Does not look inside nested blocks, branches, loops or nested `try`s.
pub fn find_throw(clause: &CatchClause) -> Option<&ThrowStatement> {
    clause.body.statements.iter().find_map(|stmt| match stmt {
        Statement::Throw(throw) => Some(throw),
        Statement::Block(_)
        | Statement::Expression(_)
        | Statement::LocalVariable(_)
        | Statement::If(_)
        | Statement::While(_)
        | Statement::ForEach(_)
        | Statement::Return(_)
        | Statement::Break(_)
        | Statement::Continue(_)
        | Statement::Try(_)
        | Statement::Empty(_) => None,
    })
}

/// Simple name of the class instantiated by `throw new Name(...)`.
///
/// `None` for any other thrown expression, and for qualified or generic
/// class names.
pub fn thrown_class_name<'i>(throw: &ThrowStatement, interner: &'i Interner) -> Option<&'i str> {
    let new_class = match &throw.expression {
        Expression::NewClass(new_class) => new_class,
        Expression::Literal(_)
        | Expression::Name(_)
        | Expression::FieldAccess(_)
        | Expression::MethodCall(_)
        | Expression::Conditional(_)
        | Expression::Assignment(_)
        | Expression::Parenthesized(_) => return None,
    };

    match &new_class.class {
        TypeRef::Simple(ident) => interner.get(ident.name),
        TypeRef::Qualified(_) | TypeRef::Parameterized(_) => None,
    }
}
