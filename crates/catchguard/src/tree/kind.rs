//! Node kind tags used for rule subscriptions.

use super::*;

/// Kind of a syntax node. Rules subscribe to kinds; the runner looks up
/// subscribers by the kind of every node it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Class,
    Method,
    Block,
    CatchClause,

    // Statements
    ExpressionStatement,
    LocalVariable,
    IfStatement,
    WhileStatement,
    ForEachStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    TryStatement,
    EmptyStatement,

    // Expressions
    Literal,
    Name,
    FieldAccess,
    MethodCall,
    NewClass,
    Conditional,
    Assignment,
    Parenthesized,
}

/// Borrowed view of any node the runner dispatches to rules.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Class(&'a ClassDecl),
    Method(&'a MethodDecl),
    Block(&'a Block),
    CatchClause(&'a CatchClause),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl Node<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Class(_) => NodeKind::Class,
            Node::Method(_) => NodeKind::Method,
            Node::Block(_) => NodeKind::Block,
            Node::CatchClause(_) => NodeKind::CatchClause,
            Node::Statement(stmt) => stmt.kind(),
            Node::Expression(expr) => expr.kind(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Class(c) => c.span,
            Node::Method(m) => m.span,
            Node::Block(b) => b.span,
            Node::CatchClause(c) => c.span,
            Node::Statement(s) => *s.span(),
            Node::Expression(e) => *e.span(),
        }
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Block(_) => NodeKind::Block,
            Statement::Expression(_) => NodeKind::ExpressionStatement,
            Statement::LocalVariable(_) => NodeKind::LocalVariable,
            Statement::If(_) => NodeKind::IfStatement,
            Statement::While(_) => NodeKind::WhileStatement,
            Statement::ForEach(_) => NodeKind::ForEachStatement,
            Statement::Return(_) => NodeKind::ReturnStatement,
            Statement::Break(_) => NodeKind::BreakStatement,
            Statement::Continue(_) => NodeKind::ContinueStatement,
            Statement::Throw(_) => NodeKind::ThrowStatement,
            Statement::Try(_) => NodeKind::TryStatement,
            Statement::Empty(_) => NodeKind::EmptyStatement,
        }
    }
}

impl Expression {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Literal(_) => NodeKind::Literal,
            Expression::Name(_) => NodeKind::Name,
            Expression::FieldAccess(_) => NodeKind::FieldAccess,
            Expression::MethodCall(_) => NodeKind::MethodCall,
            Expression::NewClass(_) => NodeKind::NewClass,
            Expression::Conditional(_) => NodeKind::Conditional,
            Expression::Assignment(_) => NodeKind::Assignment,
            Expression::Parenthesized(_) => NodeKind::Parenthesized,
        }
    }
}
