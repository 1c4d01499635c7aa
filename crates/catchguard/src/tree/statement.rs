//! Statement nodes.

use super::*;

/// Statement (does not produce a value)
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Nested block: `{ ... }`
    Block(Block),

    /// Expression statement: `log(e);`
    Expression(ExpressionStatement),

    /// Local variable: `int x = 1;`
    LocalVariable(LocalVariableDecl),

    /// `if (cond) { ... } else { ... }`
    If(IfStatement),

    /// `while (cond) { ... }`
    While(WhileStatement),

    /// `for (T x : xs) { ... }`
    ForEach(ForEachStatement),

    /// `return value;`
    Return(ReturnStatement),

    /// `break;`
    Break(Span),

    /// `continue;`
    Continue(Span),

    /// `throw expr;`
    Throw(ThrowStatement),

    /// `try { ... } catch (...) { ... } finally { ... }`
    Try(TryStatement),

    /// Lone semicolon.
    Empty(Span),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> &Span {
        match self {
            Statement::Block(s) => &s.span,
            Statement::Expression(s) => &s.span,
            Statement::LocalVariable(s) => &s.span,
            Statement::If(s) => &s.span,
            Statement::While(s) => &s.span,
            Statement::ForEach(s) => &s.span,
            Statement::Return(s) => &s.span,
            Statement::Break(span) => span,
            Statement::Continue(span) => span,
            Statement::Throw(s) => &s.span,
            Statement::Try(s) => &s.span,
            Statement::Empty(span) => span,
        }
    }
}

/// Braced statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

/// Local variable declaration, also used for try-with-resources.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVariableDecl {
    pub ty: TypeRef,
    pub name: Identifier,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub variable: LocalVariableDecl,
    pub iterable: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

/// `throw expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub expression: Expression,
    pub span: Span,
}

/// `try` statement.
///
/// `catches` is empty for try-finally and for try-with-resources without
/// handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    /// try-with-resources declarations, in source order.
    pub resources: Vec<LocalVariableDecl>,
    pub body: Block,
    pub catches: Vec<CatchClause>,
    pub finally: Option<Block>,
    pub span: Span,
}

/// `catch (IOException | SQLException e) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub parameter: CatchParameter,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchParameter {
    /// Caught types; more than one for multi-catch.
    pub types: Vec<TypeRef>,
    pub name: Identifier,
    pub span: Span,
}
