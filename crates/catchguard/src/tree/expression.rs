//! Expression and type-reference nodes.

use super::*;

/// Expression (produces a value)
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal: `42`, `"msg"`, `true`, `null`
    Literal(Literal),

    /// Bare name: `e`, `count`
    Name(Identifier),

    /// Field access: `this.cause`, `Errors.TIMEOUT`
    FieldAccess(FieldAccessExpression),

    /// Method call: `log(e)`, `e.getCause()`
    MethodCall(MethodCallExpression),

    /// Instantiation: `new ServiceException(e)`
    NewClass(NewClassExpression),

    /// Ternary: `cond ? a : b`
    Conditional(ConditionalExpression),

    /// Assignment: `x = y`
    Assignment(AssignmentExpression),

    /// Parenthesized: `(expr)`
    Parenthesized(ParenthesizedExpression),
}

impl Expression {
    /// Get the span of this expression
    pub fn span(&self) -> &Span {
        match self {
            Expression::Literal(e) => &e.span,
            Expression::Name(e) => &e.span,
            Expression::FieldAccess(e) => &e.span,
            Expression::MethodCall(e) => &e.span,
            Expression::NewClass(e) => &e.span,
            Expression::Conditional(e) => &e.span,
            Expression::Assignment(e) => &e.span,
            Expression::Parenthesized(e) => &e.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    String(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccessExpression {
    pub target: Box<Expression>,
    pub field: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpression {
    /// Receiver, `None` for unqualified calls.
    pub target: Option<Box<Expression>>,
    pub method: Identifier,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// `new T(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct NewClassExpression {
    /// The class being instantiated.
    pub class: TypeRef,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub condition: Box<Expression>,
    pub then_expr: Box<Expression>,
    pub else_expr: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
    pub span: Span,
}

/// Reference to a type as written in source.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// `ServiceException`
    Simple(Identifier),

    /// `com.acme.ServiceException`
    Qualified(QualifiedType),

    /// `Wrapper<IOException>`
    Parameterized(ParameterizedType),
}

impl TypeRef {
    pub fn span(&self) -> &Span {
        match self {
            TypeRef::Simple(id) => &id.span,
            TypeRef::Qualified(t) => &t.span,
            TypeRef::Parameterized(t) => &t.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedType {
    pub qualifier: Box<TypeRef>,
    pub name: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedType {
    pub base: Box<TypeRef>,
    pub arguments: Vec<TypeRef>,
    pub span: Span,
}
