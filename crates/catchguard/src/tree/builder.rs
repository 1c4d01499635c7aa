//! Programmatic tree construction.
//!
//! [`TreeBuilder`] owns the [`Interner`] and hands every node it creates a
//! fresh, distinct [`Span`] (one synthetic line per node, in creation
//! order). Spans are unique, not source-accurate: that is enough to tell
//! issue anchors apart when a host has no real positions or in tests.
//!
//! ```ignore
//! let mut b = TreeBuilder::new();
//! let ty = b.simple_type("ServiceException");
//! let thrown = b.new_class(ty);
//! let throw = b.throw(thrown);
//! let body = b.block(vec![throw]);
//! let catch = b.catch_clause("Exception", "e", body);
//! ```

use super::*;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    interner: Interner,
    next: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue interning into an existing interner.
    pub fn with_interner(interner: Interner) -> Self {
        Self { interner, next: 0 }
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn into_interner(self) -> Interner {
        self.interner
    }

    fn span(&mut self) -> Span {
        let offset = self.next;
        self.next += 1;
        Span::new(offset, offset + 1, offset as u32 + 1, 1)
    }

    // ── Names and types ──────────────────────────────────────────────

    pub fn ident(&mut self, name: &str) -> Identifier {
        let sym = self.interner.intern(name);
        let span = self.span();
        Identifier::new(sym, span)
    }

    pub fn simple_type(&mut self, name: &str) -> TypeRef {
        TypeRef::Simple(self.ident(name))
    }

    /// `a.b.C` becomes nested [`TypeRef::Qualified`] nodes; a path without
    /// dots is a simple type.
    pub fn qualified_type(&mut self, path: &str) -> TypeRef {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut ty = self.simple_type(first);
        for segment in segments {
            let name = self.ident(segment);
            let span = self.span();
            ty = TypeRef::Qualified(QualifiedType {
                qualifier: Box::new(ty),
                name,
                span,
            });
        }
        ty
    }

    pub fn parameterized_type(&mut self, base: TypeRef, arguments: Vec<TypeRef>) -> TypeRef {
        let span = self.span();
        TypeRef::Parameterized(ParameterizedType {
            base: Box::new(base),
            arguments,
            span,
        })
    }

    // ── Expressions ──────────────────────────────────────────────────

    pub fn literal(&mut self, value: LiteralValue) -> Expression {
        let span = self.span();
        Expression::Literal(Literal { value, span })
    }

    pub fn string(&mut self, value: &str) -> Expression {
        self.literal(LiteralValue::String(value.to_string()))
    }

    pub fn name(&mut self, name: &str) -> Expression {
        Expression::Name(self.ident(name))
    }

    pub fn field_access(&mut self, target: Expression, field: &str) -> Expression {
        let field = self.ident(field);
        let span = self.span();
        Expression::FieldAccess(FieldAccessExpression {
            target: Box::new(target),
            field,
            span,
        })
    }

    /// Unqualified call: `method(args)`
    pub fn call(&mut self, method: &str, arguments: Vec<Expression>) -> Expression {
        let method = self.ident(method);
        let span = self.span();
        Expression::MethodCall(MethodCallExpression {
            target: None,
            method,
            arguments,
            span,
        })
    }

    /// Qualified call: `target.method(args)`
    pub fn method_call(
        &mut self,
        target: Expression,
        method: &str,
        arguments: Vec<Expression>,
    ) -> Expression {
        let method = self.ident(method);
        let span = self.span();
        Expression::MethodCall(MethodCallExpression {
            target: Some(Box::new(target)),
            method,
            arguments,
            span,
        })
    }

    pub fn new_class(&mut self, class: TypeRef) -> Expression {
        self.new_class_with_args(class, vec![])
    }

    pub fn new_class_with_args(&mut self, class: TypeRef, arguments: Vec<Expression>) -> Expression {
        let span = self.span();
        Expression::NewClass(NewClassExpression {
            class,
            arguments,
            span,
        })
    }

    pub fn conditional(
        &mut self,
        condition: Expression,
        then_expr: Expression,
        else_expr: Expression,
    ) -> Expression {
        let span = self.span();
        Expression::Conditional(ConditionalExpression {
            condition: Box::new(condition),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
            span,
        })
    }

    pub fn assign(&mut self, target: Expression, value: Expression) -> Expression {
        let span = self.span();
        Expression::Assignment(AssignmentExpression {
            target: Box::new(target),
            value: Box::new(value),
            span,
        })
    }

    pub fn parenthesized(&mut self, expression: Expression) -> Expression {
        let span = self.span();
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            span,
        })
    }

    // ── Statements ───────────────────────────────────────────────────

    pub fn expr_stmt(&mut self, expression: Expression) -> Statement {
        let span = self.span();
        Statement::Expression(ExpressionStatement { expression, span })
    }

    pub fn local_variable(
        &mut self,
        ty: TypeRef,
        name: &str,
        initializer: Option<Expression>,
    ) -> LocalVariableDecl {
        let name = self.ident(name);
        let span = self.span();
        LocalVariableDecl {
            ty,
            name,
            initializer,
            span,
        }
    }

    pub fn local_stmt(&mut self, ty: TypeRef, name: &str, initializer: Option<Expression>) -> Statement {
        Statement::LocalVariable(self.local_variable(ty, name, initializer))
    }

    pub fn if_stmt(
        &mut self,
        condition: Expression,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Statement {
        let span = self.span();
        Statement::If(IfStatement {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            span,
        })
    }

    pub fn while_stmt(&mut self, condition: Expression, body: Statement) -> Statement {
        let span = self.span();
        Statement::While(WhileStatement {
            condition,
            body: Box::new(body),
            span,
        })
    }

    pub fn for_each(
        &mut self,
        variable: LocalVariableDecl,
        iterable: Expression,
        body: Statement,
    ) -> Statement {
        let span = self.span();
        Statement::ForEach(ForEachStatement {
            variable,
            iterable,
            body: Box::new(body),
            span,
        })
    }

    pub fn return_stmt(&mut self, value: Option<Expression>) -> Statement {
        let span = self.span();
        Statement::Return(ReturnStatement { value, span })
    }

    pub fn break_stmt(&mut self) -> Statement {
        Statement::Break(self.span())
    }

    pub fn continue_stmt(&mut self) -> Statement {
        Statement::Continue(self.span())
    }

    pub fn empty(&mut self) -> Statement {
        Statement::Empty(self.span())
    }

    pub fn throw(&mut self, expression: Expression) -> Statement {
        let span = self.span();
        Statement::Throw(ThrowStatement { expression, span })
    }

    pub fn block(&mut self, statements: Vec<Statement>) -> Block {
        let span = self.span();
        Block::new(statements, span)
    }

    pub fn block_stmt(&mut self, statements: Vec<Statement>) -> Statement {
        Statement::Block(self.block(statements))
    }

    /// `catch (ty name) body`
    pub fn catch_clause(&mut self, ty: &str, name: &str, body: Block) -> CatchClause {
        self.multi_catch(&[ty], name, body)
    }

    /// `catch (A | B name) body`
    pub fn multi_catch(&mut self, types: &[&str], name: &str, body: Block) -> CatchClause {
        let types = types.iter().map(|ty| self.qualified_type(ty)).collect();
        let name = self.ident(name);
        let param_span = self.span();
        let span = self.span();
        CatchClause {
            parameter: CatchParameter {
                types,
                name,
                span: param_span,
            },
            body,
            span,
        }
    }

    pub fn try_stmt(
        &mut self,
        body: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    ) -> Statement {
        self.try_with_resources(vec![], body, catches, finally)
    }

    pub fn try_with_resources(
        &mut self,
        resources: Vec<LocalVariableDecl>,
        body: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    ) -> Statement {
        let span = self.span();
        Statement::Try(TryStatement {
            resources,
            body,
            catches,
            finally,
            span,
        })
    }

    // ── Declarations ─────────────────────────────────────────────────

    pub fn method(&mut self, name: &str, body: Option<Block>) -> MethodDecl {
        let name = self.ident(name);
        let span = self.span();
        MethodDecl { name, body, span }
    }

    pub fn class(&mut self, name: &str, members: Vec<MethodDecl>) -> ClassDecl {
        let name = self.ident(name);
        let span = self.span();
        ClassDecl {
            name,
            members,
            span,
        }
    }

    pub fn unit(&mut self, types: Vec<ClassDecl>) -> CompilationUnit {
        let span = self.span();
        CompilationUnit::new(types, span)
    }

    /// Wrap statements in `class <class> { void <method>() { ... } }`.
    pub fn unit_with_body(&mut self, statements: Vec<Statement>) -> CompilationUnit {
        let body = self.block(statements);
        let method = self.method("handle", Some(body));
        let class = self.class("Handler", vec![method]);
        self.unit(vec![class])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_are_distinct() {
        let mut b = TreeBuilder::new();
        let first = b.empty();
        let second = b.empty();
        assert_ne!(first.span(), second.span());
    }

    #[test]
    fn test_qualified_type_nests_segments() {
        let mut b = TreeBuilder::new();
        let ty = b.qualified_type("com.acme.ServiceException");
        let TypeRef::Qualified(outer) = &ty else {
            panic!("expected qualified type, got {:?}", ty);
        };
        assert_eq!(b.interner().resolve(outer.name.name), "ServiceException");
        assert!(matches!(*outer.qualifier, TypeRef::Qualified(_)));
    }

    #[test]
    fn test_undotted_path_is_simple() {
        let mut b = TreeBuilder::new();
        assert!(matches!(b.qualified_type("Exception"), TypeRef::Simple(_)));
    }

    #[test]
    fn test_multi_catch_keeps_all_types() {
        let mut b = TreeBuilder::new();
        let body = b.block(vec![]);
        let clause = b.multi_catch(&["IOException", "SQLException"], "e", body);
        assert_eq!(clause.parameter.types.len(), 2);
        assert_eq!(b.interner().resolve(clause.parameter.name.name), "e");
    }
}
