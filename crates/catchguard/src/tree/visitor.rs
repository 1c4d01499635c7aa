//! Tree traversal.
//!
//! Implement [`Visitor`] and override the `visit_*` hooks of interest; call
//! the matching `walk_*` function from an override to keep descending.
//! Children are visited in source order, parents before children.

use super::*;

pub trait Visitor: Sized {
    fn visit_unit(&mut self, unit: &CompilationUnit) {
        walk_unit(self, unit);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        walk_class_decl(self, decl);
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        walk_method_decl(self, decl);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_catch_clause(&mut self, clause: &CatchClause) {
        walk_catch_clause(self, clause);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }
}

pub fn walk_unit<V: Visitor>(visitor: &mut V, unit: &CompilationUnit) {
    for decl in &unit.types {
        visitor.visit_class_decl(decl);
    }
}

pub fn walk_class_decl<V: Visitor>(visitor: &mut V, decl: &ClassDecl) {
    for member in &decl.members {
        visitor.visit_method_decl(member);
    }
}

pub fn walk_method_decl<V: Visitor>(visitor: &mut V, decl: &MethodDecl) {
    if let Some(body) = &decl.body {
        visitor.visit_block(body);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    for stmt in &block.statements {
        visitor.visit_statement(stmt);
    }
}

fn walk_local_variable<V: Visitor>(visitor: &mut V, decl: &LocalVariableDecl) {
    if let Some(init) = &decl.initializer {
        visitor.visit_expression(init);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Block(block) => visitor.visit_block(block),
        Statement::Expression(s) => visitor.visit_expression(&s.expression),
        Statement::LocalVariable(decl) => walk_local_variable(visitor, decl),
        Statement::If(s) => {
            visitor.visit_expression(&s.condition);
            visitor.visit_statement(&s.then_branch);
            if let Some(else_branch) = &s.else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::While(s) => {
            visitor.visit_expression(&s.condition);
            visitor.visit_statement(&s.body);
        }
        Statement::ForEach(s) => {
            walk_local_variable(visitor, &s.variable);
            visitor.visit_expression(&s.iterable);
            visitor.visit_statement(&s.body);
        }
        Statement::Return(s) => {
            if let Some(value) = &s.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Throw(s) => visitor.visit_expression(&s.expression),
        Statement::Try(s) => {
            for resource in &s.resources {
                walk_local_variable(visitor, resource);
            }
            visitor.visit_block(&s.body);
            for clause in &s.catches {
                visitor.visit_catch_clause(clause);
            }
            if let Some(finally) = &s.finally {
                visitor.visit_block(finally);
            }
        }
        Statement::Break(_) | Statement::Continue(_) | Statement::Empty(_) => {}
    }
}

pub fn walk_catch_clause<V: Visitor>(visitor: &mut V, clause: &CatchClause) {
    visitor.visit_block(&clause.body);
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Literal(_) | Expression::Name(_) => {}
        Expression::FieldAccess(e) => visitor.visit_expression(&e.target),
        Expression::MethodCall(e) => {
            if let Some(target) = &e.target {
                visitor.visit_expression(target);
            }
            for arg in &e.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::NewClass(e) => {
            for arg in &e.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::Conditional(e) => {
            visitor.visit_expression(&e.condition);
            visitor.visit_expression(&e.then_expr);
            visitor.visit_expression(&e.else_expr);
        }
        Expression::Assignment(e) => {
            visitor.visit_expression(&e.target);
            visitor.visit_expression(&e.value);
        }
        Expression::Parenthesized(e) => visitor.visit_expression(&e.expression),
    }
}
