//! Syntax tree consumed by the linter.
//!
//! The tree is produced by a host front end (parser plus semantic
//! resolution) and handed to [`Linter`](crate::linter::Linter) read-only.
//! It models the subset of Java that exception-handling rules look at:
//!
//! - Compilation units, classes and methods
//! - Statements, including `try`/`catch`/`finally` and `throw`
//! - Expressions, including `new` class instantiation
//! - Type references (simple, qualified, parameterized)
//!
//! Every node carries a [`Span`] so issues can be anchored precisely.

pub mod builder;
pub mod expression;
pub mod interner;
pub mod kind;
pub mod statement;
pub mod visitor;

pub use builder::TreeBuilder;
pub use expression::*;
pub use interner::{Interner, Symbol};
pub use kind::{Node, NodeKind};
pub use statement::*;
pub use visitor::Visitor;

use serde::Serialize;

/// Source location of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: u32,
    /// 1-based column of `start`.
    pub column: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
            column: self.column.min(other.column),
        }
    }
}

/// A name: class, method, variable or type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: Symbol,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }
}

/// Root node: one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    /// Top-level type declarations.
    pub types: Vec<ClassDecl>,
    pub span: Span,
}

impl CompilationUnit {
    pub fn new(types: Vec<ClassDecl>, span: Span) -> Self {
        Self { types, span }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Class declaration: `class Foo { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Identifier,
    pub members: Vec<MethodDecl>,
    pub span: Span,
}

/// Method or constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: Identifier,
    /// `None` for abstract and interface methods.
    pub body: Option<Block>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let a = Span::new(10, 20, 2, 5);
        let b = Span::new(4, 12, 1, 9);
        let merged = a.merge(&b);
        assert_eq!(merged, Span::new(4, 20, 1, 5));
        assert_eq!(merged.len(), 16);
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_empty_unit() {
        let unit = CompilationUnit::new(vec![], Span::new(0, 0, 1, 1));
        assert!(unit.is_empty());
    }
}
