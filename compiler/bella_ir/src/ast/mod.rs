//! Statement and expression nodes.
//!
//! Nodes are immutable once built. Each node owns its children; the only
//! shared node is [`FunctionDecl`], which a runtime function value keeps a
//! reference to after the declaration has executed.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use std::rc::Rc;

use crate::Name;

/// A whole program: one top-level block.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub body: Block,
}

impl Program {
    pub fn new(body: Block) -> Self {
        Program { body }
    }
}

/// An ordered list of statements.
///
/// A block is not a scope boundary: its statements run against the
/// enclosing environment.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A user-defined function: `function name(params) = body`.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Expr,
}

impl FunctionDecl {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Nested block.
    Block(Block),
    /// `let name = initializer`
    VariableDeclaration { name: Name, initializer: Expr },
    /// `target = source`
    Assignment { target: Name, source: Expr },
    /// `print expression`
    Print(Expr),
    /// `while condition { body }`
    While { condition: Expr, body: Block },
    /// `function name(params) = body`
    FunctionDeclaration(Rc<FunctionDecl>),
}

impl Stmt {
    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(Block::new(statements))
    }

    pub fn var_decl(name: Name, initializer: Expr) -> Self {
        Stmt::VariableDeclaration { name, initializer }
    }

    pub fn assign(target: Name, source: Expr) -> Self {
        Stmt::Assignment { target, source }
    }

    pub fn print(expression: Expr) -> Self {
        Stmt::Print(expression)
    }

    pub fn while_loop(condition: Expr, body: Block) -> Self {
        Stmt::While { condition, body }
    }

    pub fn function(name: Name, params: Vec<Name>, body: Expr) -> Self {
        Stmt::FunctionDeclaration(Rc::new(FunctionDecl { name, params, body }))
    }
}

/// Expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `test ? consequent : alternate`
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// `callee(args...)`
    Call { callee: Name, args: Vec<Expr> },
    /// `[elements...]`
    Array(Vec<Expr>),
    /// `array[index]`
    Subscript { array: Box<Expr>, index: Box<Expr> },
    /// Variable reference.
    Identifier(Name),
    /// Number literal.
    Numeral(f64),
    /// `true` / `false`
    Bool(bool),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Self {
        Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn call(callee: Name, args: Vec<Expr>) -> Self {
        Expr::Call { callee, args }
    }

    pub fn array(elements: Vec<Expr>) -> Self {
        Expr::Array(elements)
    }

    pub fn subscript(array: Expr, index: Expr) -> Self {
        Expr::Subscript {
            array: Box::new(array),
            index: Box::new(index),
        }
    }

    pub fn identifier(name: Name) -> Self {
        Expr::Identifier(name)
    }

    pub fn numeral(value: f64) -> Self {
        Expr::Numeral(value)
    }

    pub fn bool(value: bool) -> Self {
        Expr::Bool(value)
    }
}
