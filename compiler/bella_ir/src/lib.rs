//! Bella IR - syntax tree and identifiers for the Bella evaluator.
//!
//! The evaluator never parses text. A front end (or a test) builds a
//! [`Program`] out of the node types defined here and hands it over.
//!
//! # Contents
//!
//! - [`Name`]: compact interned identifier
//! - [`StringInterner`]: identifier interning
//! - [`ast`]: statement and expression nodes, operators

pub mod ast;
mod interner;
mod name;

pub use ast::{BinaryOp, Block, Expr, FunctionDecl, Program, Stmt, UnaryOp};
pub use interner::StringInterner;
pub use name::Name;
