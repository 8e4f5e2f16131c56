//! Operator tables, kept out of the implementation files.

mod operators_tests;
mod unary_operators_tests;
