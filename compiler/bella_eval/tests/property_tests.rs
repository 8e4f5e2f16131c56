//! Property-based tests for the evaluator.
//!
//! Programs are built directly from AST constructors with generated
//! literals and names, then run through `bella_eval::interpret`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use bella_eval::{interpret, EvalError, Value};
use bella_ir::{BinaryOp, Block, Expr, Program, Stmt, StringInterner};
use proptest::prelude::*;

fn program(statements: Vec<Stmt>) -> Program {
    Program::new(Block::new(statements))
}

fn single_number(output: &[Value]) -> f64 {
    match output {
        [Value::Number(n)] => *n,
        other => panic!("expected one number, got {other:?}"),
    }
}

fn arithmetic_op() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(vec![
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Pow,
    ])
}

fn host_arithmetic(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => a.powf(b),
        other => panic!("not arithmetic: {other:?}"),
    }
}

fn identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_]{0,10}").expect("valid regex")
}

proptest! {
    #[test]
    fn numeral_evaluates_to_itself(n in any::<f64>()) {
        let interner = StringInterner::new();
        let output = interpret(&program(vec![Stmt::print(Expr::numeral(n))]), &interner).unwrap();
        prop_assert_eq!(single_number(&output).to_bits(), n.to_bits());
    }

    #[test]
    fn arithmetic_matches_ieee(
        a in -1.0e6..1.0e6_f64,
        b in -1.0e6..1.0e6_f64,
        op in arithmetic_op(),
    ) {
        let interner = StringInterner::new();
        let expr = Expr::binary(op, Expr::numeral(a), Expr::numeral(b));
        let output = interpret(&program(vec![Stmt::print(expr)]), &interner).unwrap();
        prop_assert_eq!(single_number(&output).to_bits(), host_arithmetic(op, a, b).to_bits());
    }

    #[test]
    fn calls_leave_caller_bindings_alone(
        outer in -1.0e3..1.0e3_f64,
        first in -1.0e3..1.0e3_f64,
        second in -1.0e3..1.0e3_f64,
    ) {
        let interner = StringInterner::new();
        let f = interner.intern("f");
        let x = interner.intern("x");
        let p = interner.intern("p");
        // f(p) = p + x, with `x` also passed as a shadowing parameter in g.
        let g = interner.intern("g");
        let prog = program(vec![
            Stmt::var_decl(x, Expr::numeral(outer)),
            Stmt::function(f, vec![p], Expr::binary(BinaryOp::Add, Expr::identifier(p), Expr::identifier(x))),
            Stmt::function(g, vec![x], Expr::call(f, vec![Expr::identifier(x)])),
            Stmt::print(Expr::call(f, vec![Expr::numeral(first)])),
            Stmt::print(Expr::call(g, vec![Expr::numeral(second)])),
            Stmt::print(Expr::identifier(x)),
        ]);
        let output = interpret(&prog, &interner).unwrap();
        prop_assert_eq!(output, vec![
            Value::Number(first + outer),
            Value::Number(second + second),
            Value::Number(outer),
        ]);
    }

    #[test]
    fn second_declaration_is_rejected(name in identifier(), a in any::<i32>(), b in any::<i32>()) {
        let interner = StringInterner::new();
        // Built-in names are already declared, so skip them.
        prop_assume!(!["sin", "cos", "hypot", "sqrt", "exp", "ln"].contains(&name.as_str()));
        let id = interner.intern(&name);
        let prog = program(vec![
            Stmt::var_decl(id, Expr::numeral(f64::from(a))),
            Stmt::var_decl(id, Expr::numeral(f64::from(b))),
        ]);
        let failure = interpret(&prog, &interner).unwrap_err();
        prop_assert_eq!(failure.error, EvalError::DuplicateDeclaration { name });
    }

    #[test]
    fn assigning_undeclared_name_is_rejected(name in identifier()) {
        let interner = StringInterner::new();
        prop_assume!(!["sin", "cos", "hypot", "sqrt", "exp", "ln"].contains(&name.as_str()));
        let id = interner.intern(&name);
        let failure = interpret(&program(vec![Stmt::assign(id, Expr::numeral(1.0))]), &interner)
            .unwrap_err();
        prop_assert_eq!(failure.error, EvalError::UnboundVariable { name });
    }

    #[test]
    fn while_with_false_condition_never_runs(a in -1.0e3..1.0e3_f64, b in -1.0e3..1.0e3_f64) {
        prop_assume!(a >= b);
        let interner = StringInterner::new();
        let boom = interner.intern("boom");
        let prog = program(vec![
            Stmt::while_loop(
                Expr::binary(BinaryOp::Lt, Expr::numeral(a), Expr::numeral(b)),
                Block::new(vec![Stmt::print(Expr::identifier(boom))]),
            ),
        ]);
        let output = interpret(&prog, &interner).unwrap();
        prop_assert!(output.is_empty());
    }
}
