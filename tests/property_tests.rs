// Property tests: printing and re-parsing preserves meaning, evaluation is
// deterministic for identical environments.

use mfl::interpreter::errors::ErrorKind;
use mfl::parser::parse::Parser;
use mfl::runtime::{Environment, Value};
use proptest::prelude::*;

/// Outcome of a run with error line numbers erased
fn outcome(source: &str) -> Result<Option<Value>, ErrorKind> {
    let mut tree = mfl::parse(source).expect("generated program must parse");
    tree.run().map_err(|err| err.kind())
}

fn int_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0i32..1000).prop_map(|n| n.to_string()),
        Just("x".to_string()),
        Just("y".to_string()),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "mod"]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("({}) {} ({})", l, op, r)),
            inner.clone().prop_map(|e| format!("-({})", e)),
            inner.clone().prop_map(|e| format!("({})", e)),
            (inner.clone(), inner.clone())
                .prop_map(|(b, body)| format!("let y := {} in {}", b, body)),
        ]
    })
}

fn bool_expr() -> impl Strategy<Value = String> {
    let comparison = (
        int_expr(),
        prop::sample::select(vec!["<", "<=", ">", ">=", "=", "!="]),
        int_expr(),
    )
        .prop_map(|(l, op, r)| format!("({}) {} ({})", l, op, r));
    let leaf = prop_oneof![Just("true".to_string()), Just("false".to_string()), comparison];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["and", "or"]), inner.clone())
                .prop_map(|(l, op, r)| format!("({}) {} ({})", l, op, r)),
            inner.clone().prop_map(|e| format!("not ({})", e)),
        ]
    })
}

fn real_literal() -> impl Strategy<Value = String> {
    (0u32..10_000, 0u32..100).prop_map(|(whole, frac)| format!("{}.{:02}", whole, frac))
}

proptest! {
    #[test]
    fn printed_int_program_evaluates_the_same(expr in int_expr(), x in -50i32..50) {
        let source = format!("val x := {};\nval y := x * 2;\n{};", x, expr);
        let printed = mfl::parse(&source).unwrap().root().to_string();

        prop_assert_eq!(outcome(&source), outcome(&printed));
    }

    #[test]
    fn printed_bool_program_evaluates_the_same(expr in bool_expr()) {
        let source = format!("val x := 7;\nval y := 3;\n{};", expr);
        let printed = mfl::parse(&source).unwrap().root().to_string();

        prop_assert_eq!(outcome(&source), outcome(&printed));
    }

    #[test]
    fn real_sums_match_ieee(a in real_literal(), b in real_literal(), c in real_literal()) {
        let [a_val, b_val, c_val] = [&a, &b, &c].map(|text| text.parse::<f64>().unwrap());
        let expected = a_val + b_val * c_val;
        let value = mfl::run(&format!("{} + {} * {};", a, b, c)).unwrap();

        prop_assert_eq!(value, Some(Value::Real(expected)));
    }

    #[test]
    fn mixed_numeric_operands_always_mismatch(
        n in 0i32..1000,
        r in real_literal(),
        op in prop::sample::select(vec!["+", "-", "*", "/", "<", "<=", ">", ">=", "=", "!="]),
        int_first in any::<bool>(),
    ) {
        let source = if int_first {
            format!("{} {} {};", n, op, r)
        } else {
            format!("{} {} {};", r, op, n)
        };
        prop_assert_eq!(outcome(&source), Err(ErrorKind::TypeMismatch));
    }

    #[test]
    fn branched_environments_give_identical_results(
        expr in int_expr(),
        x in -50i32..50,
        y in -50i32..50,
    ) {
        let program = Parser::new(&format!("{};", expr)).unwrap().parse_program().unwrap();
        let stmt = &program.statements[0];

        let mut base = Environment::new();
        base.bind("x", Value::Int(x));
        base.bind("y", Value::Int(y));

        let mut first = base.branch();
        let mut second = base.branch();
        prop_assert_eq!(stmt.evaluate(&mut first), stmt.evaluate(&mut second));
        prop_assert_eq!(first, base);
    }
}
