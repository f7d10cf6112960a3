// Diagnostics: error kinds, messages and line attribution

use mfl::interpreter::errors::{ErrorKind, EvalError};
use mfl::parser::parse::ParseError;
use mfl::Error;

fn eval_error(source: &str) -> EvalError {
    match mfl::run(source) {
        Err(Error::Eval(err)) => err,
        other => panic!("Expected evaluation error for {:?}, got {:?}", source, other),
    }
}

fn syntax_error(source: &str) -> ParseError {
    match mfl::parse(source) {
        Err(err) => err,
        Ok(tree) => panic!("Expected syntax error, parsed {}", tree.root()),
    }
}

#[test]
fn test_error_lines() {
    let err = eval_error("val x := 1;\nval y := 2;\nx + true;");
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.line(), 3);

    let err = eval_error("val x := 1;\n\n\n   missing;");
    assert_eq!(
        err,
        EvalError::UnboundIdentifier {
            name: "missing".to_string(),
            line: 4,
        }
    );
}

#[test]
fn test_messages() {
    assert_eq!(
        eval_error("1 + 2.0;").to_string(),
        "type mismatch at line 1: mixed numeric types"
    );
    assert_eq!(
        eval_error("true and 1;").to_string(),
        "type mismatch at line 1: boolean operator on non-boolean operand"
    );
    assert_eq!(
        eval_error("10 / 0;").to_string(),
        "arithmetic error at line 1: division by zero"
    );
    assert_eq!(
        eval_error("2.0 mod 1.0;").to_string(),
        "invalid operation at line 1: 'mod' is not defined on real operands"
    );
}

#[test]
fn test_malformed_literal() {
    let err = eval_error("val big := 99999999999;");
    assert_eq!(err.kind(), ErrorKind::MalformedLiteral);
    assert_eq!(err.to_string(), "malformed literal '99999999999' at line 1");
}

#[test]
fn test_first_failure_wins() {
    // Left operand fails first
    let err = eval_error("(1 / 0) + ghost;");
    assert_eq!(err.kind(), ErrorKind::ArithmeticError);
}

#[test]
fn test_syntax_errors() {
    let err = syntax_error("val := 3;");
    assert_eq!(
        err.to_string(),
        "syntax error at line 1: expected identifier, found ':='"
    );

    let err = syntax_error("val x = 3;");
    assert_eq!(err.to_string(), "syntax error at line 1: expected ':=', found '='");

    let err = syntax_error("1 + 2;\n3 4;");
    assert_eq!(
        err,
        ParseError::Expected {
            expected: "';'".to_string(),
            found: "integer literal 4".to_string(),
            line: 2,
        }
    );

    let err = syntax_error("x;;");
    assert_eq!(err.line(), 1);
    assert!(err.to_string().contains("expected expression, found ';'"));
}

#[test]
fn test_lexical_errors_are_syntax_errors() {
    let err = syntax_error("val x := 3 ? 4;");
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!(
        Error::from(err).to_string(),
        "lexical error at line 1: unexpected character '?'"
    );
}
