//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, the token-cursor helpers, and the program entry
//! point. The grammar's non-terminals live in `expressions` as further
//! `impl Parser` blocks sharing the same cursor state.
//!
//! The parser consumes tokens strictly left to right with a single token of
//! lookahead and stops at the first error; there is no recovery.

use crate::interpreter::engine::SyntaxTree;
use crate::parser::ast::Program;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use thiserror::Error;
use tracing::debug;

/// Syntax errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error at line {line}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("syntax error at line {line}: unexpected {found}")]
    Unexpected { found: String, line: usize },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Expected { line, .. } | ParseError::Unexpected { line, .. } => *line,
            ParseError::Lex(err) => err.line,
        }
    }
}

/// Recursive descent parser for MFL
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Tokenize `source` and prepare to parse it.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Parse an already tokenized program. An `Eof` token is appended if the
    /// stream does not end with one.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream into a runnable [`SyntaxTree`].
    pub fn parse(&mut self) -> Result<SyntaxTree, ParseError> {
        let program = self.parse_program()?;
        Ok(SyntaxTree::new(program))
    }

    /// `program := { stmt ";" }`, followed by end of input.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            let stmt = self.parse_statement()?;
            self.expect(TokenKind::Semi, "';'")?;
            statements.push(stmt);
        }
        self.expect(TokenKind::Eof, "end of file")?;

        // `advance` never moves past Eof, so anything after it is stray input
        if let Some(stray) = self.tokens.get(self.position + 1) {
            return Err(ParseError::Unexpected {
                found: stray.to_string(),
                line: stray.line,
            });
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program::new(statements, self.previous_line()))
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        // `from_tokens` guarantees a trailing Eof and `advance` never moves past it.
        &self.tokens[self.position]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Line of the most recently consumed token.
    pub(crate) fn previous_line(&self) -> usize {
        match self.position.checked_sub(1) {
            Some(prev) => self.tokens[prev].line,
            None => self.peek().line,
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.expected(expected))
        }
    }

    pub(crate) fn expected(&self, expected: &str) -> ParseError {
        ParseError::Expected {
            expected: expected.to_string(),
            found: self.peek().to_string(),
            line: self.peek().line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{AstNode, BinOp, RelOp, UnOp};
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Result<Program, ParseError> {
        Parser::new(source)?.parse_program()
    }

    #[test]
    fn test_left_associative_arithmetic() {
        let program = parse("3 - 5 + 6;").unwrap();

        assert_eq!(program.statements.len(), 1);
        assert_eq!(program.to_string(), "((3 - 5) + 6);");
    }

    #[test]
    fn test_precedence() {
        let program = parse("1 + 2 * 3 mod 4 < 5 and true;").unwrap();
        assert_eq!(program.to_string(), "(((1 + ((2 * 3) mod 4)) < 5) and true);");
    }

    #[test]
    fn test_val_and_let() {
        let program = parse("val x := 3;\nlet y := x in y * 2;").unwrap();

        match &program.statements[0] {
            AstNode::ValDecl { name, line, .. } => {
                assert_eq!(name, "x");
                assert_eq!(*line, 1);
            }
            other => panic!("Expected val declaration, got {:?}", other),
        }
        match &program.statements[1] {
            AstNode::Let { name, line, .. } => {
                assert_eq!(name, "y");
                assert_eq!(*line, 2);
            }
            other => panic!("Expected let, got {:?}", other),
        }
    }

    #[test]
    fn test_not_binds_relational_expression() {
        let program = parse("not 1 < 2;").unwrap();
        match &program.statements[0] {
            AstNode::UnaryOp {
                op: UnOp::Not,
                operand,
                ..
            } => assert!(matches!(
                **operand,
                AstNode::RelationalOp { op: RelOp::Lt, .. }
            )),
            other => panic!("Expected not, got {:?}", other),
        }

        // `not` takes a whole rexpr, then and/or folds on top of it
        let program = parse("not true and false;").unwrap();
        assert_eq!(program.to_string(), "((not true) and false);");
    }

    #[test]
    fn test_unary_minus() {
        let program = parse("--4 * 2;").unwrap();
        match &program.statements[0] {
            AstNode::BinaryOp {
                op: BinOp::Mul,
                left,
                ..
            } => assert!(matches!(**left, AstNode::UnaryOp { op: UnOp::Neg, .. })),
            other => panic!("Expected multiplication, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_program() {
        let program = parse("  \n").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse("val x := 3;\nx + 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::Expected {
                expected: "';'".to_string(),
                found: "end of file".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_relational_is_not_chained() {
        let err = parse("1 < 2 < 3;").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "';'"));
    }

    #[test]
    fn test_bad_let() {
        let err = parse("let 3 := 4 in 5;").unwrap_err();
        assert!(err.to_string().contains("expected identifier"));

        let err = parse("let x := 4 5;").unwrap_err();
        assert!(err.to_string().contains("expected 'in'"));
    }

    #[test]
    fn test_unbalanced_parens() {
        let err = parse("(1 + 2;").unwrap_err();
        assert!(err.to_string().contains("expected ')'"));

        let err = parse("1 + );").unwrap_err();
        assert!(err.to_string().contains("expected expression"));
    }

    #[test]
    fn test_lex_error_surfaces() {
        let err = parse("1 # 2;").unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_from_tokens_appends_eof() {
        let tokens = vec![
            Token::new(TokenKind::Int, "7", 1),
            Token::new(TokenKind::Semi, ";", 1),
        ];
        let program = Parser::from_tokens(tokens).parse_program().unwrap();
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn test_tokens_after_eof_are_rejected() {
        let tokens = vec![
            Token::new(TokenKind::Int, "7", 1),
            Token::new(TokenKind::Semi, ";", 1),
            Token::eof(1),
            Token::new(TokenKind::Int, "8", 2),
            Token::new(TokenKind::Semi, ";", 2),
        ];
        let err = Parser::from_tokens(tokens).parse_program().unwrap_err();
        assert_eq!(
            err,
            ParseError::Unexpected {
                found: "integer literal 8".to_string(),
                line: 2,
            }
        );
    }
}
