//! Statement and expression parsing
//!
//! One method per non-terminal, lowest precedence first:
//!
//! ```text
//! stmt   := "val" ID ":=" expr | expr
//! expr   := "let" ID ":=" expr "in" expr | rexpr { ("and" | "or") rexpr }
//! rexpr  := mexpr [ relop mexpr ]
//! mexpr  := term { ("+" | "-") term }
//! term   := "not" rexpr | factor { ("*" | "/" | "mod") factor }
//! factor := "-" factor | "(" expr ")" | INT | REAL | TRUE | FALSE | ID
//! ```
//!
//! Repeated binary operators are folded iteratively into left-associative
//! trees. Note that `not` takes a whole relational expression as its operand,
//! so `not a < b` negates the comparison.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use tracing::trace;

impl Parser {
    /// Parse a top-level statement (without its terminating `;`)
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        if self.match_kind(TokenKind::Val) {
            self.parse_val_declaration()
        } else {
            self.parse_expression()
        }
    }

    /// `val` has already been consumed.
    fn parse_val_declaration(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <val>");
        let name = self.expect(TokenKind::Id, "identifier")?.text;
        self.expect(TokenKind::Assign, "':='")?;
        let expr = Box::new(self.parse_expression()?);

        Ok(AstNode::ValDecl {
            name,
            expr,
            line: self.previous_line(),
        })
    }

    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <expr>");
        if self.match_kind(TokenKind::Let) {
            return self.parse_let();
        }

        let mut left = self.parse_relational()?;

        loop {
            let op = if self.match_kind(TokenKind::And) {
                BinOp::And
            } else if self.match_kind(TokenKind::Or) {
                BinOp::Or
            } else {
                break;
            };
            let right = Box::new(self.parse_relational()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                line: self.previous_line(),
            };
        }

        Ok(left)
    }

    /// `let` has already been consumed.
    fn parse_let(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <let>");
        let name = self.expect(TokenKind::Id, "identifier")?.text;
        self.expect(TokenKind::Assign, "':='")?;
        let bound = Box::new(self.parse_expression()?);
        self.expect(TokenKind::In, "'in'")?;
        let body = Box::new(self.parse_expression()?);

        Ok(AstNode::Let {
            name,
            bound,
            body,
            line: self.previous_line(),
        })
    }

    /// Relational operators do not chain: at most one per rexpr.
    fn parse_relational(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <rexpr>");
        let left = self.parse_additive()?;

        let op = match self.peek().kind {
            TokenKind::Lt => RelOp::Lt,
            TokenKind::Lte => RelOp::Le,
            TokenKind::Gt => RelOp::Gt,
            TokenKind::Gte => RelOp::Ge,
            TokenKind::Eq => RelOp::Eq,
            TokenKind::Neq => RelOp::Ne,
            _ => return Ok(left),
        };
        self.advance();

        let right = Box::new(self.parse_additive()?);
        Ok(AstNode::RelationalOp {
            op,
            left: Box::new(left),
            right,
            line: self.previous_line(),
        })
    }

    fn parse_additive(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <mexpr>");
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Add => BinOp::Add,
                TokenKind::Sub => BinOp::Sub,
                _ => break,
            };
            self.advance();

            let right = Box::new(self.parse_term()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                line: self.previous_line(),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <term>");
        if self.match_kind(TokenKind::Not) {
            let operand = Box::new(self.parse_relational()?);
            return Ok(AstNode::UnaryOp {
                op: UnOp::Not,
                operand,
                line: self.previous_line(),
            });
        }

        let mut left = self.parse_factor()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Mult => BinOp::Mul,
                TokenKind::Div => BinOp::Div,
                TokenKind::Mod => BinOp::Mod,
                _ => break,
            };
            self.advance();

            let right = Box::new(self.parse_factor()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                line: self.previous_line(),
            };
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<AstNode, ParseError> {
        trace!("enter <factor>");
        match self.peek().kind {
            TokenKind::Sub => {
                self.advance();
                let operand = Box::new(self.parse_factor()?);
                Ok(AstNode::UnaryOp {
                    op: UnOp::Neg,
                    operand,
                    line: self.previous_line(),
                })
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(expr)
            }
            TokenKind::Int | TokenKind::Real | TokenKind::True | TokenKind::False => {
                Ok(AstNode::Literal(self.advance()))
            }
            TokenKind::Id => Ok(AstNode::Ident(self.advance())),
            _ => Err(self.expected("expression")),
        }
    }
}
