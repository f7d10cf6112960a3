//! Lexer (tokenizer) for MFL source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Tokens keep their exact lexeme; numeric conversion is deferred to evaluation
//! so that an out-of-range literal is reported as a runtime failure on the node
//! that holds it.

use std::fmt;
use thiserror::Error;

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Int,
    Real,
    True,
    False,

    // Identifiers
    Id,

    // Keywords
    Val,
    Let,
    In,
    And,
    Or,
    Not,
    Mod,

    // Arithmetic
    Add,  // +
    Sub,  // -
    Mult, // *
    Div,  // /

    // Comparison
    Lt,  // <
    Lte, // <=
    Gt,  // >
    Gte, // >=
    Eq,  // =
    Neq, // !=

    Assign, // :=

    // Punctuation
    LParen, // (
    RParen, // )
    Semi,   // ;

    // End of input
    Eof,
}

impl TokenKind {
    /// Keyword lookup for an identifier-shaped lexeme.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "val" => TokenKind::Val,
            "let" => TokenKind::Let,
            "in" => TokenKind::In,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "mod" => TokenKind::Mod,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int => write!(f, "integer literal"),
            TokenKind::Real => write!(f, "real literal"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::Id => write!(f, "identifier"),
            TokenKind::Val => write!(f, "'val'"),
            TokenKind::Let => write!(f, "'let'"),
            TokenKind::In => write!(f, "'in'"),
            TokenKind::And => write!(f, "'and'"),
            TokenKind::Or => write!(f, "'or'"),
            TokenKind::Not => write!(f, "'not'"),
            TokenKind::Mod => write!(f, "'mod'"),
            TokenKind::Add => write!(f, "'+'"),
            TokenKind::Sub => write!(f, "'-'"),
            TokenKind::Mult => write!(f, "'*'"),
            TokenKind::Div => write!(f, "'/'"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Lte => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Gte => write!(f, "'>='"),
            TokenKind::Eq => write!(f, "'='"),
            TokenKind::Neq => write!(f, "'!='"),
            TokenKind::Assign => write!(f, "':='"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

/// A classified lexeme together with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Int | TokenKind::Real => write!(f, "{} {}", self.kind, self.text),
            TokenKind::Id => write!(f, "identifier '{}'", self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexical error at line {line}: {message}")]
pub struct LexError {
    pub message: String,
    pub line: usize,
}

/// Lexer for MFL source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::eof(self.line));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let ch = self.advance().ok_or_else(|| LexError {
            message: "unexpected end of input".to_string(),
            line,
        })?;

        let single = |kind: TokenKind| -> Result<Token, LexError> {
            Ok(Token::new(kind, ch.to_string(), line))
        };

        match ch {
            '0'..='9' => Ok(self.number_literal(ch)),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => Ok(self.number_literal(ch)),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.identifier_or_keyword(ch)),

            '+' => single(TokenKind::Add),
            '-' => single(TokenKind::Sub),
            '*' => single(TokenKind::Mult),
            '/' => single(TokenKind::Div),
            '=' => single(TokenKind::Eq),
            '(' => single(TokenKind::LParen),
            ')' => single(TokenKind::RParen),
            ';' => single(TokenKind::Semi),
            '<' => Ok(self.with_optional_eq(TokenKind::Lt, TokenKind::Lte, "<", line)),
            '>' => Ok(self.with_optional_eq(TokenKind::Gt, TokenKind::Gte, ">", line)),
            '!' => self.required_eq(TokenKind::Neq, "!=", line),
            ':' => self.required_eq(TokenKind::Assign, ":=", line),

            _ => Err(LexError {
                message: format!("unexpected character '{}'", ch),
                line,
            }),
        }
    }

    /// `<` / `<=` and `>` / `>=`
    fn with_optional_eq(
        &mut self,
        bare: TokenKind,
        with_eq: TokenKind,
        text: &str,
        line: usize,
    ) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            Token::new(with_eq, format!("{}=", text), line)
        } else {
            Token::new(bare, text, line)
        }
    }

    /// `!=` and `:=` have no single-character form.
    fn required_eq(&mut self, kind: TokenKind, text: &str, line: usize) -> Result<Token, LexError> {
        if self.peek() == Some('=') {
            self.advance();
            Ok(Token::new(kind, text, line))
        } else {
            Err(LexError {
                message: format!("expected '{}'", text),
                line,
            })
        }
    }

    fn number_literal(&mut self, first: char) -> Token {
        let line = self.line;
        let mut text = String::from(first);
        let mut is_real = first == '.';

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_real
                && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_real = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if is_real { TokenKind::Real } else { TokenKind::Int };
        Token::new(kind, text, line)
    }

    fn identifier_or_keyword(&mut self, first: char) -> Token {
        let line = self.line;
        let mut text = String::from(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Id);
        Token::new(kind, text, line)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}
