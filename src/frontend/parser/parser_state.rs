//! Parser state and error handling

use std::collections::HashMap;

use crate::frontend::lexer::tokens::*;
use crate::frontend::lexer::Lexer;
use crate::frontend::parser::ast::Program;
use crate::frontend::parser::pratt::{precedence_of, InfixParseFn, Precedence, PrefixParseFn};
use crate::frontend::parser::statements::StatementParser;
use crate::util::span::Span;

/// Parse error types
///
/// The `Display` text of each variant is the message reported to users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was not the next one in the stream
    #[error("expected next token to be {expected}, got {found} instead")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
    /// No expression can start with this token
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, span: Span },
    /// Integer literal out of range
    #[error("could not parse {literal} as integer")]
    InvalidInteger { literal: String, span: Span },
    /// Expressions or blocks nested past [`MAX_NESTING_DEPTH`]
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Location the error was detected at
    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedToken { span, .. }
            | ParseError::NoPrefixParseFn { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }
}

/// How many expressions and blocks may be open at once
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser with a two-token window over a [`Lexer`]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
    depth: usize,
    pub(crate) prefix_fns: HashMap<TokenKind, PrefixParseFn<'a>>,
    pub(crate) infix_fns: HashMap<TokenKind, InfixParseFn<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut lexer = lexer;
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
            depth: 0,
            prefix_fns: HashMap::new(),
            infix_fns: HashMap::new(),
        };
        parser.register_parse_fns();
        parser
    }

    /// Parse statements until end of input
    ///
    /// Never fails: malformed statements are dropped and reported through
    /// [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        tracing::debug!("parsing program");
        let mut program = Program::new();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(stmt) => program.statements.push(stmt),
                None => self.synchronize(),
            }
            self.next_token();
        }

        tracing::debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    /// Errors recorded so far, in detection order
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take ownership of the recorded errors
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shift peek into current and pull one token from the lexer
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn cur_is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance if the peek token is `kind`; otherwise record an error and
    /// stay put
    pub fn expect_peek(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    pub fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token.kind)
    }

    fn peek_error(
        &mut self,
        expected: TokenKind,
    ) {
        self.error(ParseError::ExpectedToken {
            expected,
            found: self.peek_token.kind,
            span: self.peek_token.span,
        });
    }

    pub(crate) fn error(
        &mut self,
        error: ParseError,
    ) {
        tracing::debug!("parse error at {}: {}", error.span().start, error);
        self.errors.push(error);
    }

    /// Open one nesting level, or record `NestingTooDeep` and refuse
    ///
    /// Every successful call must be paired with [`Parser::leave_nesting`].
    pub(crate) fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.error(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span: self.cur_token.span,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Skip to the end of the statement being abandoned
    ///
    /// Stops on `;`, `}` or `Eof` without consuming it.
    pub(crate) fn synchronize(&mut self) {
        while !self.cur_is(TokenKind::Semicolon)
            && !self.cur_is(TokenKind::RBrace)
            && !self.cur_is(TokenKind::Eof)
        {
            self.next_token();
        }
    }
}
