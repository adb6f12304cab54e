//! Tokenizer implementation
//! Main lexer structure and token generation logic

use super::keywords::lookup_ident;
use crate::frontend::lexer::tokens::*;
use crate::util::span::{Position, Span};
use std::iter::Peekable;
use std::str::Chars;

/// Main lexer structure
///
/// Produces one token per [`Lexer::next_token`] call. Once the input is
/// exhausted every further call yields an `Eof` token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    /// Position of the next unread character
    pos: Position,
    /// Where the token being scanned began
    start: Position,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            pos: Position::start(),
            start: Position::start(),
        }
    }

    /// Span of the token being scanned
    fn span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos.advance(c);
        Some(c)
    }

    /// Peek at next character
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Generate next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.pos;

        let c = match self.advance() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, "", self.span()),
        };

        match c {
            '=' => self.with_equals(TokenKind::Assign, TokenKind::Eq),
            '!' => self.with_equals(TokenKind::Bang, TokenKind::NotEq),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Asterisk),
            '/' => self.make_token(TokenKind::Slash),
            '<' => self.make_token(TokenKind::Lt),
            '>' => self.make_token(TokenKind::Gt),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '(' => self.make_token(TokenKind::LParen),
            ')' => self.make_token(TokenKind::RParen),
            '{' => self.make_token(TokenKind::LBrace),
            '}' => self.make_token(TokenKind::RBrace),
            c if is_identifier_start(c) => self.scan_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            _ => self.make_token(TokenKind::Illegal),
        }
    }

    /// `single` or, when followed by `=`, `double`
    fn with_equals(
        &mut self,
        single: TokenKind,
        double: TokenKind,
    ) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            self.make_token(double)
        } else {
            self.make_token(single)
        }
    }

    /// Scan identifier or keyword; the keyword table is consulted only
    /// once the whole word has been consumed
    fn scan_identifier(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !is_identifier_char(c) {
                break;
            }
            self.advance();
        }
        let kind = lookup_ident(self.current_text());
        self.make_token(kind)
    }

    fn scan_number(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.advance();
        }
        self.make_token(TokenKind::Int)
    }

    /// Text consumed since the start of the current token
    fn current_text(&self) -> &'a str {
        self.span().text(self.source)
    }

    /// Create token with current span and text
    fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token {
        Token::new(kind, self.current_text(), self.span())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
