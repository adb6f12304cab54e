//! Precedence handling for the Pratt parser
//!
//! Operators bind tighter the later their level appears in [`Precedence`].

use crate::frontend::lexer::tokens::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Precedence levels, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
}

/// Infix operator precedences
pub static PRECEDENCES: Lazy<HashMap<TokenKind, Precedence>> = Lazy::new(|| {
    HashMap::from([
        (TokenKind::Eq, Precedence::Equals),
        (TokenKind::NotEq, Precedence::Equals),
        (TokenKind::Lt, Precedence::LessGreater),
        (TokenKind::Gt, Precedence::LessGreater),
        (TokenKind::Plus, Precedence::Sum),
        (TokenKind::Minus, Precedence::Sum),
        (TokenKind::Asterisk, Precedence::Product),
        (TokenKind::Slash, Precedence::Product),
        (TokenKind::LParen, Precedence::Call),
    ])
});

/// Precedence of `kind` in infix position, `Lowest` if it is not an operator
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCES.get(&kind).copied().unwrap_or(Precedence::Lowest)
}
