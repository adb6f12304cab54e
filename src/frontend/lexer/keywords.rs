//! Keyword recognition

use crate::frontend::lexer::tokens::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Reserved words, keyed by their source text
pub static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ])
});

/// Classify a fully scanned identifier as a keyword or a plain `Ident`
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

