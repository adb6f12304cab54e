//! Lexer module
//!
//! Single-pass scanner turning source text into [`Token`]s. Lexing never
//! fails: characters outside the language become `Illegal` tokens.

pub mod keywords;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{Token, TokenKind};

/// Tokenize source code
///
/// The returned vector always ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    tracing::debug!("lexing {} bytes", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        if !done {
            log_token(&token);
        }
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::debug!("lexing complete: {} tokens", tokens.len());
    tokens
}

/// Log a token for debugging
fn log_token(token: &Token) {
    let class = match token.kind {
        TokenKind::Ident => "identifier",
        TokenKind::Int => "number",
        TokenKind::Illegal => "illegal",
        kind if kind.is_keyword() => "keyword",
        kind if kind.is_operator() => "operator",
        _ => "punctuation",
    };
    tracing::trace!("{} {:?} at {}", class, token.literal, token.span.start);
}
