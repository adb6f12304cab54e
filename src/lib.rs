//! tsb - lexer and parser for a small expression language
//!
//! Integers, booleans, prefix and infix operators, `let` and `return`
//! statements, `if`/`else`, function literals and calls.
//!
//! # Example
//!
//! ```
//! use tsb::frontend::parser::parse;
//!
//! let program = parse("let add = fn(a, b) { a + b }; add(1, 2 * 3);").unwrap();
//! assert_eq!(program.statements.len(), 2);
//! assert_eq!(program.statements[1].to_string(), "add(1, (2 * 3))");
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod repl;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::lexer::{tokenize, Lexer, Token, TokenKind};
pub use frontend::parser::{parse, ParseError, ParseErrors, Parser, Program};

use std::fs;
use std::path::Path;

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "tsb";

/// Read a source file and parse it
///
/// Fails if the file cannot be read or if any syntax error was found; the
/// error then lists every message in detection order.
pub fn parse_file(path: &Path) -> Result<Program> {
    debug!("parsing file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let program =
        parse(&source).with_context(|| format!("Failed to parse: {}", path.display()))?;
    Ok(program)
}

/// Read a source file and tokenize it
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>> {
    debug!("tokenizing file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(tokenize(&source))
}
