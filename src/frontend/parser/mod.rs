//! Parser module
//!
//! Recursive-descent statement parser with a Pratt expression engine. The
//! parser pulls tokens from a [`Lexer`] one at a time through a
//! current/peek window and collects syntax errors instead of stopping at
//! the first one.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParseError, Parser, MAX_NESTING_DEPTH};
pub use pratt::{precedence_of, Precedence};
pub use statements::StatementParser;

use crate::frontend::lexer::Lexer;

/// All syntax errors found in one source text
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} syntax error(s): {}", .errors.len(), join_messages(.errors))]
pub struct ParseErrors {
    pub errors: Vec<ParseError>,
}

impl ParseErrors {
    /// Error messages in detection order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

fn join_messages(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse source text into a program
///
/// # Returns
/// The program, or every syntax error found if there was at least one
///
/// # Example
/// ```
/// let program = tsb::frontend::parser::parse("let x = 1 + 2;").unwrap();
/// assert_eq!(program.to_string(), "let x = (1 + 2);");
/// ```
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.has_errors() {
        Err(ParseErrors {
            errors: parser.into_errors(),
        })
    } else {
        Ok(program)
    }
}
