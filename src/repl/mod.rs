//! REPL Module
//!
//! Reads one line at a time and prints either its tokens or the program it
//! parses to. Each line gets a fresh lexer; nothing carries over between
//! lines.
//!
//! This module contains:
//! - [`line::LineRepl`] - Line-based REPL with rustyline
//! - [`commands`] - `:`-prefixed command handling

pub mod commands;
pub mod line;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frontend::lexer::{Lexer, TokenKind};
use crate::frontend::parser::Parser;

pub use commands::{handle_command, CommandResult};
pub use line::{LineRepl, LineReplConfig};

/// What the REPL prints for each input line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReplMode {
    /// One token per output line
    #[default]
    Tokens,
    /// The rendered program, or its syntax errors
    Ast,
}

impl fmt::Display for ReplMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ReplMode::Tokens => write!(f, "tokens"),
            ReplMode::Ast => write!(f, "ast"),
        }
    }
}

/// Produce the REPL output for one line of input
///
/// In token mode the trailing `EOF` is not printed. In AST mode syntax
/// errors replace the program, one `parser error: ...` line each.
pub fn evaluate(
    mode: ReplMode,
    line: &str,
) -> Vec<String> {
    match mode {
        ReplMode::Tokens => Lexer::new(line)
            .take_while(|token| token.kind != TokenKind::Eof)
            .map(|token| token.to_string())
            .collect(),
        ReplMode::Ast => {
            let mut parser = Parser::new(Lexer::new(line));
            let program = parser.parse_program();
            if parser.has_errors() {
                parser
                    .errors()
                    .iter()
                    .map(|e| format!("parser error: {}", e))
                    .collect()
            } else {
                vec![program.to_string()]
            }
        }
    }
}
