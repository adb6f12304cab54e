//! REPL Command Handler
//!
//! Handles special commands starting with ':'.

use super::ReplMode;

/// Command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Exit the REPL
    Exit,
    /// Switch what each line prints
    SwitchMode(ReplMode),
    /// Output a message
    Output(String),
}

const HELP: &str = "\
Available commands:
  :tokens, :t    - Print the tokens of each line
  :ast, :a       - Print the parsed program of each line
  :help, :h      - Show this help
  :quit, :q      - Exit the REPL";

/// Handle a command line such as `:ast`
pub fn handle_command(line: &str) -> CommandResult {
    let cmd = line.trim().trim_start_matches(':').trim();

    match cmd {
        "quit" | "q" | "exit" => CommandResult::Exit,
        "tokens" | "t" => CommandResult::SwitchMode(ReplMode::Tokens),
        "ast" | "a" => CommandResult::SwitchMode(ReplMode::Ast),
        "help" | "h" | "" => CommandResult::Output(HELP.to_string()),
        _ => CommandResult::Output(format!("Unknown command: {}", line.trim())),
    }
}
