//! Line-based REPL with rustyline
//!
//! Provides line editing and history on top of [`evaluate`](super::evaluate).

use std::path::PathBuf;

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

use super::commands::{handle_command, CommandResult};
use super::{evaluate, ReplMode};
use crate::util::config::ReplConfig;

/// Line REPL configuration
#[derive(Debug, Clone)]
pub struct LineReplConfig {
    /// Prompt to display
    pub prompt: String,
    /// Output mode at startup
    pub mode: ReplMode,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Maximum history size
    pub history_size: usize,
}

impl Default for LineReplConfig {
    fn default() -> Self {
        ReplConfig::default().into()
    }
}

impl From<ReplConfig> for LineReplConfig {
    fn from(config: ReplConfig) -> Self {
        Self {
            prompt: config.prompt,
            mode: config.mode,
            history_file: config.history_file,
            history_size: config.history_size,
        }
    }
}

/// Line REPL
pub struct LineRepl {
    /// Configuration
    config: LineReplConfig,
    /// rustyline editor
    editor: Editor<(), FileHistory>,
    /// Current output mode
    mode: ReplMode,
}

impl LineRepl {
    /// Create with custom config
    pub fn with_config(config: LineReplConfig) -> Result<Self, ReadlineError> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .build();

        let mut editor = Editor::with_config(rl_config)?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                if let Err(e) = editor.load_history(history_file) {
                    tracing::warn!("could not load history {}: {}", history_file.display(), e);
                }
            }
        }

        Ok(Self {
            mode: config.mode,
            config,
            editor,
        })
    }

    /// Run the REPL until `:quit` or Ctrl-D
    pub fn run(&mut self) -> Result<(), ReadlineError> {
        println!("tsb {} - Type :help for assistance", crate::VERSION);
        println!("Press Ctrl+D or :quit to exit\n");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.as_str())?;

                    if line.trim_start().starts_with(':') {
                        match handle_command(&line) {
                            CommandResult::Exit => break,
                            CommandResult::SwitchMode(mode) => {
                                tracing::debug!("repl mode {} -> {}", self.mode, mode);
                                self.mode = mode;
                                println!("mode: {}", mode);
                            }
                            CommandResult::Output(msg) => println!("{}", msg),
                        }
                        continue;
                    }

                    for out in evaluate(self.mode, &line) {
                        println!("{}", out);
                    }
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            if let Err(e) = self.editor.save_history(history_file) {
                tracing::warn!("could not save history {}: {}", history_file.display(), e);
            }
        }

        Ok(())
    }
}
