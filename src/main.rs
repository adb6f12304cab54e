//! tsb - CLI

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tsb::frontend::lexer::{tokenize, Lexer};
use tsb::repl::{LineRepl, LineReplConfig, ReplMode};
use tsb::util::config::{
    get_config_path, load_or_create_user_config, load_user_config, save_user_config, UserConfig,
};
use tsb::util::logger::{self, LogLevel};
use tsb::{NAME, VERSION};

/// Lexer and parser for a small expression language
#[derive(Parser, Debug)]
#[command(name = "tsb")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level, overrides --verbose and the config file
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file or snippet
    Tokens {
        #[command(flatten)]
        input: Input,

        /// Print a JSON array instead of one token per line
        #[arg(long)]
        json: bool,
    },

    /// Parse a source file or snippet and print the program
    Parse {
        #[command(flatten)]
        input: Input,
    },

    /// Start the interactive loop
    Repl {
        /// What to print for each line (defaults to the config file)
        #[arg(long, value_enum)]
        mode: Option<ReplMode>,
    },

    /// Manage the user configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Create the config file with defaults unless it already exists
    Init {
        /// Overwrite an existing file with defaults
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    Show,
}

/// Where source text comes from; stdin when neither is given
#[derive(ClapArgs, Debug)]
struct Input {
    /// Source file
    #[arg(value_name = "FILE", conflicts_with = "code")]
    file: Option<PathBuf>,

    /// Source code given on the command line
    #[arg(short = 'e', long = "eval", value_name = "CODE")]
    code: Option<String>,
}

impl Input {
    fn read(&self) -> Result<String> {
        if let Some(code) = &self.code {
            return Ok(code.clone());
        }
        if let Some(file) = &self.file {
            return std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read file: {}", file.display()));
        }
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        Ok(source)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_user_config().unwrap_or_else(|e| {
        eprintln!("warning: ignoring config file: {}", e);
        UserConfig::default()
    });

    let level = match (args.log_level, args.verbose) {
        (Some(level), _) => level,
        (None, true) => LogLevel::Debug,
        (None, false) => config.log.level,
    };
    logger::init_with_level(level);
    tracing::debug!("{} {} on {}", NAME, VERSION, std::env::consts::OS);

    match args.command {
        Commands::Tokens { input, json } => run_tokens(&input.read()?, json),
        Commands::Parse { input } => run_parse(&input.read()?),
        Commands::Repl { mode } => run_repl(config, mode),
        Commands::Config { action } => run_config(action, &config),
    }
}

fn run_tokens(
    source: &str,
    json: bool,
) -> Result<()> {
    if json {
        let tokens = tokenize(source);
        let out = serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?;
        println!("{}", out);
    } else {
        for token in Lexer::new(source) {
            println!("{}", token);
        }
    }
    Ok(())
}

fn run_parse(source: &str) -> Result<()> {
    let mut parser = tsb::Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.has_errors() {
        for error in parser.errors() {
            eprintln!("parser error: {}", error);
        }
        std::process::exit(1);
    }

    for stmt in &program.statements {
        println!("{}", stmt);
    }
    Ok(())
}

fn run_repl(
    config: UserConfig,
    mode: Option<ReplMode>,
) -> Result<()> {
    let mut repl_config = LineReplConfig::from(config.repl);
    if let Some(mode) = mode {
        repl_config.mode = mode;
    }

    let mut repl = LineRepl::with_config(repl_config).context("Failed to start REPL")?;
    repl.run().context("REPL failed")?;
    Ok(())
}

fn run_config(
    action: ConfigAction,
    config: &UserConfig,
) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = get_config_path().context("Cannot determine config directory")?;
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            let path = get_config_path().context("Cannot determine config directory")?;
            if force {
                save_user_config(&UserConfig::default()).context("Failed to write config")?;
            } else {
                load_or_create_user_config().context("Failed to initialize config")?;
            }
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let out = toml::to_string_pretty(config).context("Failed to serialize config")?;
            print!("{}", out);
        }
    }
    Ok(())
}
