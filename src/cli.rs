use std::io::{self, BufRead};

use anyhow::{Context, Result};
use calcpad::{Calculator, KEYPAD, Key};
use clap::{Parser, ValueEnum};
use log::{debug, info};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Calcpad - A keypad calculator for arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "calcpad")]
#[command(
    about = "Evaluate arithmetic expressions built from digits, + - * / % ** and parentheses",
    long_about = "Evaluate arithmetic expressions built from digits, + - * / % ** and parentheses.\n\n\
                  Without an EXPRESSION, lines are read from standard input: a line is appended \
                  to the display and evaluated, an empty line re-evaluates the display, 'C' clears \
                  it and '<' deletes its last character."
)]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate; omit to read lines from standard input
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Print the keypad layout and exit
    #[arg(long)]
    pub keypad: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What the binary should do once started
pub enum Mode {
    Evaluate(String),
    Interactive,
    ShowKeypad,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let mode = match (args.keypad, args.expression) {
            (true, _) => Mode::ShowKeypad,
            (false, Some(expression)) => Mode::Evaluate(expression),
            (false, None) => Mode::Interactive,
        };
        CliConfig {
            mode,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    Ok(args.into())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Applies one line of terminal input to the calculator
pub fn apply_line(calculator: &mut Calculator, line: &str) {
    match line.trim() {
        "" => calculator.press(Key::Equals),
        "C" | "c" => calculator.press(Key::Clear),
        "<" | "⌫" => calculator.press(Key::Backspace),
        text => {
            calculator.append(text);
            calculator.press(Key::Equals);
        }
    }
}

/// Renders the keypad as a text grid
pub fn render_keypad() -> String {
    KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| format!("[{:^3}]", label))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_interactive(calculator: &mut Calculator) -> Result<()> {
    info!("Reading expressions from standard input");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from standard input")?;
        debug!("Input line: '{}'", line);
        apply_line(calculator, &line);
        println!("{}", calculator.display());
    }

    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut calculator = Calculator::new();

    match config.mode {
        Mode::ShowKeypad => {
            println!("{}", render_keypad());
            Ok(())
        }
        Mode::Evaluate(expression) => {
            info!("Evaluating '{}'", expression);
            calculator.append(&expression);
            calculator.press(Key::Equals);
            println!("{}", calculator.display());
            Ok(())
        }
        Mode::Interactive => run_interactive(&mut calculator),
    }
}
