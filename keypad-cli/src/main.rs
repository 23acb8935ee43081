//! keypad - Run key presses through the calculator and print the display

use clap::Parser;
use libkeypad::logging::LoggingConfig;
use libkeypad::types::parse_keys;
use libkeypad::{Calculator, Config, Result};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keypad")]
#[command(version, about = "Immediate-mode scientific calculator for the command line")]
#[command(long_about = r#"Run a sequence of calculator key presses and print the display.

Keys are pressed in order, exactly as on the keypad: operators apply
immediately and left to right, with no precedence.

EXAMPLES:
    # 2 + 3 x 4 = shows 20, not 14
    keypad 2 + 3 x 4 =

    # Scientific functions act on the displayed number (degrees)
    keypad 30 sin

    # Memory
    keypad 10 m+ 3 m+ mr

    # Keys from stdin
    echo "1 / 0 =" | keypad --trace

    # JSON snapshot for scripting
    keypad --format json 6 x 7 = | jq .display

KEYS:
    0-9 .          digits (multi-digit numbers like 12 or 3.5 are expanded)
    + - x * / ÷ ×  operators
    =              equals
    c clear        clear everything
    ( )            parentheses (shown in the trace only)
    m+ m- mr mc    memory
    sin cos tan sqrt sq log ln ! 1/x exp

EXIT CODES:
    0 - Success (an Error readout is still a successful run)
    1 - Configuration or IO failure
    3 - Unknown key
"#)]
struct Cli {
    /// Keys to press (reads whitespace separated keys from stdin if not provided)
    keys: Vec<String>,

    /// Also print the expression trace
    #[arg(short, long)]
    trace: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Config file (defaults to KEYPAD_CONFIG or the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    LoggingConfig::from_section(&config.logging, cli.verbose).init();

    let input = if cli.keys.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cli.keys.join(" ")
    };

    let commands = parse_keys(input.split_whitespace())?;
    tracing::debug!(count = commands.len(), "parsed keys");

    let mut calc = Calculator::with_options(config.engine);
    calc.press_all(commands);

    match cli.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&calc.snapshot()).map_err(std::io::Error::from)?;
            println!("{}", json);
        }
        _ => {
            if cli.trace {
                println!("{}", calc.trace());
            }
            println!("{}", calc.display());
        }
    }

    Ok(())
}
