//! # Calc CLI
//!
//! Terminal front end for the calculator.
//!
//! ```text
//! $ calc --keys "3 + 4 + 5 ="
//! $ calc --local            # interactive, evaluates in-process
//! > 1 0 / 4 =
//! ```
//!
//! Interactive input takes whitespace-separated keys per line: digits, `.`,
//! `+ - * /`, `=`, `sqrt`, `^`, `%`, `1/x`, `±`, `C`, `CE`. `quit` exits.

mod render;

use std::sync::Arc;

use anyhow::Context;
use calc_client::{ArithmeticBackend, Calculator, ClientConfig, HttpBackend, LocalBackend};
use calc_core::keypad::parse_sequence;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::render;

#[derive(Parser)]
#[command(name = "calc", version, about = "Calculator backed by the arithmetic service")]
struct Cli {
    /// Arithmetic service base URL.
    #[arg(long, env = "CALC_SERVER_URL")]
    server: Option<String>,

    /// Evaluate in-process instead of calling the service.
    #[arg(long, conflicts_with = "server")]
    local: bool,

    /// Key sequence to run, e.g. "3 + 4 =". Reads stdin when omitted.
    #[arg(long, value_name = "SEQUENCE")]
    keys: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    let backend: Arc<dyn ArithmeticBackend> = if cli.local {
        Arc::new(LocalBackend)
    } else {
        let backend = HttpBackend::new(&config.server_url, config.request_timeout)
            .with_context(|| format!("Cannot use server URL {}", config.server_url))?;
        debug!(endpoint = %backend.endpoint(), "Using arithmetic service");
        Arc::new(backend)
    };

    let calculator = Calculator::new(backend, &config);

    match cli.keys {
        Some(keys) => {
            run_line(&calculator, &keys).await?;
        }
        None => interactive(&calculator).await?,
    }

    Ok(())
}

/// Reads key lines from stdin until EOF or `quit`.
async fn interactive(calculator: &Calculator) -> anyhow::Result<()> {
    print!("{}", render(&calculator.screen()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if matches!(line, "quit" | "exit" | "q") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if let Err(e) = run_line(calculator, line).await {
            eprintln!("{e}");
        }
    }

    Ok(())
}

/// Presses every key in `line`, echoing each button label, then prints the
/// screen.
async fn run_line(calculator: &Calculator, line: &str) -> anyhow::Result<()> {
    let inputs = parse_sequence(line)?;

    let labels: Vec<String> = inputs.iter().map(|input| input.label()).collect();
    println!("[{}]", labels.join("] ["));

    let mut screen = calculator.screen();
    for input in inputs {
        screen = calculator.press(input).await?;
    }

    print!("{}", render(&screen));
    Ok(())
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,calc=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
