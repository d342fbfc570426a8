//! Headless 2048 runner (default binary).
//!
//! Replays a move script against a seeded session and prints the result.
//! Logs go to stderr; set `RUST_LOG=debug` to trace every move.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use twenty48::cli::{parse_args, run, USAGE};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}
