//! Headless replay driver behind the `twenty48` binary.
//!
//! Runs a scripted move sequence against a seeded session and prints the
//! final board as text or as a JSON snapshot. There is no interactive mode.

use std::io::Write;

use anyhow::{anyhow, Context, Result};

use crate::core::{GameSession, SessionConfig};
use crate::engine::{parse_moves, replay};
use crate::types::DEFAULT_GRID_SIZE;

pub const USAGE: &str = "\
usage: twenty48 [--size N] [--seed S] [--moves SCRIPT] [--json]

  --size N         grid size, 4 to 8 (default 4)
  --seed S         spawn seed (default: random)
  --moves SCRIPT   moves, e.g. \"left up right\" or \"wasd\"
  --json           print the final session as JSON
  -h, --help       show this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub grid_size: u8,
    pub seed: Option<u32>,
    pub moves: String,
    pub json: bool,
    pub help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: None,
            moves: String::new(),
            json: false,
            help: false,
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                config.grid_size = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--moves" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --moves"))?;
                config.moves = v.clone();
            }
            "--json" => config.json = true,
            "-h" | "--help" => config.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// Create the session, replay the moves and write the result to `out`.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let session_config = SessionConfig::new(config.grid_size, seed);
    let moves = parse_moves(&config.moves).context("could not parse --moves")?;
    let mut session =
        GameSession::from_config(&session_config).context("could not create session")?;

    tracing::debug!(seed, moves = moves.len(), "replaying");
    let summary = replay(&mut session, &moves);

    if config.json {
        serde_json::to_writer_pretty(&mut *out, &session.snapshot())?;
        writeln!(out)?;
    } else {
        write!(out, "{}", session.board())?;
        writeln!(
            out,
            "score: {}  status: {}  moves: {} applied, {} ignored, {} rejected  seed: {}",
            summary.score, summary.status, summary.applied, summary.ignored, summary.rejected, seed
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_defaults() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.grid_size, 4);
    }

    #[test]
    fn parse_all_flags() {
        let config = parse_args(&args(&[
            "--size", "6", "--seed", "42", "--moves", "wasd", "--json",
        ]))
        .unwrap();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.moves, "wasd");
        assert!(config.json);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_args(&args(&["--size"])).is_err());
        assert!(parse_args(&args(&["--size", "big"])).is_err());
        assert!(parse_args(&args(&["--seed", "-1"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn run_rejects_unsupported_size() {
        let config = CliConfig {
            grid_size: 9,
            seed: Some(1),
            ..CliConfig::default()
        };
        let err = run(&config, &mut Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("grid size 9"));
    }

    #[test]
    fn run_rejects_bad_script() {
        let config = CliConfig {
            seed: Some(1),
            moves: "left jump".to_string(),
            ..CliConfig::default()
        };
        assert!(run(&config, &mut Vec::new()).is_err());
    }
}
