use crate::core::{EngineError, GameSession, RandomSource};
use crate::types::{Direction, GameStatus, ParseDirectionError};

/// Parse a move script.
///
/// Tokens are separated by whitespace or commas. Each token is parsed as a
/// direction word (`left`, `ArrowUp`, `d`, ...); failing that, a token made
/// only of single-letter spellings is split per letter, so `wasd` reads as
/// up, left, down, right.
///
/// The first token that is neither fails with
/// [`EngineError::InvalidDirection`].
///
/// # Examples
///
/// ```
/// use twenty48_engine::parse_moves;
/// use twenty48_engine::types::Direction;
///
/// let moves = parse_moves("left, up wd").unwrap();
/// assert_eq!(
///     moves,
///     vec![Direction::Left, Direction::Up, Direction::Up, Direction::Right]
/// );
/// assert!(parse_moves("left sideways").is_err());
/// ```
pub fn parse_moves(script: &str) -> Result<Vec<Direction>, EngineError> {
    let mut moves = Vec::new();
    for token in script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if let Ok(direction) = token.parse::<Direction>() {
            moves.push(direction);
            continue;
        }
        let letters: Option<Vec<Direction>> = token.chars().map(Direction::from_letter).collect();
        match letters {
            Some(letters) => moves.extend(letters),
            None => {
                return Err(ParseDirectionError {
                    input: token.to_string(),
                }
                .into())
            }
        }
    }
    Ok(moves)
}

/// Totals from a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Moves that changed the board
    pub applied: usize,
    /// Moves that changed nothing
    pub ignored: usize,
    /// Moves not submitted because the session was already terminal
    pub rejected: usize,
    pub score: u64,
    pub status: GameStatus,
}

/// Submit `moves` in order, stopping at the first terminal status.
pub fn replay<R: RandomSource>(session: &mut GameSession<R>, moves: &[Direction]) -> ReplaySummary {
    let mut applied = 0;
    let mut ignored = 0;
    let mut submitted = 0;

    for &direction in moves {
        if session.status().is_terminal() {
            break;
        }
        let outcome = session.submit_move(direction);
        submitted += 1;
        if outcome.moved {
            applied += 1;
        } else {
            ignored += 1;
        }
    }

    let summary = ReplaySummary {
        applied,
        ignored,
        rejected: moves.len() - submitted,
        score: session.score(),
        status: session.status(),
    };
    tracing::debug!(?summary, "replay finished");
    summary
}
