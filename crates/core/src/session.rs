//! Game session module - the turn loop and status state machine
//!
//! A session ties together the board, the directional transform, the spawner
//! and the terminal detector:
//!
//! 1. apply the move;
//! 2. if nothing changed, ignore it;
//! 3. otherwise spawn a tile, add the merge score, then check win and loss.
//!
//! `Won` and `Lost` are terminal. Moves submitted in a terminal state are
//! rejected until [`GameSession::restart`] starts a new episode.

use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::EngineError;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::spawn::spawn_tile;
use crate::terminal::classify;
use crate::transform::apply_move;
use crate::types::*;

/// What happened when a move was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True if the board changed (and a tile was spawned if there was room)
    pub moved: bool,
    /// True if the session was already terminal and ignored the move
    pub rejected: bool,
    /// Score gained by merges in this move
    pub score_delta: u64,
    /// Tile placed after the move, if any
    pub spawned: Option<SpawnedTile>,
    /// Status after the move
    pub status: GameStatus,
}

impl MoveOutcome {
    fn unchanged(status: GameStatus, rejected: bool) -> Self {
        Self {
            moved: false,
            rejected,
            score_delta: 0,
            spawned: None,
            status,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    board: Board,
    score: u64,
    status: GameStatus,
    win_tile: u32,
    /// Accepted moves in the current episode
    moves: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    rng: R,
}

impl GameSession<SimpleRng> {
    /// Create a new session with a seeded [`SimpleRng`]
    pub fn new(grid_size: u8, seed: u32) -> Result<Self, EngineError> {
        Self::with_rng(grid_size, SimpleRng::new(seed))
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Self::new(config.grid_size, config.seed)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a new session drawing spawns from `rng`.
    ///
    /// The board starts empty with [`INITIAL_TILES`] spawned tiles.
    pub fn with_rng(grid_size: u8, rng: R) -> Result<Self, EngineError> {
        let board = Board::new(grid_size)?;
        let mut session = Self {
            board,
            score: 0,
            status: GameStatus::Playing,
            win_tile: win_tile(grid_size),
            moves: 0,
            episode_id: 0,
            rng,
        };
        session.reset_board();
        tracing::debug!(grid_size, win_tile = session.win_tile, "session created");
        Ok(session)
    }

    /// Resume from an existing board and score.
    ///
    /// The status is classified from the board, so a board that already holds
    /// the win tile (or has no moves) starts terminal.
    pub fn from_board(board: Board, score: u64, rng: R) -> Self {
        let win_tile = win_tile(board.size());
        let status = classify(&board, win_tile);
        Self {
            board,
            score,
            status,
            win_tile,
            moves: 0,
            episode_id: 0,
            rng,
        }
    }

    /// Resume from a snapshot. Move and episode counters are carried over.
    pub fn from_snapshot(snapshot: &SessionSnapshot, rng: R) -> Result<Self, EngineError> {
        let board = snapshot.to_board()?;
        let mut session = Self::from_board(board, snapshot.score, rng);
        session.moves = snapshot.moves;
        session.episode_id = snapshot.episode_id;
        Ok(session)
    }

    fn reset_board(&mut self) {
        let mut board = self.board.cleared();
        for _ in 0..INITIAL_TILES {
            board = spawn_tile(&board, &mut self.rng).board;
        }
        self.board = board;
    }

    /// Submit one move.
    ///
    /// Terminal sessions reject the move; moves that change nothing are
    /// ignored. Either way the session is left untouched.
    pub fn submit_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            tracing::debug!(%direction, status = %self.status, "move rejected");
            return MoveOutcome::unchanged(self.status, true);
        }

        let result = apply_move(&self.board, direction);
        if !result.moved {
            return MoveOutcome::unchanged(self.status, false);
        }

        let spawn = spawn_tile(&result.board, &mut self.rng);
        self.board = spawn.board;
        self.score += result.score_delta;
        self.moves = self.moves.wrapping_add(1);
        self.status = classify(&self.board, self.win_tile);

        tracing::debug!(
            %direction,
            score_delta = result.score_delta,
            score = self.score,
            "move applied"
        );
        if self.status.is_terminal() {
            tracing::info!(
                status = %self.status,
                score = self.score,
                moves = self.moves,
                max_tile = self.board.max_tile(),
                "session finished"
            );
        }

        MoveOutcome {
            moved: true,
            rejected: false,
            score_delta: result.score_delta,
            spawned: spawn.tile,
            status: self.status,
        }
    }

    /// Start a new episode on the same grid size: fresh board, score 0,
    /// status `Playing`.
    pub fn restart(&mut self) {
        self.reset_board();
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        tracing::debug!(episode_id = self.episode_id, "session restarted");
    }
}

impl<R> GameSession<R> {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid_size: self.board.size(),
            board: self.board.to_rows(),
            score: self.score,
            status: self.status,
            win_tile: self.win_tile,
            max_tile: self.board.max_tile(),
            moves: self.moves,
            episode_id: self.episode_id,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid_size(&self) -> u8 {
        self.board.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn win_tile(&self) -> u32 {
        self.win_tile
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Create a session seeded from the thread-local generator.
///
/// Use [`GameSession::new`] or [`GameSession::with_rng`] for reproducible
/// games.
pub fn new_session(grid_size: u8) -> Result<GameSession, EngineError> {
    GameSession::new(grid_size, rand::random())
}

/// Submit a move to `session`; see [`GameSession::submit_move`]
pub fn submit_move<R: RandomSource>(
    session: &mut GameSession<R>,
    direction: Direction,
) -> MoveOutcome {
    session.submit_move(direction)
}

/// Restart `session` on its grid size; see [`GameSession::restart`]
pub fn restart<R: RandomSource>(session: &mut GameSession<R>) {
    session.restart();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn stuck_board() -> Board {
        Board::from_rows(&[
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(4, 12345).unwrap();
        assert_eq!(session.grid_size(), 4);
        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.win_tile(), 2048);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.episode_id(), 0);
    }

    #[test]
    fn test_new_session_rejects_bad_size() {
        assert!(matches!(
            GameSession::new(3, 1),
            Err(EngineError::InvalidGridSize { size: 3 })
        ));
        assert!(GameSession::from_config(&SessionConfig::new(9, 1)).is_err());
        assert!(new_session(10).is_err());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::new(5, 77).unwrap();
        let mut b = GameSession::new(5, 77).unwrap();
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
            assert_eq!(a.submit_move(dir), b.submit_move(dir));
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_no_op_move_leaves_state_untouched() {
        let board = Board::from_rows(&[
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let mut session = GameSession::from_board(board.clone(), 10, ScriptedRng::new(vec![0.0]));

        let outcome = session.submit_move(Direction::Left);
        assert!(!outcome.moved);
        assert!(!outcome.rejected);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.spawned, None);
        assert_eq!(session.board(), &board);
        assert_eq!(session.score(), 10);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.rng().draws(), 0);
    }

    #[test]
    fn test_accepted_move_spawns_and_scores() {
        let board = Board::from_rows(&[
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let rng = ScriptedRng::new(vec![0.0, ScriptedRng::TWO]);
        let mut session = GameSession::from_board(board, 0, rng);

        let outcome = session.submit_move(Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4);
        // First empty cell after the move is (0, 1)
        assert_eq!(
            outcome.spawned,
            Some(SpawnedTile {
                row: 0,
                col: 1,
                value: 2
            })
        );
        assert_eq!(session.board().row(0), &[4, 2, 0, 0]);
        assert_eq!(session.score(), 4);
        assert_eq!(session.moves(), 1);
        assert_eq!(outcome.status, GameStatus::Playing);
    }

    #[test]
    fn test_reaching_win_tile_wins() {
        let board = Board::from_rows(&[
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let mut session = GameSession::from_board(board, 0, SimpleRng::new(1));
        let outcome = session.submit_move(Direction::Left);
        assert_eq!(outcome.score_delta, 2048);
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_filling_last_cell_without_pairs_loses() {
        // Moving right shifts the top row; the spawn fills (0, 0) with a 4,
        // leaving a checkerboard.
        let board = Board::from_rows(&[
            [2, 4, 2, 0],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
        ])
        .unwrap();
        let rng = ScriptedRng::new(vec![0.0, ScriptedRng::FOUR]);
        let mut session = GameSession::from_board(board, 0, rng);
        let outcome = session.submit_move(Direction::Right);
        assert!(outcome.moved);
        assert_eq!(session.board().row(0), &[4, 2, 4, 2]);
        assert_eq!(outcome.status, GameStatus::Lost);
    }

    #[test]
    fn test_terminal_session_rejects_moves() {
        let mut session = GameSession::from_board(stuck_board(), 50, SimpleRng::new(1));
        assert_eq!(session.status(), GameStatus::Lost);

        for dir in Direction::ALL {
            let outcome = session.submit_move(dir);
            assert!(outcome.rejected);
            assert!(!outcome.moved);
        }
        assert_eq!(session.board(), &stuck_board());
        assert_eq!(session.score(), 50);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = GameSession::from_board(stuck_board(), 50, SimpleRng::new(1));
        session.restart();

        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.grid_size(), 4);
        assert_eq!(session.board().tile_count(), 2);

        restart(&mut session);
        assert_eq!(session.episode_id(), 2);
    }

    #[test]
    fn test_free_function_facade() {
        let mut session = new_session(6).unwrap();
        assert_eq!(session.win_tile(), 8192);
        let before = session.board().clone();
        let outcome = submit_move(&mut session, Direction::Down);
        if outcome.moved {
            assert_ne!(session.board(), &before);
        } else {
            assert_eq!(session.board(), &before);
        }
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut session = GameSession::new(4, 9).unwrap();
        session.submit_move(Direction::Left);
        session.submit_move(Direction::Up);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.grid_size, 4);
        assert_eq!(snapshot.score, session.score());
        assert_eq!(snapshot.max_tile, session.board().max_tile());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);

        let resumed = GameSession::from_snapshot(&back, SimpleRng::new(1)).unwrap();
        assert_eq!(resumed.board(), session.board());
        assert_eq!(resumed.moves(), session.moves());
        assert_eq!(resumed.status(), session.status());
    }

    #[test]
    fn test_snapshot_with_mismatched_size_is_rejected() {
        let mut snapshot = GameSession::new(4, 1).unwrap().snapshot();
        snapshot.grid_size = 5;
        assert_eq!(
            GameSession::from_snapshot(&snapshot, SimpleRng::new(1)).unwrap_err(),
            EngineError::GridSizeMismatch {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn test_full_board_with_merge_moves_without_spawn_room() {
        let mut session = GameSession::from_board(stuck_board(), 0, ScriptedRng::new(vec![0.0]));
        session.status = GameStatus::Playing;
        session.board_mut().set(0, 1, 2);
        // Row 0 is now [2, 2, 2, 4]: left merges the first pair and frees a cell.
        let outcome = session.submit_move(Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4);
        assert!(outcome.spawned.is_some());
        assert!(session.board().is_full());
    }
}
