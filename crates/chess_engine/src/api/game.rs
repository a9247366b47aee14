//! Game lifecycle management
//!
//! A [`Game`] is the authoritative state: the position history, whose turn it
//! is, the current status and the rules configuration. Only
//! [`super::request_move`] advances it.

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::history::{GameHistory, MoveRecord};
use crate::move_gen::is_in_check;
use crate::status::{classify, GameStatus};
use crate::types::{Color, PieceKind};
use tracing::info;

/// A game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: GameHistory,
    pub(crate) first_to_move: Color,
    pub(crate) status: GameStatus,
    pub(crate) config: EngineConfig,
}

impl Game {
    /// The current position
    pub fn board(&self) -> &Board {
        self.history.latest()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// History for navigation; the cursor can move, the entries cannot change
    pub fn history_mut(&mut self) -> &mut GameHistory {
        &mut self.history
    }

    /// Side to move in the current position
    pub fn side_to_move(&self) -> Color {
        self.side_to_move_at(self.history.latest_index())
    }

    /// Side to move at history entry `index`
    pub fn side_to_move_at(&self, index: usize) -> Color {
        if index % 2 == 0 {
            self.first_to_move
        } else {
            self.first_to_move.opposite()
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last_record()
    }
}

/// Create a new game with the standard starting position
pub fn new_game() -> Game {
    new_game_with(EngineConfig::default())
}

/// Create a new game from the starting position with custom rules options
pub fn new_game_with(config: EngineConfig) -> Game {
    Game {
        history: GameHistory::new(Board::standard()),
        first_to_move: Color::White,
        status: GameStatus::Ongoing,
        config,
    }
}

/// Start a game from an arbitrary position
///
/// The position is classified straight away, so a setup that is already mate
/// or stalemate produces a finished game.
///
/// # Errors
///
/// [`ChessEngineError::InvalidSetup`] unless each side has exactly one king
/// and the side not on move is out of check.
///
/// # Examples
///
/// ```rust,ignore
/// let mut board = Board::empty();
/// board.place(Color::White, PieceKind::King, e1);
/// board.place(Color::Black, PieceKind::King, e8);
/// let game = game_from_board(board, Color::White, EngineConfig::default())?;
/// assert_eq!(game.status(), GameStatus::InsufficientMaterial);
/// ```
pub fn game_from_board(
    board: Board,
    side_to_move: Color,
    config: EngineConfig,
) -> ChessEngineResult<Game> {
    for color in Color::BOTH {
        let kings = board
            .pieces_of(color)
            .filter(|p| p.kind() == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(ChessEngineError::InvalidSetup {
                message: format!("{} has {} kings, expected 1", color, kings),
            });
        }
    }
    if is_in_check(&board, side_to_move.opposite())? {
        return Err(ChessEngineError::InvalidSetup {
            message: format!("{} is in check but not on move", side_to_move.opposite()),
        });
    }

    let history = GameHistory::new(board);
    let status = classify(&history, side_to_move, &config)?;
    if status.is_game_over() {
        info!("[ENGINE] Game set up already finished: {}", status);
    }
    Ok(Game {
        history,
        first_to_move: side_to_move,
        status,
        config,
    })
}

/// Reset the game to the starting position, keeping its configuration
pub fn reset_game(game: &mut Game) {
    *game = new_game_with(game.config);
}
