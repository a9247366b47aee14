//! Game state queries and AI move generation

use super::game::Game;
use super::moves::{request_move, MoveRequest, MoveResult};
use crate::ai::select_move;
use crate::error::ChessEngineResult;
use crate::move_gen::is_in_check;
use crate::status::GameStatus;
use crate::types::PieceKind;
use rand::Rng;
use tracing::info;

/// Current game state
pub fn game_status(game: &Game) -> GameStatus {
    game.status()
}

/// Is the side on move in check
pub fn is_check(game: &Game) -> ChessEngineResult<bool> {
    is_in_check(game.board(), game.side_to_move())
}

/// Let the automated opponent play for the side on move
///
/// Returns `Ok(None)` when the game is over or the side has nothing to play.
/// The opponent always promotes to a queen.
///
/// # Arguments
///
/// * `game` - The game state
/// * `rng` - Source of randomness for breaking ties between equal moves
pub fn reply<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> ChessEngineResult<Option<MoveResult>> {
    if game.status().is_game_over() || !game.history().is_at_latest() {
        return Ok(None);
    }
    let side = game.side_to_move();
    let Some(choice) = select_move(game.board(), side, rng)? else {
        return Ok(None);
    };
    info!("[AI] {} replies {} -> {}", side, choice.from, choice.to);
    let result = request_move(
        game,
        MoveRequest {
            piece_id: choice.piece_id,
            from: choice.from,
            to: choice.to,
            promotion: Some(PieceKind::Queen),
        },
    )?;
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::super::new_game;
    use super::*;
    use crate::types::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reply_plays_for_side_on_move() {
        //! One valid move, turn passes back
        let mut game = new_game();
        let mut rng = StdRng::seed_from_u64(3);
        let result = reply(&mut game, &mut rng).unwrap().unwrap();
        assert!(result.valid_move);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().ply(), 1);
    }

    #[test]
    fn test_reply_is_deterministic_for_a_seed() {
        //! Same seed, same game
        let play = |seed| {
            let mut game = new_game();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..6 {
                reply(&mut game, &mut rng).unwrap();
            }
            game
        };
        assert_eq!(play(9), play(9));
    }

    #[test]
    fn test_no_reply_while_reviewing() {
        let mut game = new_game();
        let mut rng = StdRng::seed_from_u64(0);
        reply(&mut game, &mut rng).unwrap();
        game.history_mut().step_back();
        assert!(reply(&mut game, &mut rng).unwrap().is_none());
        assert!(!is_check(&game).unwrap());
        assert_eq!(game_status(&game), GameStatus::Ongoing);
    }
}
