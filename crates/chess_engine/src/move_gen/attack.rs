//! Attack detection and check queries
//!
//! To decide whether a square is attacked we walk every piece of the attacking
//! color and ask whether its attack geometry reaches the square. This is the
//! check detector for the whole engine: legality, castling and game-end
//! classification all come through here.

use super::attack_targets;
use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::types::{Color, Square};

/// Is `square` attacked by any piece of color `by`
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by Black?
/// let attacked = is_square_attacked(&board, e4, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|piece| attack_targets(board, piece).contains(&square))
}

/// Is the king of `color` attacked
///
/// # Errors
///
/// [`crate::ChessEngineError::KingNotFound`] if `color` has no king.
pub fn is_in_check(board: &Board, color: Color) -> ChessEngineResult<bool> {
    let king = board.king(color)?;
    Ok(is_square_attacked(board, king.square(), color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        //! A pawn does not attack the square in front of it
        let mut board = Board::empty();
        board.place(Color::Black, PieceKind::Pawn, sq("e5"));
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(is_square_attacked(&board, sq("f4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e4"), Color::Black));
    }

    #[test]
    fn test_blocked_slider_does_not_attack() {
        //! A piece in the way shields the square behind it
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::King, sq("e1"));
        board.place(Color::Black, PieceKind::Rook, sq("e8"));
        assert!(is_in_check(&board, Color::White).unwrap());

        board.place(Color::White, PieceKind::Bishop, sq("e2"));
        assert!(!is_in_check(&board, Color::White).unwrap());
    }

    #[test]
    fn test_check_without_king_is_error() {
        //! Asking about a missing king is structural
        let board = Board::empty();
        assert!(is_in_check(&board, Color::Black).is_err());
    }

    #[test]
    fn test_starting_position_not_in_check() {
        let board = Board::standard();
        assert!(!is_in_check(&board, Color::White).unwrap());
        assert!(!is_in_check(&board, Color::Black).unwrap());
    }
}
