//! Knight move generation
//!
//! Knights jump in an L-shape and ignore anything in between. Up to eight
//! destinations, fewer near the edges; never onto a square held by their own
//! side.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Piece, Square};

pub fn generate_knight_targets(board: &Board, knight: &Piece, targets: &mut Vec<Square>) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(dest) = knight.square().offset(df, dr) {
            match board.piece_at(dest) {
                Some(occupant) if occupant.color() == knight.color() => {}
                _ => targets.push(dest),
            }
        }
    }
}

pub fn knight_attacks(knight: &Piece, targets: &mut Vec<Square>) {
    targets.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| knight.square().offset(df, dr)),
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_knight_in_corner() {
        //! Two jumps from a1
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::Knight, sq("a1"));
        let mut targets = Vec::new();
        generate_knight_targets(&board, board.piece_at(sq("a1")).unwrap(), &mut targets);
        assert_eq!(sorted(targets), squares(&["b3", "c2"]));
    }

    #[test]
    fn test_knight_skips_own_pieces() {
        //! Starting knights only have the two forward jumps
        let board = Board::standard();
        let mut targets = Vec::new();
        generate_knight_targets(&board, board.piece_at(sq("b1")).unwrap(), &mut targets);
        assert_eq!(sorted(targets), squares(&["a3", "c3"]));
    }
}
