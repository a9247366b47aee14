//! Board representation and piece bookkeeping
//!
//! The board owns every piece by value in an 8x8 grid indexed `[rank][file]`.
//! A piece is "remaining" exactly when it occupies a square, so removing it
//! from the grid is all it takes to drop it from move generation.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Piece layout used for repetition, ignoring ids and rights
pub type Placement = [[Option<(Color, PieceKind)>; 8]; 8];

/// Ids of the pieces still on the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemainingPieces {
    pub white: Vec<PieceId>,
    pub black: Vec<PieceId>,
    pub all: Vec<PieceId>,
}

impl RemainingPieces {
    pub fn of(&self, color: Color) -> &[PieceId] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// A chess position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    next_id: u32,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            next_id: 0,
        }
    }

    /// The standard starting position
    ///
    /// Ids are handed out rank by rank from a1, so White's pieces are 0..16
    /// and Black's are 16..32.
    pub fn standard() -> Board {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let (first, second) = match color {
                Color::White => (color.home_rank(), color.pawn_rank()),
                Color::Black => (color.pawn_rank(), color.home_rank()),
            };
            for rank in [first, second] {
                for file in 0..8u8 {
                    let kind = if rank == color.pawn_rank() {
                        PieceKind::Pawn
                    } else {
                        BACK_RANK[file as usize]
                    };
                    if let Some(square) = Square::new(file, rank) {
                        board.place(color, kind, square);
                    }
                }
            }
        }
        board
    }

    /// Put a new piece on `square`, replacing any occupant
    ///
    /// The piece's rights are derived from the square it lands on (see
    /// [`Piece::new`]).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut board = Board::empty();
    /// let king = board.place(Color::White, PieceKind::King, e1);
    /// assert!(board.piece(king).unwrap().castling_available());
    /// ```
    pub fn place(&mut self, color: Color, kind: PieceKind, square: Square) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        *self.slot_mut(square) = Some(Piece::new(id, color, kind, square));
        id
    }

    /// Take the piece off `square`
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.slot_mut(square).take()
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.rank() as usize][square.file() as usize].as_ref()
    }

    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.slot_mut(square).as_mut()
    }

    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.grid[square.rank() as usize][square.file() as usize]
    }

    /// Is `square` empty
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Look a piece up by id
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id() == id)
    }

    /// Every piece on the board, rank by rank from a1
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().filter_map(Option::as_ref)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color() == color)
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.grid.iter_mut().flatten().filter_map(Option::as_mut)
    }

    /// Sweep the grid for the pieces still in play
    pub fn remaining(&self) -> RemainingPieces {
        let mut remaining = RemainingPieces::default();
        for piece in self.pieces() {
            match piece.color() {
                Color::White => remaining.white.push(piece.id()),
                Color::Black => remaining.black.push(piece.id()),
            }
            remaining.all.push(piece.id());
        }
        remaining
    }

    /// Find the king of `color`
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::KingNotFound`] if that side has no king,
    /// which only happens for hand-built positions.
    pub fn king(&self, color: Color) -> ChessEngineResult<&Piece> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .ok_or(ChessEngineError::KingNotFound { color })
    }

    /// Snapshot of colors and kinds per square
    pub fn placement(&self) -> Placement {
        let mut placement: Placement = [[None; 8]; 8];
        for piece in self.pieces() {
            let sq = piece.square();
            placement[sq.rank() as usize][sq.file() as usize] = Some((piece.color(), piece.kind()));
        }
        placement
    }

    /// Move whatever stands on `from` to `to`
    ///
    /// Updates the piece's recorded square and returns the piece that was
    /// overwritten on `to`, if any. No legality checks and no rights
    /// bookkeeping; see [`crate::moves::apply_move`] for full move handling.
    pub fn apply_raw_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut moving = self.remove(from)?;
        moving.set_square(to);
        self.slot_mut(to).replace(moving)
    }

    /// Swap the piece on `square` for a fresh one of `kind`, keeping its color
    pub(crate) fn replace_kind(&mut self, square: Square, kind: PieceKind) -> Option<PieceId> {
        let color = self.piece_at(square)?.color();
        Some(self.place(color, kind, square))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        let bytes = name.as_bytes();
        Square::new(bytes[0] - b'a', bytes[1] - b'1').unwrap()
    }

    #[test]
    fn test_standard_position() {
        //! 32 pieces, kings on e1/e8, all rights intact
        let board = Board::standard();
        let remaining = board.remaining();

        assert_eq!(remaining.white.len(), 16);
        assert_eq!(remaining.black.len(), 16);
        assert_eq!(remaining.all.len(), 32);
        assert_eq!(remaining.of(Color::White), remaining.white.as_slice());
        assert_eq!(remaining.of(Color::Black), remaining.black.as_slice());

        let white_king = board.king(Color::White).unwrap();
        assert_eq!(white_king.square(), sq("e1"));
        assert!(white_king.castling_available());
        assert_eq!(board.king(Color::Black).unwrap().square(), sq("e8"));

        assert_eq!(board.piece_at(sq("d1")).map(Piece::kind), Some(PieceKind::Queen));
        assert_eq!(board.piece_at(sq("g8")).map(Piece::kind), Some(PieceKind::Knight));
        assert!(board.piece_at(sq("a7")).unwrap().move_two_available());
        assert!(!board.piece_at(sq("h8")).unwrap().has_moved());
    }

    #[test]
    fn test_ids_are_unique() {
        //! Every piece gets its own id, including ones placed later
        let mut board = Board::standard();
        let extra = board.place(Color::White, PieceKind::Queen, sq("e4"));
        let mut ids = board.remaining().all;
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 33);
        assert!(board.piece(extra).is_some());
    }

    #[test]
    fn test_apply_raw_move_returns_overwritten() {
        //! The captured piece comes back and leaves the board
        let mut board = Board::empty();
        let rook = board.place(Color::White, PieceKind::Rook, sq("a1"));
        let knight = board.place(Color::Black, PieceKind::Knight, sq("a8"));

        let captured = board.apply_raw_move(sq("a1"), sq("a8"));

        assert_eq!(captured.map(|p| p.id()), Some(knight));
        assert!(board.is_empty(sq("a1")));
        assert_eq!(board.piece(rook).unwrap().square(), sq("a8"));
        assert!(board.piece(knight).is_none());
        assert_eq!(board.remaining().black.len(), 0);
    }

    #[test]
    fn test_missing_king_is_an_error() {
        //! King lookup reports which side is missing
        let mut board = Board::empty();
        board.place(Color::White, PieceKind::King, sq("e1"));
        assert!(board.king(Color::White).is_ok());
        assert_eq!(
            board.king(Color::Black),
            Err(ChessEngineError::KingNotFound { color: Color::Black })
        );
    }

    #[test]
    fn test_placement_ignores_identity() {
        //! Same layout built in a different order gives the same placement
        let mut a = Board::empty();
        a.place(Color::White, PieceKind::King, sq("e1"));
        a.place(Color::Black, PieceKind::King, sq("e8"));

        let mut b = Board::empty();
        b.place(Color::Black, PieceKind::King, sq("e8"));
        b.place(Color::White, PieceKind::Queen, sq("d1"));
        b.remove(sq("d1"));
        b.place(Color::White, PieceKind::King, sq("e1"));

        assert_ne!(a, b);
        assert_eq!(a.placement(), b.placement());
    }

    #[test]
    fn test_board_serializes() {
        //! Boards round-trip through JSON for persistence by callers
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
