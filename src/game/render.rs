//! Text board rendering
//!
//! Draws a position as an 8x8 grid with White at the bottom. Uppercase
//! letters are White, lowercase Black, `.` an empty square. The squares of
//! the last move are bracketed `[ ]` and a king in check is shown as `<K>`.

use chess_engine::{Board, Color, Piece, Square};

/// Letter for a piece, uppercase for White
pub fn piece_symbol(piece: &Piece) -> char {
    let letter = piece.kind().letter();
    match piece.color() {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

/// Render `board` with optional last-move and check markers
pub fn render_board(
    board: &Board,
    last_move: Option<(Square, Square)>,
    checked_king: Option<Square>,
) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8u8 {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            let symbol = board.piece_at(square).map(piece_symbol).unwrap_or('.');
            let highlighted =
                last_move.is_some_and(|(from, to)| square == from || square == to);

            let cell = if checked_king == Some(square) {
                format!("<{}>", symbol)
            } else if highlighted {
                format!("[{}]", symbol)
            } else {
                format!(" {} ", symbol)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}
