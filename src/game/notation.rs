//! Coordinate notation
//!
//! Moves are typed as origin and destination squares, `e2e4`, with an
//! optional promotion letter, `e7e8n`. A dash between the squares is
//! accepted. Played moves are written back in a long form such as `Ng1-f3`,
//! `Qd8xh4#`, `e7-e8=Q` or `O-O`.

use crate::core::{CoreError, CoreResult};
use chess_engine::{MoveRecord, PieceKind, Square};

/// A move as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Parse a square name such as `e4`
pub fn parse_square(text: &str) -> CoreResult<Square> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoreError::invalid_input(format!("'{}' is not a square", text)));
    };
    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(CoreError::invalid_input(format!("'{}' is not a square", text)));
    }
    Square::new(file as u8 - b'a', rank as u8 - b'1')
        .ok_or_else(|| CoreError::invalid_input(format!("'{}' is off the board", text)))
}

/// Promotion piece for a letter, either case
pub fn promotion_from_letter(letter: char) -> Option<PieceKind> {
    match letter.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

/// Parse `e2e4`, `e2-e4` or `e7e8q`
pub fn parse_move(text: &str) -> CoreResult<ParsedMove> {
    let compact: String = text.chars().filter(|c| *c != '-').collect();
    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return Err(CoreError::invalid_input(format!("'{}' is not a move", text)));
    }
    let from = parse_square(&compact[0..2])?;
    let to = parse_square(&compact[2..4])?;
    let promotion = match compact[4..].chars().next() {
        None => None,
        Some(letter) => Some(promotion_from_letter(letter).ok_or_else(|| {
            CoreError::invalid_input(format!("'{}' is not a promotion piece", letter))
        })?),
    };
    Ok(ParsedMove {
        from,
        to,
        promotion,
    })
}

/// Long-form text of a played move
pub fn format_move(record: &MoveRecord) -> String {
    let suffix = if record.is_checkmate {
        "#"
    } else if record.is_check {
        "+"
    } else {
        ""
    };

    if record.is_castling {
        let castle = if record.to.file() > record.from.file() {
            "O-O"
        } else {
            "O-O-O"
        };
        return format!("{}{}", castle, suffix);
    }

    let piece = match record.piece_kind {
        PieceKind::Pawn => String::new(),
        kind => kind.letter().to_string(),
    };
    let separator = if record.captured.is_some() { 'x' } else { '-' };
    let promotion = record
        .promotion
        .map(|kind| format!("={}", kind.letter()))
        .unwrap_or_default();
    let en_passant = if record.is_en_passant { " e.p." } else { "" };

    format!(
        "{}{}{}{}{}{}{}",
        piece, record.from, separator, record.to, promotion, en_passant, suffix
    )
}
