//! Rules fixtures played through the public engine API
//!
//! Each test sets up a position, plays moves with `request_move` exactly as a
//! caller would, and checks the reported events and game status.

use chess_engine::{
    game_from_board, legal_targets, new_game, request_move, Board, ChessEngineError, Color,
    EngineConfig, Game, GameStatus, MoveRequest, MoveResult, PieceKind, Rejection, Square,
};

fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    Square::new(bytes[0] - b'a', bytes[1] - b'1').unwrap()
}

fn setup(pieces: &[(Color, PieceKind, &str)], to_move: Color) -> Game {
    let mut board = Board::empty();
    for &(color, kind, name) in pieces {
        board.place(color, kind, sq(name));
    }
    game_from_board(board, to_move, EngineConfig::default()).unwrap()
}

fn play_with(game: &mut Game, from: &str, to: &str, promotion: Option<PieceKind>) -> MoveResult {
    let piece_id = game.board().piece_at(sq(from)).unwrap().id();
    request_move(
        game,
        MoveRequest {
            piece_id,
            from: sq(from),
            to: sq(to),
            promotion,
        },
    )
    .unwrap()
}

fn play(game: &mut Game, from: &str, to: &str) -> MoveResult {
    play_with(game, from, to, None)
}

fn play_line(game: &mut Game, line: &[(&str, &str)]) {
    for &(from, to) in line {
        let result = play(game, from, to);
        assert!(result.valid_move, "{from}{to} should be legal: {:?}", result.rejection);
    }
}

// ============================================================================
// Checkmate and stalemate
// ============================================================================

#[test]
fn test_back_rank_checkmate() {
    //! Rook to the eighth rank behind an unmoved pawn shield
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "g1"),
            (Color::White, PieceKind::Rook, "a1"),
            (Color::Black, PieceKind::King, "g8"),
            (Color::Black, PieceKind::Pawn, "f7"),
            (Color::Black, PieceKind::Pawn, "g7"),
            (Color::Black, PieceKind::Pawn, "h7"),
        ],
        Color::White,
    );

    let result = play(&mut game, "a1", "a8");
    assert!(result.valid_move);
    assert!(result.check);
    assert_eq!(result.status, GameStatus::Checkmate { winner: Color::White });
    assert_eq!(result.status.winner(), Some(Color::White));
    assert!(game.status().is_game_over());
}

#[test]
fn test_corner_stalemate() {
    //! Queen to g6 leaves the h8 king without a move or a check
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "a1"),
            (Color::White, PieceKind::Queen, "f5"),
            (Color::Black, PieceKind::King, "h8"),
        ],
        Color::White,
    );

    let result = play(&mut game, "f5", "g6");
    assert!(result.valid_move);
    assert!(!result.check);
    assert_eq!(result.status, GameStatus::Stalemate);
    assert!(result.status.is_draw());
}

// ============================================================================
// En passant
// ============================================================================

#[test]
fn test_en_passant_captures_passed_pawn() {
    //! exd6 right after ...d5 removes the pawn on d5
    let mut game = new_game();
    play_line(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);

    let result = play(&mut game, "e5", "d6");
    assert!(result.valid_move);
    assert!(result.en_passant_event);
    assert_eq!(result.captured.map(|p| p.kind()), Some(PieceKind::Pawn));
    assert!(result.board.piece_at(sq("d5")).is_none());
    assert_eq!(result.board.remaining().black.len(), 15);
}

#[test]
fn test_en_passant_window_is_one_ply() {
    //! Waiting a move forfeits the capture
    let mut game = new_game();
    play_line(
        &mut game,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5"), ("h2", "h3"), ("a6", "a5")],
    );

    let result = play(&mut game, "e5", "d6");
    assert!(!result.valid_move);
    assert_eq!(result.rejection, Some(Rejection::IllegalTarget));
}

// ============================================================================
// Castling
// ============================================================================

fn castling_setup() -> Game {
    setup(
        &[
            (Color::White, PieceKind::King, "e1"),
            (Color::White, PieceKind::Rook, "a1"),
            (Color::White, PieceKind::Rook, "h1"),
            (Color::Black, PieceKind::King, "e8"),
        ],
        Color::White,
    )
}

#[test]
fn test_castling_kingside() {
    //! King and rook land on g1 and f1
    let mut game = castling_setup();
    let result = play(&mut game, "e1", "g1");
    assert!(result.castle_event);
    assert_eq!(result.board.piece_at(sq("f1")).map(|p| p.kind()), Some(PieceKind::Rook));
    assert!(game.last_move().unwrap().is_castling);
}

#[test]
fn test_king_move_loses_castling_for_good() {
    //! Walking the king out and back does not restore castling
    let mut game = castling_setup();
    play_line(&mut game, &[("e1", "e2"), ("e8", "e7"), ("e2", "e1"), ("e7", "e8")]);

    assert_eq!(play(&mut game, "e1", "g1").rejection, Some(Rejection::IllegalTarget));
    assert_eq!(play(&mut game, "e1", "c1").rejection, Some(Rejection::IllegalTarget));
}

#[test]
fn test_rook_move_loses_castling_on_that_wing() {
    //! The h-rook's trip costs the short castle only
    let mut game = castling_setup();
    play_line(&mut game, &[("h1", "h2"), ("e8", "e7"), ("h2", "h1"), ("e7", "e8")]);

    assert_eq!(play(&mut game, "e1", "g1").rejection, Some(Rejection::IllegalTarget));
    let long = play(&mut game, "e1", "c1");
    assert!(long.valid_move);
    assert!(long.castle_event);
    assert_eq!(long.board.piece_at(sq("d1")).map(|p| p.kind()), Some(PieceKind::Rook));
}

// ============================================================================
// Pins and discovered check
// ============================================================================

#[test]
fn test_pinned_knight_cannot_move() {
    //! Moving a pinned knight would expose the king
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "e1"),
            (Color::White, PieceKind::Knight, "e2"),
            (Color::Black, PieceKind::Queen, "e7"),
            (Color::Black, PieceKind::King, "a8"),
        ],
        Color::White,
    );

    let knight = game.board().piece_at(sq("e2")).unwrap().id();
    assert!(legal_targets(&game, knight).unwrap().is_empty());
    assert_eq!(play(&mut game, "e2", "c3").rejection, Some(Rejection::IllegalTarget));
}

#[test]
fn test_discovered_check() {
    //! Moving the bishop off the file checks with the rook behind it
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "a1"),
            (Color::White, PieceKind::Rook, "e1"),
            (Color::White, PieceKind::Bishop, "e4"),
            (Color::Black, PieceKind::King, "e8"),
            (Color::Black, PieceKind::Pawn, "a7"),
        ],
        Color::White,
    );

    let result = play(&mut game, "e4", "b7");
    assert!(result.valid_move);
    assert!(result.check);
    assert_eq!(result.status, GameStatus::Ongoing);
    assert!(game.last_move().unwrap().is_check);
}

// ============================================================================
// Draws
// ============================================================================

#[test]
fn test_capture_into_insufficient_material() {
    //! Knight takes the last pawn: K+N v K
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "e1"),
            (Color::White, PieceKind::Knight, "c3"),
            (Color::Black, PieceKind::King, "e8"),
            (Color::Black, PieceKind::Pawn, "d5"),
        ],
        Color::White,
    );

    let result = play(&mut game, "c3", "d5");
    assert_eq!(result.status, GameStatus::InsufficientMaterial);
}

#[test]
fn test_rook_is_sufficient() {
    //! K+R v K plays on
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "e1"),
            (Color::White, PieceKind::Rook, "a1"),
            (Color::Black, PieceKind::King, "e8"),
        ],
        Color::White,
    );
    assert_eq!(play(&mut game, "a1", "a2").status, GameStatus::Ongoing);
}

#[test]
fn test_threefold_repetition_on_third_occurrence() {
    //! Knights out and back twice repeats the start a third time
    let dance = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    let mut game = new_game();

    play_line(&mut game, &dance);
    assert_eq!(game.status(), GameStatus::Ongoing, "second occurrence");

    play_line(&mut game, &dance[..3]);
    let result = play(&mut game, "f6", "g8");
    assert_eq!(result.status, GameStatus::ThreefoldRepetition);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_threefold_can_be_switched_off() {
    let dance = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    let config = EngineConfig {
        claim_threefold: false,
        ..EngineConfig::default()
    };
    let mut game = game_from_board(Board::standard(), Color::White, config).unwrap();
    play_line(&mut game, &dance);
    play_line(&mut game, &dance);
    assert_eq!(game.status(), GameStatus::Ongoing);
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_underpromotion_replaces_pawn() {
    //! bxa8=N: new knight, pawn gone from the board and from generation
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "e1"),
            (Color::White, PieceKind::Pawn, "b7"),
            (Color::Black, PieceKind::King, "h8"),
            (Color::Black, PieceKind::Rook, "a8"),
        ],
        Color::White,
    );
    let pawn = game.board().piece_at(sq("b7")).unwrap().id();

    let result = play_with(&mut game, "b7", "a8", Some(PieceKind::Knight));
    assert!(result.valid_move);
    assert_eq!(result.promotion_event, Some(PieceKind::Knight));
    assert_eq!(result.captured.map(|p| p.kind()), Some(PieceKind::Rook));

    let knight = result.board.piece_at(sq("a8")).unwrap();
    assert_eq!(knight.kind(), PieceKind::Knight);
    assert_ne!(knight.id(), pawn);
    assert!(!result.board.remaining().white.contains(&pawn));
    assert_eq!(
        legal_targets(&game, pawn),
        Err(ChessEngineError::PieceNotFound { id: pawn })
    );
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut game = setup(
        &[
            (Color::White, PieceKind::King, "e1"),
            (Color::White, PieceKind::Pawn, "b7"),
            (Color::Black, PieceKind::King, "h7"),
        ],
        Color::White,
    );
    let result = play(&mut game, "b7", "b8");
    assert_eq!(result.promotion_event, Some(PieceKind::Queen));
    assert_eq!(game.last_move().unwrap().promotion, Some(PieceKind::Queen));
}

// ============================================================================
// History review
// ============================================================================

#[test]
fn test_history_review_does_not_change_game() {
    //! Stepping back shows the old position and blocks moves until return
    let mut game = new_game();
    play_line(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    let latest = game.board().clone();

    assert!(game.history_mut().step_back());
    assert_eq!(game.history().viewed().piece_at(sq("e7")).map(|p| p.kind()), Some(PieceKind::Pawn));
    assert_eq!(game.board(), &latest);
    assert_eq!(play(&mut game, "g1", "f3").rejection, Some(Rejection::StalePosition));

    game.history_mut().jump_to_latest();
    assert!(play(&mut game, "g1", "f3").valid_move);
}
