//! Interactive game session
//!
//! A [`Session`] owns one engine [`Game`], the player's [`GameSettings`] and
//! the random source used by the computer opponent. Each line the player
//! types becomes a [`Command`]; executing it yields an [`Outcome`] for the
//! front end to print, along with a [`MoveCue`] and whether the computer
//! should answer next.
//!
//! The session never sleeps or reads input itself. The front end waits the
//! configured reply delay and then calls [`Session::play_computer`].

use super::cues::{cue_for, MoveCue};
use super::notation::{format_move, parse_move, parse_square, ParsedMove};
use super::render::render_board;
use crate::core::{CoreError, CoreResult, GameSettings};
use chess_engine::move_gen::is_in_check;
use chess_engine::{
    legal_targets, new_game_with, reply, request_move, reset_game, Color, Game, MoveRequest,
    MoveResult, Square,
};
use rand::Rng;
use tracing::{debug, info};

const HELP: &[&str] = &[
    "Commands:",
    "  e2e4, e7e8n   move a piece, optional promotion letter (q, r, b, n)",
    "  hints e2      list where the piece on e2 can go",
    "  back          view the previous position",
    "  forward       view the next position",
    "  latest        return to the current position",
    "  history       list the moves played",
    "  board         show the board",
    "  new           start a new game",
    "  help          show this list",
    "  quit          leave",
];

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(ParsedMove),
    Hints(Square),
    Back,
    Forward,
    Latest,
    History,
    Board,
    New,
    Help,
    Quit,
}

/// Parse a line of player input
pub fn parse_command(line: &str) -> CoreResult<Command> {
    let line = line.trim().to_ascii_lowercase();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err(CoreError::invalid_input("empty command"));
    };

    let command = match first {
        "hints" | "hint" => {
            let square = words
                .next()
                .ok_or_else(|| CoreError::invalid_input("hints needs a square, e.g. 'hints e2'"))?;
            Command::Hints(parse_square(square)?)
        }
        "back" | "b" => Command::Back,
        "forward" | "f" => Command::Forward,
        "latest" => Command::Latest,
        "history" => Command::History,
        "board" => Command::Board,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        text => Command::Move(parse_move(text)?),
    };

    if words.next().is_some() {
        return Err(CoreError::invalid_input(format!("unexpected text after '{}'", first)));
    }
    Ok(command)
}

/// What the front end should show after a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub cue: Option<MoveCue>,
    /// The computer is on move and should reply after the delay
    pub computer_to_move: bool,
    pub quit: bool,
}

impl Outcome {
    fn message(text: impl Into<String>) -> Outcome {
        Outcome {
            lines: vec![text.into()],
            ..Outcome::default()
        }
    }
}

/// A game against the computer, or between two players at one terminal
pub struct Session<R: Rng> {
    game: Game,
    settings: GameSettings,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(settings: GameSettings, rng: R) -> Session<R> {
        Session {
            game: new_game_with(settings.engine),
            settings,
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// From and to squares of the last move played
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.game.last_move().map(|record| (record.from, record.to))
    }

    /// Whether the computer owns the side on move in a live game
    pub fn computer_should_move(&self) -> bool {
        self.settings.computer_color == Some(self.game.side_to_move())
            && !self.game.status().is_game_over()
            && self.game.history().is_at_latest()
    }

    pub fn execute(&mut self, command: Command) -> CoreResult<Outcome> {
        debug!("[SESSION] {:?}", command);
        match command {
            Command::Move(parsed) => self.play_move(parsed),
            Command::Hints(square) => self.hints(square),
            Command::Back => {
                let moved = self.game.history_mut().step_back();
                self.navigated(moved, "Already at the first position")
            }
            Command::Forward => {
                let moved = self.game.history_mut().step_forward();
                self.navigated(moved, "Already at the latest position")
            }
            Command::Latest => {
                self.game.history_mut().jump_to_latest();
                self.navigated(true, "")
            }
            Command::History => Ok(Outcome {
                lines: self.history_lines(),
                ..Outcome::default()
            }),
            Command::Board => Ok(Outcome {
                lines: vec![self.render()?, self.status_line()],
                ..Outcome::default()
            }),
            Command::New => {
                reset_game(&mut self.game);
                info!("[SESSION] New game");
                Ok(Outcome {
                    lines: vec!["New game".to_string(), self.render()?, self.status_line()],
                    computer_to_move: self.computer_should_move(),
                    ..Outcome::default()
                })
            }
            Command::Help => Ok(Outcome {
                lines: HELP.iter().map(|line| line.to_string()).collect(),
                ..Outcome::default()
            }),
            Command::Quit => Ok(Outcome {
                quit: true,
                ..Outcome::default()
            }),
        }
    }

    /// Let the computer play for the side on move
    pub fn play_computer(&mut self) -> CoreResult<Outcome> {
        match reply(&mut self.game, &mut self.rng)? {
            Some(result) => self.move_outcome(&result, "Computer plays"),
            None => Ok(Outcome::default()),
        }
    }

    /// Text board of the viewed position
    pub fn render(&self) -> CoreResult<String> {
        let history = self.game.history();
        let cursor = history.cursor();
        let board = history.viewed();

        let last_move = if self.settings.highlight_last_move {
            history.record_into(cursor).map(|record| (record.from, record.to))
        } else {
            None
        };

        let side = self.game.side_to_move_at(cursor);
        let checked_king = if is_in_check(board, side)? {
            Some(board.king(side)?.square())
        } else {
            None
        };

        Ok(render_board(board, last_move, checked_king))
    }

    fn play_move(&mut self, parsed: ParsedMove) -> CoreResult<Outcome> {
        let Some(piece_id) = self.game.board().piece_at(parsed.from).map(|piece| piece.id()) else {
            return Ok(Outcome {
                lines: vec![format!("No piece on {}", parsed.from)],
                cue: Some(MoveCue::Illegal),
                ..Outcome::default()
            });
        };

        let result = request_move(
            &mut self.game,
            MoveRequest {
                piece_id,
                from: parsed.from,
                to: parsed.to,
                promotion: parsed.promotion,
            },
        )?;
        self.move_outcome(&result, "You play")
    }

    fn move_outcome(&self, result: &MoveResult, who: &str) -> CoreResult<Outcome> {
        let cue = cue_for(result);
        if let Some(rejection) = result.rejection {
            return Ok(Outcome {
                lines: vec![format!("Move refused: {}", rejection)],
                cue: Some(cue),
                ..Outcome::default()
            });
        }

        let mut lines = Vec::new();
        if let Some(record) = self.game.last_move() {
            lines.push(format!("{} {}", who, format_move(record)));
        }
        lines.push(self.render()?);
        lines.push(self.status_line());

        Ok(Outcome {
            lines,
            cue: Some(cue),
            computer_to_move: self.computer_should_move(),
            quit: false,
        })
    }

    fn hints(&self, square: Square) -> CoreResult<Outcome> {
        if !self.settings.show_hints {
            return Ok(Outcome::message("Hints are turned off"));
        }
        let Some(piece) = self.game.board().piece_at(square) else {
            return Ok(Outcome::message(format!("No piece on {}", square)));
        };

        let mut targets = legal_targets(&self.game, piece.id())?;
        targets.sort_by_key(|target| (target.file(), target.rank()));
        if targets.is_empty() {
            return Ok(Outcome::message(format!("No legal moves for {} on {}", piece.kind(), square)));
        }
        let names: Vec<String> = targets.iter().map(|target| target.to_string()).collect();
        Ok(Outcome::message(format!(
            "{} on {} can go to {}",
            piece.kind(),
            square,
            names.join(" ")
        )))
    }

    fn navigated(&self, moved: bool, unchanged: &str) -> CoreResult<Outcome> {
        if !moved {
            return Ok(Outcome::message(unchanged));
        }
        let history = self.game.history();
        Ok(Outcome {
            lines: vec![
                self.render()?,
                format!("Viewing position {} of {}", history.cursor(), history.latest_index()),
            ],
            computer_to_move: self.computer_should_move(),
            ..Outcome::default()
        })
    }

    fn status_line(&self) -> String {
        let status = self.game.status();
        if status.is_game_over() {
            return status.message().to_string();
        }
        let side = match self.game.side_to_move() {
            Color::White => "White",
            Color::Black => "Black",
        };
        if self.game.last_move().is_some_and(|record| record.is_check) {
            format!("{} to move, in check", side)
        } else {
            format!("{} to move", side)
        }
    }

    fn history_lines(&self) -> Vec<String> {
        let records = self.game.history().records();
        if records.is_empty() {
            return vec!["No moves yet".to_string()];
        }
        records
            .chunks(2)
            .enumerate()
            .map(|(index, pair)| {
                let moves: Vec<String> = pair.iter().map(format_move).collect();
                format!("{}. {}", index + 1, moves.join(" "))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::GameStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(computer_color: Option<Color>) -> Session<StdRng> {
        let settings = GameSettings {
            computer_color,
            reply_delay_ms: 0,
            ..GameSettings::default()
        };
        Session::new(settings, StdRng::seed_from_u64(7))
    }

    fn run(session: &mut Session<StdRng>, line: &str) -> Outcome {
        session.execute(parse_command(line).unwrap()).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" BACK ").unwrap(), Command::Back);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
        assert!(matches!(parse_command("e2e4").unwrap(), Command::Move(_)));
        assert!(matches!(parse_command("hints e2").unwrap(), Command::Hints(_)));
        assert!(parse_command("").is_err());
        assert!(parse_command("hints").is_err());
        assert!(parse_command("back twice").is_err());
        assert!(parse_command("castle").is_err());
    }

    #[test]
    fn test_human_move_hands_turn_to_computer() {
        //! After e2e4 the computer (Black) is due to answer
        let mut session = session(Some(Color::Black));
        let outcome = run(&mut session, "e2e4");
        assert_eq!(outcome.cue, Some(MoveCue::Move));
        assert!(outcome.computer_to_move);
        assert_eq!(outcome.lines[0], "You play e2-e4");
        assert_eq!(session.last_move().map(|(_, to)| to.to_string()), Some("e4".to_string()));

        let reply = session.play_computer().unwrap();
        assert!(reply.lines[0].starts_with("Computer plays"));
        assert!(!reply.computer_to_move);
        assert_eq!(session.game().side_to_move(), Color::White);
    }

    #[test]
    fn test_refused_moves_cue_illegal() {
        let mut session = session(None);
        let empty = run(&mut session, "e3e4");
        assert_eq!(empty.cue, Some(MoveCue::Illegal));
        assert_eq!(empty.lines[0], "No piece on e3");

        let wrong_turn = run(&mut session, "e7e5");
        assert_eq!(wrong_turn.cue, Some(MoveCue::Illegal));
        assert!(wrong_turn.lines[0].starts_with("Move refused"));
        assert_eq!(session.game().history().ply(), 0);
    }

    #[test]
    fn test_moves_refused_while_reviewing() {
        //! Stepping back blocks play until returning to the latest position
        let mut session = session(None);
        run(&mut session, "e2e4");
        run(&mut session, "e7e5");

        let back = run(&mut session, "back");
        assert!(back.lines[1].contains("position 1 of 2"));
        assert!(!session.computer_should_move());
        assert_eq!(run(&mut session, "g1f3").cue, Some(MoveCue::Illegal));

        run(&mut session, "latest");
        assert_eq!(run(&mut session, "g1f3").cue, Some(MoveCue::Move));
        assert_eq!(run(&mut session, "forward").lines, vec!["Already at the latest position"]);
    }

    #[test]
    fn test_mate_ends_session_game() {
        //! Fool's mate cues the game end and blocks further moves
        let mut session = session(None);
        for line in ["f2f3", "e7e5", "g2g4"] {
            run(&mut session, line);
        }
        let mate = run(&mut session, "d8h4");
        assert_eq!(mate.cue, Some(MoveCue::GameEnd));
        assert_eq!(mate.lines[0], "You play Qd8-h4#");
        assert_eq!(
            session.game().status(),
            GameStatus::Checkmate { winner: Color::Black }
        );
        assert!(session.render().unwrap().contains("<K>"));
        assert_eq!(run(&mut session, "a2a3").cue, Some(MoveCue::Illegal));

        let history = run(&mut session, "history");
        assert_eq!(history.lines, vec!["1. f2-f3 e7-e5", "2. g2-g4 Qd8-h4#"]);

        run(&mut session, "new");
        assert_eq!(session.game().history().ply(), 0);
        assert_eq!(session.game().status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_hints() {
        let mut session = session(None);
        let hints = run(&mut session, "hints g1");
        assert_eq!(hints.lines, vec!["knight on g1 can go to f3 h3"]);

        session.settings.show_hints = false;
        assert_eq!(run(&mut session, "hints g1").lines, vec!["Hints are turned off"]);
    }

    #[test]
    fn test_computer_opens_as_white() {
        let mut session = session(Some(Color::White));
        assert!(session.computer_should_move());
        let outcome = session.play_computer().unwrap();
        assert!(outcome.cue.is_some());
        assert_eq!(session.game().history().ply(), 1);
    }

    #[test]
    fn test_quit() {
        let mut session = session(None);
        assert!(run(&mut session, "quit").quit);
    }
}
