//! Game loop
//!
//! Alternates two players starting with white, printing the board before each
//! turn. The game ends when the side to move has no legal move, resigns, or
//! the ply limit is reached.

use anyhow::{bail, ensure, Result};
use chess_engine::{Color, EvalSettings, Player, Position, StalematePolicy};
use instant::Instant;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    /// `stuck` had no legal move while not in check
    Stalemate { stuck: Color },
    Resigned { loser: Color },
    PlyLimit,
}

impl GameOutcome {
    /// The winning side, if any
    ///
    /// Stalemate follows the evaluation policy: scored like checkmate, the
    /// stuck side loses; scored as a draw, nobody wins.
    pub fn winner(&self, stalemate: StalematePolicy) -> Option<Color> {
        match *self {
            GameOutcome::Checkmate { winner } => Some(winner),
            GameOutcome::Stalemate { stuck } => match stalemate {
                StalematePolicy::AsCheckmate => Some(!stuck),
                StalematePolicy::Draw => None,
            },
            GameOutcome::Resigned { loser } => Some(!loser),
            GameOutcome::PlyLimit => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{} is checkmated", !*winner),
            GameOutcome::Stalemate { stuck } => write!(f, "{stuck} has no legal move (stalemate)"),
            GameOutcome::Resigned { loser } => write!(f, "{loser} resigned"),
            GameOutcome::PlyLimit => f.write_str("Ply limit reached"),
        }
    }
}

pub struct Game<W> {
    position: Position,
    /// Indexed by [`Color::index`]
    players: [Box<dyn Player>; 2],
    max_plies: Option<u32>,
    output: W,
}

impl<W: Write> Game<W> {
    /// A game from the standard starting position
    ///
    /// # Errors
    ///
    /// If `white` and `black` do not play the colors they are passed as.
    pub fn new(
        white: Box<dyn Player>,
        black: Box<dyn Player>,
        eval: EvalSettings,
        max_plies: Option<u32>,
        output: W,
    ) -> Result<Self> {
        Self::from_position(Position::new(), white, black, eval, max_plies, output)
    }

    /// A game continuing from `position`, white to move
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn from_position(
        mut position: Position,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
        eval: EvalSettings,
        max_plies: Option<u32>,
        output: W,
    ) -> Result<Self> {
        ensure!(white.color() == Color::White, "white player plays {}", white.color());
        ensure!(black.color() == Color::Black, "black player plays {}", black.color());
        position.set_eval_settings(eval);
        Ok(Self {
            position,
            players: [white, black],
            max_plies,
            output,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game ends
    ///
    /// # Errors
    ///
    /// Fails when the output cannot be written, a player's input fails, or a
    /// player returns a move the position refuses.
    pub fn run(&mut self) -> Result<GameOutcome> {
        let mut side = Color::White;
        let plies_played = self.position.ply();
        writeln!(self.output, "{}", self.position)?;

        let outcome = loop {
            if let Some(limit) = self.max_plies {
                if self.position.ply() - plies_played >= limit as usize {
                    break GameOutcome::PlyLimit;
                }
            }

            let player = &mut self.players[side.index()];
            if !player.has_any_move(&mut self.position) {
                break if self.position.is_in_check(side) {
                    GameOutcome::Checkmate { winner: !side }
                } else {
                    GameOutcome::Stalemate { stuck: side }
                };
            }

            let start = Instant::now();
            let Some(mv) = player.choose_move(&mut self.position)? else {
                break GameOutcome::Resigned { loser: side };
            };
            debug!("[GAME] {} chose {} in {:.2?}", side, mv, start.elapsed());

            if !self.position.apply_move(mv, true) {
                bail!("{side} chose an illegal move: {mv}");
            }
            writeln!(self.output, "\n[{side}] {mv}\n")?;
            writeln!(self.output, "{}", self.position)?;
            side = !side;
        };

        info!("[GAME] Game over after {} plies: {}", self.position.ply() - plies_played, outcome);
        writeln!(self.output, "{outcome}")?;
        match outcome.winner(self.position.eval_settings().stalemate) {
            Some(winner) => writeln!(self.output, "==========( {winner} WON )==========")?,
            None => writeln!(self.output, "==========( DRAW )==========")?,
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::{ChessEngineResult, Move, PieceKind};

    /// Plays a fixed list of moves, then resigns
    struct Scripted {
        color: Color,
        moves: Vec<&'static str>,
    }

    impl Scripted {
        fn boxed(color: Color, moves: &[&'static str]) -> Box<dyn Player> {
            let mut moves = moves.to_vec();
            moves.reverse();
            Box::new(Self { color, moves })
        }
    }

    impl Player for Scripted {
        fn color(&self) -> Color {
            self.color
        }

        fn choose_move(&mut self, _position: &mut Position) -> ChessEngineResult<Option<Move>> {
            let Some(notation) = self.moves.pop() else {
                return Ok(None);
            };
            let (from, to) = chess_engine::parse_move_notation(notation)?;
            Ok(Some(Move::quiet(from, to)))
        }
    }

    fn game(white: &[&'static str], black: &[&'static str]) -> Game<Vec<u8>> {
        Game::new(
            Scripted::boxed(Color::White, white),
            Scripted::boxed(Color::Black, black),
            EvalSettings::default(),
            None,
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_fools_mate() {
        let mut game = game(&["f2f3", "g2g4"], &["e7e5", "d8h4"]);
        let outcome = game.run().unwrap();
        assert_eq!(outcome, GameOutcome::Checkmate { winner: Color::Black });
        assert_eq!(game.position().ply(), 4);

        let text = String::from_utf8(game.into_output()).unwrap();
        assert!(text.contains("[BLACK] d8 -> h4"));
        assert!(text.ends_with("WHITE is checkmated\n==========( BLACK WON )==========\n"));
    }

    #[test]
    fn test_running_out_of_moves_resigns() {
        let mut game = game(&["e2e4"], &["e7e5"]);
        assert_eq!(game.run().unwrap(), GameOutcome::Resigned { loser: Color::White });
        assert_eq!(game.position().ply(), 2);
    }

    #[test]
    fn test_illegal_choice_is_an_error() {
        let mut game = game(&["e2e5"], &[]);
        assert!(game.run().is_err());
        assert_eq!(game.position().ply(), 0);
    }

    #[test]
    fn test_ply_limit() {
        let mut game = Game::new(
            Scripted::boxed(Color::White, &["g1f3", "f3g1", "g1f3"]),
            Scripted::boxed(Color::Black, &["g8f6", "f6g8"]),
            EvalSettings::default(),
            Some(3),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(game.run().unwrap(), GameOutcome::PlyLimit);
        assert_eq!(game.position().ply(), 3);
        let text = String::from_utf8(game.into_output()).unwrap();
        assert!(text.ends_with("==========( DRAW )==========\n"));
    }

    #[test]
    fn test_stalemate_follows_policy() {
        let mut position = Position::empty();
        position.place(PieceKind::King, Color::White, "f7".parse().unwrap());
        position.place(PieceKind::Queen, Color::White, "g6".parse().unwrap());
        position.place(PieceKind::King, Color::Black, "h8".parse().unwrap());
        position.place(PieceKind::Pawn, Color::White, "a2".parse().unwrap());

        // After the waiting move black is stuck without being in check
        let mut game = Game::from_position(
            position,
            Scripted::boxed(Color::White, &["a2a3"]),
            Scripted::boxed(Color::Black, &[]),
            EvalSettings {
                stalemate: StalematePolicy::Draw,
                ..EvalSettings::default()
            },
            None,
            Vec::new(),
        )
        .unwrap();
        let outcome = game.run().unwrap();
        assert_eq!(outcome, GameOutcome::Stalemate { stuck: Color::Black });
        assert_eq!(outcome.winner(StalematePolicy::Draw), None);
        assert_eq!(outcome.winner(StalematePolicy::AsCheckmate), Some(Color::White));
        let text = String::from_utf8(game.into_output()).unwrap();
        assert!(text.ends_with("==========( DRAW )==========\n"));
    }

    #[test]
    fn test_players_must_match_colors() {
        let swapped = Game::new(
            Scripted::boxed(Color::Black, &[]),
            Scripted::boxed(Color::White, &[]),
            EvalSettings::default(),
            None,
            Vec::<u8>::new(),
        );
        let message = swapped.err().unwrap().to_string();
        assert_eq!(message, "white player plays BLACK");

        let both_white = Game::new(
            Scripted::boxed(Color::White, &[]),
            Scripted::boxed(Color::White, &[]),
            EvalSettings::default(),
            None,
            Vec::<u8>::new(),
        );
        assert_eq!(both_white.err().unwrap().to_string(), "black player plays WHITE");
    }
}
