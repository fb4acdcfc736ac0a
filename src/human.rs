//! Human player reading moves from a text stream
//!
//! Moves are typed as `<file><rank><file><rank>`, e.g. `e2e4`. Castling is
//! entered as the king's move (`e1g1`). `q` resigns, as does the end of input.
//! Anything else that is not a legal move is reported and asked for again.

use chess_engine::{parse_move_notation, ChessEngineResult, Color, Move, Player, Position};
use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

const RESIGN: &str = "q";

/// Where a human's moves come from, one line at a time
pub trait LineSource {
    /// Append the next line to `buf`; `Ok(0)` at end of input
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Locks per line, so two players can share the terminal
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

pub struct Human<R, W> {
    color: Color,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> Human<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self { color, input, output }
    }

    /// Gives back the output stream, e.g. to inspect prompts in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "[{}] Enter your move (e.g. e2e4, {RESIGN} to resign): ", self.color)?;
        self.output.flush()
    }
}

impl Human<Stdin, Stdout> {
    /// A player on the process's stdin and stdout
    pub fn stdio(color: Color) -> Self {
        Self::new(color, io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> Player for Human<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, position: &mut Position) -> ChessEngineResult<Option<Move>> {
        let legal = position.legal_moves(self.color);
        if position.is_in_check(self.color) {
            writeln!(self.output, "     [CHECK]")?;
        }

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            let entered = line.trim();
            if entered.eq_ignore_ascii_case(RESIGN) {
                return Ok(None);
            }

            match parse_move_notation(entered) {
                Ok((from, to)) => {
                    // Take the generated move so capture flags are filled in
                    if let Some(mv) = legal.iter().find(|mv| mv.from == from && mv.to == to) {
                        return Ok(Some(*mv));
                    }
                    writeln!(self.output, "Invalid move! TRY AGAIN")?;
                }
                Err(e) => writeln!(self.output, "{e}. TRY AGAIN")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(color: Color, script: &str) -> Human<Cursor<Vec<u8>>, Vec<u8>> {
        Human::new(color, Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(player: Human<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.into_output()).unwrap()
    }

    #[test]
    fn test_reads_a_legal_move() {
        let mut pos = Position::new();
        let mut player = human(Color::White, "e2e4\n");
        let mv = player.choose_move(&mut pos).unwrap().unwrap();
        assert_eq!(mv.to_string(), "e2 -> e4");
        assert!(!mv.capture);
        // The position is handed back untouched
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    fn test_reprompts_until_legal() {
        let mut pos = Position::new();
        let mut player = human(Color::Black, "e2e4\nzz\ne7e4\n  E7E5  \n");
        let mv = player.choose_move(&mut pos).unwrap().unwrap();
        assert_eq!(mv.to_string(), "e7 -> e5");

        let text = output(player);
        assert_eq!(text.matches("[BLACK] Enter your move").count(), 4);
        assert_eq!(text.matches("Invalid move!").count(), 2);
        assert!(text.contains("Invalid notation \"zz\""));
    }

    #[test]
    fn test_resign_and_end_of_input() {
        let mut pos = Position::new();
        assert_eq!(human(Color::White, "q\n").choose_move(&mut pos).unwrap(), None);
        assert_eq!(human(Color::White, "Q\ne2e4\n").choose_move(&mut pos).unwrap(), None);
        assert_eq!(human(Color::White, "").choose_move(&mut pos).unwrap(), None);
        assert_eq!(human(Color::White, "a1a5\n").choose_move(&mut pos).unwrap(), None);
    }

    #[test]
    fn test_announces_check() {
        let mut pos = Position::new();
        for notation in ["e2e4", "f7f6", "d1h5"] {
            let (from, to) = parse_move_notation(notation).unwrap();
            assert!(pos.apply_move(Move::quiet(from, to), true));
        }

        let mut player = human(Color::Black, "g7g6\n");
        let mv = player.choose_move(&mut pos).unwrap().unwrap();
        assert_eq!(mv.to_string(), "g7 -> g6");
        assert!(output(player).starts_with("     [CHECK]\n[BLACK]"));
    }

    #[test]
    fn test_capture_flag_comes_from_generated_move() {
        let mut pos = Position::new();
        for notation in ["e2e4", "d7d5"] {
            let (from, to) = parse_move_notation(notation).unwrap();
            assert!(pos.apply_move(Move::quiet(from, to), true));
        }
        let mv = human(Color::White, "e4d5\n").choose_move(&mut pos).unwrap().unwrap();
        assert!(mv.capture);
    }
}
