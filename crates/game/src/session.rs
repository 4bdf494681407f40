//! Line-based play: coordinate moves in, ASCII board out.

use std::io::{self, BufRead, Write};

use chess_core::to_san;
use minimax_engine::mate_distance;

use crate::controller::GameController;
use crate::outcome::GameOutcome;

const HELP: &str = "\
Commands:
  e2e4, e7e8q   play a move in coordinate notation
  undo, z       take back your last move
  moves         list legal moves
  board         show the board
  quit, q       leave the game";

/// Drive `game` from `input` until it ends, the input runs out or the user
/// quits. Engine turns are played automatically.
pub fn play_session<R: BufRead, W: Write>(
    game: &mut GameController,
    input: R,
    out: &mut W,
) -> io::Result<GameOutcome> {
    let mut lines = input.lines();
    writeln!(out, "{}\n", game.board())?;

    loop {
        if game.outcome().is_over() {
            writeln!(out, "{} ({})", game.outcome(), game.outcome().result_tag())?;
            break;
        }

        if game.is_engine_turn() {
            let side = game.side_to_move();
            let result = game.play_engine_turn().map_err(io::Error::other)?;
            let san = game.history().last().map_or("", |p| p.san.as_str());
            match mate_distance(result.score) {
                Some(plies) if plies > 0 => {
                    writeln!(out, "{side} plays {san} (mate in {})", (plies + 1) / 2)?
                }
                _ => writeln!(out, "{side} plays {san} (score {})", result.score)?,
            }
            writeln!(out, "{}\n", game.board())?;
            continue;
        }

        write!(out, "{} to move> ", game.side_to_move())?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "help" | "?" => writeln!(out, "{HELP}")?,
            "board" => writeln!(out, "{}\n", game.board())?,
            "moves" => {
                let board = game.board();
                let moves: Vec<String> =
                    game.legal_moves().into_iter().map(|mv| to_san(board, mv)).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            "undo" | "z" => {
                if game.take_back().is_none() {
                    writeln!(out, "nothing to take back")?;
                    continue;
                }
                // Also undo the engine's reply so the human is on move again.
                while game.is_engine_turn() && game.take_back().is_some() {}
                writeln!(out, "{}\n", game.board())?;
            }
            text => match game.submit_uci(text) {
                Ok(_) => writeln!(out, "{}\n", game.board())?,
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }

    Ok(game.outcome())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
