//! Where the check board is drawn

use super::board::Board;
use crate::error::{AocError, AocResult};
use crate::ui::UiContext;
use console::Term;
use std::io::Write;

/// Receives a board after every change
pub trait Surface {
    /// Show the current state
    fn draw(&mut self, board: &Board) -> AocResult<()>;

    /// Show the final state; every line is settled
    fn finish(&mut self, board: &Board) -> AocResult<()> {
        self.draw(board)
    }
}

/// Surface matching the terminal: live redraw when interactive, plain lines otherwise
pub fn for_context(ctx: &UiContext) -> Box<dyn Surface> {
    if ctx.use_fancy_output() {
        Box::new(LiveSurface::new(Term::stdout()))
    } else {
        Box::new(PlainSurface::new(std::io::stdout()))
    }
}

/// Redraws the whole board in place
pub struct LiveSurface {
    term: Term,
    drawn: usize,
}

impl LiveSurface {
    pub fn new(term: Term) -> Self {
        Self { term, drawn: 0 }
    }
}

impl Surface for LiveSurface {
    fn draw(&mut self, board: &Board) -> AocResult<()> {
        if self.drawn > 0 {
            self.term
                .clear_last_lines(self.drawn)
                .map_err(|e| AocError::io("clearing terminal", e))?;
        }
        for line in board.render() {
            self.term
                .write_line(&line)
                .map_err(|e| AocError::io("writing to terminal", e))?;
        }
        self.drawn = board.len();
        Ok(())
    }
}

/// Prints each line once, in schedule order, as soon as it and every line
/// above it have settled
pub struct PlainSurface<W: Write> {
    out: W,
    printed: usize,
}

impl<W: Write> PlainSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, printed: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for PlainSurface<W> {
    fn draw(&mut self, board: &Board) -> AocResult<()> {
        while let Some(line) = board.lines().get(self.printed) {
            if !line.state.is_settled() {
                break;
            }
            writeln!(self.out, "{}", board.render_line(self.printed))
                .map_err(|e| AocError::io("writing check output", e))?;
            self.printed += 1;
        }
        self.out
            .flush()
            .map_err(|e| AocError::io("writing check output", e))
    }
}
