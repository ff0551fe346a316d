//! ConsoleRenderer: writes the session view to a real terminal.
//!
//! Commands are queued into an internal byte buffer and flushed once per
//! print call, so each state block reaches the terminal in one write. This
//! is a line-oriented program: no raw mode, no alternate screen.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use tetris_stack_core::session::ActionOutcome;
use tetris_stack_core::SessionSnapshot;
use tetris_stack_types::{ActionError, Challenge, Piece, PieceKind};

use crate::view;

pub struct ConsoleRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(1024),
        }
    }

    /// Print one plain line
    pub fn print_line(&mut self, line: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(line))?;
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    /// Print the state block with colored piece tokens
    pub fn print_state(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        self.buf.clear();
        encode_state_into(snapshot, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print the numbered menu for the active tier
    pub fn print_menu(&mut self, challenge: Challenge) -> Result<()> {
        self.buf.clear();
        for line in view::menu_lines(challenge) {
            self.buf.queue(Print(line))?;
            self.buf.queue(Print("\n"))?;
        }
        self.flush_buf()
    }

    /// Print the input prompt without a trailing newline
    pub fn print_prompt(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(view::prompt()))?;
        self.flush_buf()
    }

    pub fn print_outcome(&mut self, outcome: &ActionOutcome) -> Result<()> {
        self.print_line(&view::outcome_message(outcome))
    }

    pub fn print_error(&mut self, error: &ActionError) -> Result<()> {
        self.print_line(&view::error_message(error))
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the state block into `out` without touching stdout
///
/// The layout matches [`view::state_lines`]; the piece tokens additionally
/// get their per-kind color.
pub fn encode_state_into(snapshot: &SessionSnapshot, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print("\n=== Current state ===\n"))?;

    out.queue(Print("Piece queue       "))?;
    encode_pieces_into(snapshot.queue.iter(), out)?;
    out.queue(Print("\n"))?;

    if snapshot.challenge != Challenge::Novice {
        out.queue(Print("Reserve pile      (top -> base): "))?;
        encode_pieces_into(snapshot.pile.iter(), out)?;
        out.queue(Print("\n"))?;
    }

    out.queue(Print("\n"))?;
    Ok(())
}

fn encode_pieces_into<'a>(
    pieces: impl Iterator<Item = &'a Piece>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut any = false;
    for piece in pieces {
        if any {
            out.queue(Print(" "))?;
        }
        out.queue(SetForegroundColor(kind_color(piece.kind)))?;
        out.queue(Print(piece.to_string()))?;
        out.queue(ResetColor)?;
        any = true;
    }
    if !any {
        out.queue(Print("(empty)"))?;
    }
    Ok(())
}

/// Conventional tetromino colors for the four kinds
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::DarkYellow,
    }
}
