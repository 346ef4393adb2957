//! Interactive move selection.
//!
//! The cursor logic is UI-agnostic: a prompt callback renders the current
//! state and returns the next input, so the same chooser runs against the
//! terminal or a scripted input list.

use super::{MoveChooser, RoundStatus};
use crate::core::moves::Move;
use std::io;

/// Input actions while choosing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorInput {
    Up,
    Down,
    Confirm,
    Other,
}

/// Selection cursor over `Move::ALL`. Always in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCursor {
    selected: usize,
}

impl MoveCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_move(&self) -> Move {
        Move::from_index(self.selected)
    }

    pub fn move_up(&mut self) {
        let len = Move::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % Move::ALL.len();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Apply one input. Returns the chosen move on `Confirm`.
pub fn process_input(cursor: &mut MoveCursor, input: CursorInput) -> Option<Move> {
    match input {
        CursorInput::Up => cursor.move_up(),
        CursorInput::Down => cursor.move_down(),
        CursorInput::Confirm => return Some(cursor.selected_move()),
        CursorInput::Other => {}
    }
    None
}

/// Human chooser driven by a prompt callback.
///
/// The callback receives the cursor and the current score/lives, draws them,
/// and blocks until the next input is available.
pub struct HumanChooser<P> {
    cursor: MoveCursor,
    prompt: P,
}

impl<P> HumanChooser<P>
where
    P: FnMut(&MoveCursor, RoundStatus) -> io::Result<CursorInput>,
{
    pub fn new(prompt: P) -> Self {
        Self {
            cursor: MoveCursor::new(),
            prompt,
        }
    }
}

impl<P> MoveChooser for HumanChooser<P>
where
    P: FnMut(&MoveCursor, RoundStatus) -> io::Result<CursorInput>,
{
    fn choose_move(&mut self, status: RoundStatus) -> io::Result<Move> {
        // Each selection starts from the first move
        self.cursor.reset();
        loop {
            let input = (self.prompt)(&self.cursor, status)?;
            if let Some(chosen) = process_input(&mut self.cursor, input) {
                return Ok(chosen);
            }
        }
    }
}
