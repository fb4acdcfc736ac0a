//! Move making and unmaking for search
//!
//! [`MoveGuard`] applies a move when it is created and undoes it when it goes
//! out of scope. Search and the legality filter hold one guard per explored
//! move, so an early `return`, a `break` on a cutoff or a `?` can never leave
//! the position one move ahead.

use crate::moves::Move;
use crate::position::Position;
use std::ops::{Deref, DerefMut};

/// A move applied to a borrowed position for the lifetime of the guard
pub struct MoveGuard<'a> {
    position: &'a mut Position,
}

impl<'a> MoveGuard<'a> {
    /// Apply `mv` without the legality check; `None` when nothing was applied
    pub fn apply(position: &'a mut Position, mv: Move) -> Option<Self> {
        if position.apply_move(mv, false) {
            Some(Self { position })
        } else {
            None
        }
    }

    /// The move as the position recorded it
    pub fn applied(&self) -> Option<&Move> {
        self.position.last_move()
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.position.undo_move() {
            // The guard owns exactly one applied move; losing it means the
            // history was popped behind its back.
            panic!("move guard failed to undo: {err}");
        }
    }
}
