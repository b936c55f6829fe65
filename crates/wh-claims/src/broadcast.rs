//! `BroadcastQueue`: boxes a busy robot saw but could not take.
//!
//! A carrying robot that passes an unclaimed box announces its floor
//! coordinate here.  An idle robot without an objective pops the most recent
//! announcement and pursues it.  Entries may be stale by the time they are
//! popped (someone else picked the box up); the pursuing robot notices on its
//! next Decide and drops the objective.

use wh_core::Coord;

use crate::Set;

#[derive(Debug, Clone, Default)]
pub struct BroadcastQueue {
    stack:     Vec<Coord>,
    /// Every coordinate ever announced.  A box is announced at most once.
    announced: Set<Coord>,
}

impl BroadcastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce a sighting.  Returns `false` (and does nothing) if `at` has
    /// been announced before.
    pub fn announce(&mut self, at: Coord) -> bool {
        if !self.announced.insert(at) {
            return false;
        }
        self.stack.push(at);
        true
    }

    /// Hand an abandoned objective back to the pool.  Unlike
    /// [`announce`][Self::announce] this never deduplicates: the coordinate
    /// was announced (or sighted) before and is being returned, not reported.
    pub fn requeue(&mut self, at: Coord) {
        self.stack.push(at);
    }

    /// Take the most recently pushed coordinate.
    pub fn pop(&mut self) -> Option<Coord> {
        self.stack.pop()
    }

    /// Waiting coordinates, oldest first.
    pub fn pending(&self) -> &[Coord] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
