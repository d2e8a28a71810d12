//! Practice-mode builders and their per-screen state.
//!
//! Each module exposes a `generate` function with the same shape:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     pool: &[Word],
//!     length: Option<usize>,
//!     config: &DrillConfig,
//! ) -> <ModeState>
//! ```
//!
//! `generator.rs` dispatches to these.

/// Self-assessed known/unknown cards.
pub mod flashcards;
/// Multiple-choice rounds, shared by the quiz and the timed test.
pub mod quiz;
/// Free-text translation entry.
pub mod typing;
/// Matching-pairs board with a refilling word queue.
pub mod matching;
/// Glyph-by-glyph stroke practice handed to an external writer widget.
pub mod strokes;

use serde::{Deserialize, Serialize};
use crate::training_engine::{
    models::SessionSummary,
    session::{PracticeSession, Tick},
};

/// Ordered items plus the session walking through them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill<T> {
    items: Vec<T>,
    session: PracticeSession,
}

impl<T> Drill<T> {
    pub fn new(items: Vec<T>, session: PracticeSession) -> Self {
        Drill { items, session }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The item on screen, `None` once the session is over.
    pub fn current(&self) -> Option<&T> {
        if self.session.is_complete() {
            return None;
        }
        self.items.get(self.session.index())
    }

    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PracticeSession {
        &mut self.session
    }

    /// Show the next item. `false` once the list is exhausted.
    pub fn next(&mut self) -> bool {
        self.session.advance()
    }

    pub fn tick(&mut self) -> Tick {
        self.session.tick()
    }

    pub fn finish(&mut self) -> Option<SessionSummary> {
        self.session.finish()
    }
}
