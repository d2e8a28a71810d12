//! Stroke-order practice. Drawing and stroke matching belong to an external
//! writer widget; this side only decides which glyph it gets and keeps the
//! mistake count it reports back.

use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::training_engine::{
    config::DrillConfig,
    models::Word,
    shuffle::take_random,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeMode {
    /// The widget animates the strokes.
    #[default]
    Animate,
    /// The learner draws; the widget reports mistakes and completion.
    Quiz,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeDrill {
    words: Vec<Word>,
    word_index: usize,
    char_index: usize,
    mode: StrokeMode,
    mistakes: u32,
    completed: bool,
}

pub fn generate<R: Rng>(
    rng: &mut R,
    pool: &[Word],
    length: Option<usize>,
    _config: &DrillConfig,
) -> StrokeDrill {
    StrokeDrill {
        words: take_random(rng, pool, length.unwrap_or(pool.len())),
        word_index: 0,
        char_index: 0,
        mode: StrokeMode::default(),
        mistakes: 0,
        completed: false,
    }
}

impl StrokeDrill {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.word_index)
    }

    /// Characters of the current word's glyph, in writing order.
    pub fn glyphs(&self) -> Vec<char> {
        self.current_word().map(|w| w.glyph.chars().collect()).unwrap_or_default()
    }

    /// The single character to hand to the writer widget.
    pub fn current_glyph(&self) -> Option<char> {
        self.current_word()?.glyph.chars().nth(self.char_index)
    }

    /// `(word, character)` positions, zero-based.
    pub fn position(&self) -> (usize, usize) {
        (self.word_index, self.char_index)
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_mode(&mut self, mode: StrokeMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn next_char(&mut self) -> bool {
        if self.char_index + 1 >= self.glyphs().len() {
            return false;
        }
        self.char_index += 1;
        self.reset();
        true
    }

    pub fn prev_char(&mut self) -> bool {
        if self.char_index == 0 {
            return false;
        }
        self.char_index -= 1;
        self.reset();
        true
    }

    pub fn next_word(&mut self) -> bool {
        if self.word_index + 1 >= self.words.len() {
            return false;
        }
        self.word_index += 1;
        self.char_index = 0;
        self.reset();
        true
    }

    pub fn prev_word(&mut self) -> bool {
        if self.word_index == 0 {
            return false;
        }
        self.word_index -= 1;
        self.char_index = 0;
        self.reset();
        true
    }

    /// Widget callback: a stroke was drawn wrong.
    pub fn record_mistake(&mut self) {
        if self.mode == StrokeMode::Quiz && !self.completed {
            self.mistakes += 1;
        }
    }

    /// Widget callback: the character was drawn to the end.
    pub fn record_complete(&mut self) {
        if self.mode == StrokeMode::Quiz {
            self.completed = true;
        }
    }

    /// Start the current character over.
    pub fn reset(&mut self) {
        self.mistakes = 0;
        self.completed = false;
    }
}
