use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

pub type WordId = u32;
pub type BlockId = u32;

// ---------------------------------------------------------------------------
// Catalog primitives
// ---------------------------------------------------------------------------

/// One vocabulary entry. Identity is the `id`; two words with identical
/// content but different ids are different words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// Display glyph, e.g. "学生".
    #[serde(rename = "character")]
    pub glyph: String,
    /// Pronunciation guide, e.g. "xuésheng".
    #[serde(rename = "pinyin")]
    pub pronunciation: String,
    pub translation: String,
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.glyph, self.pronunciation, self.translation)
    }
}

/// A named topic group of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub name: String,
    #[serde(rename = "chineseName")]
    pub localized_name: String,
    pub words: Vec<Word>,
}

/// A reference entry outside the practice pool (weekdays, months). Has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraWord {
    #[serde(rename = "character")]
    pub glyph: String,
    #[serde(rename = "pinyin")]
    pub pronunciation: String,
    pub translation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    #[serde(default)]
    pub weekdays: Vec<ExtraWord>,
    #[serde(default)]
    pub months: Vec<ExtraWord>,
}

/// The static, read-only word dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub extras: Extras,
}

/// Block ids chosen for a session. Empty means "all blocks".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(pub BTreeSet<BlockId>);

impl Selection {
    /// The "all blocks" sentinel.
    pub fn all() -> Self {
        Selection(BTreeSet::new())
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn includes(&self, block: BlockId) -> bool {
        self.is_all() || self.0.contains(&block)
    }
}

impl FromIterator<BlockId> for Selection {
    fn from_iter<I: IntoIterator<Item = BlockId>>(iter: I) -> Self {
        Selection(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Practice request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingMode {
    Flashcards,
    Quiz,
    Typing,
    Matching,
    Test,
    Strokes,
}

impl fmt::Display for TrainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainingMode::Flashcards => "Flashcards",
            TrainingMode::Quiz       => "Quiz",
            TrainingMode::Typing     => "Typing",
            TrainingMode::Matching   => "Matching Pairs",
            TrainingMode::Test       => "Timed Test",
            TrainingMode::Strokes    => "Stroke Order",
        };
        write!(f, "{}", s)
    }
}

/// One multiple-choice question: the target plus its shuffled options.
///
/// The target appears in `options` exactly once; all option ids are distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub target: Word,
    pub options: Vec<Word>,
}

impl Round {
    pub fn is_correct(&self, selected: WordId) -> bool {
        crate::training_engine::judge::judge_choice(selected, &self.target)
    }

    /// Position of the target among the displayed options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|w| w.id == self.target.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub mode: TrainingMode,
    pub selection: Selection,
    pub rng_seed: Option<u64>,
    /// Overrides the mode's default length. The timed test offers 5, 10 or 20.
    pub question_count: Option<usize>,
}

impl SessionRequest {
    /// Minimal request: every block, entropy seed, default length.
    pub fn new(mode: TrainingMode) -> Self {
        SessionRequest {
            mode,
            selection: Selection::all(),
            rng_seed: None,
            question_count: None,
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = Some(count);
        self
    }
}

/// Result of one answered item, as the screen and the progress tracker see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points: u32,
    /// Streak after this answer.
    pub combo: u32,
    /// Value to hand to the progress tracker; 0 for modes that do not report combos.
    pub combo_for_stats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// End-of-session figures shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub mode: TrainingMode,
    pub items: usize,
    pub correct: u32,
    pub wrong: u32,
    pub score: u32,
    pub best_combo: u32,
    pub percentage: u32,
    pub grade: Grade,
    pub timed_out: bool,
    pub celebrate: bool,
}
