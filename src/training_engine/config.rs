//! Tunables for every practice mode. Every field has a default, so a config
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use crate::training_engine::{
    error::{DrillError, Result},
    judge::TypedAnswerPolicy,
    models::TrainingMode,
    scoring::ScoringPolicy,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Options shown per multiple-choice round, target included.
    pub option_count: usize,
    pub flashcard_count: usize,
    pub quiz_questions: usize,
    pub typing_words: usize,
    /// Question counts offered by the timed test; the first is the default.
    pub test_question_choices: Vec<usize>,
    pub test_seconds_per_question: u32,
    pub matching_visible_pairs: usize,
    pub matching_seconds: u32,
    /// Matched pairs needed for the matching game to count as a success.
    pub matching_success_pairs: u32,
    pub typed_answer_policy: TypedAnswerPolicy,
    pub streak_scoring: ScoringPolicy,
    pub flat_scoring: ScoringPolicy,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            option_count: 4,
            flashcard_count: 20,
            quiz_questions: 10,
            typing_words: 10,
            test_question_choices: vec![5, 10, 20],
            test_seconds_per_question: 15,
            matching_visible_pairs: 6,
            matching_seconds: 120,
            matching_success_pairs: 10,
            typed_answer_policy: TypedAnswerPolicy::Loose,
            streak_scoring: ScoringPolicy::STREAK,
            flat_scoring: ScoringPolicy::FLAT,
        }
    }
}

impl DrillConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(DrillError::InvalidConfig)
    }

    pub fn scoring_for(&self, mode: TrainingMode) -> ScoringPolicy {
        if ScoringPolicy::default_for(mode).tracks_combo {
            self.streak_scoring
        } else {
            self.flat_scoring
        }
    }

    /// Item count a mode uses when the request does not override it.
    /// `None` means the whole pool.
    pub fn default_length(&self, mode: TrainingMode) -> Option<usize> {
        match mode {
            TrainingMode::Flashcards => Some(self.flashcard_count),
            TrainingMode::Quiz       => Some(self.quiz_questions),
            TrainingMode::Typing     => Some(self.typing_words),
            TrainingMode::Test       => Some(self.test_question_choices.first().copied().unwrap_or(self.quiz_questions)),
            TrainingMode::Matching | TrainingMode::Strokes => None,
        }
    }
}
