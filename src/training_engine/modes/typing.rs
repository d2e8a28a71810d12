use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::training_engine::{
    config::DrillConfig,
    judge::{judge_typed_with, TypedAnswerPolicy},
    models::{AnswerOutcome, TrainingMode, Word},
    modes::Drill,
    session::PracticeSession,
    shuffle::take_random,
};

/// Glyph shown, translation typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingDrill {
    drill: Drill<Word>,
    policy: TypedAnswerPolicy,
}

pub fn generate<R: Rng>(
    rng: &mut R,
    pool: &[Word],
    length: Option<usize>,
    config: &DrillConfig,
) -> TypingDrill {
    let words = take_random(rng, pool, length.unwrap_or(config.typing_words));
    let session = PracticeSession::new(
        TrainingMode::Typing,
        words.len(),
        config.scoring_for(TrainingMode::Typing),
    );
    TypingDrill {
        drill: Drill::new(words, session),
        policy: config.typed_answer_policy,
    }
}

impl TypingDrill {
    /// Judge the typed translation of the current word.
    ///
    /// Blank input is not an attempt: it returns `None` and nothing is counted.
    pub fn submit(&mut self, input: &str) -> Option<AnswerOutcome> {
        if input.trim().is_empty() {
            return None;
        }
        let correct = judge_typed_with(input, self.drill.current()?, self.policy);
        self.drill.session_mut().answer(correct)
    }

    pub fn drill(&self) -> &Drill<Word> {
        &self.drill
    }

    pub fn drill_mut(&mut self) -> &mut Drill<Word> {
        &mut self.drill
    }

    pub fn current(&self) -> Option<&Word> {
        self.drill.current()
    }
}
