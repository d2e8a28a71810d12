use rand::Rng;
use crate::training_engine::{
    config::DrillConfig,
    models::{AnswerOutcome, TrainingMode, Word},
    modes::Drill,
    session::PracticeSession,
    shuffle::take_random,
};

pub type FlashcardDeck = Drill<Word>;

pub fn generate<R: Rng>(
    rng: &mut R,
    pool: &[Word],
    length: Option<usize>,
    config: &DrillConfig,
) -> FlashcardDeck {
    let words = take_random(rng, pool, length.unwrap_or(config.flashcard_count));
    let session = PracticeSession::new(
        TrainingMode::Flashcards,
        words.len(),
        config.scoring_for(TrainingMode::Flashcards),
    );
    Drill::new(words, session)
}

impl Drill<Word> {
    /// The learner flipped the card and says whether they knew it.
    pub fn mark(&mut self, known: bool) -> Option<AnswerOutcome> {
        self.session_mut().answer(known)
    }
}
