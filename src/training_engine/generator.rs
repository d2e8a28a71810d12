use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::training_engine::{
    config::DrillConfig,
    error::Result,
    models::{Catalog, SessionRequest, TrainingMode},
    modes::{
        self,
        flashcards::FlashcardDeck,
        matching::MatchingGame,
        quiz::ChoiceDrill,
        strokes::StrokeDrill,
        typing::TypingDrill,
    },
    shuffle::rng_from_seed,
};

/// Per-mode state handed to the practice screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PracticeSet {
    Flashcards(FlashcardDeck),
    Quiz(ChoiceDrill),
    Typing(TypingDrill),
    Test(ChoiceDrill),
    Matching(MatchingGame),
    Strokes(StrokeDrill),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSession {
    pub session_id: String,
    pub mode: TrainingMode,
    /// Words available after applying the selection.
    pub pool_size: usize,
    pub set: PracticeSet,
}

/// Session id from mode prefix + RNG draw.
fn make_session_id(mode: TrainingMode, rng: &mut impl RngCore) -> String {
    let prefix = match mode {
        TrainingMode::Flashcards => "FC",
        TrainingMode::Quiz       => "QZ",
        TrainingMode::Typing     => "TY",
        TrainingMode::Matching   => "MP",
        TrainingMode::Test       => "TT",
        TrainingMode::Strokes    => "SO",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Core dispatch: resolves the word pool and routes to the mode's builder.
///
/// Fails only when the catalog has no words at all. An empty selection pool
/// produces an already-complete session.
pub fn generate_session(
    request: &SessionRequest,
    catalog: &Catalog,
    config: &DrillConfig,
) -> Result<GeneratedSession> {
    let pool = catalog.words_in_selection(&request.selection)?;
    let mut rng = rng_from_seed(request.rng_seed);
    let session_id = make_session_id(request.mode, &mut rng);
    let length = request.question_count.or_else(|| config.default_length(request.mode));

    let set = match request.mode {
        TrainingMode::Flashcards =>
            PracticeSet::Flashcards(modes::flashcards::generate(&mut rng, &pool, length, config)),

        TrainingMode::Quiz =>
            PracticeSet::Quiz(modes::quiz::generate(&mut rng, &pool, length, config)),

        TrainingMode::Typing =>
            PracticeSet::Typing(modes::typing::generate(&mut rng, &pool, length, config)),

        TrainingMode::Test =>
            PracticeSet::Test(modes::timed_test::generate(&mut rng, &pool, length, config)),

        TrainingMode::Matching =>
            PracticeSet::Matching(modes::matching::generate(&mut rng, &pool, length, config)),

        TrainingMode::Strokes =>
            PracticeSet::Strokes(modes::strokes::generate(&mut rng, &pool, length, config)),
    };

    if pool.is_empty() {
        log::warn!("{session_id}: selection {:?} matched no words", request.selection);
    }
    log::debug!("{session_id}: {} session over {} words", request.mode, pool.len());

    Ok(GeneratedSession {
        session_id,
        mode: request.mode,
        pool_size: pool.len(),
        set,
    })
}
