//! # vocab_drill
//!
//! An offline, deterministic engine for vocabulary practice sessions.
//!
//! The library turns a static catalog of words (grouped into blocks) into
//! ready-to-play practice sessions across six modes: flashcards, a
//! multiple-choice quiz, free-text typing, a timed test, a matching-pairs
//! board and stroke-order practice. It judges answers, keeps combo-based
//! scores and persists cumulative learner progress through a pluggable
//! key-value store.
//!
//! ## How it works
//!
//! 1. Load a [`Catalog`] (e.g. with [`Catalog::from_json_str`]).
//! 2. Build a [`SessionRequest`] with a mode, a block [`Selection`], an
//!    optional RNG seed and an optional length.
//! 3. Call [`generate_session`]: the engine resolves the word pool, shuffles,
//!    samples distractors and returns a [`GeneratedSession`] holding the
//!    mode's state.
//! 4. Feed answers into that state; hand each [`AnswerOutcome`] and the final
//!    [`SessionSummary`] to a [`ProgressTracker`].
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact session.
//! - **One scoring policy**: base points plus a per-combo bonus, configured
//!   per mode in [`DrillConfig`].
//! - **Durable progress**: one JSON record under a single key, merged
//!   field-by-field so unknown sibling fields survive.
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill::{
//!     generate_session, Catalog, DrillConfig, MemoryStore, PracticeSet, ProgressTracker,
//!     SessionRequest, TrainingMode,
//! };
//!
//! let catalog = Catalog::from_json_str(r#"{"blocks": [
//!     {"id": 1, "name": "Greetings", "chineseName": "问候", "words": [
//!         {"id": 1, "character": "你好", "pinyin": "nǐ hǎo", "translation": "hello"},
//!         {"id": 2, "character": "谢谢", "pinyin": "xièxie", "translation": "thank you"},
//!         {"id": 3, "character": "再见", "pinyin": "zàijiàn", "translation": "goodbye"},
//!         {"id": 4, "character": "对不起", "pinyin": "duìbuqǐ", "translation": "sorry"}
//!     ]}
//! ]}"#).unwrap();
//!
//! let request = SessionRequest::new(TrainingMode::Quiz).with_seed(42);
//! let session = generate_session(&request, &catalog, &DrillConfig::default()).unwrap();
//! let PracticeSet::Quiz(mut quiz) = session.set else { unreachable!() };
//!
//! let mut progress = ProgressTracker::new(MemoryStore::new());
//! while let Some(round) = quiz.current() {
//!     let pick = round.target.id;
//!     if let Some(outcome) = quiz.choose(pick) {
//!         progress.record_answer(outcome.correct, outcome.combo_for_stats);
//!     }
//!     quiz.next();
//! }
//! if let Some(summary) = quiz.finish() {
//!     progress.complete_session();
//!     println!("{}: {}% grade {}", session.session_id, summary.percentage, summary.grade);
//! }
//! assert_eq!(progress.stats().sessions_completed, 1);
//! ```

pub mod progress;
pub mod training_engine;

// Convenience re-exports so callers can use `vocab_drill::generate_session`
// directly without reaching into `training_engine::`.
pub use progress::{
    DisabledStore, FileStore, KeyValueStore, MemoryStore, ProgressRecord, ProgressTracker, Stats,
    StorageError,
};
pub use training_engine::{
    generate_session, AnswerOutcome, Block, Catalog, DrillConfig, DrillError, GeneratedSession,
    Grade, PracticeSet, Round, Selection, SessionRequest, SessionSummary, TrainingMode,
    TypedAnswerPolicy, Word,
};
