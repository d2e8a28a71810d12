//! Core training engine: word pools, rounds, judging, scoring and per-mode state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: words, blocks, selections, rounds, requests, summaries |
//! | `error`     | `DrillError` and the crate `Result` alias |
//! | `config`    | `DrillConfig`: per-mode lengths, timers, scoring, judging policy |
//! | `shuffle`   | Seedable Fisher-Yates shuffle shared by every random choice |
//! | `catalog`   | Word pool for a block selection, dataset parsing, search |
//! | `sampler`   | Distractor sampling and multiple-choice round building |
//! | `judge`     | Choice and free-text answer judging |
//! | `scoring`   | Points/combo policy and the running combo counter |
//! | `session`   | Sequential session state, countdown, completion summary |
//! | `helpers`   | Percentages, letter grades, `m:ss` formatting |
//! | `modes`     | Builders and state for the six practice modes |
//! | `generator` | Single entry point `generate_session()`; dispatches to modes |

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod judge;
pub mod models;
pub mod modes;
pub mod sampler;
pub mod scoring;
pub mod session;
pub mod shuffle;

pub use config::DrillConfig;
pub use error::{DrillError, Result};
pub use generator::{generate_session, GeneratedSession, PracticeSet};
pub use judge::{judge_choice, judge_typed, judge_typed_with, TypedAnswerPolicy};
pub use models::{
    AnswerOutcome, Block, BlockId, Catalog, Grade, Round, Selection, SessionRequest,
    SessionSummary, TrainingMode, Word, WordId,
};
pub use sampler::{build_round, build_rounds, sample_distractors};
pub use scoring::ScoringPolicy;
pub use session::{Countdown, PracticeSession, Tick};
pub use catalog::words_in_selection;
