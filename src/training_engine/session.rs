//! Per-screen session state: position in the item list, running counts,
//! streak, an optional countdown, and the one-shot completion signal.
//!
//! Nothing here is persisted. The caller forwards each [`AnswerOutcome`] to
//! the progress tracker and calls `complete_session` when [`PracticeSession::finish`]
//! (or a countdown expiry) hands back a summary.

use serde::{Deserialize, Serialize};
use crate::training_engine::{
    helpers::{format_time, grade_for, percentage},
    models::{AnswerOutcome, SessionSummary, TrainingMode},
    scoring::{ComboCounter, ScoringPolicy},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(u32),
    /// Reported once, on the tick that reaches zero.
    Expired,
    /// Already expired or cancelled; nothing happens.
    Stopped,
}

/// A one-per-second countdown driven by the caller's timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    stopped: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Countdown { remaining: seconds, stopped: seconds == 0 }
    }

    pub fn tick(&mut self) -> Tick {
        if self.stopped {
            return Tick::Stopped;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stopped = true;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    pub fn cancel(&mut self) {
        self.stopped = true;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    pub fn display(&self) -> String {
        format_time(self.remaining)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Phase {
    Active,
    /// Ended normally; summary not yet handed out.
    Ended { timed_out: bool },
    Reported,
    Abandoned,
}

/// Sequential practice over `items` questions (flashcards, quiz, typing, test).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    mode: TrainingMode,
    policy: ScoringPolicy,
    items: usize,
    index: usize,
    correct: u32,
    wrong: u32,
    counter: ComboCounter,
    countdown: Option<Countdown>,
    answered_current: bool,
    phase: Phase,
}

impl PracticeSession {
    pub fn new(mode: TrainingMode, items: usize, policy: ScoringPolicy) -> Self {
        PracticeSession {
            mode,
            policy,
            items,
            index: 0,
            correct: 0,
            wrong: 0,
            counter: ComboCounter::default(),
            countdown: None,
            answered_current: false,
            phase: if items == 0 { Phase::Ended { timed_out: false } } else { Phase::Active },
        }
    }

    pub fn with_countdown(mut self, seconds: u32) -> Self {
        self.countdown = Some(Countdown::new(seconds));
        self
    }

    pub fn mode(&self) -> TrainingMode { self.mode }
    pub fn len(&self) -> usize { self.items }
    pub fn is_empty(&self) -> bool { self.items == 0 }
    pub fn index(&self) -> usize { self.index }
    pub fn correct(&self) -> u32 { self.correct }
    pub fn wrong(&self) -> u32 { self.wrong }
    pub fn combo(&self) -> u32 { self.counter.combo }
    pub fn score(&self) -> u32 { self.counter.score }
    pub fn countdown(&self) -> Option<&Countdown> { self.countdown.as_ref() }

    pub fn is_complete(&self) -> bool {
        self.phase != Phase::Active
    }

    /// Record the verdict for the current item. Returns `None` when the item
    /// was already answered or the session is over.
    pub fn answer(&mut self, correct: bool) -> Option<AnswerOutcome> {
        if self.phase != Phase::Active || self.answered_current {
            return None;
        }
        self.answered_current = true;
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
        Some(self.counter.register(&self.policy, correct))
    }

    /// Move past the current item. Returns `true` while items remain; the
    /// call that passes the last item ends the session.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        if self.index + 1 >= self.items {
            self.end(false);
            return false;
        }
        self.index += 1;
        self.answered_current = false;
        true
    }

    /// One second elapsed. Expiry ends the session.
    pub fn tick(&mut self) -> Tick {
        let tick = match self.countdown.as_mut() {
            Some(c) if self.phase == Phase::Active => c.tick(),
            _ => Tick::Stopped,
        };
        if tick == Tick::Expired {
            self.end(true);
        }
        tick
    }

    /// Leave without completing: stops the countdown, never yields a summary.
    pub fn abandon(&mut self) {
        if let Some(c) = self.countdown.as_mut() {
            c.cancel();
        }
        if matches!(self.phase, Phase::Active | Phase::Ended { .. }) {
            self.phase = Phase::Abandoned;
        }
    }

    /// Hands out the summary once after the session ended.
    pub fn finish(&mut self) -> Option<SessionSummary> {
        let Phase::Ended { timed_out } = self.phase else {
            return None;
        };
        self.phase = Phase::Reported;
        Some(self.summary(timed_out))
    }

    fn end(&mut self, timed_out: bool) {
        if let Some(c) = self.countdown.as_mut() {
            c.cancel();
        }
        self.phase = Phase::Ended { timed_out };
        log::debug!(
            "{} session ended: {} correct, {} wrong, score {}{}",
            self.mode, self.correct, self.wrong, self.counter.score,
            if timed_out { " (time up)" } else { "" }
        );
    }

    fn summary(&self, timed_out: bool) -> SessionSummary {
        let items = self.items as u32;
        let celebrate = match self.mode {
            TrainingMode::Quiz => items > 0 && self.counter.score >= items.saturating_mul(8),
            TrainingMode::Flashcards | TrainingMode::Test => {
                items > 0 && self.correct as f64 / items as f64 >= 0.8
            }
            _ => false,
        };
        summarize(self.mode, self.items, self.correct, self.wrong, &self.counter, timed_out, celebrate)
    }
}

pub(crate) fn summarize(
    mode: TrainingMode, items: usize, correct: u32, wrong: u32,
    counter: &ComboCounter, timed_out: bool, celebrate: bool,
) -> SessionSummary {
    let pct = percentage(correct, correct + wrong);
    SessionSummary {
        mode,
        items,
        correct,
        wrong,
        score: counter.score,
        best_combo: counter.best,
        percentage: pct,
        grade: grade_for(pct),
        timed_out,
        celebrate,
    }
}
