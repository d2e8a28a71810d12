use serde::{Deserialize, Serialize};
use crate::training_engine::models::{AnswerOutcome, TrainingMode};

/// Points and combo rules for one practice mode.
///
/// A correct answer earns `base_points + combo_bonus * streak_before_answer`.
/// A wrong answer earns nothing and resets the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub base_points: u32,
    pub combo_bonus: u32,
    /// Whether the streak is reported to the progress record's best combo.
    pub tracks_combo: bool,
}

impl ScoringPolicy {
    /// Quiz, typing and matching: 10 points plus 2 per streak step.
    pub const STREAK: ScoringPolicy = ScoringPolicy { base_points: 10, combo_bonus: 2, tracks_combo: true };
    /// Flashcards and the timed test: one point per correct answer, no combo reporting.
    pub const FLAT: ScoringPolicy = ScoringPolicy { base_points: 1, combo_bonus: 0, tracks_combo: false };

    pub fn default_for(mode: TrainingMode) -> Self {
        match mode {
            TrainingMode::Quiz | TrainingMode::Typing | TrainingMode::Matching => Self::STREAK,
            TrainingMode::Flashcards | TrainingMode::Test | TrainingMode::Strokes => Self::FLAT,
        }
    }

    pub fn points_for(&self, combo_before: u32) -> u32 {
        self.base_points.saturating_add(self.combo_bonus.saturating_mul(combo_before))
    }
}

/// Running streak and score for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComboCounter {
    pub combo: u32,
    pub best: u32,
    pub score: u32,
}

impl ComboCounter {
    pub fn register(&mut self, policy: &ScoringPolicy, correct: bool) -> AnswerOutcome {
        if !correct {
            self.combo = 0;
            return AnswerOutcome { correct, points: 0, combo: 0, combo_for_stats: 0 };
        }

        let points = policy.points_for(self.combo);
        self.combo = self.combo.saturating_add(1);
        self.best = self.best.max(self.combo);
        self.score = self.score.saturating_add(points);
        AnswerOutcome {
            correct,
            points,
            combo: self.combo,
            combo_for_stats: if policy.tracks_combo { self.combo } else { 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_policy_adds_bonus_for_prior_combo() {
        let policy = ScoringPolicy::STREAK;
        let mut counter = ComboCounter::default();
        let first = counter.register(&policy, true);
        assert_eq!((first.points, first.combo, first.combo_for_stats), (10, 1, 1));
        let second = counter.register(&policy, true);
        assert_eq!((second.points, second.combo), (12, 2));
        let third = counter.register(&policy, true);
        assert_eq!(third.points, 14);
        assert_eq!(counter.score, 36);
    }

    #[test]
    fn wrong_answer_resets_combo_but_keeps_best() {
        let policy = ScoringPolicy::STREAK;
        let mut counter = ComboCounter::default();
        counter.register(&policy, true);
        counter.register(&policy, true);
        let miss = counter.register(&policy, false);
        assert_eq!((miss.points, miss.combo, miss.combo_for_stats), (0, 0, 0));
        assert_eq!(counter.best, 2);
        assert_eq!(counter.register(&policy, true).points, 10);
    }

    #[test]
    fn flat_policy_never_reports_combo() {
        let policy = ScoringPolicy::FLAT;
        let mut counter = ComboCounter::default();
        for _ in 0..3 {
            let o = counter.register(&policy, true);
            assert_eq!(o.points, 1);
            assert_eq!(o.combo_for_stats, 0);
        }
        assert_eq!(counter.combo, 3);
        assert_eq!(counter.score, 3);
    }

    #[test]
    fn defaults_per_mode() {
        assert_eq!(ScoringPolicy::default_for(TrainingMode::Quiz), ScoringPolicy::STREAK);
        assert_eq!(ScoringPolicy::default_for(TrainingMode::Matching), ScoringPolicy::STREAK);
        assert_eq!(ScoringPolicy::default_for(TrainingMode::Test), ScoringPolicy::FLAT);
        assert_eq!(ScoringPolicy::default_for(TrainingMode::Flashcards), ScoringPolicy::FLAT);
    }

    #[test]
    fn oversized_policy_caps_points_and_score() {
        let policy = ScoringPolicy { base_points: u32::MAX - 1, combo_bonus: u32::MAX, tracks_combo: true };
        let mut counter = ComboCounter::default();
        assert_eq!(counter.register(&policy, true).points, u32::MAX - 1);
        assert_eq!(counter.register(&policy, true).points, u32::MAX);
        assert_eq!(counter.score, u32::MAX);
    }
}
