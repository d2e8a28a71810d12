//! Matching pairs: translations on one side, glyphs on the other.
//!
//! The whole pool is shuffled into a queue. A handful of words is on the
//! board at a time; every match reveals the next unused queued word. The
//! game ends when the clock runs out or every queued word has been revealed
//! and matched.

use std::collections::HashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::training_engine::{
    config::DrillConfig,
    models::{AnswerOutcome, SessionSummary, TrainingMode, Word, WordId},
    scoring::{ComboCounter, ScoringPolicy},
    session::{summarize, Countdown, Phase, Tick},
    shuffle::shuffled,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSide {
    Translation,
    Glyph,
}

/// Each word has exactly one card per side, so word + side is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub word: WordId,
    pub side: CardSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCard {
    pub id: CardId,
    pub content: String,
    /// Shown under glyph cards only.
    pub pronunciation: Option<String>,
}

impl PairCard {
    fn translation(word: &Word) -> Self {
        PairCard {
            id: CardId { word: word.id, side: CardSide::Translation },
            content: word.translation.clone(),
            pronunciation: None,
        }
    }

    fn glyph(word: &Word) -> Self {
        PairCard {
            id: CardId { word: word.id, side: CardSide::Glyph },
            content: word.glyph.clone(),
            pronunciation: Some(word.pronunciation.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// Click had no effect (matched card, pending mismatch, game over, unknown card).
    Ignored,
    Selected(CardId),
    Deselected,
    Matched {
        outcome: AnswerOutcome,
        /// Word whose two cards were just added to the board.
        revealed: Option<WordId>,
    },
    /// Clicks are ignored until [`MatchingGame::clear_mismatch`].
    Mismatched {
        outcome: AnswerOutcome,
        pair: (CardId, CardId),
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingGame {
    queue: Vec<Word>,
    next_unused: usize,
    cards: Vec<PairCard>,
    selected: Option<CardId>,
    matched: HashSet<WordId>,
    pending_mismatch: Option<(CardId, CardId)>,
    policy: ScoringPolicy,
    counter: ComboCounter,
    mismatches: u32,
    success_pairs: u32,
    countdown: Countdown,
    phase: Phase,
}

pub fn generate<R: Rng>(
    rng: &mut R,
    pool: &[Word],
    _length: Option<usize>,
    config: &DrillConfig,
) -> MatchingGame {
    let mut seen = HashSet::new();
    let unique: Vec<Word> = pool.iter().filter(|w| seen.insert(w.id)).cloned().collect();
    let queue = shuffled(rng, &unique);

    let visible = config.matching_visible_pairs.min(queue.len());
    let opening = &queue[..visible];
    let mut cards = shuffled(rng, &opening.iter().map(PairCard::translation).collect::<Vec<_>>());
    cards.extend(shuffled(rng, &opening.iter().map(PairCard::glyph).collect::<Vec<_>>()));

    MatchingGame {
        next_unused: visible,
        queue,
        cards,
        selected: None,
        matched: HashSet::new(),
        pending_mismatch: None,
        policy: config.scoring_for(TrainingMode::Matching),
        counter: ComboCounter::default(),
        mismatches: 0,
        success_pairs: config.matching_success_pairs,
        countdown: Countdown::new(config.matching_seconds),
        phase: if visible == 0 { Phase::Ended { timed_out: false } } else { Phase::Active },
    }
}

impl MatchingGame {
    /// Board cards in layout order, matched ones included.
    pub fn cards(&self) -> &[PairCard] {
        &self.cards
    }

    pub fn translation_cards(&self) -> impl Iterator<Item = &PairCard> {
        self.cards.iter().filter(|c| c.id.side == CardSide::Translation)
    }

    pub fn glyph_cards(&self) -> impl Iterator<Item = &PairCard> {
        self.cards.iter().filter(|c| c.id.side == CardSide::Glyph)
    }

    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    pub fn pending_mismatch(&self) -> Option<(CardId, CardId)> {
        self.pending_mismatch
    }

    pub fn is_matched(&self, word: WordId) -> bool {
        self.matched.contains(&word)
    }

    pub fn total_matched(&self) -> u32 {
        self.matched.len() as u32
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn combo(&self) -> u32 {
        self.counter.combo
    }

    pub fn score(&self) -> u32 {
        self.counter.score
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_complete(&self) -> bool {
        self.phase != Phase::Active
    }

    pub fn select(&mut self, card: CardId) -> MatchEvent {
        if self.phase != Phase::Active
            || self.pending_mismatch.is_some()
            || self.matched.contains(&card.word)
            || !self.cards.iter().any(|c| c.id == card)
        {
            return MatchEvent::Ignored;
        }

        let Some(previous) = self.selected else {
            self.selected = Some(card);
            return MatchEvent::Selected(card);
        };

        if previous == card {
            self.selected = None;
            return MatchEvent::Deselected;
        }
        if previous.side == card.side {
            self.selected = Some(card);
            return MatchEvent::Selected(card);
        }

        if previous.word == card.word {
            self.selected = None;
            self.matched.insert(card.word);
            let outcome = self.counter.register(&self.policy, true);
            let revealed = self.reveal_next();
            self.check_all_matched();
            MatchEvent::Matched { outcome, revealed }
        } else {
            self.pending_mismatch = Some((previous, card));
            self.mismatches += 1;
            let outcome = self.counter.register(&self.policy, false);
            MatchEvent::Mismatched { outcome, pair: (previous, card) }
        }
    }

    /// Called once the mismatch feedback has been shown; unlocks the board.
    pub fn clear_mismatch(&mut self) {
        self.pending_mismatch = None;
        self.selected = None;
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Active {
            return Tick::Stopped;
        }
        let tick = self.countdown.tick();
        if tick == Tick::Expired {
            self.end(true);
        }
        tick
    }

    /// Leave mid-game: the clock stops and no summary is produced.
    pub fn abandon(&mut self) {
        self.countdown.cancel();
        if matches!(self.phase, Phase::Active | Phase::Ended { .. }) {
            self.phase = Phase::Abandoned;
        }
    }

    pub fn finish(&mut self) -> Option<SessionSummary> {
        let Phase::Ended { timed_out } = self.phase else {
            return None;
        };
        self.phase = Phase::Reported;
        let matched = self.total_matched();
        let all_matched = self.all_matched();
        Some(summarize(
            TrainingMode::Matching,
            self.queue.len(),
            matched,
            self.mismatches,
            &self.counter,
            timed_out,
            matched >= self.success_pairs || all_matched,
        ))
    }

    fn reveal_next(&mut self) -> Option<WordId> {
        let word = self.queue.get(self.next_unused)?;
        self.cards.push(PairCard::translation(word));
        self.cards.push(PairCard::glyph(word));
        self.next_unused += 1;
        Some(word.id)
    }

    fn all_matched(&self) -> bool {
        !self.queue.is_empty()
            && self.next_unused == self.queue.len()
            && self.matched.len() == self.queue.len()
    }

    fn check_all_matched(&mut self) {
        if self.all_matched() {
            self.end(false);
        }
    }

    fn end(&mut self, timed_out: bool) {
        self.countdown.cancel();
        self.selected = None;
        self.phase = Phase::Ended { timed_out };
        log::debug!(
            "matching ended: {} pairs, {} mismatches, score {}{}",
            self.matched.len(), self.mismatches, self.counter.score,
            if timed_out { " (time up)" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::catalog::fixtures::block;
    use crate::training_engine::shuffle::rng_from_seed;

    fn game(words: u32, seed: u64) -> MatchingGame {
        let pool = block(1, 1, words).words;
        let mut rng = rng_from_seed(Some(seed));
        generate(&mut rng, &pool, None, &DrillConfig::default())
    }

    fn card(word: WordId, side: CardSide) -> CardId {
        CardId { word, side }
    }

    fn match_word(g: &mut MatchingGame, word: WordId) -> MatchEvent {
        g.select(card(word, CardSide::Translation));
        g.select(card(word, CardSide::Glyph))
    }

    /// Words currently on the board and not matched yet.
    fn open_words(g: &MatchingGame) -> Vec<WordId> {
        g.translation_cards().map(|c| c.id.word).filter(|w| !g.is_matched(*w)).collect()
    }

    #[test]
    fn board_opens_with_six_pairs_split_by_side() {
        let g = game(20, 1);
        assert_eq!(g.cards().len(), 12);
        assert_eq!(g.translation_cards().count(), 6);
        assert_eq!(g.glyph_cards().count(), 6);
        assert!(g.glyph_cards().all(|c| c.pronunciation.is_some()));
        let mut left: Vec<_> = g.translation_cards().map(|c| c.id.word).collect();
        let mut right: Vec<_> = g.glyph_cards().map(|c| c.id.word).collect();
        left.sort_unstable();
        right.sort_unstable();
        assert_eq!(left, right);
        assert_eq!(g.countdown().remaining(), 120);
    }

    #[test]
    fn match_scores_and_reveals_next_word() {
        let mut g = game(20, 2);
        let w = open_words(&g)[0];
        match match_word(&mut g, w) {
            MatchEvent::Matched { outcome, revealed } => {
                assert_eq!((outcome.points, outcome.combo, outcome.combo_for_stats), (10, 1, 1));
                let revealed = revealed.unwrap();
                assert!(g.cards().iter().any(|c| c.id == card(revealed, CardSide::Glyph)));
            }
            other => panic!("expected a match, got {other:?}"),
        }
        assert_eq!(g.cards().len(), 14);
        assert_eq!(open_words(&g).len(), 6);

        let w = open_words(&g)[0];
        match match_word(&mut g, w) {
            MatchEvent::Matched { outcome, .. } => assert_eq!(outcome.points, 12),
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn selection_rules() {
        let mut g = game(10, 3);
        let open = open_words(&g);
        let (a, b) = (open[0], open[1]);

        assert_eq!(g.select(card(a, CardSide::Translation)), MatchEvent::Selected(card(a, CardSide::Translation)));
        assert_eq!(g.select(card(a, CardSide::Translation)), MatchEvent::Deselected);
        assert_eq!(g.selected(), None);

        g.select(card(a, CardSide::Translation));
        assert_eq!(
            g.select(card(b, CardSide::Translation)),
            MatchEvent::Selected(card(b, CardSide::Translation)),
            "same side replaces the selection"
        );

        assert_eq!(g.select(card(999, CardSide::Glyph)), MatchEvent::Ignored);
    }

    #[test]
    fn mismatch_locks_board_until_cleared() {
        let mut g = game(10, 4);
        let open = open_words(&g);
        let (a, b) = (open[0], open[1]);

        match_word(&mut g, a);
        g.select(card(b, CardSide::Translation));
        let other = open_words(&g).into_iter().find(|w| *w != b).unwrap();
        match g.select(card(other, CardSide::Glyph)) {
            MatchEvent::Mismatched { outcome, .. } => {
                assert!(!outcome.correct);
                assert_eq!(outcome.combo_for_stats, 0);
            }
            e => panic!("expected mismatch, got {e:?}"),
        }
        assert_eq!(g.combo(), 0);
        assert_eq!(g.select(card(b, CardSide::Glyph)), MatchEvent::Ignored);

        g.clear_mismatch();
        assert!(matches!(match_word(&mut g, b), MatchEvent::Matched { .. }));
    }

    #[test]
    fn matched_cards_are_inert() {
        let mut g = game(10, 5);
        let w = open_words(&g)[0];
        match_word(&mut g, w);
        assert_eq!(g.select(card(w, CardSide::Glyph)), MatchEvent::Ignored);
    }

    #[test]
    fn clearing_the_queue_completes_once() {
        let mut g = game(8, 6);
        let mut matches = 0;
        while !g.is_complete() {
            let w = open_words(&g)[0];
            assert!(matches!(match_word(&mut g, w), MatchEvent::Matched { .. }));
            matches += 1;
        }
        assert_eq!(matches, 8);
        assert_eq!(g.tick(), Tick::Stopped);

        let summary = g.finish().unwrap();
        assert_eq!(summary.correct, 8);
        assert_eq!(summary.best_combo, 8);
        assert!(summary.celebrate, "every word matched");
        assert!(!summary.timed_out);
        assert!(g.finish().is_none());
    }

    #[test]
    fn time_up_ends_game() {
        let mut g = game(30, 7);
        for _ in 0..3 {
            let w = open_words(&g)[0];
            match_word(&mut g, w);
        }
        let mut last = Tick::Stopped;
        for _ in 0..120 {
            last = g.tick();
        }
        assert_eq!(last, Tick::Expired);
        assert!(g.is_complete());
        assert_eq!(g.select(card(open_words(&g)[0], CardSide::Translation)), MatchEvent::Ignored);

        let summary = g.finish().unwrap();
        assert!(summary.timed_out);
        assert_eq!(summary.correct, 3);
        assert!(!summary.celebrate, "3 pairs is short of the 10-pair mark");
    }

    #[test]
    fn small_pool_shows_everything() {
        let g = game(3, 8);
        assert_eq!(g.cards().len(), 6);
        let empty = game(0, 8);
        assert!(empty.is_complete());
    }
}
