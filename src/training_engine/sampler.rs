use std::collections::HashSet;
use rand::Rng;
use crate::training_engine::{
    models::{Round, Word, WordId},
    shuffle::{shuffled, take_random},
};

/// Draw up to `count` wrong answers for `target` from `pool`.
///
/// The target is excluded by id and no id repeats. When the pool is too
/// small the result is shorter than `count`; it is never padded.
pub fn sample_distractors<R: Rng>(
    rng: &mut R,
    target: &Word,
    pool: &[Word],
    count: usize,
) -> Vec<Word> {
    let mut seen: HashSet<WordId> = HashSet::with_capacity(pool.len());
    seen.insert(target.id);
    let candidates: Vec<Word> = pool.iter().filter(|w| seen.insert(w.id)).cloned().collect();
    take_random(rng, &candidates, count)
}

/// Target plus `option_count - 1` distractors, in uniformly random order.
pub fn build_round<R: Rng>(
    rng: &mut R,
    target: &Word,
    pool: &[Word],
    option_count: usize,
) -> Round {
    let mut options = vec![target.clone()];
    options.extend(sample_distractors(rng, target, pool, option_count.saturating_sub(1)));
    Round {
        target: target.clone(),
        options: shuffled(rng, &options),
    }
}

/// Up to `question_count` rounds whose targets are distinct random pool words.
/// Distractors for every round come from the whole pool.
pub fn build_rounds<R: Rng>(
    rng: &mut R,
    pool: &[Word],
    question_count: usize,
    option_count: usize,
) -> Vec<Round> {
    take_random(rng, pool, question_count)
        .iter()
        .map(|target| build_round(rng, target, pool, option_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::catalog::fixtures::{block, word};
    use crate::training_engine::shuffle::rng_from_seed;
    use std::collections::HashSet;

    fn pool(n: u32) -> Vec<Word> {
        block(1, 1, n).words
    }

    #[test]
    fn large_pool_gives_exact_count_without_target_or_repeats() {
        let pool = pool(20);
        for seed in 0..50u64 {
            let mut rng = rng_from_seed(Some(seed));
            let target = &pool[(seed % 20) as usize];
            let out = sample_distractors(&mut rng, target, &pool, 3);
            assert_eq!(out.len(), 3);
            assert!(out.iter().all(|w| w.id != target.id));
            let ids: HashSet<_> = out.iter().map(|w| w.id).collect();
            assert_eq!(ids.len(), 3, "duplicate distractor for seed={seed}");
        }
    }

    #[test]
    fn small_pool_returns_what_exists() {
        let mut rng = rng_from_seed(Some(3));
        let pool = pool(3);
        assert_eq!(sample_distractors(&mut rng, &pool[0], &pool, 3).len(), 2);
        assert_eq!(sample_distractors(&mut rng, &pool[0], &pool, 5).len(), 2);
        let lonely = vec![pool[0].clone()];
        assert!(sample_distractors(&mut rng, &lonely[0], &lonely, 3).is_empty());
        assert!(sample_distractors(&mut rng, &pool[0], &[], 3).is_empty());
    }

    #[test]
    fn duplicate_ids_in_pool_are_drawn_once() {
        let mut rng = rng_from_seed(Some(11));
        let target = word(1, "一", "yī", "one");
        let pool = vec![target.clone(), word(2, "二", "èr", "two"), word(2, "二", "èr", "two")];
        let out = sample_distractors(&mut rng, &target, &pool, 3);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn every_candidate_gets_drawn_eventually() {
        let pool = pool(6);
        let mut seen = HashSet::new();
        for seed in 0..100u64 {
            let mut rng = rng_from_seed(Some(seed));
            for w in sample_distractors(&mut rng, &pool[0], &pool, 1) {
                seen.insert(w.id);
            }
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn round_contains_target_once_and_distinct_options() {
        let pool = pool(12);
        let mut rng = rng_from_seed(Some(5));
        let round = build_round(&mut rng, &pool[4], &pool, 4);
        assert_eq!(round.options.len(), 4);
        assert_eq!(round.options.iter().filter(|w| w.id == round.target.id).count(), 1);
        let ids: HashSet<_> = round.options.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), 4);
        let idx = round.correct_index().unwrap();
        assert!(round.is_correct(round.options[idx].id));
    }

    #[test]
    fn round_tolerates_short_pool() {
        let pool = pool(2);
        let mut rng = rng_from_seed(Some(5));
        let round = build_round(&mut rng, &pool[0], &pool, 4);
        assert_eq!(round.options.len(), 2);
    }

    #[test]
    fn correct_answer_position_varies() {
        let pool = pool(10);
        let mut positions = HashSet::new();
        for seed in 0..60u64 {
            let mut rng = rng_from_seed(Some(seed));
            positions.insert(build_round(&mut rng, &pool[0], &pool, 4).correct_index().unwrap());
        }
        assert_eq!(positions.len(), 4);
    }

    #[test]
    fn rounds_have_distinct_targets() {
        let pool = pool(15);
        let mut rng = rng_from_seed(Some(21));
        let rounds = build_rounds(&mut rng, &pool, 10, 4);
        assert_eq!(rounds.len(), 10);
        let targets: HashSet<_> = rounds.iter().map(|r| r.target.id).collect();
        assert_eq!(targets.len(), 10);

        let few = build_rounds(&mut rng, &pool[..3], 10, 4);
        assert_eq!(few.len(), 3);
    }

    #[test]
    fn large_pool_with_repeats_yields_each_id_once() {
        let base = pool(5_000);
        let mut repeated = base.clone();
        repeated.extend(base.iter().cloned());
        let mut rng = rng_from_seed(Some(21));
        let out = sample_distractors(&mut rng, &base[0], &repeated, 4_999);
        assert_eq!(out.len(), 4_999);
        let ids: HashSet<_> = out.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), 4_999);
        assert!(!ids.contains(&base[0].id));
    }
}
