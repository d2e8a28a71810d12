//! The one shuffle every feature shares: distractor sampling, option order,
//! word-pool randomisation and matching-card layout all go through here.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Fisher-Yates shuffle in place.
pub fn shuffle_in_place<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(rng, &mut out);
    out
}

/// Uniform random subset of `min(count, items.len())` elements, in random order.
pub fn take_random<T: Clone, R: Rng>(rng: &mut R, items: &[T], count: usize) -> Vec<T> {
    let mut out = shuffled(rng, items);
    out.truncate(count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = rng_from_seed(Some(42));
        let items: Vec<u32> = (0..50).collect();
        let mut out = shuffled(&mut rng, &items);
        assert_ne!(out, items, "50 items should not survive a shuffle unchanged");
        out.sort_unstable();
        assert_eq!(out, items);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = rng_from_seed(Some(seed));
            shuffled(&mut rng, &(0..20).collect::<Vec<_>>())
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn take_random_caps_at_available_items() {
        let mut rng = rng_from_seed(Some(7));
        assert_eq!(take_random(&mut rng, &[1, 2, 3], 10).len(), 3);
        assert_eq!(take_random(&mut rng, &[1, 2, 3], 2).len(), 2);
        assert!(take_random::<u8, _>(&mut rng, &[], 4).is_empty());
    }

    #[test]
    fn empty_and_single_slices_are_fine() {
        let mut rng = rng_from_seed(Some(1));
        let mut empty: [u8; 0] = [];
        shuffle_in_place(&mut rng, &mut empty);
        let mut one = [5];
        shuffle_in_place(&mut rng, &mut one);
        assert_eq!(one, [5]);
    }

    #[test]
    fn every_position_is_reachable() {
        // The first element should land in each slot across enough seeds.
        let mut seen = [false; 4];
        for seed in 0..200u64 {
            let mut rng = rng_from_seed(Some(seed));
            let out = shuffled(&mut rng, &[0, 1, 2, 3]);
            let pos = out.iter().position(|&x| x == 0).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s), "positions reached: {seen:?}");
    }
}
