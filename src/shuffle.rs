//! Fisher-Yates shuffling on top of `random_interval`.
//!
//! Positions are visited from the last down to 1 and each is swapped with
//! a position drawn from [0..i] inclusive.  That order and bound fix both
//! the permutation and the number of generator outputs consumed.

use crate::pcg64::Pcg64;
use crate::sampler::random_interval;

/// Shuffle `items` in place and return the advanced generator.
/// Slices of length 0 or 1 are left alone and consume nothing.
#[must_use]
pub fn shuffle_in_place<T>(items: &mut [T], mut state: Pcg64) -> Pcg64 {
    for i in (1..items.len()).rev() {
        let (j, next) = random_interval(state, i as u64);
        state = next;
        let j = j as usize;
        if i != j {
            items.swap(i, j);
        }
    }
    state
}

/// Returns a permuted copy of `items` together with the advanced generator.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], state: Pcg64) -> (Vec<T>, Pcg64) {
    let mut out = items.to_vec();
    let state = shuffle_in_place(&mut out, state);
    (out, state)
}

/// A random ordering of `0..n`.
#[must_use]
pub fn permutation(n: usize, state: Pcg64) -> (Vec<usize>, Pcg64) {
    let mut out: Vec<usize> = (0..n).collect();
    let state = shuffle_in_place(&mut out, state);
    (out, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testutil::{init_logging, random_seed};

    #[test]
    fn known_permutation_test() {
        init_logging();
        let (p, _) = permutation(10, Pcg64::seed(42u64));
        assert_eq!(vec![5, 6, 0, 7, 3, 2, 4, 9, 1, 8], p);
        let (p, _) = permutation(10, Pcg64::seed(43u64));
        assert_eq!(vec![2, 8, 9, 5, 7, 1, 4, 6, 0, 3], p);
        let (p, _) = permutation(10, Pcg64::seed(0u64));
        assert_eq!(vec![4, 6, 2, 7, 3, 5, 9, 0, 8, 1], p);
    }

    #[test]
    fn determinism_test() {
        let input: Vec<u32> = (0..10).collect();
        let (a, sa) = shuffle(&input, Pcg64::seed(42u64));
        let (b, sb) = shuffle(&input, Pcg64::seed(42u64));
        assert_eq!(a, b);
        assert_eq!(sa, sb);
        let (c, _) = shuffle(&input, Pcg64::seed(43u64));
        assert_ne!(a, c);
    }

    #[test]
    fn is_permutation_test() {
        let seed = random_seed();
        let mut g = Pcg64::seed(seed);
        for n in [2usize, 3, 10, 100, 1000] {
            let input: Vec<String> = (0..n).map(|i| format!("row{}", i % 7)).collect();
            let (out, next) = shuffle(&input, g);
            g = next;
            assert_eq!(input.len(), out.len(), "seed {} n {}", seed, n);
            let mut a = input.clone();
            let mut b = out.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b, "seed {} n {}", seed, n);
        }
    }

    #[test]
    fn degenerate_test() {
        let g = Pcg64::seed(42u64);
        let empty: Vec<u8> = Vec::new();
        let (out, after) = shuffle(&empty, g);
        assert!(out.is_empty());
        assert_eq!(g, after);

        let (out, after) = shuffle(&['x'], g);
        assert_eq!(vec!['x'], out);
        assert_eq!(g, after);
    }

    #[test]
    fn in_place_matches_copy_test() {
        let g = Pcg64::seed(2024u64);
        let input: Vec<i32> = (0..50).collect();
        let (copied, s1) = shuffle(&input, g);
        let mut items = input.clone();
        let s2 = shuffle_in_place(&mut items, g);
        assert_eq!(copied, items);
        assert_eq!(s1, s2);
    }

    #[test]
    fn draw_count_test() {
        // Three items take two bounded draws, i = 2 then i = 1.
        let g = Pcg64::seed(42u64);
        let (_, after) = shuffle(&[1, 2, 3], g);
        let (_, manual) = random_interval(g, 2);
        let (_, manual) = random_interval(manual, 1);
        assert_eq!(manual, after);
    }
}
