//! Seeded random sequences for tests and benchmarks.

use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Draws `length` symbols uniformly from `alpha`. The same seed always gives
/// the same sequence.
///
/// ## Panics
///
/// Panics if `alpha` is empty and `length` is not zero.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Draws a sequence as in [`rand_sequence`], then a copy of it where each
/// position is independently replaced by a random symbol of `alpha` with
/// probability `1 / every`. Deletions and insertions are not simulated.
///
/// ## Panics
///
/// Panics if `alpha` is empty and `length` is not zero, or if `every` is zero.
#[must_use]
pub fn rand_related_pair(alpha: &[u8], length: usize, every: u32, seed: u64) -> (Vec<u8>, Vec<u8>) {
    let original = rand_sequence(alpha, length, seed);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(1));
    let mutated = original
        .iter()
        .map(|&b| {
            if rng.next_u32() % every == 0 {
                alpha[rng.next_u32() as usize % alpha.len()]
            } else {
                b
            }
        })
        .collect();
    (original, mutated)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
        assert_eq!(random_sequence, rand_sequence(b"ATGC", LEN, 42));
    }

    #[test]
    fn related_pair() {
        let (original, mutated) = rand_related_pair(b"ACDEFGHIKLMNPQRSTVWY", 1000, 10, 7);
        assert_eq!(original.len(), mutated.len());

        let differences = original.iter().zip(&mutated).filter(|(a, b)| a != b).count();
        assert!(differences > 0);
        assert!(differences < 500);

        let (same, _) = rand_related_pair(b"ACGT", 0, 1, 3);
        assert!(same.is_empty());
    }
}
