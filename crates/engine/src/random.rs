//! Injectable randomness for the variation generator.
//!
//! Every `rand::RngCore` is a [`RandomSource`], so callers pass
//! `rand::thread_rng()` in production and `StdRng::seed_from_u64(..)` where
//! output must be reproducible.

use rand::RngCore;
use uuid::Uuid;

pub trait RandomSource {
    /// 64 uniformly distributed bits.
    fn next_bits(&mut self) -> u64;

    /// Uniform float in `[0, 1)`.
    fn next(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `[0, n)`; returns 0 when `n` is 0.
    ///
    /// Draws below `2^64 mod n` are rejected so every residue is equally likely.
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let n = n as u64;
        let threshold = n.wrapping_neg() % n;
        loop {
            let bits = self.next_bits();
            if bits >= threshold {
                return (bits % n) as usize;
            }
        }
    }

    /// Uniform integer in `[lo, hi]`. An empty range yields `lo`.
    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        lo + self.below(hi - lo + 1)
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Random (version 4) UUID drawn from this source.
    fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_bits().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_bits().to_le_bytes());
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_bits(&mut self) -> u64 {
        self.next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed sequence of raw values.
    struct Scripted {
        values: Vec<u64>,
        cursor: usize,
    }

    impl RandomSource for Scripted {
        fn next_bits(&mut self) -> u64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    #[test]
    fn test_next_is_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = RandomSource::next(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
        let mut max = Scripted {
            values: vec![u64::MAX],
            cursor: 0,
        };
        assert!(max.next() < 1.0);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..500 {
            let v = rng.range_inclusive(3, 6);
            assert!((3..=6).contains(&v));
            seen_lo |= v == 3;
            seen_hi |= v == 6;
        }
        assert!(seen_lo && seen_hi);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(5, 2), 5);
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_index_zero_shuffle_rotates_first_element_to_end() {
        // 12 is divisible by 2, 3 and 4, so every swap picks index 0 and
        // the head travels to the tail.
        let mut source = Scripted {
            values: vec![12],
            cursor: 0,
        };
        let mut items = vec!['a', 'b', 'c', 'd'];
        source.shuffle(&mut items);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_below_rejects_biased_draws() {
        // 2^64 mod 3 == 1, so a raw 0 falls in the biased zone and is redrawn.
        let mut source = Scripted {
            values: vec![0, 5],
            cursor: 0,
        };
        assert_eq!(source.below(3), 2);
        assert_eq!(source.cursor, 2);

        // Powers of two have no biased zone.
        let mut zeros = Scripted {
            values: vec![0],
            cursor: 0,
        };
        assert_eq!(zeros.below(4), 0);
        assert_eq!(zeros.cursor, 1);

        let mut max = Scripted {
            values: vec![u64::MAX],
            cursor: 0,
        };
        assert_eq!(max.below(3), 0);
    }

    #[test]
    fn test_below_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut counts = [0usize; 6];
        for _ in 0..6000 {
            counts[rng.below(6)] += 1;
        }
        assert!(counts.iter().all(|&c| (800..1200).contains(&c)), "{counts:?}");
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.uuid().get_version_num(), 4);
    }
}
