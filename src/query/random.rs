use rand::Rng;

/// Source of uniform indices for random picks
pub trait RandomSource {
    /// Index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Adapter for any `rand` generator, e.g. a seeded `StdRng` in tests
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_thread_random_in_range() {
        let mut source = ThreadRandom;
        for len in 1..50 {
            assert!(source.pick_index(len) < len);
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource(StdRng::seed_from_u64(7));
        let mut b = RngSource(StdRng::seed_from_u64(7));
        let picks_a: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 10));
    }
}
