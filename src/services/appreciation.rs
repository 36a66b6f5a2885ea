use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the post-purchase market value appreciation percentage.
///
/// Injectable so purchase outcomes are reproducible under test; production
/// wiring uses a seeded [`StdRng`].
pub trait AppreciationRng: Send + Sync {
    /// A percentage in the inclusive range [10, 100].
    fn draw_percent(&self) -> i64;
}

/// Default [`AppreciationRng`] backed by a seedable PRNG.
pub struct SeededAppreciation {
    rng: Mutex<StdRng>,
}

impl SeededAppreciation {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AppreciationRng for SeededAppreciation {
    fn draw_percent(&self) -> i64 {
        self.rng
            .lock()
            .expect("appreciation rng lock poisoned")
            .gen_range(10..=100)
    }
}

/// Applies an appreciation draw to a market value, rounding down.
pub fn appreciate(market_value: i64, percent: i64) -> i64 {
    market_value + market_value * percent / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let rng = SeededAppreciation::from_seed(7);
        for _ in 0..1000 {
            let p = rng.draw_percent();
            assert!((10..=100).contains(&p), "draw {p} out of range");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededAppreciation::from_seed(42);
        let b = SeededAppreciation::from_seed(42);
        let first: Vec<i64> = (0..32).map(|_| a.draw_percent()).collect();
        let second: Vec<i64> = (0..32).map(|_| b.draw_percent()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn appreciation_bounds() {
        let value = 1_000_000;
        assert_eq!(appreciate(value, 10), 1_100_000);
        assert_eq!(appreciate(value, 100), 2_000_000);
    }

    #[test]
    fn appreciation_rounds_down() {
        assert_eq!(appreciate(999, 10), 999 + 99);
    }
}
