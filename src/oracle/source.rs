//! Randomness for secret codes
//!
//! The oracle draws secrets from an injected `CodeSource` owned by the
//! session, never from a process-wide generator.

use crate::core::Color;
use rand::Rng;
use rand::seq::SliceRandom;

/// Something that can pick distinct colours for a secret
pub trait CodeSource {
    /// Pick `k` distinct colours from `universe`, in random order
    ///
    /// Returns fewer than `k` colours only if the universe is smaller than `k`.
    fn draw_distinct(&mut self, universe: &[Color], k: usize) -> Vec<Color>;
}

impl<R: Rng + ?Sized> CodeSource for R {
    fn draw_distinct(&mut self, universe: &[Color], k: usize) -> Vec<Color> {
        let mut pool = universe.to_vec();
        pool.shuffle(self);
        pool.truncate(k);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Palette};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_distinct_members_of_the_universe() {
        let palette = Palette::classic();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let drawn = Code::new(rng.draw_distinct(palette.colors(), 4));
            assert_eq!(drawn.len(), 4);
            assert_eq!(drawn.first_repeat(), None);
            assert!(drawn.colors().iter().all(|&c| palette.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let palette = Palette::classic();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(
                a.draw_distinct(palette.colors(), 4),
                b.draw_distinct(palette.colors(), 4)
            );
        }
    }

    #[test]
    fn every_colour_eventually_leads() {
        let palette = Palette::classic();
        let mut rng = StdRng::seed_from_u64(1);
        let mut leaders = rustc_hash::FxHashSet::default();

        for _ in 0..500 {
            leaders.insert(rng.draw_distinct(palette.colors(), 4)[0]);
        }

        assert_eq!(leaders.len(), palette.len());
    }

    #[test]
    fn short_universe_truncates() {
        let palette = Palette::new("AB").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(rng.draw_distinct(palette.colors(), 4).len(), 2);
    }
}
