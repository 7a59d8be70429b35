//! Seeded randomness for residents.
//!
//! Every resident draws from a private `SmallRng` whose seed is the run seed
//! mixed with the resident's id:
//!
//!   seed = run_seed ^ (id * GOLDEN)
//!
//! Moving someone into town never shifts anybody else's stream, so a fixed
//! `SimConfig::seed` replays the same day, including every "one of the top
//! three wants" pick.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Distribution, Standard};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// Fractional part of the golden ratio in 64 bits.
const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

/// A resident's random stream.
///
/// Kept in `AgentRngs` next to the roster rather than inside `Agent`, so a
/// decision can hold `&mut` to the stream while reading other residents.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, id: AgentId) -> Self {
        let mixed = (id.0 as u64).wrapping_mul(GOLDEN);
        Self(SmallRng::seed_from_u64(run_seed ^ mixed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// Coin flip weighted by `p`; out-of-range odds are clamped.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Any one element, or `None` for an empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }

    /// Index into the best `k` of a ranked list of `len` entries.
    #[inline]
    pub fn pick_top(&mut self, len: usize, k: usize) -> Option<usize> {
        match len.min(k.max(1)) {
            0 => None,
            n => Some(self.0.gen_range(0..n)),
        }
    }

    /// Heading for a wander step, in radians.
    #[inline]
    pub fn angle(&mut self) -> f32 {
        self.0.gen_range(0.0..std::f32::consts::TAU)
    }
}
