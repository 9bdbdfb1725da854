//! Random triangles with replay tokens.
//!
//! Model
//! - Each corner is drawn uniformly from the square `[-h, h]^2`, as a unit
//!   draw in `[-1, 1]^2` scaled by `h` so that huge `h` cannot overflow.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a stream can be regenerated without drawing `0..k`.

use crate::point::Point2D;
use crate::triangle::Triangle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Half side length of the sampling square. Any positive finite value is
    /// valid; non-positive or non-finite values fall back to the default.
    pub half_extent: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self { half_extent: 1.0 }
    }
}

impl SampleCfg {
    /// Half extent the sampler actually uses.
    #[inline]
    pub fn extent(&self) -> f64 {
        if self.half_extent.is_finite() && self.half_extent > 0.0 {
            self.half_extent
        } else {
            Self::default().half_extent
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one triangle; the same `(cfg, tok)` always gives the same triangle.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let h = cfg.extent();
    let mut unit = || rng.gen_range(-1.0..=1.0) * h;
    let mut corner = || Point2D::new(unit(), unit());
    let one = corner();
    let two = corner();
    let three = corner();
    Triangle::new(one, two, three)
}

/// Draw `count` triangles with tokens `(seed, 0..count)`.
pub fn draw_triangles(cfg: SampleCfg, seed: u64, count: usize) -> Vec<Triangle> {
    (0..count as u64)
        .map(|index| draw_triangle(cfg, ReplayToken { seed, index }))
        .collect()
}
