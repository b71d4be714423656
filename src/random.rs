//! Injectable randomness for the evasion policies and the decorations.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// Entropy-seeded generator for the live page. Not crypto secure; only drives
/// cosmetic motion.
#[derive(Clone, Debug)]
pub struct PageRng(SmallRng);

impl PageRng {
    /// Seed from browser crypto when the `rng` feature is on, else from the clock.
    pub fn from_entropy() -> Self {
        Self(SmallRng::seed_from_u64(entropy_seed()))
    }
}

impl RngCore for PageRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst)
    }
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("getrandom failed ({e}), seeding from clock");
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // Linear transform of the timestamp, same trick as the prototype RNG
    (now.to_bits())
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Replays a fixed list of draws, cycling when exhausted. Used to pin exact outputs.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_draws_stay_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "draw {v} out of range");
        }
    }

    #[test]
    fn entropy_seeded_rng_produces_varied_draws() {
        let mut rng = PageRng::from_entropy();
        let draws: Vec<f64> = (0..8).map(|_| rng.next_unit()).collect();
        assert!(draws.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn scripted_cycles_and_range_scales() {
        let mut s = ScriptedRandom::new(vec![0.0, 0.5]);
        assert_eq!(s.range(100.0, 200.0), 100.0);
        assert_eq!(s.range(100.0, 200.0), 150.0);
        assert_eq!(s.next_unit(), 0.0);
    }
}
