//! Park–Miller "minimal standard" LCG.

use ndstride_core::{Error, Result};
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::{state, Prng};

/// Modulus `2^31 - 1`.
pub(crate) const MODULUS: u32 = 2_147_483_647;
/// Multiplier.
pub(crate) const MULTIPLIER: u64 = 16_807;

/// Map an arbitrary `i32` onto a valid seed in `[1, 2^31 - 2]`.
pub(crate) fn normalize_seed(seed: i32) -> u32 {
    match seed.unsigned_abs() {
        0 => 1,
        s if s >= MODULUS => MODULUS - 1,
        s => s,
    }
}

#[inline]
pub(crate) fn step(x: u32) -> u32 {
    ((MULTIPLIER * x as u64) % MODULUS as u64) as u32
}

pub(crate) fn check_word(name: &str, what: &str, v: u32) -> Result<()> {
    if v == 0 || v >= MODULUS {
        return Err(Error::InvalidState(format!(
            "{name}: {what} {v} outside [1, {}]",
            MODULUS - 1
        )));
    }
    Ok(())
}

/// Linear congruential generator `x <- 16807 * x mod (2^31 - 1)`.
///
/// Outputs lie in `[1, 2^31 - 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minstd {
    state: u32,
    seed: [u32; 1],
}

impl Minstd {
    /// Create a generator. `0` becomes `1`, negative seeds are negated and
    /// values at or above the modulus are clamped to `2^31 - 2`.
    pub fn new(seed: i32) -> Self {
        let seed = normalize_seed(seed);
        debug!(seed, "minstd seeded");
        Self { state: seed, seed: [seed] }
    }

    /// Word for `RngCore`: the top 16 bits of two consecutive draws.
    #[inline]
    fn next_word(&mut self) -> u32 {
        let hi = self.next_int() >> 15;
        let lo = self.next_int() >> 15;
        (hi << 16) | lo
    }
}

impl Prng for Minstd {
    const NAME: &'static str = "minstd";
    const MIN: u32 = 1;
    const MAX: u32 = MODULUS - 1;

    #[inline]
    fn next_int(&mut self) -> u32 {
        self.state = step(self.state);
        self.state
    }

    #[inline]
    fn normalized(&mut self) -> f64 {
        (self.next_int() - 1) as f64 / (MODULUS - 1) as f64
    }

    fn seed(&self) -> &[u32] {
        &self.seed
    }

    fn state(&self) -> Vec<u32> {
        state::encode(&[&[self.state], &self.seed])
    }

    fn set_state(&mut self, s: &[u32]) -> Result<()> {
        let sections = state::decode(Self::NAME, s, &[Some(1), Some(1)])?;
        let (word, seed) = (sections[0][0], sections[1][0]);
        check_word(Self::NAME, "state", word)?;
        check_word(Self::NAME, "seed", seed)?;
        trace!(state = word, seed, "minstd state restored");
        self.state = word;
        self.seed = [seed];
        Ok(())
    }
}

impl_rng_core!(Minstd);

impl SeedableRng for Minstd {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore};

    #[test]
    fn test_reference_sequence() {
        let mut rng = Minstd::new(1);
        assert_eq!(rng.next_int(), 16807);
        assert_eq!(rng.next_int(), 282475249);
        assert_eq!(rng.next_int(), 1622650073);
    }

    #[test]
    fn test_seed_normalization() {
        assert_eq!(Minstd::new(0).seed(), &[1]);
        assert_eq!(Minstd::new(-5).seed(), &[5]);
        assert_eq!(Minstd::new(i32::MAX).seed(), &[MODULUS - 1]);
        assert_eq!(Minstd::new(i32::MIN).seed(), &[MODULUS - 1]);
    }

    #[test]
    fn test_deterministic() {
        let mut a = Minstd::new(42);
        let mut b = Minstd::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_int(), b.next_int());
        }
    }

    #[test]
    fn test_normalized_range() {
        let mut rng = Minstd::new(12345);
        for _ in 0..10_000 {
            let v = rng.normalized();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = Minstd::new(7);
        rng.next_int();
        let snapshot = rng.state();
        assert_eq!(snapshot.len(), 6);
        let expected: Vec<u32> = (0..5).map(|_| rng.next_int()).collect();

        rng.set_state(&snapshot).unwrap();
        let replay: Vec<u32> = (0..5).map(|_| rng.next_int()).collect();
        assert_eq!(replay, expected);

        let mut bad = snapshot.clone();
        bad[3] = 0;
        assert!(matches!(rng.set_state(&bad), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_rng_core() {
        let mut rng = Minstd::seed_from_u64(3);
        let mut bytes = [0u8; 7];
        rng.fill_bytes(&mut bytes);
        let x: f64 = rng.gen();
        assert!((0.0..1.0).contains(&x));
        assert_eq!(Minstd::from_seed(9i32.to_le_bytes()), Minstd::new(9));
    }
}
