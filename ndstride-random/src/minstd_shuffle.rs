//! MINSTD with a Bays–Durham shuffle table.

use ndstride_core::{Error, Result};
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::minstd::{check_word, normalize_seed, step, MODULUS};
use crate::{state, Prng};

const TABLE_SIZE: usize = 32;
const NUM_WARMUPS: usize = 8;

/// [`Minstd`](crate::Minstd) output decorrelated through a 32-entry
/// shuffle table.
///
/// Each draw picks table slot `floor(32 * last / m)`, returns its content
/// and refills the slot from the underlying LCG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinstdShuffle {
    table: [u32; TABLE_SIZE],
    /// Last value returned.
    shuffled: u32,
    /// Underlying LCG state.
    lcg: u32,
    seed: [u32; 1],
}

impl MinstdShuffle {
    /// Create a generator; seeds are normalized as for [`Minstd`](crate::Minstd).
    pub fn new(seed: i32) -> Self {
        let seed = normalize_seed(seed);
        let mut x = seed;
        for _ in 0..NUM_WARMUPS {
            x = step(x);
        }
        let mut table = [0u32; TABLE_SIZE];
        for slot in table.iter_mut().rev() {
            x = step(x);
            *slot = x;
        }
        debug!(seed, "minstd-shuffle seeded");
        Self {
            table,
            shuffled: table[0],
            lcg: table[0],
            seed: [seed],
        }
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        let hi = self.next_int() >> 15;
        let lo = self.next_int() >> 15;
        (hi << 16) | lo
    }
}

impl Prng for MinstdShuffle {
    const NAME: &'static str = "minstd-shuffle";
    const MIN: u32 = 1;
    const MAX: u32 = MODULUS - 1;

    #[inline]
    fn next_int(&mut self) -> u32 {
        let i = (TABLE_SIZE as f64 * (self.shuffled as f64 / MODULUS as f64)) as usize;
        self.shuffled = self.table[i];
        self.lcg = step(self.lcg);
        self.table[i] = self.lcg;
        self.shuffled
    }

    #[inline]
    fn normalized(&mut self) -> f64 {
        (self.next_int() - 1) as f64 / (MODULUS - 1) as f64
    }

    fn seed(&self) -> &[u32] {
        &self.seed
    }

    /// `| 1 | 3 | 32 | ...table | 2 | shuffled | lcg | 1 | seed |`
    fn state(&self) -> Vec<u32> {
        state::encode(&[&self.table, &[self.shuffled, self.lcg], &self.seed])
    }

    fn set_state(&mut self, s: &[u32]) -> Result<()> {
        let sections = state::decode(Self::NAME, s, &[Some(TABLE_SIZE), Some(2), Some(1)])?;
        for &v in sections[0] {
            check_word(Self::NAME, "table entry", v)?;
        }
        for &v in sections[1].iter().chain(sections[2]) {
            check_word(Self::NAME, "state", v)?;
        }
        let table: [u32; TABLE_SIZE] = sections[0]
            .try_into()
            .map_err(|_| Error::InvalidState(format!("{}: malformed table", Self::NAME)))?;
        trace!(seed = sections[2][0], "minstd-shuffle state restored");
        self.table = table;
        self.shuffled = sections[1][0];
        self.lcg = sections[1][1];
        self.seed = [sections[2][0]];
        Ok(())
    }
}

impl_rng_core!(MinstdShuffle);

impl SeedableRng for MinstdShuffle {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence() {
        let mut rng = MinstdShuffle::new(1);
        assert_eq!(rng.next_int(), 893351816);
        assert_eq!(rng.next_int(), 197493099);
        assert_eq!(rng.next_int(), 1624379149);
    }

    #[test]
    fn test_differs_from_plain_minstd() {
        let mut shuffled = MinstdShuffle::new(12345);
        let mut plain = crate::Minstd::new(12345);
        let a: Vec<u32> = (0..8).map(|_| shuffled.next_int()).collect();
        let b: Vec<u32> = (0..8).map(|_| plain.next_int()).collect();
        assert_ne!(a, b);
        assert_eq!(&a[..3], &[1982386332, 715426902, 424962143]);
    }

    #[test]
    fn test_values_in_range() {
        let mut rng = MinstdShuffle::new(-99);
        assert_eq!(rng.seed(), &[99]);
        for _ in 0..10_000 {
            let v = rng.next_int();
            assert!((MinstdShuffle::MIN..=MinstdShuffle::MAX).contains(&v));
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = MinstdShuffle::new(2024);
        for _ in 0..50 {
            rng.next_int();
        }
        let snapshot = rng.state();
        assert_eq!(snapshot.len(), 2 + 33 + 3 + 2);
        let expected: Vec<f64> = (0..20).map(|_| rng.normalized()).collect();

        let mut other = MinstdShuffle::new(1);
        other.set_state(&snapshot).unwrap();
        assert_eq!(other.state(), snapshot);
        let replay: Vec<f64> = (0..20).map(|_| other.normalized()).collect();
        assert_eq!(replay, expected);
        assert_eq!(other.seed(), &[2024]);
    }

    #[test]
    fn test_set_state_rejects_bad_table_length() {
        let mut rng = MinstdShuffle::new(3);
        let mut s = rng.state();
        s[2] = 31;
        assert!(matches!(rng.set_state(&s), Err(Error::InvalidState(_))));
    }
}
