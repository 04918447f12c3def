//! 32-bit Mersenne Twister (MT19937).

use ndstride_core::{Error, Result};
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::{state, Prng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const KNUTH_MULTIPLIER: u32 = 1_812_433_253;
const SEED_ARRAY_INIT: u32 = 19_650_218;
const ARRAY_MULTIPLIER_1: u32 = 1_664_525;
const ARRAY_MULTIPLIER_2: u32 = 1_566_083_941;
const TEMPERING_B: u32 = 0x9d2c_5680;
const TEMPERING_C: u32 = 0xefc6_0000;

/// Mersenne Twister with a period of `2^19937 - 1`.
///
/// ```
/// use ndstride_random::{Mt19937, Prng};
///
/// let mut rng = Mt19937::from_seed_array(&[0x123, 0x234, 0x345, 0x456]).unwrap();
/// assert_eq!(rng.next_int(), 1067595299);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    mt: Box<[u32; N]>,
    index: usize,
    seed: Vec<u32>,
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Knuth initialisation from a single word.
fn init_genrand(mt: &mut [u32; N], s: u32) {
    mt[0] = s;
    for i in 1..N {
        let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
        mt[i] = KNUTH_MULTIPLIER.wrapping_mul(prev).wrapping_add(i as u32);
    }
}

/// Mix a seed array into a Knuth-initialised state.
fn init_by_array(mt: &mut [u32; N], key: &[u32]) {
    init_genrand(mt, SEED_ARRAY_INIT);
    let (mut i, mut j) = (1usize, 0usize);
    for _ in 0..N.max(key.len()) {
        let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
        mt[i] = (mt[i] ^ prev.wrapping_mul(ARRAY_MULTIPLIER_1))
            .wrapping_add(key[j])
            .wrapping_add(j as u32);
        i += 1;
        j += 1;
        if i >= N {
            mt[0] = mt[N - 1];
            i = 1;
        }
        if j >= key.len() {
            j = 0;
        }
    }
    for _ in 0..N - 1 {
        let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
        mt[i] = (mt[i] ^ prev.wrapping_mul(ARRAY_MULTIPLIER_2)).wrapping_sub(i as u32);
        i += 1;
        if i >= N {
            mt[0] = mt[N - 1];
            i = 1;
        }
    }
    mt[0] = UPPER_MASK;
}

#[inline]
fn mix(upper: u32, lower: u32, far: u32) -> u32 {
    let w = (upper & UPPER_MASK) | (lower & LOWER_MASK);
    let mag = if w & 1 == 0 { 0 } else { MATRIX_A };
    far ^ (w >> 1) ^ mag
}

/// Regenerate all `N` words.
fn twist(mt: &mut [u32; N]) {
    for i in 0..N - M {
        mt[i] = mix(mt[i], mt[i + 1], mt[i + M]);
    }
    for i in N - M..N - 1 {
        mt[i] = mix(mt[i], mt[i + 1], mt[i + M - N]);
    }
    mt[N - 1] = mix(mt[N - 1], mt[0], mt[M - 1]);
}

#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & TEMPERING_B;
    y ^= (y << 15) & TEMPERING_C;
    y ^ (y >> 18)
}

impl Mt19937 {
    /// Create a generator from a single 32-bit seed.
    pub fn new(seed: u32) -> Self {
        let mut mt = Box::new([0u32; N]);
        init_genrand(&mut mt, seed);
        debug!(seed, "mt19937 seeded");
        Self {
            mt,
            index: N,
            seed: vec![seed],
        }
    }

    /// Create a generator from a seed array.
    ///
    /// A one-element array is equivalent to [`Mt19937::new`]; an empty
    /// array is rejected.
    pub fn from_seed_array(seed: &[u32]) -> Result<Self> {
        match seed {
            [] => Err(Error::InvalidSeed("mt19937 seed array must not be empty".into())),
            [s] => Ok(Self::new(*s)),
            key => {
                let mut mt = Box::new([0u32; N]);
                init_by_array(&mut mt, key);
                debug!(seed_len = key.len(), "mt19937 seeded from array");
                Ok(Self {
                    mt,
                    index: N,
                    seed: key.to_vec(),
                })
            }
        }
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        self.next_int()
    }
}

impl Prng for Mt19937 {
    const NAME: &'static str = "mt19937";
    const MIN: u32 = 0;
    const MAX: u32 = u32::MAX;

    #[inline]
    fn next_int(&mut self) -> u32 {
        if self.index >= N {
            twist(&mut self.mt);
            self.index = 0;
        }
        let y = self.mt[self.index];
        self.index += 1;
        temper(y)
    }

    /// 53-bit double from two draws: `((a >> 5) * 2^26 + (b >> 6)) / 2^53`.
    #[inline]
    fn normalized(&mut self) -> f64 {
        let a = (self.next_int() >> 5) as u64;
        let b = (self.next_int() >> 6) as u64;
        ((a << 26) + b) as f64 / (1u64 << 53) as f64
    }

    fn seed(&self) -> &[u32] {
        &self.seed
    }

    /// `| 1 | 3 | 624 | ...words | 1 | index | seed_len | ...seed |`
    fn state(&self) -> Vec<u32> {
        state::encode(&[&self.mt[..], &[self.index as u32], &self.seed])
    }

    fn set_state(&mut self, s: &[u32]) -> Result<()> {
        let sections = state::decode(Self::NAME, s, &[Some(N), Some(1), None])?;
        let index = sections[1][0] as usize;
        if index > N {
            return Err(Error::InvalidState(format!(
                "{}: state index {index} exceeds {N}",
                Self::NAME
            )));
        }
        self.mt.copy_from_slice(sections[0]);
        self.index = index;
        self.seed = sections[2].to_vec();
        trace!(index, seed_len = self.seed.len(), "mt19937 state restored");
        Ok(())
    }
}

impl_rng_core!(Mt19937);

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
