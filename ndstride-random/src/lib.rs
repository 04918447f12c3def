//! # ndstride-random
//!
//! Seedable base pseudorandom number generators:
//!
//! - [`Minstd`]: Park–Miller "minimal standard" linear congruential generator.
//! - [`MinstdShuffle`]: `Minstd` output passed through a Bays–Durham shuffle table.
//! - [`Mt19937`]: 32-bit Mersenne Twister.
//!
//! Every generator implements [`Prng`] (raw integers, normalized doubles,
//! seed and state access) as well as `rand::RngCore` and
//! `rand::SeedableRng`, so it can drive any `rand` distribution.
//!
//! ```
//! use ndstride_random::{Mt19937, Prng};
//!
//! let mut rng = Mt19937::new(5489);
//! assert_eq!(rng.next_int(), 3499211612);
//!
//! let snapshot = rng.state();
//! let a = rng.normalized();
//! rng.set_state(&snapshot).unwrap();
//! assert_eq!(rng.normalized(), a);
//! ```
//!
//! ## State arrays
//!
//! `state()` returns a self-describing `u32` array:
//! `| version | num_sections | len_0 | ...section_0 | len_1 | ...section_1 | ... |`.
//! The last section always holds the seed. `set_state` validates the
//! layout before adopting it.

/// `rand::RngCore` for a generator with an inherent `next_word()` yielding
/// uniformly distributed 32-bit words.
macro_rules! impl_rng_core {
    ($ty:ty) => {
        impl rand::RngCore for $ty {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                self.next_word()
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                let lo = self.next_word() as u64;
                let hi = self.next_word() as u64;
                (hi << 32) | lo
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                for chunk in dest.chunks_mut(4) {
                    let bytes = self.next_word().to_le_bytes();
                    chunk.copy_from_slice(&bytes[..chunk.len()]);
                }
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    };
}

mod minstd;
mod minstd_shuffle;
mod mt19937;
mod state;

pub use minstd::Minstd;
pub use minstd_shuffle::MinstdShuffle;
pub use mt19937::Mt19937;

use ndstride_core::Result;

/// A seedable generator of pseudorandom 32-bit integers.
pub trait Prng {
    /// Generator name.
    const NAME: &'static str;
    /// Smallest value returned by [`Prng::next_int`].
    const MIN: u32;
    /// Largest value returned by [`Prng::next_int`].
    const MAX: u32;

    /// Next raw value in `[MIN, MAX]`.
    fn next_int(&mut self) -> u32;

    /// Next value in `[0, 1)`.
    fn normalized(&mut self) -> f64;

    /// The seed the generator was created from.
    fn seed(&self) -> &[u32];

    /// Snapshot of the full generator state.
    fn state(&self) -> Vec<u32>;

    /// Restore a snapshot taken with [`Prng::state`].
    fn set_state(&mut self, state: &[u32]) -> Result<()>;
}

