//! Random permutation source for shuffling.
//!
//! A [`Shuffler`] owns a seedable generator behind a lock, so one instance can
//! be shared between threads and replaced with a fixed seed in tests. The
//! crate keeps a process-wide instance, [`shared`], that the plain
//! [`shuffle`](crate::transform::shuffle) transform draws from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::sync::Mutex;

static SHARED: Shuffler = Shuffler::from_clock();

/// A lockable, reseedable source of random permutations.
pub struct Shuffler {
    /// `None` until first use when seeded from the clock.
    rng: Mutex<Option<ChaCha8Rng>>,
}

impl Shuffler {
    /// Creates a shuffler that seeds itself from the system clock on first use.
    ///
    /// Without the `std` feature there is no clock and the seed is `0`; call
    /// [`Shuffler::reseed`] to vary it.
    #[must_use]
    pub const fn from_clock() -> Self {
        Self {
            rng: Mutex::new(None),
        }
    }

    /// Creates a shuffler with a fixed seed.
    ///
    /// Two shufflers built from the same seed produce the same sequence of
    /// permutations.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::Shuffler;
    ///
    /// let a = Shuffler::from_seed(7);
    /// let b = Shuffler::from_seed(7);
    /// assert_eq!(a.permutation(10), b.permutation(10));
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shuffler around an existing generator.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(Some(rng)),
        }
    }

    /// Replaces the generator with one seeded by `seed`.
    pub fn reseed(&self, seed: u64) {
        *self.rng.lock() = Some(ChaCha8Rng::seed_from_u64(seed));
    }

    /// Returns a uniformly random permutation of `0..len`.
    #[must_use]
    pub fn permutation(&self, len: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..len).collect();
        let mut guard = self.rng.lock();
        let rng = guard.get_or_insert_with(|| {
            let seed = clock_seed();
            log::trace!("seeding shuffle source from clock: {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        });
        perm.shuffle(rng);
        drop(guard);
        perm
    }

    /// Returns a new sequence holding `cards` in a random order.
    ///
    /// Output position `i` holds `cards[perm[i]]` for a fresh permutation
    /// `perm`. The input is left untouched.
    #[must_use]
    pub fn shuffle(&self, cards: &[Card]) -> Vec<Card> {
        self.permutation(cards.len())
            .into_iter()
            .map(|i| cards[i])
            .collect()
    }

    /// Consumes the shuffler, returning its generator if it was ever seeded.
    #[must_use]
    pub fn into_rng(self) -> Option<ChaCha8Rng> {
        self.rng.into_inner()
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl core::fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shuffler")
            .field("seeded", &self.rng.lock().is_some())
            .finish()
    }
}

/// Returns the process-wide shuffler.
#[must_use]
pub fn shared() -> &'static Shuffler {
    &SHARED
}

/// Reseeds the process-wide shuffler.
///
/// Every later [`shuffle`](crate::transform::shuffle) draws from the new
/// sequence. Tests that need isolation should prefer their own [`Shuffler`].
pub fn reseed(seed: u64) {
    log::debug!("reseeding shared shuffle source with {seed}");
    SHARED.reseed(seed);
}

#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

#[cfg(not(feature = "std"))]
const fn clock_seed() -> u64 {
    0
}
