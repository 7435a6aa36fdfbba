//! The per-thread generator type.
//!
//! [`ThreadGenerator`] wraps a seeded [`StdRng`] together with the seed it
//! was created from and a process-unique identity token. Instances are
//! created by [`crate::thread_local`] on first access from each thread and
//! are exclusively owned by that thread for its lifetime; the type itself
//! carries no synchronisation.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::RandomError;

/// A pseudorandom generator exclusively owned by one thread.
///
/// The generator is seeded exactly once at construction and thereafter
/// evolves independently of every other thread's generator. The same seed
/// always produces the same sequence, which the integration tests use to
/// verify that repeated access continues one sequence rather than
/// reseeding.
///
/// # Examples
///
/// ```rust
/// use misc_random::with_generator;
///
/// let (id, seed) = with_generator(|g| (g.id(), g.seed()));
/// // Same thread, same generator.
/// assert_eq!(with_generator(|g| g.id()), id);
/// assert_eq!(with_generator(|g| g.seed()), seed);
/// ```
#[derive(Debug)]
pub struct ThreadGenerator {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for diagnostics).
    seed: u64,
    /// Process-unique identity token, assigned at creation.
    id: u64,
}

impl ThreadGenerator {
    /// Creates a generator seeded with `seed` and tagged with `id`.
    ///
    /// Construction happens only in [`crate::thread_local`], once per
    /// thread.
    pub(crate) fn from_seed(seed: u64, id: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            id,
        }
    }

    /// Returns the seed this generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns this generator's process-unique identity token.
    ///
    /// No two generators created in one process share a token, so
    /// distinct tokens observed on distinct threads prove the threads do
    /// not share a generator.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Draws a uniform value over the full `i32` range.
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.inner.gen()
    }

    /// Draws a uniform value in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidBound`] if `bound <= 0`.
    #[inline]
    pub fn next_int_below(&mut self, bound: i32) -> Result<i32, RandomError> {
        if bound <= 0 {
            return Err(RandomError::InvalidBound { bound });
        }
        Ok(self.inner.gen_range(0..bound))
    }

    /// Draws a uniform value in `[min, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::EmptyRange`] if `max <= min`.
    #[inline]
    pub fn next_int_between(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if max <= min {
            return Err(RandomError::EmptyRange { min, max });
        }
        Ok(self.inner.gen_range(min..max))
    }

    /// Draws a uniform value in `[0, 1)`.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Fills `buffer` with random bytes. Empty buffers are a no-op.
    #[inline]
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        self.inner.fill_bytes(buffer);
    }
}
