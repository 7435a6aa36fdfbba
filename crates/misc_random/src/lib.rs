//! # misc_random: Per-Thread Pseudorandom Number Generation
//!
//! This crate provides a process-wide random facility that lazily creates
//! one generator per calling thread, so that:
//! - Threads never contend on a shared generator's internal state
//! - Threads never observe correlated sequences
//!
//! A single shared PRNG behind a lock would serialise all random-number
//! consumption across threads. Seeding each per-thread generator from
//! wall-clock time instead would hand identical seeds to threads created
//! in the same time quantum. This crate takes the third road: one
//! mutex-guarded seed source, used only to draw one seed per thread, and
//! an independently evolving [`ThreadGenerator`] cached in thread-local
//! storage for the thread's lifetime.
//!
//! ## Not Cryptographically Secure
//!
//! The facility targets simulation, sampling, and randomised algorithms.
//! Do not use it for security-sensitive randomness.
//!
//! ## Usage Examples
//!
//! ```rust
//! use misc_random::{next_double, next_int_below, with_generator};
//!
//! // Free-function facade: delegates to the calling thread's generator.
//! let d = next_double();
//! assert!((0.0..1.0).contains(&d));
//!
//! let bounded = next_int_below(100).unwrap();
//! assert!((0..100).contains(&bounded));
//!
//! // Direct access to the thread's generator for batched draws.
//! let sum: i64 = with_generator(|g| (0..10).map(|_| g.next_int() as i64).sum());
//! let _ = sum;
//! ```
//!
//! ## Bounded Draw Contract
//!
//! The bounded forms return an error instead of panicking on an empty or
//! inverted range:
//!
//! ```rust
//! use misc_random::{next_int_between, RandomError};
//!
//! let err = next_int_between(10, 5).unwrap_err();
//! assert_eq!(err, RandomError::EmptyRange { min: 10, max: 5 });
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod generator;
pub mod thread_local;

// Re-export commonly used items at the crate root
pub use error::RandomError;
pub use generator::ThreadGenerator;
pub use thread_local::{
    fill_bytes, generator_id, generator_seed, next_double, next_int, next_int_below,
    next_int_between, next_seed, with_generator,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_root_exports() {
        let _ = next_seed();
        let _ = generator_id();
        let _: Result<i32, RandomError> = next_int_below(10);
    }
}
