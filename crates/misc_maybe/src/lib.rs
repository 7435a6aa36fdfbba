//! # misc_maybe: Optional-Value Container
//!
//! This crate provides [`Maybe<T>`], a closed two-variant container
//! (present/absent) with:
//! - Structural equality derived from the payload's own equality
//! - Cross-payload-type equality through the [`MaybeLike`] capability trait
//! - Stable hash codes (`Absent` always yields the sentinel `0`)
//! - Pattern-matching dispatch that forces both states to be handled
//!   at every call site (`match_ref`, `match_map`)
//!
//! ## Leaf Crate Principle
//!
//! `misc_maybe` depends on no other workspace crate, with a single external
//! dependency:
//! - thiserror: Structured error types for the fallible dispatch forms
//!
//! ## Usage Examples
//!
//! ```rust
//! use misc_maybe::Maybe;
//!
//! let present = Maybe::some(5);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! assert!(present.has_value());
//! assert!(!absent.has_value());
//!
//! // Exhaustive dispatch: both branches supplied, exactly one runs.
//! let six = present.match_map(|x| x + 1, || -1);
//! assert_eq!(six, 6);
//!
//! // Absent values of different payload types compare equal.
//! let other: Maybe<String> = Maybe::none();
//! assert!(absent.eq_maybe(&other));
//! ```
//!
//! ## Why Not `Option<T>`?
//!
//! [`Maybe<T>`] exists for call sites that need the reference container's
//! exact contract: cross-payload-type equality and a fixed hash sentinel
//! for the absent state. [`From`] conversions to and from `Option<T>` are
//! provided so the two interoperate freely.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod maybe;

// Re-export commonly used items at the crate root
pub use error::MaybeError;
pub use maybe::{Maybe, MaybeLike};
