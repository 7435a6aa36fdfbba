//! The [`Maybe`] optional-value container and the [`MaybeLike`] capability trait.
//!
//! `Maybe<T>` is a tagged union over exactly two states, `Present(T)` and
//! `Absent`. It is immutable once constructed and freely shareable across
//! threads when `T` is. Equality is structural: two values are equal iff
//! both are absent, or both are present with payloads equal under `T`'s
//! own equality.
//!
//! Cross-payload-type comparison goes through [`MaybeLike`], a minimal
//! "is this optional, and is it absent" capability. Any two absent
//! optionals are interchangeable regardless of their declared payload
//! type; a present optional never equals an optional of a different
//! concrete payload type.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::MaybeError;

/// Minimal capability for comparing optionals across payload types.
///
/// Implemented for every `Maybe<T>` with `T: 'static`. The trait carries
/// just enough to answer "is it absent" plus a downcast hook, so that
/// [`Maybe::eq_maybe`] can compare payloads when the concrete types agree
/// and fall back to absent-equals-absent when they do not.
///
/// # Examples
/// ```
/// use misc_maybe::{Maybe, MaybeLike};
///
/// let a: Maybe<i32> = Maybe::none();
/// let b: Maybe<String> = Maybe::none();
///
/// // Both absent: equal despite different payload types.
/// assert!(a.eq_maybe(&b));
/// ```
pub trait MaybeLike {
    /// True if the optional currently holds a value.
    fn has_value(&self) -> bool;

    /// Upcast for concrete-type recovery during cross-type comparison.
    fn as_any(&self) -> &dyn Any;
}

/// A closed two-variant optional-value container.
///
/// Exactly one variant is active. Construction goes through the
/// [`Maybe::some`] and [`Maybe::none`] factories (the variants are public
/// so the type works in `match` expressions); there is no mutation after
/// construction.
///
/// # Payload Access Contract
///
/// [`Maybe::value`] and [`Maybe::into_value`] are only meaningful when
/// [`Maybe::has_value`] is true. Reading the payload of an absent value
/// panics rather than returning a substitute: a silent zero value would
/// mask exactly the class of bug this type exists to prevent. Use
/// [`Maybe::get`] for checked access.
///
/// # Examples
/// ```
/// use misc_maybe::Maybe;
///
/// let m = Maybe::some("hello");
/// assert!(m.has_value());
/// assert_eq!(*m.value(), "hello");
///
/// let n: Maybe<&str> = Maybe::none();
/// assert!(n.get().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// The value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    /// Constructs a present value wrapping `value` as given.
    ///
    /// Always succeeds; no validation is applied. A present value may
    /// legally wrap a payload that is itself "empty" (an absent
    /// `Maybe<U>`, a `None` option, an empty string).
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// let m = Maybe::some(42);
    /// assert!(m.has_value());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Constructs an absent value.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// let m: Maybe<i32> = Maybe::none();
    /// assert!(!m.has_value());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Maybe::Absent
    }

    /// True iff this value was constructed via [`Maybe::some`].
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns a reference to the wrapped payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent. Callers must check
    /// [`Maybe::has_value`] first or use [`Maybe::get`].
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// let m = Maybe::some(7);
    /// assert_eq!(*m.value(), 7);
    /// ```
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::value()` on an `Absent` value"),
        }
    }

    /// Returns the wrapped payload by value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::into_value()` on an `Absent` value"),
        }
    }

    /// Checked payload access: `Some(&T)` when present, `None` when absent.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).get(), Some(&3));
    /// assert_eq!(Maybe::<i32>::none().get(), None);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// Invokes exactly one of the two callbacks depending on the state.
    ///
    /// The payload is passed by reference to `on_present` when present.
    /// Supplying both callbacks at the call site forces exhaustive
    /// handling of both states.
    ///
    /// # Examples
    /// ```
    /// use std::cell::Cell;
    /// use misc_maybe::Maybe;
    ///
    /// let seen = Cell::new(0);
    /// Maybe::some(5).match_ref(|x| seen.set(*x), || seen.set(-1));
    /// assert_eq!(seen.get(), 5);
    /// ```
    #[inline]
    pub fn match_ref<F, G>(&self, on_present: F, on_absent: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Invokes exactly one of the two callbacks and returns its result.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).match_map(|x| x + 1, || -1), 6);
    /// assert_eq!(Maybe::<i32>::none().match_map(|x| x + 1, || -1), -1);
    /// ```
    #[inline]
    pub fn match_map<K, F, G>(&self, on_present: F, on_absent: G) -> K
    where
        F: FnOnce(&T) -> K,
        G: FnOnce() -> K,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Fallible side-effecting dispatch with optional handlers.
    ///
    /// Ports the reference contract where handlers may be unset: both
    /// handlers are validated before any dispatch occurs, so a missing
    /// handler fails for present and absent receivers alike.
    ///
    /// # Errors
    ///
    /// [`MaybeError::MissingHandler`] if either handler is `None`.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::{Maybe, MaybeError};
    ///
    /// let m = Maybe::some(1);
    /// let err = m
    ///     .try_match_ref(None::<fn(&i32)>, Some(|| {}))
    ///     .unwrap_err();
    /// assert_eq!(err, MaybeError::MissingHandler { handler: "on_present" });
    /// ```
    pub fn try_match_ref<F, G>(
        &self,
        on_present: Option<F>,
        on_absent: Option<G>,
    ) -> Result<(), MaybeError>
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        let on_present = on_present.ok_or(MaybeError::MissingHandler {
            handler: "on_present",
        })?;
        let on_absent = on_absent.ok_or(MaybeError::MissingHandler {
            handler: "on_absent",
        })?;
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
        Ok(())
    }

    /// Fallible value-producing dispatch with optional handlers.
    ///
    /// # Errors
    ///
    /// [`MaybeError::MissingHandler`] if either handler is `None`,
    /// regardless of the receiver's state.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// let m = Maybe::some(5);
    /// let r = m.try_match_map(Some(|x: &i32| x + 1), Some(|| -1));
    /// assert_eq!(r, Ok(6));
    /// ```
    pub fn try_match_map<K, F, G>(
        &self,
        on_present: Option<F>,
        on_absent: Option<G>,
    ) -> Result<K, MaybeError>
    where
        F: FnOnce(&T) -> K,
        G: FnOnce() -> K,
    {
        let on_present = on_present.ok_or(MaybeError::MissingHandler {
            handler: "on_present",
        })?;
        let on_absent = on_absent.ok_or(MaybeError::MissingHandler {
            handler: "on_absent",
        })?;
        Ok(match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        })
    }
}

impl<T: Hash> Maybe<T> {
    /// Returns the stable hash code for this value.
    ///
    /// `Absent` always yields the fixed sentinel `0`, independent of the
    /// payload type. `Present` yields the payload's hash. A payload that
    /// is itself an optional hashes through its own `hash_code`-compatible
    /// `Hash` impl, so inner absence stays distinguishable.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::none().hash_code(), 0);
    /// assert_eq!(Maybe::<String>::none().hash_code(), 0);
    /// assert_ne!(Maybe::some(1).hash_code(), 0);
    /// ```
    pub fn hash_code(&self) -> u64 {
        match self {
            Maybe::Present(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            }
            Maybe::Absent => 0,
        }
    }
}

impl<T: PartialEq + 'static> Maybe<T> {
    /// Structural equality across any concrete optional type.
    ///
    /// If `other` is a `Maybe<T>` of the same payload type, this is full
    /// structural equality. Otherwise the two are equal only when both
    /// are absent: absent values are interchangeable across payload
    /// types, while a present value never equals an optional of a
    /// different concrete payload type. Never panics.
    ///
    /// # Examples
    /// ```
    /// use misc_maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().eq_maybe(&Maybe::<String>::none()));
    /// assert!(!Maybe::some(1).eq_maybe(&Maybe::some("1")));
    /// assert!(Maybe::some(1).eq_maybe(&Maybe::some(1)));
    /// ```
    pub fn eq_maybe(&self, other: &dyn MaybeLike) -> bool {
        if let Some(concrete) = other.as_any().downcast_ref::<Maybe<T>>() {
            return self == concrete;
        }
        !self.has_value() && !other.has_value()
    }
}

impl<T: 'static> MaybeLike for Maybe<T> {
    fn has_value(&self) -> bool {
        Maybe::has_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T> Default for Maybe<T> {
    /// The default optional is absent.
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
