//! Fallible comparison.
//!
//! The heap routines in this crate only ever ask one question of the
//! ordering: "does `a` sort strictly before `b`?". [`TryCompare`] phrases
//! that question fallibly, so a comparison that can genuinely go wrong
//! (corrupted keys, lookups into external state, instrumented orderings in
//! tests) reports the failure instead of panicking, and the data structure
//! rolls itself back before surfacing it.
//!
//! Infallible comparators need no extra work: every [`Compare`] comparator
//! from the [`compare`] crate implements [`TryCompare`] with
//! `Error = Infallible`, which is what keeps the plain (non-`try_`) method
//! set of [`PriorityDeque`](crate::PriorityDeque) free of error plumbing.

use std::convert::Infallible;

use compare::Compare;

/// A strict-weak-ordering comparison that may fail.
///
/// `try_lt(a, b)` answers whether `a` orders strictly before `b`. Whenever
/// it succeeds the implementation must behave as a strict weak ordering:
/// `try_lt(x, x)` is `Ok(false)`, the order is transitive, and
/// incomparability is transitive. The comparison must not mutate its
/// operands; interior mutability for bookkeeping (call counting,
/// memoisation) is fine.
///
/// # Example
///
/// ```
/// use compare::natural;
/// use priority_deque::TryCompare;
///
/// let cmp = natural();
/// assert_eq!(cmp.try_lt(&1, &2), Ok(true));
/// assert_eq!(cmp.try_lt(&2, &2), Ok(false));
/// ```
pub trait TryCompare<T> {
    /// The failure reported by an unsuccessful comparison.
    type Error;

    /// Returns whether `a` orders strictly before `b`.
    ///
    /// # Errors
    ///
    /// Propagates whatever failure the underlying comparison hit. The
    /// operations in this crate restore their prior state before passing
    /// the error along.
    fn try_lt(&self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

impl<T, C> TryCompare<T> for C
where
    C: Compare<T>,
{
    type Error = Infallible;

    #[inline]
    fn try_lt(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(self.compares_lt(a, b))
    }
}
