//! Comparator and projection contract shared by every algorithm in the crate.
//!
//! Every operation is parameterized over two closures:
//! - a **projection** `FnMut(&T) -> K` deriving the comparable key of an element,
//! - a **predicate** `FnMut(&K, &K) -> bool` answering "is `a` less than `b`".
//!
//! The predicate must be a strict weak ordering (irreflexive, asymmetric, transitive, with
//! transitive incomparability). Two elements for which neither `is_less(a, b)` nor
//! `is_less(b, a)` holds are *equivalent*; stable algorithms keep equivalent elements in their
//! original relative order.
//!
//! A predicate that breaks these rules never causes memory unsafety. Results are then
//! unspecified, but every element of the input is still present exactly once in the output.
//!
//! The plain entry points (`stable_sort`, `lower_bound`, ...) use the identity projection and
//! [`less`]. The `_by` variants take an element predicate, `_by_key` a projection with
//! `K: Ord`, and `_by_key_with` both.

/// The default predicate, `a < b`.
#[inline(always)]
pub fn less<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a.lt(b)
}

/// Fuses a projection and a key predicate into a predicate over elements.
#[inline(always)]
pub(crate) fn by_key<T, K, P, F>(mut projection: P, mut is_less: F) -> impl FnMut(&T, &T) -> bool
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    move |a, b| is_less(&projection(a), &projection(b))
}

/// Reverses the operands of a predicate, turning "less" into "greater".
#[inline(always)]
pub(crate) fn reversed<T, F>(mut is_less: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    move |a, b| is_less(b, a)
}
