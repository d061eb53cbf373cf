//! Binary search over sorted slices: lower bound, upper bound and exact lookup.
//!
//! All searches run the same branchless loop. The search window only ever shrinks by halving,
//! and the predicate is evaluated exactly once per iteration, so the number of comparisons is
//! `floor(log2(len)) + 1` regardless of where the answer lies. The window update compiles to a
//! conditional move instead of a data-dependent branch.
//!
//! The slice must be sorted (partitioned, strictly speaking) under the same projection and
//! predicate that are passed to the search.

use crate::core::less;

/// Returns the first index at which `go_right` is false.
///
/// `go_right` must be true for a (possibly empty) prefix of `v` and false for the rest.
#[inline(always)]
fn partition_point_branchless<T, F>(v: &[T], mut go_right: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut start = 0;
    let mut size = v.len();

    while size > 0 {
        let leftover = size % 2;
        size /= 2;
        let check = start + size;
        let start_if_right = check + leftover;

        // `check < start + old_size <= v.len()`, the window never leaves the slice.
        start = if go_right(&v[check]) {
            start_if_right
        } else {
            start
        };
    }

    start
}

/// Returns the index of the first element that is not less than `value`.
///
/// Equals the number of elements less than `value`; `v.len()` if there is none.
///
/// # Examples
///
/// ```
/// use rotsort::lower_bound;
///
/// let v = [2, 4, 6, 6, 6, 8];
/// assert_eq!(lower_bound(&v, &6), 2);
/// assert_eq!(lower_bound(&v, &9), 6);
/// ```
#[inline]
pub fn lower_bound<T: Ord>(v: &[T], value: &T) -> usize {
    lower_bound_by(v, value, less)
}

/// [`lower_bound`] using `is_less` as the ordering.
#[inline]
pub fn lower_bound_by<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point_branchless(v, |elem| is_less(elem, value))
}

/// [`lower_bound`] over the keys produced by `projection`.
#[inline]
pub fn lower_bound_by_key<T, K, P>(v: &[T], key: &K, projection: P) -> usize
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    lower_bound_by_key_with(v, key, projection, less)
}

/// [`lower_bound`] over the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn lower_bound_by_key_with<T, K, P, F>(
    v: &[T],
    key: &K,
    mut projection: P,
    mut is_less: F,
) -> usize
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    partition_point_branchless(v, |elem| is_less(&projection(elem), key))
}

/// Returns the index of the first element that is greater than `value`.
///
/// Equals the number of elements less than or equal to `value`.
///
/// # Examples
///
/// ```
/// use rotsort::upper_bound;
///
/// let v = [2, 4, 6, 6, 6, 8];
/// assert_eq!(upper_bound(&v, &6), 5);
/// assert_eq!(upper_bound(&v, &1), 0);
/// ```
#[inline]
pub fn upper_bound<T: Ord>(v: &[T], value: &T) -> usize {
    upper_bound_by(v, value, less)
}

/// [`upper_bound`] using `is_less` as the ordering.
#[inline]
pub fn upper_bound_by<T, F>(v: &[T], value: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point_branchless(v, |elem| !is_less(value, elem))
}

/// [`upper_bound`] over the keys produced by `projection`.
#[inline]
pub fn upper_bound_by_key<T, K, P>(v: &[T], key: &K, projection: P) -> usize
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    upper_bound_by_key_with(v, key, projection, less)
}

/// [`upper_bound`] over the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn upper_bound_by_key_with<T, K, P, F>(
    v: &[T],
    key: &K,
    mut projection: P,
    mut is_less: F,
) -> usize
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    partition_point_branchless(v, |elem| !is_less(key, &projection(elem)))
}

/// Looks up `value` in a sorted slice.
///
/// Returns the index of the first element equivalent to `value`, or `None` if the slice holds
/// no such element.
///
/// # Examples
///
/// ```
/// use rotsort::binary_search;
///
/// let v = [2, 4, 6, 6, 6, 8];
/// assert_eq!(binary_search(&v, &6), Some(2));
/// assert_eq!(binary_search(&v, &5), None);
/// ```
#[inline]
pub fn binary_search<T: Ord>(v: &[T], value: &T) -> Option<usize> {
    binary_search_by(v, value, less)
}

/// [`binary_search`] using `is_less` as the ordering.
#[inline]
pub fn binary_search_by<T, F>(v: &[T], value: &T, mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let index = lower_bound_by(v, value, &mut is_less);
    (index < v.len() && !is_less(value, &v[index])).then_some(index)
}

/// [`binary_search`] over the keys produced by `projection`.
#[inline]
pub fn binary_search_by_key<T, K, P>(v: &[T], key: &K, projection: P) -> Option<usize>
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    binary_search_by_key_with(v, key, projection, less)
}

/// [`binary_search`] over the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn binary_search_by_key_with<T, K, P, F>(
    v: &[T],
    key: &K,
    mut projection: P,
    mut is_less: F,
) -> Option<usize>
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    let index = lower_bound_by_key_with(v, key, &mut projection, &mut is_less);
    (index < v.len() && !is_less(key, &projection(&v[index]))).then_some(index)
}
