//! Allocation-free stable sort.
//!
//! A bottom-up merge sort whose merge step needs no scratch buffer. Two adjacent sorted runs
//! are merged in place with nothing but binary search and [`rotate`]:
//!
//! 1. Skip the prefix of the left run that is not greater than the head of the right run;
//!    those elements are already in their final place.
//! 2. Find how many elements at the head of the right run are strictly less than the new head
//!    of the left run.
//! 3. Rotate that block of the right run in front of what remains of the left run.
//!
//! Equal elements are never moved past each other, so the merge and thus the sort are stable.
//!
//! The price for zero heap allocation is paid in work. Comparisons stay within
//! `O(N log² N)`: a merge of two runs of length `r` does at most `r` rounds of two binary
//! searches. Moves are worse. Every round rotates the whole unconsumed rest of the left run,
//! so finely interleaved runs cost up to `O(r²)` moves per merge. On presorted or blocky input
//! the rounds are few and the sort is fast; on large random input `slice::sort` with its
//! buffer is far faster. Use this sort where allocating is not an option.

use crate::core::{by_key, less};
use crate::rotate::rotate;
use crate::search::{lower_bound_by, upper_bound_by};

/// Length of the runs produced by the initial pass.
const MIN_RUN_LEN: usize = 2;

/// Sorts the slice, preserving the order of equal elements, without allocating.
///
/// # Examples
///
/// ```
/// use rotsort::stable_sort;
///
/// let mut v = [5, 3, 3, 1, 4];
/// stable_sort(&mut v);
/// assert_eq!(v, [1, 3, 3, 4, 5]);
/// ```
#[inline]
pub fn stable_sort<T: Ord>(v: &mut [T]) {
    stable_sort_by(v, less);
}

/// Stable sort with `is_less` as the ordering.
///
/// # Examples
///
/// ```
/// use rotsort::stable_sort_by;
///
/// let mut v = [(3, 'a'), (1, 'x'), (3, 'b')];
/// stable_sort_by(&mut v, |a, b| a.0 < b.0);
/// assert_eq!(v, [(1, 'x'), (3, 'a'), (3, 'b')]);
/// ```
#[inline]
pub fn stable_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    stable_sort_impl(v, &mut is_less);
}

/// Stable sort on the keys produced by `projection`.
#[inline]
pub fn stable_sort_by_key<T, K, P>(v: &mut [T], projection: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    stable_sort_by(v, by_key(projection, less));
}

/// Stable sort on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn stable_sort_by_key_with<T, K, P, F>(v: &mut [T], projection: P, is_less: F)
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    stable_sort_by(v, by_key(projection, is_less));
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place.
///
/// Elements of the left run precede equal elements of the right run in the result.
///
/// # Panics
///
/// Panics if `mid > v.len()`.
///
/// # Examples
///
/// ```
/// use rotsort::merge;
///
/// let mut v = [1, 4, 7, 2, 3, 8];
/// merge(&mut v, 3);
/// assert_eq!(v, [1, 2, 3, 4, 7, 8]);
/// ```
#[inline]
pub fn merge<T: Ord>(v: &mut [T], mid: usize) {
    merge_by(v, mid, less);
}

/// [`merge`] with `is_less` as the ordering.
#[inline]
pub fn merge_by<T, F>(v: &mut [T], mid: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        mid <= v.len(),
        "merge point {mid} out of range for slice of length {}",
        v.len()
    );
    merge_impl(v, mid, &mut is_less);
}

/// [`merge`] on the keys produced by `projection`.
#[inline]
pub fn merge_by_key<T, K, P>(v: &mut [T], mid: usize, projection: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    merge_by(v, mid, by_key(projection, less));
}

/// [`merge`] on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn merge_by_key_with<T, K, P, F>(v: &mut [T], mid: usize, projection: P, is_less: F)
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    merge_by(v, mid, by_key(projection, is_less));
}

fn stable_sort_impl<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    for pair in v.chunks_exact_mut(MIN_RUN_LEN) {
        if is_less(&pair[1], &pair[0]) {
            pair.swap(0, 1);
        }
    }

    // `run_len < len <= isize::MAX`, so doubling cannot overflow.
    let mut run_len = MIN_RUN_LEN;
    while run_len < len {
        let mut start = 0;
        while start + run_len < len {
            let end = len.min(start + 2 * run_len);
            merge_impl(&mut v[start..end], run_len, is_less);
            start = end;
        }
        run_len *= 2;
    }
}

fn merge_impl<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut a_start = 0;
    let mut b_start = mid;

    while a_start < b_start && b_start < len {
        a_start += upper_bound_by(&v[a_start..b_start], &v[b_start], &mut *is_less);
        if a_start >= b_start {
            break;
        }

        // At least one element of the right run is less than `v[a_start]` under a valid
        // ordering; with an invalid one `b_offset` may be zero and the rotation is a no-op.
        let b_offset = lower_bound_by(&v[b_start..], &v[a_start], &mut *is_less);
        rotate(v, a_start, b_start + b_offset, b_start - a_start);

        b_start += b_offset;
        a_start += b_offset + 1;
    }
}
