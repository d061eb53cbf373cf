//! Unstable sorts and order predicates.
//!
//! - [`intro_sort`]: quicksort that falls back to heap sort once recursion gets too deep and
//!   to insertion sort on short partitions. `O(N log N)` worst case, no allocation.
//! - [`heap_sort`]: `O(N log N)` worst case, no allocation.
//! - [`heapify`] / [`is_heap`]: binary heap in array layout where no child is less than its
//!   parent, so the least element sits at index 0.
//! - [`is_sorted`]: no element is less than its predecessor.
//!
//! Neither sort preserves the order of equal elements.

use crate::core::{by_key, less, reversed};

/// Partitions of at most this many elements are finished with insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 16;

/// Sorts the slice with introspective sort. Equal elements may be reordered.
///
/// # Examples
///
/// ```
/// use rotsort::intro_sort;
///
/// let mut v = [9, -3, 4, 0, 4];
/// intro_sort(&mut v);
/// assert_eq!(v, [-3, 0, 4, 4, 9]);
/// ```
#[inline]
pub fn intro_sort<T: Ord>(v: &mut [T]) {
    intro_sort_by(v, less);
}

/// [`intro_sort`] with `is_less` as the ordering.
#[inline]
pub fn intro_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let limit = 2 * len.ilog2();
    intro_sort_recurse(v, limit, &mut is_less);
}

/// [`intro_sort`] on the keys produced by `projection`.
#[inline]
pub fn intro_sort_by_key<T, K, P>(v: &mut [T], projection: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    intro_sort_by(v, by_key(projection, less));
}

/// [`intro_sort`] on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn intro_sort_by_key_with<T, K, P, F>(v: &mut [T], projection: P, is_less: F)
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    intro_sort_by(v, by_key(projection, is_less));
}

/// Sorts the slice with heap sort. Equal elements may be reordered.
///
/// # Examples
///
/// ```
/// use rotsort::heap_sort;
///
/// let mut v = ["pear", "fig", "apple"];
/// heap_sort(&mut v);
/// assert_eq!(v, ["apple", "fig", "pear"]);
/// ```
#[inline]
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, less);
}

/// [`heap_sort`] with `is_less` as the ordering.
#[inline]
pub fn heap_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }
    heap_sort_impl(v, &mut is_less);
}

/// [`heap_sort`] on the keys produced by `projection`.
#[inline]
pub fn heap_sort_by_key<T, K, P>(v: &mut [T], projection: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    heap_sort_by(v, by_key(projection, less));
}

/// [`heap_sort`] on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn heap_sort_by_key_with<T, K, P, F>(v: &mut [T], projection: P, is_less: F)
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    heap_sort_by(v, by_key(projection, is_less));
}

/// Rearranges the slice into a heap whose least element is at index 0.
///
/// Runs in `O(N)`.
///
/// # Examples
///
/// ```
/// use rotsort::{heapify, is_heap};
///
/// let mut v = [7, 2, 9, 1, 5];
/// heapify(&mut v);
/// assert_eq!(v[0], 1);
/// assert!(is_heap(&v));
/// ```
#[inline]
pub fn heapify<T: Ord>(v: &mut [T]) {
    heapify_by(v, less);
}

/// [`heapify`] with `is_less` as the ordering.
#[inline]
pub fn heapify_by<T, F>(v: &mut [T], is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // `sift_down` keeps the greatest element on top; flipping the ordering keeps the least.
    let mut is_greater = reversed(is_less);
    build_heap(v, &mut is_greater);
}

/// [`heapify`] on the keys produced by `projection`.
#[inline]
pub fn heapify_by_key<T, K, P>(v: &mut [T], projection: P)
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    heapify_by(v, by_key(projection, less));
}

/// [`heapify`] on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn heapify_by_key_with<T, K, P, F>(v: &mut [T], projection: P, is_less: F)
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    heapify_by(v, by_key(projection, is_less));
}

/// Returns `true` if no element of the slice is less than its heap parent.
#[inline]
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, less)
}

/// [`is_heap`] with `is_less` as the ordering.
pub fn is_heap_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).all(|child| !is_less(&v[child], &v[(child - 1) / 2]))
}

/// [`is_heap`] on the keys produced by `projection`.
#[inline]
pub fn is_heap_by_key<T, K, P>(v: &[T], projection: P) -> bool
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    is_heap_by(v, by_key(projection, less))
}

/// [`is_heap`] on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn is_heap_by_key_with<T, K, P, F>(v: &[T], projection: P, is_less: F) -> bool
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    is_heap_by(v, by_key(projection, is_less))
}

/// Returns `true` if no element of the slice is less than the one before it.
///
/// # Examples
///
/// ```
/// use rotsort::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 5]));
/// assert!(!is_sorted(&[1, 3, 2]));
/// ```
#[inline]
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, less)
}

/// [`is_sorted`] with `is_less` as the ordering.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|pair| !is_less(&pair[1], &pair[0]))
}

/// [`is_sorted`] on the keys produced by `projection`.
#[inline]
pub fn is_sorted_by_key<T, K, P>(v: &[T], projection: P) -> bool
where
    K: Ord,
    P: FnMut(&T) -> K,
{
    is_sorted_by(v, by_key(projection, less))
}

/// [`is_sorted`] on the keys produced by `projection`, ordered by `is_less`.
#[inline]
pub fn is_sorted_by_key_with<T, K, P, F>(v: &[T], projection: P, is_less: F) -> bool
where
    P: FnMut(&T) -> K,
    F: FnMut(&K, &K) -> bool,
{
    is_sorted_by(v, by_key(projection, is_less))
}

fn intro_sort_recurse<T, F>(mut v: &mut [T], mut limit: u32, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= INSERTION_SORT_THRESHOLD {
            insertion_sort(v, is_less);
            return;
        }

        if limit == 0 {
            heap_sort_impl(v, is_less);
            return;
        }
        limit -= 1;

        let mid = partition(v, is_less);
        let (left, right) = std::mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the smaller side, loop on the larger one.
        if left.len() < right.len() {
            intro_sort_recurse(left, limit, is_less);
            v = right;
        } else {
            intro_sort_recurse(right, limit, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its middle element and returns the pivot's final index.
///
/// Afterwards nothing before the pivot is greater than it and nothing after is less. Both scans
/// stop on elements equal to the pivot, which splits runs of equal elements evenly.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    v.swap(0, len / 2);

    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let mut left = 0;
    let mut right = rest.len();
    loop {
        while left < right && is_less(&rest[left], pivot) {
            left += 1;
        }
        while left < right && is_less(pivot, &rest[right - 1]) {
            right -= 1;
        }
        if left >= right {
            break;
        }
        right -= 1;
        rest.swap(left, right);
        left += 1;
    }

    // `rest[..right]` holds no element greater than the pivot and `rest[right..]` none less.
    v.swap(0, right);
    right
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heap_sort_impl<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    build_heap(v, is_less);

    // Pop the greatest element to the back of the shrinking heap.
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

fn build_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }
}

// Restores `parent >= child` below `node`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Pick the greater child.
        if child + 1 < len {
            child += is_less(&v[child], &v[child + 1]) as usize;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
