//! # Rotsort
//!
//! `rotsort` is a library of generic sorting and searching algorithms over mutable slices
//! that never allocate element storage.
//!
//! ## Key Features
//!
//! - **Branchless Binary Search**: [`lower_bound`], [`upper_bound`] and [`binary_search`] shrink
//!   the window by halving with a conditional move, so the access pattern does not depend on the
//!   comparison outcomes.
//! - **Allocation-Free Stable Sort**: [`stable_sort`] is a bottom-up merge sort whose merge step
//!   works in place using only binary search and rotation.
//! - **Juggling Rotation**: [`rotate`] moves every element once, following the
//!   `gcd(length, shift)` cycles of the rotation permutation.
//! - **Radix Sort**: [`radix_sort_32`] is a stable 3-pass LSD radix sort on 32-bit keys, using
//!   a second buffer supplied by the caller.
//! - **Unstable Sorts**: [`intro_sort`] and [`heap_sort`], with [`is_sorted`] and [`is_heap`]
//!   predicates.
//!
//! ## Usage
//!
//! Every algorithm comes in four flavours sharing one contract (see [`core`]):
//!
//! | suffix          | ordering                                   |
//! |-----------------|--------------------------------------------|
//! | none            | `T: Ord`                                   |
//! | `_by`           | element predicate `is_less(&T, &T)`        |
//! | `_by_key`       | projection `&T -> K` with `K: Ord`         |
//! | `_by_key_with`  | projection plus key predicate `(&K, &K)`   |
//!
//! ```rust
//! use rotsort::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Entry {
//!     rank: u32,
//!     tag: char,
//! }
//!
//! let mut entries = vec![
//!     Entry { rank: 5, tag: 'e' },
//!     Entry { rank: 3, tag: 'a' },
//!     Entry { rank: 3, tag: 'b' },
//!     Entry { rank: 1, tag: 'z' },
//! ];
//!
//! stable_sort_by_key(&mut entries, |e| e.rank);
//! let tags: String = entries.iter().map(|e| e.tag).collect();
//! assert_eq!(tags, "zabe");
//!
//! assert_eq!(lower_bound_by_key(&entries, &3, |e| e.rank), 1);
//! assert_eq!(upper_bound_by_key(&entries, &3, |e| e.rank), 3);
//! assert_eq!(binary_search_by_key(&entries, &4, |e| e.rank), None);
//! ```
//!
//! ### Radix Sort
//!
//! ```rust
//! use rotsort::radix::{float_from_key, float_key};
//! use rotsort::radix_sort_32;
//!
//! let mut src = [2.5f32, -1.0, 0.0, -7.25];
//! let mut dst = [0.0f32; 4];
//! radix_sort_32(&mut dst, &mut src, |&x| float_key(x));
//! assert_eq!(dst, [-7.25, -1.0, 0.0, 2.5]);
//! assert_eq!(float_from_key(float_key(-1.0)), -1.0);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Searches**: exactly `floor(log2 N) + 1` comparisons.
//! - **Stable Sort**: `O(N log² N)` comparisons, zero heap allocation. Element moves grow
//!   quadratically on finely interleaved input, so prefer `slice::sort` for large inputs where
//!   allocating a buffer is acceptable.
//! - **Radix Sort**: four linear passes, stack-allocated histograms.
//! - **Intro/Heap Sort**: `O(N log N)` worst case.

pub mod core;
pub mod radix;
pub mod rotate;
pub mod search;
pub mod stable;
pub mod unstable;

pub use crate::core::less;
pub use crate::radix::radix_sort_32;
pub use crate::rotate::rotate;
pub use crate::search::{
    binary_search, binary_search_by, binary_search_by_key, binary_search_by_key_with, lower_bound,
    lower_bound_by, lower_bound_by_key, lower_bound_by_key_with, upper_bound, upper_bound_by,
    upper_bound_by_key, upper_bound_by_key_with,
};
pub use crate::stable::{
    merge, merge_by, merge_by_key, merge_by_key_with, stable_sort, stable_sort_by,
    stable_sort_by_key, stable_sort_by_key_with,
};
pub use crate::unstable::{
    heap_sort, heap_sort_by, heap_sort_by_key, heap_sort_by_key_with, heapify, heapify_by,
    heapify_by_key, heapify_by_key_with, intro_sort, intro_sort_by, intro_sort_by_key,
    intro_sort_by_key_with, is_heap, is_heap_by, is_heap_by_key, is_heap_by_key_with, is_sorted,
    is_sorted_by, is_sorted_by_key, is_sorted_by_key_with,
};

pub mod prelude {
    pub use crate::radix::radix_sort_32;
    pub use crate::rotate::rotate;
    pub use crate::search::{
        binary_search, binary_search_by, binary_search_by_key, lower_bound, lower_bound_by,
        lower_bound_by_key, upper_bound, upper_bound_by, upper_bound_by_key,
    };
    pub use crate::stable::{merge, merge_by, stable_sort, stable_sort_by, stable_sort_by_key};
    pub use crate::unstable::{
        heap_sort, heap_sort_by, intro_sort, intro_sort_by, intro_sort_by_key, is_sorted,
        is_sorted_by,
    };
}
