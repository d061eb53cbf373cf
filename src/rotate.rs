//! Juggling rotation.
//!
//! Rotating `count` elements left by `amount` is the permutation `i -> (i + amount) mod count`
//! on source positions. That permutation splits the indices into exactly
//! `gcd(count, amount)` disjoint cycles, each `count / gcd` long. Following each cycle once
//! moves every element exactly once, with a single element of extra storage.

use gcd::Gcd;
use std::ptr;

/// Rotates `v[from..to]` left by `amount` positions.
///
/// After the call, the element that was at `from + amount` is at `from`, and the first
/// `amount` elements of the range have moved to its end. Runs in `O(to - from)` moves and
/// `O(1)` extra space.
///
/// Rotating by `0` or by the full range length leaves the range unchanged.
///
/// # Panics
///
/// Panics if `from..to` is not a valid range of `v`, or if `amount > to - from`.
///
/// # Examples
///
/// ```
/// use rotsort::rotate;
///
/// let mut v = [1, 2, 3, 4, 5];
/// rotate(&mut v, 0, 5, 2);
/// assert_eq!(v, [3, 4, 5, 1, 2]);
/// ```
pub fn rotate<T>(v: &mut [T], from: usize, to: usize, amount: usize) {
    let range = &mut v[from..to];
    let count = range.len();
    assert!(
        amount <= count,
        "rotation amount {amount} exceeds range length {count}"
    );

    if amount == 0 || amount == count {
        return;
    }

    let cycles = count.gcd(amount);
    let base = range.as_mut_ptr();

    for start in 0..cycles {
        // SAFETY: every index is `< count`, so all pointers stay inside `range`. The element read
        // out of `start` leaves a hole that travels along the cycle and is filled by the final
        // write. Nothing between the read and the write can panic, so the hole is never observed.
        unsafe {
            let held = ptr::read(base.add(start));
            let mut hole = start;
            loop {
                let mut next = hole + amount;
                if next >= count {
                    next -= count;
                }
                if next == start {
                    break;
                }
                ptr::copy_nonoverlapping(base.add(next), base.add(hole), 1);
                hole = next;
            }
            ptr::write(base.add(hole), held);
        }
    }
}
