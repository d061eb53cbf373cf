//! Stable LSD radix sort on 32-bit keys.
//!
//! The key is split into three digits of 10, 11 and 11 bits, giving histograms of
//! 1024, 2048 and 2048 buckets. All three histograms are filled in a single counting pass over
//! the input, then each digit is distributed by a stable counting scatter, least significant
//! digit first.
//!
//! The scatters ping-pong between the two buffers: `src -> dst`, `dst -> src`, `src -> dst`.
//! Three is odd, so the sorted output always ends up in `dst`.
//!
//! Keys are compared as unsigned integers. Signed and floating-point data sort correctly once
//! mapped through [`signed_key`] or [`float_key`] inside the key closure.

use cuneiform::cuneiform;

const LOW_BITS: u32 = 10;
const MID_BITS: u32 = 11;
const HIGH_SHIFT: u32 = LOW_BITS + MID_BITS;

const LOW_BUCKETS: usize = 1 << LOW_BITS;
const MID_BUCKETS: usize = 1 << MID_BITS;
const HIGH_BUCKETS: usize = 1 << (u32::BITS - HIGH_SHIFT);

const LOW_MASK: u32 = (1 << LOW_BITS) - 1;
const MID_MASK: u32 = (1 << MID_BITS) - 1;

// Cache-aligned digit histograms.
#[cuneiform]
struct Histograms {
    low: [usize; LOW_BUCKETS],
    mid: [usize; MID_BUCKETS],
    high: [usize; HIGH_BUCKETS],
}

#[inline(always)]
fn low_digit(key: u32) -> usize {
    (key & LOW_MASK) as usize
}

#[inline(always)]
fn mid_digit(key: u32) -> usize {
    ((key >> LOW_BITS) & MID_MASK) as usize
}

#[inline(always)]
fn high_digit(key: u32) -> usize {
    (key >> HIGH_SHIFT) as usize
}

/// Sorts `src` by `sort_key` into `dst`.
///
/// The sort is stable: elements with equal keys keep their relative order. It performs four
/// linear passes (one count, three scatters) and no allocation. `src` doubles as the scratch
/// buffer of the middle pass, so its contents are unspecified after the call. Only
/// `dst[..src.len()]` is written.
///
/// To sort a prefix, pass `&mut src[..count]`.
///
/// # Panics
///
/// Panics if `dst` is shorter than `src`.
///
/// # Examples
///
/// ```
/// use rotsort::radix_sort_32;
///
/// let mut src = [5u32, 3, 3, 1, 4];
/// let mut dst = [0u32; 5];
/// radix_sort_32(&mut dst, &mut src, |&x| x);
/// assert_eq!(dst, [1, 3, 3, 4, 5]);
/// ```
pub fn radix_sort_32<T, K>(dst: &mut [T], src: &mut [T], mut sort_key: K)
where
    T: Copy,
    K: FnMut(&T) -> u32,
{
    let len = src.len();
    assert!(
        dst.len() >= len,
        "destination holds {} elements but {len} are to be sorted",
        dst.len()
    );

    if len == 0 {
        return;
    }
    let dst = &mut dst[..len];

    let mut histograms = Histograms {
        low: [0; LOW_BUCKETS],
        mid: [0; MID_BUCKETS],
        high: [0; HIGH_BUCKETS],
    };

    src.iter().for_each(|item| {
        let key = sort_key(item);
        histograms.low[low_digit(key)] += 1;
        histograms.mid[mid_digit(key)] += 1;
        histograms.high[high_digit(key)] += 1;
    });

    prefix_sum_minus_one(&mut histograms.low);
    prefix_sum_minus_one(&mut histograms.mid);
    prefix_sum_minus_one(&mut histograms.high);

    scatter(src, dst, &mut histograms.low, low_digit, &mut sort_key);
    scatter(dst, src, &mut histograms.mid, mid_digit, &mut sort_key);
    scatter(src, dst, &mut histograms.high, high_digit, &mut sort_key);
}

/// Turns bucket counts into the slot *before* each bucket's first position.
///
/// Bucket 0 starts at `usize::MAX`, which the first pre-increment wraps to 0.
fn prefix_sum_minus_one(counts: &mut [usize]) {
    let mut sum = 0usize;
    counts.iter_mut().for_each(|slot| {
        let count = *slot;
        *slot = sum.wrapping_sub(1);
        sum += count;
    });
}

/// Stable counting scatter of `from` into `to` on one digit.
fn scatter<T, K, D>(from: &[T], to: &mut [T], offsets: &mut [usize], digit: D, sort_key: &mut K)
where
    T: Copy,
    K: FnMut(&T) -> u32,
    D: Fn(u32) -> usize,
{
    from.iter().for_each(|&item| {
        let slot = &mut offsets[digit(sort_key(&item))];
        *slot = slot.wrapping_add(1);
        to[*slot] = item;
    });
}

/// Maps an `f32` to a `u32` whose unsigned order matches the float's numeric order.
///
/// Positive floats get their sign bit set; negative floats have every bit flipped so larger
/// magnitudes sort first. `-0.0` sorts directly before `+0.0`. NaNs with the sign bit clear
/// sort after `+inf`, those with it set before `-inf`.
///
/// # Examples
///
/// ```
/// use rotsort::radix::float_key;
///
/// assert!(float_key(-2.0) < float_key(-1.0));
/// assert!(float_key(-1.0) < float_key(0.5));
/// ```
#[inline]
pub fn float_key(value: f32) -> u32 {
    let bits = value.to_bits();
    let mask = ((bits as i32 >> 31) as u32) | 0x8000_0000;
    bits ^ mask
}

/// Inverse of [`float_key`].
#[inline]
pub fn float_from_key(key: u32) -> f32 {
    let mask = (key >> 31).wrapping_sub(1) | 0x8000_0000;
    f32::from_bits(key ^ mask)
}

/// Maps an `i32` to a `u32` whose unsigned order matches the signed order.
#[inline]
pub fn signed_key(value: i32) -> u32 {
    (value as u32) ^ 0x8000_0000
}

/// Inverse of [`signed_key`].
#[inline]
pub fn signed_from_key(key: u32) -> i32 {
    (key ^ 0x8000_0000) as i32
}
