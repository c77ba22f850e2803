//! Reference distributor variants at smaller digit widths, and a buffer-free
//! variant kept for completeness only.
//!
//! These share the histogram → offsets → parity → distribute skeleton of
//! [`crate::algo`] but are not wired into [`crate::sort_u16`]/[`crate::sort_u64`];
//! they exist to illustrate the same invariants at 1-bit and 2-bit digit
//! widths, and, for [`bufferless`], without any auxiliary allocation at all.

use crate::core::RadixKey;

/// One-bit-per-pass bidirectional distribution: `BITS` passes, two buckets
/// (zero/one) each, sharing the same skip-mask and parity machinery as the
/// production eight-bit engine.
pub fn bidi1<K: RadixKey>(keys: &mut [K]) {
    run(keys, 1);
}

/// Two-bit-per-pass bidirectional distribution: `BITS / 2` passes, four
/// buckets each. Counts are plain `usize` per bucket, per the spec's
/// preference for clarity over packed counters absent a profiling benefit.
pub fn bidi2<K: RadixKey>(keys: &mut [K]) {
    run(keys, 2);
}

/// Shared engine for [`bidi1`] and [`bidi2`]: identical phase structure to
/// [`crate::algo`], parameterized by digit width in bits instead of being
/// fixed at 8. Bucket counts live in plain `Vec<usize>` rather than the
/// cache-aligned, fixed-size rows the production path uses, since bucket
/// count (2 or 4) is a runtime parameter here.
fn run<K: RadixKey>(keys: &mut [K], bits_per_digit: u32) {
    let n = keys.len();
    if n < 2 {
        return;
    }
    if n == 2 {
        if keys[1] < keys[0] {
            keys.swap(0, 1);
        }
        return;
    }

    let buckets = 1usize << bits_per_digit;
    let digits = (K::BITS / bits_per_digit) as usize;
    let mask = (buckets - 1) as u64;

    // Phase 1: histogram (the copy into `buffer` below stands in for the
    // production path's copy-during-histogramming; here it's simplest to
    // just clone the input).
    let mut hist = vec![vec![0usize; buckets]; digits];
    for &key in keys.iter() {
        let value = key.as_u64();
        for (p, row) in hist.iter_mut().enumerate() {
            let shift = p as u32 * bits_per_digit;
            row[((value >> shift) & mask) as usize] += 1;
        }
    }

    // Phase 2: offsets and skip mask.
    let mut offsets_lo = vec![vec![0usize; buckets]; digits];
    let mut offsets_hi = vec![vec![0usize; buckets]; digits];
    let mut active_positions = Vec::with_capacity(digits);
    for p in 0..digits {
        let mut cursor = 0usize;
        let mut trivial = false;
        for d in 0..buckets {
            let c = hist[p][d];
            if c == n {
                trivial = true;
            }
            offsets_lo[p][d] = cursor;
            cursor += c;
            offsets_hi[p][d] = cursor.wrapping_sub(1);
        }
        if !trivial {
            active_positions.push(p);
        }
    }

    // Phase 3: parity. Identical rule to the production path: an odd number
    // of active passes means the initial source/destination roles must swap
    // so the last pass lands back in `keys`.
    if active_positions.is_empty() {
        return;
    }
    let swap_initial = active_positions.len() % 2 == 1;

    // Phase 4: distribution.
    let mut buffer: Vec<K> = keys.to_vec();
    let (mut src, mut dst): (&mut [K], &mut [K]) = if swap_initial {
        (&mut buffer[..], keys)
    } else {
        (keys, &mut buffer[..])
    };

    for &p in &active_positions {
        let shift = p as u32 * bits_per_digit;
        let lo_off = &mut offsets_lo[p];
        let hi_off = &mut offsets_hi[p];

        let mut lo = 0usize;
        let mut hi = src.len() - 1;
        while lo < hi {
            let key_lo = src[lo];
            let key_hi = src[hi];
            let v_lo = ((key_lo.as_u64() >> shift) & mask) as usize;
            let v_hi = ((key_hi.as_u64() >> shift) & mask) as usize;

            let d_lo = lo_off[v_lo];
            lo_off[v_lo] += 1;
            dst[d_lo] = key_lo;

            let d_hi = hi_off[v_hi];
            hi_off[v_hi] = hi_off[v_hi].wrapping_sub(1);
            dst[d_hi] = key_hi;

            lo += 1;
            hi -= 1;
        }
        if lo == hi {
            let key = src[lo];
            let v = ((key.as_u64() >> shift) & mask) as usize;
            dst[lo_off[v]] = key;
        }

        std::mem::swap(&mut src, &mut dst);
    }
}

/// Buffer-free reference variant: repeatedly stable-partitions `arr` around
/// each bit, in place, by rotating runs of zeros past preceding runs of
/// ones. No auxiliary allocation, but Θ(N² · W) worst case since each
/// rotation is itself O(N); not recommended for production, kept only for
/// completeness per the spec's buffer-free discussion.
pub fn bufferless(arr: &mut [u16]) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    for bit in 0..u16::BITS {
        let mut zero_boundary = 0usize;
        for i in 0..n {
            if (arr[i] >> bit) & 1 == 0 {
                if i != zero_boundary {
                    arr[zero_boundary..=i].rotate_right(1);
                }
                zero_boundary += 1;
            }
        }
    }
}
