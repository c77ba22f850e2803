//! The bidirectional eight-bit radix sort engine.
//!
//! Four phases run sequentially, once per call, on a single thread:
//!
//! 1. [`histogram`]: a single linear pass that counts per-digit-position
//!    bucket occupancy and copies the input into the auxiliary buffer.
//! 2. [`offsets`]: turns the histogram into prefix-sum write cursors and
//!    derives the skip mask of trivial digit positions.
//! 3. [`parity`]: decides whether the caller's array or the auxiliary
//!    buffer is the initial source, so the final pass always lands back in
//!    the caller's array.
//! 4. [`distribute`]: the bidirectional eight-bit distribution pass itself.
//!
//! The main entry points are [`sort_u16`] and [`sort_u64`].

use cuneiform::cuneiform;

use crate::core::{Allocator, AuxBuffer, RadixKey, SystemAllocator};
use crate::error::SortError;

const BUCKETS: usize = 256;

/// Cache-aligned row of per-digit-position bucket state (counts or cursors).
#[cuneiform]
struct Counts256 {
    data: [usize; BUCKETS],
}

impl Default for Counts256 {
    fn default() -> Self {
        Counts256 { data: [0; BUCKETS] }
    }
}

/// Hints and toggles for a sort call.
///
/// `page_size` is a power-of-two allocation granularity hint for the
/// auxiliary buffer; pass `1` if the platform exposes no large pages.
/// `debug_checks` gates the `PreconditionViolation` check on `page_size`
/// itself (it defaults to being on in debug builds and off in release
/// builds, matching the spec's "debug-mode assertions, undefined behavior in
/// release" language for precondition violations).
#[derive(Debug, Clone, Copy)]
pub struct SortConfig {
    pub page_size: usize,
    pub debug_checks: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            page_size: 1,
            debug_checks: cfg!(debug_assertions),
        }
    }
}

#[inline(always)]
fn digit8(value: u64, pass: usize) -> usize {
    ((value >> (pass * 8)) & 0xFF) as usize
}

/// Phase 1: read `src` once, copy it into `aux`, and accumulate per-digit-position counts.
mod histogram {
    use super::*;

    pub(super) fn build<K: RadixKey>(src: &[K], aux: &mut [K], digits: usize) -> Vec<Counts256> {
        let mut counts: Vec<Counts256> = (0..digits).map(|_| Counts256::default()).collect();
        for (i, &key) in src.iter().enumerate() {
            aux[i] = key;
            let value = key.as_u64();
            for (pass, row) in counts.iter_mut().enumerate() {
                row.data[digit8(value, pass)] += 1;
            }
        }
        counts
    }
}

/// Phase 2: turn histogram counts into prefix-sum write cursors, and mark
/// degenerate (single-bucket) digit positions in the skip mask.
mod offsets {
    use super::*;

    pub(super) fn build(counts: &[Counts256], n: usize) -> (Vec<Counts256>, Vec<Counts256>, u8) {
        let digits = counts.len();
        let mut lo: Vec<Counts256> = (0..digits).map(|_| Counts256::default()).collect();
        let mut hi: Vec<Counts256> = (0..digits).map(|_| Counts256::default()).collect();
        let mut skip_mask = 0u8;

        for p in 0..digits {
            let mut cursor = 0usize;
            let mut trivial = false;
            for v in 0..BUCKETS {
                let c = counts[p].data[v];
                if c == n {
                    trivial = true;
                }
                lo[p].data[v] = cursor;
                cursor += c;
                // One past the last slot for bucket v, or one below its own
                // start for an empty bucket; an empty bucket's O_hi entry is
                // never read because no key maps into it.
                hi[p].data[v] = cursor.wrapping_sub(1);
            }
            if trivial {
                skip_mask |= 1 << p;
            }
        }

        (lo, hi, skip_mask)
    }
}

/// Phase 3: decide the initial source/destination roles and the ordered
/// list of active (non-skipped) digit positions.
mod parity {
    pub(super) struct Resolution {
        /// True iff the caller's array and the auxiliary buffer must swap
        /// initial roles so that the last active pass lands in the caller's
        /// array.
        pub swap_initial: bool,
        /// Digit positions to process, ascending, skipping degenerate ones.
        pub active_positions: Vec<usize>,
    }

    pub(super) fn resolve(skip_mask: u8, digits: usize) -> Resolution {
        let active_positions: Vec<usize> = (0..digits).filter(|p| skip_mask & (1 << p) == 0).collect();
        let swap_initial = active_positions.len() % 2 == 1;
        Resolution {
            swap_initial,
            active_positions,
        }
    }
}

/// Phase 4: the bidirectional eight-bit distribution pass.
mod distribute {
    use super::*;
    use crate::algo::parity::Resolution;

    /// One distribution pass at digit position `p`: two cursors sweep from
    /// the ends of `src` toward the middle, writing into `dst` through the
    /// low and high offset cursors.
    fn pass<K: RadixKey>(src: &[K], dst: &mut [K], p: usize, lo_off: &mut Counts256, hi_off: &mut Counts256) {
        let n = src.len();
        let mut lo = 0usize;
        let mut hi = n - 1;

        while lo < hi {
            let key_lo = src[lo];
            let key_hi = src[hi];
            let v_lo = digit8(key_lo.as_u64(), p);
            let v_hi = digit8(key_hi.as_u64(), p);

            let dst_lo = lo_off.data[v_lo];
            lo_off.data[v_lo] += 1;
            dst[dst_lo] = key_lo;

            let dst_hi = hi_off.data[v_hi];
            hi_off.data[v_hi] = hi_off.data[v_hi].wrapping_sub(1);
            dst[dst_hi] = key_hi;

            lo += 1;
            hi -= 1;
        }

        if lo == hi {
            // Odd N: the middle element is routed through the low writer only.
            let key = src[lo];
            let v = digit8(key.as_u64(), p);
            let dst_idx = lo_off.data[v];
            dst[dst_idx] = key;
        }
    }

    /// Runs every active pass, alternating `a`/`b` as source and
    /// destination. By construction of [`parity::resolve`], the data lands
    /// back in `a` after the last active pass.
    pub(super) fn run<K: RadixKey>(
        a: &mut [K],
        b: &mut [K],
        offsets_lo: &mut [Counts256],
        offsets_hi: &mut [Counts256],
        resolution: &Resolution,
    ) {
        if resolution.active_positions.is_empty() {
            return;
        }

        let (mut src, mut dst): (&mut [K], &mut [K]) = if resolution.swap_initial {
            (b, a)
        } else {
            (a, b)
        };

        for &p in &resolution.active_positions {
            pass(src, dst, p, &mut offsets_lo[p], &mut offsets_hi[p]);
            std::mem::swap(&mut src, &mut dst);
        }
    }
}

fn validate_page_size(page_size: usize, debug_checks: bool) -> Result<(), SortError> {
    if debug_checks && (page_size == 0 || !page_size.is_power_of_two()) {
        return Err(SortError::InvalidPageSize(page_size));
    }
    Ok(())
}

/// Sorts `keys` in place using the given [`Allocator`] for the auxiliary buffer.
///
/// `N ∈ {0, 1}` return immediately; `N == 2` performs a single conditional
/// swap; both paths allocate nothing.
pub fn sort_with_allocator<K: RadixKey, A: Allocator>(
    keys: &mut [K],
    config: SortConfig,
    alloc: &A,
) -> Result<(), SortError> {
    validate_page_size(config.page_size, config.debug_checks)?;

    let n = keys.len();
    if n < 2 {
        return Ok(());
    }
    if n == 2 {
        if keys[1] < keys[0] {
            keys.swap(0, 1);
        }
        return Ok(());
    }

    let digits = (K::BITS / 8) as usize;
    let span = tracing::debug_span!("bidirad::sort", n, bits = K::BITS);
    let _guard = span.enter();

    let mut buffer = AuxBuffer::<K, A>::new(n, config.page_size, alloc)?;
    let aux = buffer.as_mut_slice();

    tracing::trace!("histogramming {n} keys over {digits} digit positions");
    let counts = histogram::build(keys, aux, digits);

    tracing::trace!("building offset tables");
    let (mut offsets_lo, mut offsets_hi, skip_mask) = offsets::build(&counts, n);

    let resolution = parity::resolve(skip_mask, digits);
    tracing::debug!(
        active = resolution.active_positions.len(),
        swap_initial = resolution.swap_initial,
        "parity resolved"
    );

    let aux = buffer.as_mut_slice();
    distribute::run(keys, aux, &mut offsets_lo, &mut offsets_hi, &resolution);

    Ok(())
}

/// Sorts `keys` in place using the [`SystemAllocator`].
pub fn sort<K: RadixKey>(keys: &mut [K], config: SortConfig) -> Result<(), SortError> {
    sort_with_allocator(keys, config, &SystemAllocator)
}

/// `sort_u16(A, page_size) -> bool` from the engine's external contract:
/// `true` on success, `false` on allocation failure.
pub fn sort_u16(keys: &mut [u16], page_size: usize) -> bool {
    sort(
        keys,
        SortConfig {
            page_size,
            ..SortConfig::default()
        },
    )
    .is_ok()
}

/// `sort_u64(A, page_size) -> bool` from the engine's external contract:
/// `true` on success, `false` on allocation failure.
pub fn sort_u64(keys: &mut [u64], page_size: usize) -> bool {
    sort(
        keys,
        SortConfig {
            page_size,
            ..SortConfig::default()
        },
    )
    .is_ok()
}
