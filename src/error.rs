//! Error types surfaced by the sort engine.

/// Failure modes of a `bidirad` sort call.
///
/// Once a sort call has successfully allocated its auxiliary buffer, every
/// remaining phase is infallible: either the call runs to completion or it
/// never started moving elements at all.
#[derive(thiserror::Error, Debug)]
pub enum SortError {
    /// The auxiliary buffer could not be obtained. The input array is left
    /// bitwise unchanged.
    #[error("failed to allocate {bytes} bytes for the auxiliary sort buffer")]
    AllocationFailure {
        /// Requested allocation size, in bytes, after rounding up to `page_size`.
        bytes: usize,
    },

    /// `page_size` was not a power of two (or was zero) while debug
    /// preconditions were enabled.
    #[error("page_size must be a power of two, got {0}")]
    InvalidPageSize(usize),
}
