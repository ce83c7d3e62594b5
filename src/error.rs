use std::collections::TryReserveError;

/// Errors a radix sort call can report instead of sorting.
///
/// Whenever one of these is returned the input slice has not been touched, it still holds its
/// original contents in their original order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// The scratch buffer the passes ping-pong through could not be allocated.
    #[error("failed to allocate a scratch buffer for {len} keys")]
    ScratchAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// The caller supplied key count disagrees with the length of the slice.
    #[error("expected {expected} keys, but the slice holds {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
