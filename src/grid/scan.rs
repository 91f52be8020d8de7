//! Row-parallel read-only scans
//!
//! Rows of a region are independent spans of the packed store, so read-only
//! queries can fan out across rows with rayon. Writes stay serial: adjacent
//! rows may share a byte.

use rayon::prelude::*;

use super::bits;

/// Chunk size (bytes) for whole-store popcounts
const COUNT_CHUNK_BYTES: usize = 4096;

/// True if any bit is set in rows `top..bottom`, columns `left..left + span_len`
pub(crate) fn any_set_parallel(
    data: &[u8],
    grid_width: usize,
    left: usize,
    top: usize,
    bottom: usize,
    span_len: usize,
) -> bool {
    (top..bottom)
        .into_par_iter()
        .any(|y| bits::span_any(data, y * grid_width + left, span_len))
}

/// Count set bits in the whole store using parallel chunks
pub(crate) fn count_ones_parallel(data: &[u8]) -> usize {
    data.par_chunks(COUNT_CHUNK_BYTES)
        .map(|chunk| chunk.iter().map(|b| b.count_ones() as usize).sum::<usize>())
        .sum()
}
