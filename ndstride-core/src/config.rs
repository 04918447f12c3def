//! Tuning constants for ndarray iteration.

/// Cache block size, in bytes, for blocked ndarray iteration.
pub const BLOCK_SIZE_IN_BYTES: usize = 64;

/// Block size, in elements, when element sizes are unknown (zero-sized types).
pub const BLOCK_SIZE_IN_ELEMENTS: usize = 8;

/// Highest dimensionality iterated with plain nested loops.
pub const MAX_NESTED_LOOP_DIMS: usize = 10;

/// Highest dimensionality iterated with blocked (tiled) loops; beyond this
/// the dispatcher walks linear view indices.
pub const MAX_BLOCKED_LOOP_DIMS: usize = 10;

/// Block size, in elements, for arrays whose largest element is `max_bytes` wide.
#[inline]
pub fn block_size(max_bytes: usize) -> usize {
    if max_bytes == 0 {
        BLOCK_SIZE_IN_ELEMENTS
    } else {
        (BLOCK_SIZE_IN_BYTES / max_bytes).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(8), 8);
        assert_eq!(block_size(4), 16);
        assert_eq!(block_size(0), BLOCK_SIZE_IN_ELEMENTS);
        assert_eq!(block_size(128), 1);
    }
}
