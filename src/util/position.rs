//! Translation of caller-supplied positions into slice indices.
//!
//! Positions may be any primitive integer. A `u128` too large for an `i128`
//! is out of range and reported as `i128::MAX`.

use num_traits::{PrimInt, ToPrimitive};

use crate::error::{ListError, Result};

/// Resolves an index that may count back from the end of the list, so `-1`
/// is the last element. Returns `None` if the position is still outside
/// `0..len` after translation.
pub fn wrapping_index<I>(index: I, len: usize) -> Option<usize>
where
    I: PrimInt,
{
    let index = index.to_i128()?;
    let resolved = if index < 0 {
        index.checked_add(len.to_i128()?)?
    } else {
        index
    };
    usize::try_from(resolved).ok().filter(|&i| i < len)
}

/// Bounds-checked index with no negative translation.
pub fn checked_index<I>(index: I, len: usize) -> Result<usize>
where
    I: PrimInt,
{
    let raw = index.to_i128();
    raw.and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < len)
        .ok_or_else(|| ListError::new_index_out_of_range(raw, len))
}

/// A count of leading elements, valid in `0..=len`.
pub fn checked_count<I>(count: I, len: usize) -> Result<usize>
where
    I: PrimInt,
{
    let raw = count.to_i128();
    raw.and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n <= len)
        .ok_or_else(|| ListError::new_count_out_of_range(raw, len))
}
