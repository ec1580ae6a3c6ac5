//! Validation utilities for the cipher primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, length: usize, block_size: usize) -> Result<()> {
    if length % block_size != 0 {
        return Err(Error::Unaligned {
            context,
            length,
            block_size,
        });
    }
    Ok(())
}

/// Reject zero-length input
#[inline(always)]
pub fn non_empty(context: &'static str, length: usize) -> Result<()> {
    if length == 0 {
        return Err(Error::EmptyInput { context });
    }
    Ok(())
}

/// Validate that a normalized length fits the configured capacity
#[inline(always)]
pub fn capacity(context: &'static str, required: usize, capacity: usize) -> Result<()> {
    if required > capacity {
        return Err(Error::Capacity {
            context,
            required,
            capacity,
        });
    }
    Ok(())
}
