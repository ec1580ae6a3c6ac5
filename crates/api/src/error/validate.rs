//! Validation utilities shared by the cipher crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, reason });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Reject zero-length input
#[inline(always)]
pub fn non_empty(context: &'static str, actual: usize) -> Result<()> {
    if actual == 0 {
        return Err(Error::EmptyInput { context });
    }
    Ok(())
}

/// Check that a required byte count fits a buffer capacity
#[inline(always)]
pub fn capacity(context: &'static str, required: usize, capacity: usize) -> Result<()> {
    if required > capacity {
        return Err(Error::BufferTooLarge {
            context,
            required,
            capacity,
        });
    }
    Ok(())
}
