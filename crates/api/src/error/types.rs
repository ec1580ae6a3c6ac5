//! Error type definitions for cipher operations

use super::status::Status;

/// Primary error type for cipher operations
///
/// Everything except `InvalidPadding` is detected before any block is
/// processed. A padding failure is found after decryption; the decrypted
/// bytes are wiped before the error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Zero-length plaintext or ciphertext
    EmptyInput {
        context: &'static str,
    },

    /// The padded length exceeds the buffer capacity configured for the context
    BufferTooLarge {
        context: &'static str,
        required: usize,
        capacity: usize,
    },

    /// Heap allocation for an output buffer failed
    AllocationFailed {
        context: &'static str,
        requested: usize,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input is not a whole number of blocks where whole blocks are required
    UnalignedInput {
        context: &'static str,
        length: usize,
        block_size: usize,
    },

    /// Trailing padding bytes are malformed
    InvalidPadding {
        context: &'static str,
    },

    /// Key length matches no supported variant
    InvalidKey {
        context: &'static str,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::EmptyInput { .. } => Self::EmptyInput { context },
            Self::BufferTooLarge { required, capacity, .. } => Self::BufferTooLarge {
                context,
                required,
                capacity,
            },
            Self::AllocationFailed { requested, .. } => Self::AllocationFailed { context, requested },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::UnalignedInput { length, block_size, .. } => Self::UnalignedInput {
                context,
                length,
                block_size,
            },
            Self::InvalidPadding { .. } => Self::InvalidPadding { context },
            Self::InvalidKey { actual, .. } => Self::InvalidKey { context, actual },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::Other { reason, .. } => Self::Other { context, reason },
        }
    }

    /// The context label attached to this error
    pub fn context(&self) -> &'static str {
        match *self {
            Self::EmptyInput { context }
            | Self::BufferTooLarge { context, .. }
            | Self::AllocationFailed { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::UnalignedInput { context, .. }
            | Self::InvalidPadding { context }
            | Self::InvalidKey { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Status code reported for this error
    pub fn status(&self) -> Status {
        match self {
            Self::EmptyInput { .. } => Status::EmptyInput,
            Self::BufferTooLarge { .. } => Status::BufferTooLarge,
            Self::AllocationFailed { .. } => Status::AllocationFailure,
            Self::InvalidLength { .. } => Status::InvalidLength,
            Self::UnalignedInput { .. } => Status::UnalignedInput,
            Self::InvalidPadding { .. } => Status::InvalidPadding,
            Self::InvalidKey { .. } => Status::InvalidKey,
            Self::InvalidParameter { .. } => Status::InvalidParameter,
            Self::Other { .. } => Status::Other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyInput { context } => {
                write!(f, "{}: empty input buffer", context)
            }
            Self::BufferTooLarge { context, required, capacity } => {
                write!(
                    f,
                    "{}: normalized length {} exceeds buffer capacity {}",
                    context, required, capacity
                )
            }
            Self::AllocationFailed { context, requested } => {
                write!(f, "{}: failed to allocate {} bytes", context, requested)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::UnalignedInput { context, length, block_size } => {
                write!(
                    f,
                    "{}: length {} is not a multiple of the {}-byte block size",
                    context, length, block_size
                )
            }
            Self::InvalidPadding { context } => {
                write!(f, "{}: invalid padding", context)
            }
            Self::InvalidKey { context, actual } => {
                write!(f, "Invalid key: {} (got {} bytes)", context, actual)
            }
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
            Self::Other { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
        }
    }
}
