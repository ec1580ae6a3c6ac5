//! Error handling for the block engine, mode drivers and padding

use core::fmt;

use rijndael_api::Error as CoreError;

pub mod validate;

/// The error type for the cipher primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed PKCS#7 padding
    Padding {
        /// Operation that found the padding
        context: &'static str,
    },

    /// Zero-length input
    EmptyInput {
        /// Operation that received the input
        context: &'static str,
    },

    /// Normalized length does not fit the configured capacity
    Capacity {
        /// Operation that hit the limit
        context: &'static str,
        /// Bytes the operation needs
        required: usize,
        /// Bytes the caller allows
        capacity: usize,
    },

    /// Input length is not a multiple of the block size
    Unaligned {
        /// Operation that received the input
        context: &'static str,
        /// Actual length in bytes
        length: usize,
        /// Block size in bytes
        block_size: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Padding { context } => write!(f, "Invalid padding in {}", context),
            Error::EmptyInput { context } => write!(f, "Empty input to {}", context),
            Error::Capacity { context, required, capacity } => {
                write!(
                    f,
                    "{} needs {} bytes but capacity is {}",
                    context, required, capacity
                )
            }
            Error::Unaligned { context, length, block_size } => {
                write!(
                    f,
                    "{}: length {} is not a multiple of {}",
                    context, length, block_size
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Padding { context } => CoreError::InvalidPadding { context },
            Error::EmptyInput { context } => CoreError::EmptyInput { context },
            Error::Capacity { context, required, capacity } => CoreError::BufferTooLarge {
                context,
                required,
                capacity,
            },
            Error::Unaligned { context, length, block_size } => CoreError::UnalignedInput {
                context,
                length,
                block_size,
            },
        }
    }
}
