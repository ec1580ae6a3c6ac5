//! Flat status codes for callers that need a numeric outcome

use super::types::Result;

/// Outcome of a cipher call as a stable numeric code
///
/// Values are stable; new codes are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    EmptyInput = 1,
    BufferTooLarge = 2,
    AllocationFailure = 3,
    InvalidLength = 4,
    UnalignedInput = 5,
    InvalidPadding = 6,
    InvalidKey = 7,
    InvalidParameter = 8,
    Other = 9,
}

impl Status {
    /// Collapse a result into its status code
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    /// Numeric value of the code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// True for [`Status::Ok`]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::EmptyInput => "empty input",
            Status::BufferTooLarge => "buffer too large",
            Status::AllocationFailure => "allocation failure",
            Status::InvalidLength => "invalid length",
            Status::UnalignedInput => "unaligned input",
            Status::InvalidPadding => "invalid padding",
            Status::InvalidKey => "invalid key",
            Status::InvalidParameter => "invalid parameter",
            Status::Other => "other",
        };
        f.write_str(name)
    }
}
