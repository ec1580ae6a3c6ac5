//! Error handling for the cipher contexts
//!
//! The contexts report the unified API error. Primitive errors from
//! `rijndael-algorithms` convert through `From`, so `?` is enough at every
//! call site; [`SymmetricResultExt`] is for the places that want a context
//! label of their own.

pub use rijndael_api::error::{validate, Error, Result, ResultExt, Status};

use rijndael_algorithms::Error as PrimitiveError;

/// Extension trait for results coming out of the primitives crate
pub trait SymmetricResultExt<T> {
    /// Convert into an API result, relabelling the error with `context`
    fn map_primitive_err(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self, context: &'static str) -> Result<T> {
        self.with_context(context)
    }
}
