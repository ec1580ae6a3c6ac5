//! Security primitives for sensitive cipher material
//!
//! Key bytes and round keys never leave these containers without being
//! wiped on drop.

pub mod secret;

pub use secret::{BoundedSecret, SecretBuffer, ZeroizeGuard};
