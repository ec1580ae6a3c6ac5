//! Common implementations and shared functionality for the rijndael library
//!
//! This crate provides the zeroizing containers that hold root keys and
//! expanded key schedules for the lifetime of a cipher instance.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{BoundedSecret, SecretBuffer, ZeroizeGuard};
