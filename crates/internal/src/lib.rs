//! Internal utilities for the rijndael library
//!
//! Constant-time byte helpers, big-endian word conversion and secure zeroing
//! shared by the algorithm crates. Nothing here is part of the stable API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
pub mod zeroing;

pub use constant_time::{ct_eq, ct_mask, ct_xor_into};
