//! Constant values for rijndael cryptographic operations
//!
//! This crate holds the fixed parameters of the AES family and the buffer
//! limits shared by the engine, the padding module and the context wrapper.

#![no_std]

pub mod utils;

pub use utils::symmetric;
