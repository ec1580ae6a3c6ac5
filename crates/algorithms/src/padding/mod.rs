//! Padding schemes that adapt arbitrary-length data to a block size

pub mod pkcs7;

pub use pkcs7::{add_padding, remove_padding, Padded, Unpadded};
