//! Constants for the AES block cipher family

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in the AES state
pub const AES_NB: usize = 4;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Largest supported root key in bytes
pub const AES_MAX_KEY_SIZE: usize = AES256_KEY_SIZE;

/// AES-128 round count
pub const AES128_ROUNDS: usize = 10;

/// AES-192 round count
pub const AES192_ROUNDS: usize = 12;

/// AES-256 round count
pub const AES256_ROUNDS: usize = 14;

/// AES-128 expanded key schedule size in bytes (11 round keys)
pub const AES128_SCHEDULE_SIZE: usize = AES_BLOCK_SIZE * (AES128_ROUNDS + 1);

/// AES-192 expanded key schedule size in bytes (13 round keys)
pub const AES192_SCHEDULE_SIZE: usize = AES_BLOCK_SIZE * (AES192_ROUNDS + 1);

/// AES-256 expanded key schedule size in bytes (15 round keys)
pub const AES256_SCHEDULE_SIZE: usize = AES_BLOCK_SIZE * (AES256_ROUNDS + 1);

/// Largest expanded key schedule in bytes
pub const AES_MAX_SCHEDULE_SIZE: usize = AES256_SCHEDULE_SIZE;

/// Default per-context buffer capacity in bytes
///
/// Four blocks.
pub const AES_DEFAULT_CAPACITY: usize = 64;

/// Largest block size accepted by the PKCS#7 padding module
pub const PKCS7_MAX_BLOCK_SIZE: usize = 128;
