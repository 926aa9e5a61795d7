//! Fixed protocol parameters.
//!
//! Every value here is part of the interoperable key-derivation and
//! ciphertext format. None of them may become caller-configurable: changing
//! any one produces keys or ciphertexts that other implementations cannot
//! reproduce.

/// AES-CBC initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// HMAC-SHA-256 output length in bytes. Also the HKDF hash length.
pub const MAC_LEN: usize = 32;

/// Length of the random key used by the double-HMAC comparison.
pub const COMPARE_KEY_LEN: usize = 32;

/// Length of every derived key (`master`, `hash_key`, `enc_key`, `mac_key`).
pub const KEY_LEN: usize = 32;

/// Output length of [`CryptoHelper::pbkdf2`](crate::CryptoHelper::pbkdf2).
pub const PBKDF2_KEY_LEN: usize = 32;

/// Iteration count used when deriving `hash_key` from the master key.
pub const HASH_KEY_ITERATIONS: u32 = 1;

/// scrypt cost parameter `N`.
pub const SCRYPT_ITERATIONS: u32 = 16_384;

/// scrypt block size `r`.
pub const SCRYPT_BLOCK_SIZE: u32 = 8;

/// scrypt parallelism `p`.
pub const SCRYPT_PARALLELISM: u32 = 1;

/// HKDF info label for the encryption key.
pub const ENC_KEY_INFO: &[u8] = b"enc";

/// HKDF info label for the MAC key.
pub const MAC_KEY_INFO: &[u8] = b"mac";

/// RFC 5869 upper bound on expand output: `255 * HashLen`.
pub const HKDF_MAX_OUTPUT: usize = 255 * MAC_LEN;

/// Default mnemonic entropy in bits (12 words).
pub const DEFAULT_MNEMONIC_STRENGTH: usize = 128;

/// CipherString type tag: AES-256-CBC + HMAC-SHA-256, base64 fields.
pub const CIPHER_STRING_TYPE: u8 = 2;
