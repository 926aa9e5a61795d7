//! BIP-39 entropy ↔ phrase conversion (English wordlist).
//!
//! Word-list encoding and checksum handling are delegated to the `bip39`
//! crate; this module only adapts its errors.

use bip39::{Language, Mnemonic};

use crate::error::CryptoError;

/// Valid BIP-39 mnemonic word counts.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Convert raw entropy (16, 20, 24, 28 or 32 bytes) into a space-delimited phrase.
///
/// # Errors
///
/// Returns `CryptoError::Mnemonic` if the entropy length is not accepted.
pub fn entropy_to_mnemonic(entropy: &[u8]) -> Result<String, CryptoError> {
    Mnemonic::from_entropy_in(Language::English, entropy)
        .map(|m| m.to_string())
        .map_err(|e| CryptoError::Mnemonic(format!("invalid entropy: {e}")))
}

/// Validate an English BIP-39 phrase: word count, word membership, and checksum.
///
/// # Errors
///
/// Returns `CryptoError::Mnemonic` describing the first problem found.
pub fn validate_mnemonic(phrase: &str) -> Result<(), CryptoError> {
    Mnemonic::parse_in_normalized(Language::English, phrase)
        .map(|_| ())
        .map_err(|e| CryptoError::Mnemonic(format!("invalid phrase: {e}")))
}

/// `true` if `word` is in the English BIP-39 wordlist.
#[must_use]
pub fn is_english_word(word: &str) -> bool {
    Language::English.find_word(word).is_some()
}
