//! Key handling: turning the command-line key into alphabet symbols and
//! stretching it to the message length.

use crate::alphabet::Alphabet;
use crate::error::CipherError;

/// Parses the key argument into alphabet symbols. Every character must name
/// an alphabet symbol; Cyrillic characters are transcoded to their
/// single-byte form, so a key typed on a UTF-8 terminal validates the same
/// way as digits and punctuation.
pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Vec<u8>, CipherError> {
    if text.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    text.chars()
        .map(|c| {
            Alphabet::byte_for_char(c)
                .filter(|&b| alphabet.contains(b))
                .ok_or_else(|| CipherError::InvalidKey(text.to_string()))
        })
        .collect()
}

/// Repeats `key` cyclically to exactly `target_len` symbols:
/// `expanded[i] = key[i % key.len()]`. A zero `target_len` yields an empty
/// key. The empty key is refused here as well, so the modulus is never zero.
pub fn expand(key: &[u8], target_len: usize) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    Ok((0..target_len).map(|i| key[i % key.len()]).collect())
}
