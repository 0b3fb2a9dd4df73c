//! The cipher engine: message validation, mode selection, and the
//! encrypt/decrypt transforms over the substitution table.

use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::table::Table;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Parses the CLI mode argument: "E" encrypts, "D" decrypts.
    pub fn parse(value: &str) -> Result<Self, CipherError> {
        match value {
            "E" => Ok(Mode::Encrypt),
            "D" => Ok(Mode::Decrypt),
            other => Err(CipherError::UnknownMode(other.to_string())),
        }
    }
}

/// Checks that every message byte is an alphabet symbol. All-or-nothing: one
/// foreign byte fails the whole message before any output is produced.
pub fn validate_message(msg: &[u8], alphabet: &Alphabet) -> Result<(), CipherError> {
    if msg.iter().all(|&b| alphabet.contains(b)) {
        Ok(())
    } else {
        Err(CipherError::InvalidMessage)
    }
}

/// The tabula recta engine. Owns the substitution table for one run; both
/// transforms are pure functions of (message, expanded key) and preserve
/// position: output symbol `i` depends only on input symbol `i`.
///
/// Callers must validate the message and expand the key to the message
/// length first. On that contract the transforms are infallible; a lookup
/// miss inside them is an invariant violation and panics.
pub struct Cipher<'a> {
    alphabet: &'a Alphabet,
    table: Table,
}

impl<'a> Cipher<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            table: Table::new(alphabet),
        }
    }

    /// Runs the transform selected by `mode`.
    pub fn apply(&self, mode: Mode, msg: &[u8], key: &[u8]) -> Vec<u8> {
        match mode {
            Mode::Encrypt => self.encrypt(msg, key),
            Mode::Decrypt => self.decrypt(msg, key),
        }
    }

    /// `out[i] = table[index(key[i])][index(msg[i])]`.
    pub fn encrypt(&self, msg: &[u8], key: &[u8]) -> Vec<u8> {
        debug_assert_eq!(msg.len(), key.len());
        msg.iter()
            .zip(key)
            .map(|(&m, &k)| {
                let column = self.index_of(m);
                let row = self.index_of(k);
                self.table.row(row)[column]
            })
            .collect()
    }

    /// Finds the ciphertext symbol within the key's row and maps its offset
    /// back through row 0, which is the alphabet itself.
    pub fn decrypt(&self, msg: &[u8], key: &[u8]) -> Vec<u8> {
        debug_assert_eq!(msg.len(), key.len());
        msg.iter()
            .zip(key)
            .map(|(&m, &k)| {
                let row = self.table.row(self.index_of(k));
                let w = row
                    .iter()
                    .position(|&s| s == m)
                    .expect("ciphertext symbol missing from a table row");
                self.alphabet.symbols()[w]
            })
            .collect()
    }

    fn index_of(&self, symbol: u8) -> usize {
        self.alphabet
            .index_of(symbol)
            .expect("symbol outside the alphabet reached the engine")
    }
}
