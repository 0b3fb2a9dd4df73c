//! The fixed 83-symbol cipher alphabet.

/// Number of symbols in the cipher alphabet.
pub const SYMBOL_COUNT: usize = 83;

/// The symbols in their fixed order: CR, LF, punctuation, decimal digits,
/// then the Russian alphabet in Windows-1251, uppercase before lowercase,
/// with Ё/ё in seventh position.
const SYMBOLS: [u8; SYMBOL_COUNT] = *b"\r\n.,?!-0123456789\
    \xC0\xC1\xC2\xC3\xC4\xC5\xA8\xC6\xC7\xC8\xC9\xCA\xCB\xCC\xCD\xCE\xCF\
    \xD0\xD1\xD2\xD3\xD4\xD5\xD6\xD7\xD8\xD9\xDA\xDB\xDC\xDD\xDE\xDF\
    \xE0\xE1\xE2\xE3\xE4\xE5\xB8\xE6\xE7\xE8\xE9\xEA\xEB\xEC\xED\xEE\xEF\
    \xF0\xF1\xF2\xF3\xF4\xF5\xF6\xF7\xF8\xF9\xFA\xFB\xFC\xFD\xFE\xFF";

/// The ordered set of symbols the cipher operates over.
///
/// Built once per run and passed by reference into validation, key handling,
/// and the engine. Order is significant: it fixes each symbol's index and
/// thereby the substitution table's rotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; SYMBOL_COUNT],
}

impl Alphabet {
    pub fn new() -> Self {
        Self { symbols: SYMBOLS }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in their fixed order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: u8) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Position of `symbol` in the fixed order, `None` for non-members.
    /// A linear scan; the set has 83 elements.
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Single-byte (Windows-1251) form of `c`, covering the repertoire the
    /// cipher can ever accept: ASCII plus the Russian letters. А..я are
    /// contiguous in both Unicode and Windows-1251; Ё/ё sit outside that
    /// range in both.
    pub fn byte_for_char(c: char) -> Option<u8> {
        match c {
            '\0'..='\x7f' => Some(c as u8),
            'Ё' => Some(0xA8),
            'ё' => Some(0xB8),
            'А'..='я' => Some((c as u32 - 'А' as u32) as u8 + 0xC0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn has_83_distinct_symbols() {
        let a = Alphabet::new();
        assert_eq!(a.len(), 83);
        let mut seen = HashSet::new();
        assert!(a.symbols().iter().all(|s| seen.insert(*s)));
    }

    #[test]
    fn order_starts_with_control_punctuation_digits() {
        let a = Alphabet::new();
        assert_eq!(&a.symbols()[..17], b"\r\n.,?!-0123456789");
        assert_eq!(a.index_of(b'\r'), Some(0));
        assert_eq!(a.index_of(b'0'), Some(7));
        assert_eq!(a.index_of(b'1'), Some(8));
        assert_eq!(a.index_of(0xC0), Some(17)); // 'А'
    }

    #[test]
    fn every_symbol_round_trips_through_index() {
        let a = Alphabet::new();
        for (i, &s) in a.symbols().iter().enumerate() {
            assert_eq!(a.index_of(s), Some(i));
        }
    }

    #[test]
    fn rejects_latin_letters() {
        let a = Alphabet::new();
        assert!(!a.contains(b'Z'));
        assert_eq!(a.index_of(b'Z'), None);
        assert!(!a.contains(b' '));
    }

    #[test]
    fn transcodes_cyrillic_chars() {
        assert_eq!(Alphabet::byte_for_char('А'), Some(0xC0));
        assert_eq!(Alphabet::byte_for_char('Я'), Some(0xDF));
        assert_eq!(Alphabet::byte_for_char('а'), Some(0xE0));
        assert_eq!(Alphabet::byte_for_char('я'), Some(0xFF));
        assert_eq!(Alphabet::byte_for_char('Ё'), Some(0xA8));
        assert_eq!(Alphabet::byte_for_char('ё'), Some(0xB8));
        assert_eq!(Alphabet::byte_for_char('7'), Some(b'7'));
        assert_eq!(Alphabet::byte_for_char('ß'), None);
    }
}
