//! The tabula recta: a square table of rotated alphabet copies.

use crate::alphabet::Alphabet;

/// Substitution table whose row `i` is the alphabet cyclically rotated left
/// by `i` positions. Row 0 is the alphabet itself and every row is a
/// permutation of it. Built once per run, read-only afterwards.
#[derive(Debug)]
pub struct Table {
    rows: Vec<Vec<u8>>,
}

impl Table {
    pub fn new(alphabet: &Alphabet) -> Self {
        let rows = (0..alphabet.len())
            .map(|i| {
                let mut row = alphabet.symbols().to_vec();
                row.rotate_left(i);
                row
            })
            .collect();
        Self { rows }
    }

    pub fn row(&self, i: usize) -> &[u8] {
        &self.rows[i]
    }
}
