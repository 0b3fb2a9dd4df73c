//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

/// Tabula recta file encryptor/decryptor for Cyrillic text.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// File to read the message from
    pub input: PathBuf,

    /// File to write the transformed message to
    pub output: PathBuf,

    /// "E" to encrypt, "D" to decrypt
    pub mode: String,

    /// Key, repeated cyclically to the message length
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_positionals() {
        let args =
            Args::try_parse_from(["tabula", "in.txt", "out.txt", "E", "123"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.mode, "E");
        assert_eq!(args.key, "123");
    }

    #[test]
    fn refuses_wrong_arity() {
        assert!(Args::try_parse_from(["tabula", "in.txt"]).is_err());
        assert!(Args::try_parse_from(["tabula", "a", "b", "E", "1", "extra"]).is_err());
    }
}
