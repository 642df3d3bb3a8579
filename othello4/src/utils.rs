//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use itertools::Itertools;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format 16 characters into a grid labelled with 0-based row and column indices.
/// `piece_iter` must yield exactly 16 items.
pub fn format_grid<T: Iterator<Item = char>>(piece_iter: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "  {}", (0..EDGE_LENGTH).join(" "))?;

    let mut rows = 0;
    for (row, pieces) in piece_iter.chunks(EDGE_LENGTH).into_iter().enumerate() {
        let pieces: Vec<char> = pieces.collect();
        if row >= EDGE_LENGTH || pieces.len() != EDGE_LENGTH {
            return Err(fmt::Error);
        }
        write!(f, "\n{} {}", row, pieces.iter().join(" "))?;
        rows += 1;
    }

    if rows == EDGE_LENGTH {
        Ok(())
    } else {
        Err(fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grid(&'static str);

    impl fmt::Display for Grid {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            format_grid(self.0.chars(), f)
        }
    }

    #[test]
    fn formats_full_grid() {
        assert_eq!(
            Grid("abcdefghijklmnop").to_string(),
            "  0 1 2 3\n0 a b c d\n1 e f g h\n2 i j k l\n3 m n o p"
        );
    }

    #[test]
    fn rejects_wrong_length() {
        use std::fmt::Write;
        let mut out = String::new();
        assert!(write!(out, "{}", Grid("abc")).is_err());
        let mut out = String::new();
        assert!(write!(out, "{}", Grid("abcdefghijklmnopq")).is_err());
    }
}
