//! Code for working with [`Location`]s on the board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

const COLUMN_NAMES: &str = "ABCD";
const ROW_NAMES: &str = "1234";

/// A cell on the board, stored as 0-based row and column coordinates.
/// Always on the board: construction validates the coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

impl Location {
    /// The four corner cells, in row-major order.
    pub const CORNERS: [Location; 4] = [
        Location { row: 0, col: 0 },
        Location { row: 0, col: 3 },
        Location { row: 3, col: 0 },
        Location { row: 3, col: 3 },
    ];

    /// Convert from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Convert from signed coordinates, which may point off the board.
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            return None;
        }
        Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Step one cell along `direction`, or None if that leaves the board.
    #[inline]
    pub fn offset(self, (d_row, d_col): (i32, i32)) -> Option<Self> {
        Self::from_signed(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Iterate over every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).filter_map(Location::from_index)
    }

    /// Returns whether this location is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

/// Convert this [`Location`] into string notation ("A1" is the upper-left corner).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_NAMES.chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = ROW_NAMES.chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from either string notation ("B3") or a pair of
/// 0-based coordinates separated by whitespace or a comma ("2 1", "2,1").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();

        if let Some(first) = chars.next() {
            if first.is_ascii_alphabetic() {
                let col = COLUMN_NAMES
                    .find(first.to_ascii_uppercase())
                    .ok_or(ParseLocationError)?;
                let row = chars
                    .next()
                    .and_then(|c| ROW_NAMES.find(c))
                    .ok_or(ParseLocationError)?;
                if chars.next().is_some() {
                    return Err(ParseLocationError);
                }
                return Self::from_coords(row, col).ok_or(ParseLocationError);
            }
        }

        let mut coords = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().map_err(|_| ParseLocationError));
        let row = coords.next().ok_or(ParseLocationError)??;
        let col = coords.next().ok_or(ParseLocationError)??;
        if coords.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row, col).ok_or(ParseLocationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Some(Location { row: 0, col: 0 })
        );
        assert_eq!(
            Location::from_coords(3, 2),
            Some(Location { row: 3, col: 2 })
        );
        assert_eq!(Location::from_coords(0, 4), None);
        assert_eq!(Location::from_coords(4, 0), None);
    }

    #[test]
    fn location_from_signed() {
        assert_eq!(Location::from_signed(-1, 0), None);
        assert_eq!(Location::from_signed(0, -1), None);
        assert_eq!(Location::from_signed(2, 1), Location::from_coords(2, 1));
    }

    #[test]
    fn location_index_is_row_major() {
        assert_eq!(Location::from_index(0), Location::from_coords(0, 0));
        assert_eq!(Location::from_index(6), Location::from_coords(1, 2));
        assert_eq!(Location::from_index(15), Location::from_coords(3, 3));
        assert_eq!(Location::from_index(16), None);

        let indices: Vec<usize> = Location::all().map(Location::to_index).collect();
        assert_eq!(indices, (0..NUM_SPACES).collect::<Vec<_>>());
    }

    #[test]
    fn location_offset_stops_at_edge() {
        let corner = Location::from_coords(0, 0).unwrap();
        assert_eq!(corner.offset((-1, -1)), None);
        assert_eq!(corner.offset((0, -1)), None);
        assert_eq!(corner.offset((1, 1)), Location::from_coords(1, 1));

        let far = Location::from_coords(3, 3).unwrap();
        assert_eq!(far.offset((1, 0)), None);
        assert_eq!(far.offset((-1, 0)), Location::from_coords(2, 3));
    }

    #[test]
    fn location_corners() {
        let corners: Vec<Location> = Location::all().filter(|loc| loc.is_corner()).collect();
        assert_eq!(corners, Location::CORNERS.to_vec());
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location { row: 0, col: 0 }));
        assert_eq!(Location::from_str("d4"), Ok(Location { row: 3, col: 3 }));
        assert_eq!(Location::from_str("C2"), Location::from_coords(1, 2).ok_or(ParseLocationError));
        assert_eq!(Location::from_str("1 2"), Ok(Location { row: 1, col: 2 }));
        assert_eq!(Location::from_str(" 3,0\n"), Ok(Location { row: 3, col: 0 }));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A5"), Err(ParseLocationError));
        assert_eq!(Location::from_str("E1"), Err(ParseLocationError));
        assert_eq!(Location::from_str("1"), Err(ParseLocationError));
        assert_eq!(Location::from_str("1 2 3"), Err(ParseLocationError));
        assert_eq!(Location::from_str("4 0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("-1 0"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location { row: 0, col: 0 }.to_string(), "A1");
        assert_eq!(Location { row: 3, col: 3 }.to_string(), "D4");
        assert_eq!(Location::from_str("B3").unwrap().to_string(), "B3");
    }
}
