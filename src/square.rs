//! Square labels and their linearized indices
//!
//! Columns run `a..=e` left to right and rows `1..=5` bottom to top. The
//! linearized index of a square is `column + SIDE * row`, counting from the
//! bottom-left corner `a1 = 0` to the top-right corner `e5 = 24`.

use std::fmt;
use std::str::FromStr;

use crate::error::{QirkatError, Result};
use crate::{NUM_SQUARES, SIDE};

/// A square on the 5x5 board, stored as its linearized index
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct Square(u8);

impl Square {
    /// Creates a square from a column letter `'a'..='e'` and a row digit `'1'..='5'`
    pub fn new(col: char, row: char) -> Result<Self> {
        if !Self::valid(col, row) {
            return Err(QirkatError::MalformedMove(format!(
                "'{}{}' is not a square on the board",
                col, row
            )));
        }
        let index = (col as u8 - b'a') as usize + SIDE * (row as u8 - b'1') as usize;
        Ok(Self(index as u8))
    }

    /// Creates a square from its linearized index
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= NUM_SQUARES {
            return Err(QirkatError::MalformedMove(format!(
                "square index {} out of range",
                index
            )));
        }
        Ok(Self(index as u8))
    }

    /// Creates a square from zero-based column and row offsets, if both are on the board
    pub fn from_coords(col: i32, row: i32) -> Option<Self> {
        if col < 0 || row < 0 || col >= SIDE as i32 || row >= SIDE as i32 {
            return None;
        }
        Some(Self((col + SIDE as i32 * row) as u8))
    }

    /// Returns true iff `col` `row` designate a square on the board
    pub fn valid(col: char, row: char) -> bool {
        ('a'..='e').contains(&col) && ('1'..='5').contains(&row)
    }

    /// Iterates over every square in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn col_index(self) -> i32 {
        (self.0 as usize % SIDE) as i32
    }

    pub fn row_index(self) -> i32 {
        (self.0 as usize / SIDE) as i32
    }

    /// The column letter, `'a'..='e'`
    pub fn col(self) -> char {
        (b'a' + self.col_index() as u8) as char
    }

    /// The row digit, `'1'..='5'`
    pub fn row(self) -> char {
        (b'1' + self.row_index() as u8) as char
    }

    /// Diagonal connections exist only on squares of even parity
    pub fn is_cross_point(self) -> bool {
        (self.col_index() + self.row_index()) % 2 == 0
    }

    /// The square `dcol` columns and `drow` rows away, if still on the board
    pub fn offset(self, dcol: i32, drow: i32) -> Option<Square> {
        Self::from_coords(self.col_index() + dcol, self.row_index() + drow)
    }

    /// The square halfway between `self` and `other`
    ///
    /// Only meaningful when both coordinate distances are even.
    pub fn midpoint(self, other: Square) -> Square {
        let col = (self.col_index() + other.col_index()) / 2;
        let row = (self.row_index() + other.row_index()) / 2;
        Square((col + SIDE as i32 * row) as u8)
    }

    /// Column and row distance from `self` to `other`
    pub fn delta(self, other: Square) -> (i32, i32) {
        (
            other.col_index() - self.col_index(),
            other.row_index() - self.row_index(),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.row())
    }
}

impl FromStr for Square {
    type Err = QirkatError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => Square::new(col, row),
            _ => Err(QirkatError::MalformedMove(format!(
                "could not parse '{}' as a square",
                s
            ))),
        }
    }
}
