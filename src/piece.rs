use std::fmt;
use std::str::FromStr;

use crate::error::{QirkatError, Result};

/// One of the two sides
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row offset of a forward step: white moves up the board, black down
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = QirkatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(QirkatError::InvalidLayout(format!(
                "'{}' is not a player colour",
                s
            ))),
        }
    }
}

/// Contents of a single square
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    Empty,
    White,
    Black,
}

impl Piece {
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::White => Some(Color::White),
            Piece::Black => Some(Color::Black),
        }
    }

    /// The layout character for this piece: `w`, `b` or `-`
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'w',
            Piece::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Piece::Empty),
            'w' => Some(Piece::White),
            'b' => Some(Piece::Black),
            _ => None,
        }
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Piece::White,
            Color::Black => Piece::Black,
        }
    }
}
