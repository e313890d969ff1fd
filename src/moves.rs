//! Move values and their notation
//!
//! A move is either a single non-capturing step, a single capture leg, or a
//! capture leg followed by further capture legs starting where it landed.
//! The notation lists every visited square separated by hyphens, e.g.
//! `c2-c3` for a step or `a3-c5-c3` for a two-leg capture.

use std::fmt;
use std::str::FromStr;

use crate::error::{QirkatError, Result};
use crate::square::Square;

/// An immutable Qirkat move
///
/// Two moves are equal iff their source, destination and continuation are
/// equal. A move whose source equals its destination and which has no
/// continuation is *vestigial*: it marks a single square and is never
/// playable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    from: Square,
    to: Square,
    next: Option<Box<Move>>,
}

impl Move {
    /// Creates the move `from`-`to`, continued by `next` if given
    ///
    /// A continuation is only allowed after a capture leg, must itself be a
    /// capture and must start on the square this leg lands on.
    pub fn new(from: Square, to: Square, next: Option<Move>) -> Result<Self> {
        let mut mv = Self::leg(from, to);
        if let Some(tail) = next {
            if !mv.is_jump() {
                return Err(QirkatError::MalformedMove(format!(
                    "{} is not a capture and cannot be continued by {}",
                    mv, tail
                )));
            }
            if !tail.is_jump() || tail.from != to {
                return Err(QirkatError::MalformedMove(format!(
                    "{} cannot continue the capture {}",
                    tail, mv
                )));
            }
            mv.next = Some(Box::new(tail));
        }
        Ok(mv)
    }

    /// A single step or capture leg with no continuation
    pub fn leg(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            next: None,
        }
    }

    /// A vestigial move marking `square`
    pub fn vestigial(square: Square) -> Self {
        Self::leg(square, square)
    }

    /// Concatenates `self` followed by `tail`
    ///
    /// A vestigial operand acts as the identity on either side.
    pub fn join(self, tail: Move) -> Move {
        if self.is_vestigial() {
            return tail;
        }
        if tail.is_vestigial() {
            return self;
        }
        debug_assert!(self.is_jump() && tail.is_jump());
        debug_assert_eq!(self.final_destination(), tail.from);
        let next = match self.next {
            None => tail,
            Some(next) => next.join(tail),
        };
        Self {
            from: self.from,
            to: self.to,
            next: Some(Box::new(next)),
        }
    }

    /// Parses notation of the form `<col><row>(-<col><row>)+`
    pub fn parse(notation: &str) -> Result<Self> {
        let malformed = || QirkatError::MalformedMove(format!("bad move denotation '{}'", notation));

        let squares = notation
            .trim()
            .split('-')
            .map(|part| part.parse::<Square>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>>>()?;
        if squares.len() < 2 {
            return Err(malformed());
        }

        // build from the last leg backwards so each leg owns its continuation
        let mut result = None;
        for pair in squares.windows(2).rev() {
            result = Some(Move::new(pair[0], pair[1], result)?);
        }
        result.ok_or_else(malformed)
    }

    pub fn from(&self) -> Square {
        self.from
    }

    /// Destination of the first leg
    pub fn to(&self) -> Square {
        self.to
    }

    /// The square the acting piece finally lands on
    pub fn final_destination(&self) -> Square {
        self.legs().last().map_or(self.to, |leg| leg.to)
    }

    /// The capture legs after the first one, if any
    pub fn jump_tail(&self) -> Option<&Move> {
        self.next.as_deref()
    }

    /// True iff the first leg covers a distance of two in either direction
    pub fn is_jump(&self) -> bool {
        let (dc, dr) = self.from.delta(self.to);
        dc.abs() > 1 || dr.abs() > 1
    }

    pub fn is_vestigial(&self) -> bool {
        self.from == self.to && self.next.is_none()
    }

    /// True iff this is a non-capturing step one column to the left
    pub fn is_left_move(&self) -> bool {
        !self.is_jump() && self.from.delta(self.to) == (-1, 0)
    }

    /// True iff this is a non-capturing step one column to the right
    pub fn is_right_move(&self) -> bool {
        !self.is_jump() && self.from.delta(self.to) == (1, 0)
    }

    /// The square jumped over by the first leg, `None` for a step
    pub fn jumped_square(&self) -> Option<Square> {
        if self.is_jump() {
            Some(self.from.midpoint(self.to))
        } else {
            None
        }
    }

    /// Iterates over the legs of this move, first leg first
    pub fn legs(&self) -> Legs<'_> {
        Legs { next: Some(self) }
    }

    /// Number of legs, 1 for a step or a single capture
    pub fn len(&self) -> usize {
        self.legs().count()
    }
}

/// Iterator over the legs of a [`Move`]
pub struct Legs<'a> {
    next: Option<&'a Move>,
}

impl<'a> Iterator for Legs<'a> {
    type Item = &'a Move;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next.as_deref();
        Some(current)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        if self.is_vestigial() {
            return Ok(());
        }
        for leg in self.legs() {
            write!(f, "-{}", leg.to)?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = QirkatError;

    fn from_str(s: &str) -> Result<Self> {
        Move::parse(s)
    }
}
