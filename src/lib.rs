//! A move-legality engine and adversarial search for the board game 'Qirkat'
//!
//! Positions validate and enumerate legal moves, including mandatory
//! multi-leg captures, and a depth-limited alpha-beta search picks moves.
//!
//! # Basic Usage
//!
//! ```
//! use qirkat_ai::{moves::Move, position::Position, search::Search};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut position = Position::new();
//! assert_eq!(position.legal_moves().len(), 4);
//!
//! let opening = Move::parse("c2-c3")?;
//! assert!(position.is_legal(&opening));
//! position.apply(&opening);
//!
//! let reply = Search::new().best_move(&mut position);
//! assert!(position.is_legal(&reply));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod square;

pub mod piece;

pub mod moves;

pub mod position;

pub mod movegen;

pub mod legality;

pub mod search;

pub mod perft;


pub use error::{QirkatError, Result};
pub use moves::Move;
pub use piece::{Color, Piece};
pub use position::Position;
pub use search::{Search, SearchConfig};
pub use square::Square;

/// The width and height of the game board in squares
pub const SIDE: usize = 5;

/// The number of squares on the board
pub const NUM_SQUARES: usize = SIDE * SIDE;

// square indices are stored in a u8
const_assert!(NUM_SQUARES <= u8::MAX as usize);
// the layout alphabet and notation only cover columns a..e and rows 1..5
const_assert_eq!(SIDE, 5);
