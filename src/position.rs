//! The Qirkat board state
//!
//! A [`Position`] owns the 25 squares, the side to move, the per-piece
//! reversal memory and the history of snapshots used by [`Position::undo`].
//! Move generation and validation live in [`crate::movegen`] and
//! [`crate::legality`] as further `impl Position` blocks.

use std::fmt;

use crate::error::{QirkatError, Result};
use crate::moves::Move;
use crate::piece::{Color, Piece};
use crate::square::Square;
use crate::{NUM_SQUARES, SIDE};

/// Layout of a new game, row 1 first
const INITIAL_LAYOUT: &str = "wwwww wwwww bb-ww bbbbb bbbbb";

/// Board contents indexed by linearized square index
pub(crate) type Cells = [Piece; NUM_SQUARES];

/// Everything [`Position::undo`] needs to restore the previous position
#[derive(Clone)]
struct Snapshot {
    cells: Cells,
    side: Color,
    last_step_from: [Option<Square>; NUM_SQUARES],
}

#[derive(Clone)]
pub struct Position {
    // cells are stored left-to-right, bottom-to-top
    cells: Cells,
    side: Color,
    terminal: bool,
    // for each square holding a piece that arrived by a step, the square it stepped from
    last_step_from: [Option<Square>; NUM_SQUARES],
    history: Vec<Snapshot>,
}

impl Position {
    /// Creates a position at the start of the game, White to move
    pub fn new() -> Self {
        let mut position = Self {
            cells: [Piece::Empty; NUM_SQUARES],
            side: Color::White,
            terminal: false,
            last_step_from: [None; NUM_SQUARES],
            history: Vec::new(),
        };
        position.clear();
        position
    }

    /// Creates a position from a 25-character layout (see [`Position::set_pieces`])
    pub fn from_layout(layout: &str, side: Color) -> Result<Self> {
        let mut position = Self::new();
        position.set_pieces(layout, side)?;
        Ok(position)
    }

    /// Resets to the initial position and forgets all history
    pub fn clear(&mut self) {
        self.cells = parse_layout(INITIAL_LAYOUT).expect("the initial layout is valid");
        self.side = Color::White;
        self.last_step_from = [None; NUM_SQUARES];
        self.history.clear();
        self.terminal = !self.has_any_move();
    }

    /// Replaces the board with `layout` and sets `side` to move
    ///
    /// `layout` holds 25 characters from `b`, `w` and `-`, optionally mixed
    /// with whitespace, in row-major order starting at `a1`. History and
    /// reversal memory are cleared. On error the position is left untouched.
    pub fn set_pieces(&mut self, layout: &str, side: Color) -> Result<()> {
        let cells = parse_layout(layout)?;
        self.cells = cells;
        self.side = side;
        self.last_step_from = [None; NUM_SQUARES];
        self.history.clear();
        self.terminal = !self.has_any_move();
        Ok(())
    }

    /// Like [`Position::set_pieces`], taking the side as a piece value
    ///
    /// Fails with `InvalidLayout` if `side` is [`Piece::Empty`].
    pub fn set_pieces_for(&mut self, layout: &str, side: Piece) -> Result<()> {
        let side = side
            .color()
            .ok_or_else(|| QirkatError::InvalidLayout("bad player color".to_string()))?;
        self.set_pieces(layout, side)
    }

    pub fn get(&self, square: Square) -> Piece {
        self.cells[square.index()]
    }

    pub(crate) fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    /// True iff the side to move has no legal move
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The winning side once the game is over: whoever is not stuck
    pub fn winner(&self) -> Option<Color> {
        if self.terminal {
            Some(self.side.opposite())
        } else {
            None
        }
    }

    /// The squares holding a piece of `color`, in index order
    pub fn pieces_of(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.get(sq) == Piece::from(color))
            .collect()
    }

    pub fn count(&self, color: Color) -> usize {
        let piece = Piece::from(color);
        self.cells.iter().filter(|&&cell| cell == piece).count()
    }

    /// The square the piece on `square` last stepped from, if it has not moved since
    pub fn last_step_from(&self, square: Square) -> Option<Square> {
        self.last_step_from[square.index()]
    }

    /// Number of moves that can currently be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Plays `mv`, which must be legal in this position
    pub fn apply(&mut self, mv: &Move) {
        debug_assert!(self.is_legal(mv), "illegal move {} applied", mv);
        self.apply_generated(mv);
    }

    /// Plays a move taken from [`Position::legal_moves`] without re-validating it
    pub(crate) fn apply_generated(&mut self, mv: &Move) {
        self.history.push(Snapshot {
            cells: self.cells,
            side: self.side,
            last_step_from: self.last_step_from,
        });

        let mover = self.cells[mv.from().index()];
        if mv.is_jump() {
            for leg in mv.legs() {
                let jumped = leg.from().midpoint(leg.to());
                self.cells[leg.from().index()] = Piece::Empty;
                self.cells[jumped.index()] = Piece::Empty;
                self.cells[leg.to().index()] = mover;
                self.last_step_from[leg.from().index()] = None;
                self.last_step_from[jumped.index()] = None;
                self.last_step_from[leg.to().index()] = None;
            }
        } else {
            self.cells[mv.from().index()] = Piece::Empty;
            self.cells[mv.to().index()] = mover;
            self.last_step_from[mv.from().index()] = None;
            self.last_step_from[mv.to().index()] = Some(mv.from());
        }

        self.side = self.side.opposite();
        self.terminal = !self.has_any_move();
    }

    /// Takes back the last applied move; does nothing if there is none
    pub fn undo(&mut self) {
        let snapshot = match self.history.pop() {
            Some(snapshot) => snapshot,
            None => {
                log::trace!("undo requested with empty history");
                return;
            }
        };
        self.cells = snapshot.cells;
        self.side = snapshot.side;
        self.last_step_from = snapshot.last_step_from;
        self.terminal = !self.has_any_move();
    }

    /// Renders rows 5 down to 1, columns a to e, as used for comparing positions
    pub fn to_canonical_string(&self) -> String {
        self.render(|_| "  ".to_string())
    }

    /// The single-line setup layout of the board, row 1 first, e.g. `wwwww wwwww bb-ww bbbbb bbbbb`
    pub fn to_layout(&self) -> String {
        self.cells
            .chunks(SIDE)
            .map(|row| row.iter().map(|piece| piece.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders the board with row numbers on the left and column letters underneath
    pub fn to_string_with_legend(&self) -> String {
        let mut out = self.render(|row| format!("{}  ", row));
        out.push_str("\n   a b c d e");
        out
    }

    fn render<F: Fn(char) -> String>(&self, margin: F) -> String {
        (0..SIDE as i32)
            .rev()
            .map(|row| {
                let cells: Vec<String> = (0..SIDE as i32)
                    .filter_map(|col| Square::from_coords(col, row))
                    .map(|sq| self.get(sq).to_char().to_string())
                    .collect();
                format!("{}{}", margin((b'1' + row as u8) as char), cells.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parses a layout string into board contents
///
/// Single-line layouts list row 1 first. A multi-line layout is read as the
/// canonical rendering, top row first.
fn parse_layout(layout: &str) -> Result<Cells> {
    let mut chars: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
    if layout.trim().contains('\n') && chars.len() == NUM_SQUARES {
        chars = chars.chunks(SIDE).rev().flatten().copied().collect();
    }
    if chars.len() != NUM_SQUARES {
        return Err(QirkatError::InvalidLayout(format!(
            "expected {} squares, found {} in '{}'",
            NUM_SQUARES,
            chars.len(),
            layout
        )));
    }

    let mut cells = [Piece::Empty; NUM_SQUARES];
    for (cell, &c) in cells.iter_mut().zip(chars.iter()) {
        *cell = Piece::from_char(c).ok_or_else(|| {
            QirkatError::InvalidLayout(format!("unexpected character '{}' in '{}'", c, layout))
        })?;
    }
    Ok(cells)
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.cells == other.cells
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to move\n{}", self.side, self.to_string_with_legend())
    }
}
