//! Move generation, including enumeration of maximal capture chains
//!
//! Capturing is mandatory: whenever any piece of the side to move can
//! capture, the legal moves are exactly the maximal capture chains of every
//! such piece. Otherwise they are the non-capturing steps.

use crate::moves::Move;
use crate::piece::{Color, Piece};
use crate::position::{Cells, Position};
use crate::square::Square;

/// Capture leg offsets in generation order, orthogonal legs first
const CAPTURE_OFFSETS: [(i32, i32); 8] = [
    (0, 2),
    (0, -2),
    (2, 0),
    (-2, 0),
    (2, 2),
    (2, -2),
    (-2, 2),
    (-2, -2),
];

/// Step offsets in generation order; the row offset is scaled by the forward direction
const STEP_OFFSETS: [(i32, i32); 5] = [(-1, 0), (1, 0), (0, 1), (-1, 1), (1, 1)];

/// True iff a piece of `mover` on `from` may capture by jumping to `landing` on `cells`
///
/// The leg must cover exactly two squares orthogonally, or diagonally from a
/// cross point, over an opposing piece onto an empty square.
pub(crate) fn capture_leg_available(cells: &Cells, mover: Color, from: Square, landing: Square) -> bool {
    let shape = match from.delta(landing) {
        (0, 2) | (0, -2) | (2, 0) | (-2, 0) => true,
        (dc, dr) if dc.abs() == 2 && dr.abs() == 2 => from.is_cross_point(),
        _ => false,
    };
    shape
        && cells[from.midpoint(landing).index()] == Piece::from(mover.opposite())
        && cells[landing.index()].is_empty()
}

/// True iff the shape of `from`-`to` is a step `side` may make: lateral,
/// forward, or diagonally forward from a cross point
pub(crate) fn step_shape_allowed(side: Color, from: Square, to: Square) -> bool {
    let forward = side.forward();
    match from.delta(to) {
        (-1, 0) | (1, 0) => true,
        (0, dr) => dr == forward,
        (dc, dr) if dc.abs() == 1 => dr == forward && from.is_cross_point(),
        _ => false,
    }
}

/// Moves the piece on `from` to `landing` and removes the piece jumped over
pub(crate) fn apply_leg(cells: &mut Cells, from: Square, landing: Square) {
    cells[landing.index()] = cells[from.index()];
    cells[from.index()] = Piece::Empty;
    cells[from.midpoint(landing).index()] = Piece::Empty;
}

/// Landing squares of every capture leg available to `mover` from `from`
pub(crate) fn capture_landings<'a>(cells: &'a Cells, mover: Color, from: Square) -> impl Iterator<Item = Square> + 'a {
    CAPTURE_OFFSETS
        .iter()
        .filter_map(move |&(dc, dr)| from.offset(dc, dr))
        .filter(move |&landing| capture_leg_available(cells, mover, from, landing))
}

/// Every maximal capture chain `mover` can make from `from` on `cells`
///
/// Each leg is tried on its own copy of the board so that sibling branches
/// never see each other's captures.
fn chains_from(cells: &Cells, mover: Color, from: Square) -> Vec<Move> {
    let mut chains = Vec::new();
    for landing in capture_landings(cells, mover, from) {
        let mut scratch = *cells;
        apply_leg(&mut scratch, from, landing);

        let leg = Move::leg(from, landing);
        let continuations = chains_from(&scratch, mover, landing);
        if continuations.is_empty() {
            chains.push(leg);
        } else {
            // stopping here would leave a capture on the table
            chains.extend(continuations.into_iter().map(|tail| leg.clone().join(tail)));
        }
    }
    chains
}

impl Position {
    /// All legal moves for the side to move
    ///
    /// Returns either capture chains or steps, never a mix of both.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }

        let own = self.pieces_of(self.side_to_move());
        if self.jump_possible() {
            own.into_iter()
                .flat_map(|sq| self.legal_capture_chains_from(sq))
                .collect()
        } else {
            let mut moves = Vec::new();
            for sq in own {
                for step in self.steps_from(sq) {
                    if !moves.contains(&step) {
                        moves.push(step);
                    }
                }
            }
            moves
        }
    }

    /// All maximal capture chains the piece on `square` can make
    ///
    /// Empty if `square` does not hold a piece of the side to move.
    pub fn legal_capture_chains_from(&self, square: Square) -> Vec<Move> {
        let side = self.side_to_move();
        if self.get(square) != Piece::from(side) {
            return Vec::new();
        }
        chains_from(self.cells(), side, square)
    }

    /// Non-capturing steps from `square`, ignoring the mandatory-capture rule
    pub(crate) fn steps_from(&self, square: Square) -> Vec<Move> {
        let side = self.side_to_move();
        if self.get(square) != Piece::from(side) {
            return Vec::new();
        }
        STEP_OFFSETS
            .iter()
            .filter_map(|&(dc, dr)| square.offset(dc, dr * side.forward()))
            .filter(|&to| step_shape_allowed(side, square, to))
            .filter(|&to| self.get(to).is_empty())
            // a piece may not step straight back to where it just came from
            .filter(|&to| self.last_step_from(square) != Some(to))
            .map(|to| Move::leg(square, to))
            .collect()
    }

    /// True iff the piece on `square` belongs to the side to move and can capture
    pub fn jump_possible_from(&self, square: Square) -> bool {
        let side = self.side_to_move();
        self.get(square) == Piece::from(side)
            && capture_landings(self.cells(), side, square).next().is_some()
    }

    /// True iff any piece of the side to move can capture
    pub fn jump_possible(&self) -> bool {
        Square::all().any(|sq| self.jump_possible_from(sq))
    }

    /// True iff the side to move has at least one legal move
    pub(crate) fn has_any_move(&self) -> bool {
        self.jump_possible()
            || self
                .pieces_of(self.side_to_move())
                .into_iter()
                .any(|sq| !self.steps_from(sq).is_empty())
    }
}
