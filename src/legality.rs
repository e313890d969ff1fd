//! Validation of arbitrary candidate moves against the rules
//!
//! This re-checks a move from first principles rather than looking it up in
//! the generated move list, so it also serves to cross-check the generator.

use crate::error::Result;
use crate::movegen::{apply_leg, capture_landings, capture_leg_available, step_shape_allowed};
use crate::moves::Move;
use crate::piece::Piece;
use crate::position::Position;

impl Position {
    /// Returns true iff `mv` may be played in this position
    ///
    /// Never fails: a move that happens to be illegal simply yields `false`.
    pub fn is_legal(&self, mv: &Move) -> bool {
        if mv.is_vestigial() || mv.from() == mv.to() {
            return false;
        }
        if self.get(mv.from()) != Piece::from(self.side_to_move()) {
            return false;
        }
        if !self.get(mv.to()).is_empty() {
            return false;
        }

        if mv.is_jump() {
            self.capture_chain_legal(mv)
        } else {
            self.step_legal(mv)
        }
    }

    /// Parses `notation` and checks the resulting move
    ///
    /// Fails with `MalformedMove` only if the text is not a move at all.
    pub fn is_legal_notation(&self, notation: &str) -> Result<bool> {
        let mv = Move::parse(notation)?;
        Ok(self.is_legal(&mv))
    }

    fn step_legal(&self, mv: &Move) -> bool {
        // captures are mandatory
        if self.jump_possible() {
            return false;
        }
        step_shape_allowed(self.side_to_move(), mv.from(), mv.to())
            && self.last_step_from(mv.from()) != Some(mv.to())
    }

    fn capture_chain_legal(&self, mv: &Move) -> bool {
        let side = self.side_to_move();
        let mut scratch = *self.cells();

        for leg in mv.legs() {
            if !capture_leg_available(&scratch, side, leg.from(), leg.to()) {
                return false;
            }
            apply_leg(&mut scratch, leg.from(), leg.to());
        }

        // the chain must not stop while another capture is available
        let maximal = capture_landings(&scratch, side, mv.final_destination())
            .next()
            .is_none();
        maximal
    }
}
