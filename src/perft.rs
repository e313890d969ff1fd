//! Move path enumeration, used to check the move generator against known counts

use crate::moves::Move;
use crate::position::Position;

/// Counts the move sequences of exactly `depth` plies from `position`
///
/// Sequences that reach a terminal position early are counted once, at the
/// point where they end. The position is restored before returning.
pub fn perft(position: &mut Position, depth: u32) -> u64 {
    if depth == 0 || position.is_terminal() {
        return 1;
    }

    let moves = position.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        position.apply_generated(&mv);
        nodes += perft(position, depth - 1);
        position.undo();
    }
    nodes
}

/// Splits the [`perft`] count of `position` by root move
pub fn perft_divide(position: &mut Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    position
        .legal_moves()
        .into_iter()
        .map(|mv| {
            position.apply_generated(&mv);
            let nodes = perft(position, depth - 1);
            position.undo();
            (mv, nodes)
        })
        .collect()
}
