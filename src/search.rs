//! An agent to choose moves in Qirkat positions

use static_assertions::const_assert;

use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;
use crate::NUM_SQUARES;

/// A position magnitude indicating a win (for white if positive, black if negative)
pub const WIN_VALUE: i32 = i32::MAX - 1;
/// A magnitude greater than any position value
pub const INFINITY: i32 = i32::MAX;
/// Default search depth in plies
pub const DEFAULT_MAX_DEPTH: u32 = 8;

// a forced outcome must outweigh any material difference
const_assert!(WIN_VALUE > NUM_SQUARES as i32);

/// Candidate moves ordered so that longer capture chains are tried first
struct MoveSorter {
    // move and number of legs, sorted by ascending length
    moves: Vec<(Move, usize)>,
}

impl MoveSorter {
    pub fn new(moves: Vec<Move>) -> Self {
        let mut sorter = Self {
            moves: Vec::with_capacity(moves.len()),
        };
        // pushing in reverse keeps generation order among moves of equal length
        for mv in moves.into_iter().rev() {
            let len = mv.len();
            sorter.push(mv, len);
        }
        sorter
    }

    fn push(&mut self, new_move: Move, score: usize) {
        let mut pos = self.moves.len();
        while pos != 0 && self.moves[pos - 1].1 > score {
            pos -= 1;
        }
        self.moves.insert(pos, (new_move, score));
    }
}

impl Iterator for MoveSorter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.moves.pop().map(|(mv, _)| mv)
    }
}

/// Search parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched before falling back to static evaluation
    pub max_depth: u32,
}

impl SearchConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A depth-limited minimax agent with alpha-beta pruning
///
/// # Position Scoring
/// A position is scored from White's point of view as the number of white
/// pieces minus the number of black pieces. Once the side to move is stuck
/// the score becomes [`WIN_VALUE`] if White is ahead on material and
/// `-WIN_VALUE` otherwise, so forced outcomes dominate any material count.
///
/// The search plays moves on the caller's [`Position`] and takes each one
/// back before trying the next, so the position is unchanged on return.
#[derive(Clone, Debug)]
pub struct Search {
    config: SearchConfig,

    /// The number of nodes searched by this `Search` so far (for diagnostics only)
    pub node_count: usize,
}

impl Search {
    /// Creates a new `Search` with the default depth
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Chooses a move for the side to move in `position`
    ///
    /// # Panics
    /// If `position` is terminal.
    pub fn best_move(&mut self, position: &mut Position) -> Move {
        self.search(position).1
    }

    /// Returns the score of `position` and the move achieving it
    ///
    /// # Panics
    /// If `position` is terminal.
    pub fn search(&mut self, position: &mut Position) -> (i32, Move) {
        assert!(
            !position.is_terminal(),
            "search requires a position with a legal move"
        );

        let sense = match position.side_to_move() {
            Color::White => 1,
            Color::Black => -1,
        };
        // a move is only recorded at the root, so search at least one ply
        let depth = self.config.max_depth.max(1);
        let nodes_before = self.node_count;

        let (score, best) = self.top_level_search(position, depth, sense);

        log::debug!(
            "searched {} nodes to depth {}: {} plays {} (score {})",
            self.node_count - nodes_before,
            depth,
            position.side_to_move(),
            best,
            score
        );
        (score, best)
    }

    /// Searches the root moves and keeps track of the best one
    fn top_level_search(&mut self, position: &mut Position, depth: u32, sense: i32) -> (i32, Move) {
        self.node_count += 1;

        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_score = -sense * INFINITY;
        let mut best_move = None;

        for mv in MoveSorter::new(position.legal_moves()) {
            position.apply_generated(&mv);
            let score = self.find_score(position, depth - 1, -sense, alpha, beta);
            position.undo();
            log::trace!("root move {} scores {}", mv, score);

            if best_move.is_none() || score * sense > best_score * sense {
                best_score = score;
                best_move = Some(mv);
            }
            if sense == 1 {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        let best_move = best_move.expect("a non-terminal position has a legal move");
        (best_score, best_move)
    }

    /// Returns the minimax value of `position` searched `depth` more plies
    ///
    /// `sense` is 1 when the side to move maximizes (White) and -1 when it
    /// minimizes (Black). Only scores are returned below the root.
    fn find_score(&mut self, position: &mut Position, depth: u32, sense: i32, mut alpha: i32, mut beta: i32) -> i32 {
        self.node_count += 1;

        if depth == 0 || position.is_terminal() {
            return static_score(position);
        }

        let mut best_score = -sense * INFINITY;
        for mv in MoveSorter::new(position.legal_moves()) {
            position.apply_generated(&mv);
            let score = self.find_score(position, depth - 1, -sense, alpha, beta);
            position.undo();

            if sense == 1 {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }
            // the opponent will never allow this line
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

/// Static value of `position` from White's point of view
pub fn static_score(position: &Position) -> i32 {
    let score = position.count(Color::White) as i32 - position.count(Color::Black) as i32;
    if position.is_terminal() {
        if score > 0 {
            WIN_VALUE
        } else {
            -WIN_VALUE
        }
    } else {
        score
    }
}

/// True iff `score` reports a forced outcome rather than a material count
pub fn is_win_score(score: i32) -> bool {
    score.abs() == WIN_VALUE
}

/// Chooses a move for the side to move, searching `max_depth` plies
///
/// # Panics
/// If `position` is terminal.
pub fn best_move(position: &mut Position, max_depth: u32) -> Move {
    Search::with_config(SearchConfig::default().with_max_depth(max_depth)).best_move(position)
}
