//! Errors raised by the Qirkat core

/// Structural failures when building moves or positions from outside input
///
/// Asking whether a well-formed move is legal never produces an error;
/// see [`Position::is_legal`](crate::position::Position::is_legal).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QirkatError {
    /// Notation or coordinates that cannot form a structurally valid move
    #[error("malformed move: {0}")]
    MalformedMove(String),

    /// A board description that breaks the 25-square / alphabet / side contract
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

/// Result type for Qirkat operations
pub type Result<T> = std::result::Result<T, QirkatError>;
