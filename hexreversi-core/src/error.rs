//! Error type shared by the board, engine and strategies

/// Result alias used across the core crate
pub type Result<T> = std::result::Result<T, ReversiError>;

/// Errors raised by rule validation
///
/// Every failing call leaves the board and engine untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReversiError {
    /// Bad argument: Empty used as an acting color, bad board size,
    /// or an off-board coordinate passed to a mutating call
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Coordinate is not part of the board
    #[error("coordinate ({q}, {r}) is not on the board")]
    OutOfRange { q: i32, r: i32 },

    /// Action not allowed in the current game state
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl ReversiError {
    /// True for argument-class errors (`InvalidArgument` and `OutOfRange`)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ReversiError::InvalidArgument(_) | ReversiError::OutOfRange { .. }
        )
    }

    /// True for `InvalidState`
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ReversiError::InvalidState(_))
    }

    pub(crate) fn empty_color() -> Self {
        ReversiError::InvalidArgument("the empty color cannot act".to_string())
    }
}
