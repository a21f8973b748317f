use thiserror::Error;

/// Misuse of the board API. Losing the game is never an error; see
/// [`Status`](crate::Status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board is too small: {height}x{width} cannot seat a centered snake")]
    TooSmall { height: i32, width: i32 },
    #[error("board is full, new food cannot be created")]
    Full,
}
