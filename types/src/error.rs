use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: at least one player required")]
    NoPlayers,

    #[error("Deck cursor {0} is past the end of the deck")]
    CursorOutOfRange(usize),

    #[error("Game did not finish within {0} turns")]
    TurnLimitExceeded(usize),
}
