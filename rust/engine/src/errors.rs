use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot check facing a bet of {current_bet} (committed {committed})")]
    IllegalCheck { current_bet: u32, committed: u32 },
    #[error("Invalid bet amount: {amount}, must exceed {minimum}")]
    BetTooSmall { amount: u32, minimum: u32 },
    #[error("No chips left to commit")]
    NoChipsToCommit,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is still being played")]
    HandInProgress,
    #[error("At least two players with chips are required, found {0}")]
    NotEnoughPlayers(usize),
    #[error("Big blind must be positive")]
    InvalidBigBlind,
    #[error("Table holds {0} chips, more than a pot can count")]
    TooManyChips(u64),
    #[error("Expected {expected} action providers, got {actual}")]
    SeatCountMismatch { expected: usize, actual: usize },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}
