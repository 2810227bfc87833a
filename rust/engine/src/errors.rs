use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Cannot partition {cards} cards among {recipients} seats")]
    InvalidPartition { cards: usize, recipients: usize },
    #[error("Malformed hand: {0}")]
    MalformedHand(#[from] MalformedHand),
    #[error("Invalid hand notation: {0}")]
    InvalidNotation(String),
    #[error("Invalid board number: {0} (boards start at 1)")]
    InvalidBoardNumber(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedHand {
    #[error("expected 13 cards, got {count}")]
    WrongCardCount { count: usize },
    #[error("card {card} appears more than once")]
    DuplicateCard { card: Card },
}
