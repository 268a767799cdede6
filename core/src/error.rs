use alloc::string::String;
use thiserror::Error;
use trivia_protocol::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Failed to fetch trivia: {0}")]
    Fetch(String),
    #[error("Not enough categories: got {available}, need {required}")]
    InsufficientCategories { available: usize, required: usize },
    #[error("Category {category_id} has {available} usable clues, need {required}")]
    InsufficientClues {
        category_id: CategoryId,
        available: usize,
        required: usize,
    },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid cell id")]
    InvalidCellId,
    #[error("Board is not ready, no moves are accepted")]
    NotReady,
}

pub type Result<T> = core::result::Result<T, TriviaError>;
