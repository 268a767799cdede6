#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use fetcher::*;
pub use render::*;
pub use session::*;
pub use source::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod fetcher;
mod render;
mod session;
mod source;
mod types;

/// Categories across the board.
pub const NUM_CATEGORIES: usize = 6;

/// Clues down each category.
pub const NUM_QUESTIONS_PER_CAT: usize = 5;

/// How many categories are listed from the API before drawing the board's.
pub const CATEGORY_POOL_SIZE: usize = 50;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
    pub category_pool: usize,
}

impl GameConfig {
    pub const fn new_unchecked(
        categories: usize,
        clues_per_category: usize,
        category_pool: usize,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool,
        }
    }

    /// Clamps to a board of at least one cell, with a pool that can fill every column.
    pub fn new(categories: usize, clues_per_category: usize, category_pool: usize) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let category_pool = category_pool.max(categories);
        Self::new_unchecked(categories, clues_per_category, category_pool)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT, CATEGORY_POOL_SIZE)
    }
}

/// Result of activating a cell once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome<'a> {
    ShowQuestion(&'a str),
    ShowAnswer(&'a str),
    AlreadyAnswered,
}

impl<'a> AdvanceOutcome<'a> {
    pub const fn has_update(self) -> bool {
        use AdvanceOutcome::*;
        match self {
            ShowQuestion(_) => true,
            ShowAnswer(_) => true,
            AlreadyAnswered => false,
        }
    }

    /// Text the cell displays after this activation, if it changed.
    pub const fn text(self) -> Option<&'a str> {
        use AdvanceOutcome::*;
        match self {
            ShowQuestion(text) | ShowAnswer(text) => Some(text),
            AlreadyAnswered => None,
        }
    }
}
