//! Wire format of the jservice-compatible trivia API.
//!
//! Only the fields the game reads are declared, everything else in the
//! responses (values, air dates, game ids, ...) is dropped while decoding.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub type CategoryId = u64;

pub const DEFAULT_API_BASE: &str = "https://jservice.io";
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const CATEGORY_PATH: &str = "/api/category";

/// One entry of `GET /api/categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues_count: Option<u32>,
}

/// Body of `GET /api/category?id=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

/// A clue as served by the API. Either text may be null on bad records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl ClueRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn categories_url(base: &str, count: usize) -> String {
    format!("{}{}?count={}", trim_base(base), CATEGORIES_PATH, count)
}

pub fn category_url(base: &str, id: CategoryId) -> String {
    format!("{}{}?id={}", trim_base(base), CATEGORY_PATH, id)
}
