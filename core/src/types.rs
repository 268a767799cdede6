use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::TriviaError;

/// Column of the board, one per category.
pub type CategoryIndex = usize;

/// Row of the board, one per clue within a category.
pub type ClueIndex = usize;

/// `(category, clue)` position of a cell.
pub type CluePos = (CategoryIndex, ClueIndex);

/// Tag carried by every body cell, written as `"{category}-{clue}"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub category: CategoryIndex,
    pub clue: ClueIndex,
}

impl CellId {
    pub const fn new(category: CategoryIndex, clue: ClueIndex) -> Self {
        Self { category, clue }
    }

    pub const fn pos(self) -> CluePos {
        (self.category, self.clue)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

impl FromStr for CellId {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, clue) = s.split_once('-').ok_or(TriviaError::InvalidCellId)?;
        let category = category.parse().map_err(|_| TriviaError::InvalidCellId)?;
        let clue = clue.parse().map_err(|_| TriviaError::InvalidCellId)?;
        Ok(Self::new(category, clue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn cell_id_round_trips_through_dom_tag() {
        let id = CellId::new(3, 4);

        assert_eq!(id.to_string(), "3-4");
        assert_eq!("3-4".parse::<CellId>(), Ok(id));
        assert_eq!(id.pos(), (3, 4));
    }

    #[test]
    fn cell_id_rejects_malformed_tags() {
        for tag in ["", "3", "3-", "-4", "a-b", "3-4-5", "-1-2"] {
            assert_eq!(tag.parse::<CellId>(), Err(TriviaError::InvalidCellId), "{tag:?}");
        }
    }
}
