use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Shown in every cell whose clue is still hidden.
pub const PLACEHOLDER: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellStyle {
    Hidden,
    Question,
    Answered,
}

impl CellStyle {
    pub const fn from_reveal_state(state: RevealState) -> Self {
        use RevealState::*;
        match state {
            Hidden => Self::Hidden,
            QuestionShown => Self::Question,
            AnswerShown => Self::Answered,
        }
    }

    pub const fn class(self) -> Option<&'static str> {
        use CellStyle::*;
        match self {
            Hidden => None,
            Question => Some("question"),
            Answered => Some("answered"),
        }
    }

    /// Answered cells no longer react to activation.
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Answered)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub id: CellId,
    pub text: String,
    pub style: CellStyle,
}

/// Everything needed to draw the board: one header per category and a body
/// of `[clue, category]` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub headers: Vec<String>,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, id: CellId) -> Option<&CellView> {
        self.cells.get((id.clue, id.category))
    }
}

/// Builds the whole grid from scratch, replacing any earlier view.
pub fn render(board: &Board) -> BoardView {
    let config = board.config();
    let headers = board
        .categories()
        .iter()
        .map(|category| category.title.clone())
        .collect();

    let cells = Array2::from_shape_fn(
        (config.clues_per_category, config.categories),
        |(clue_idx, cat_idx)| {
            let clue = &board[(cat_idx, clue_idx)];
            CellView {
                id: CellId::new(cat_idx, clue_idx),
                text: String::from(clue.shown_text().unwrap_or(PLACEHOLDER)),
                style: CellStyle::from_reveal_state(clue.showing),
            }
        },
    );

    BoardView { headers, cells }
}
