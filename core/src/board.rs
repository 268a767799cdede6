use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// All categories of one game, laid out `config.categories` wide and
/// `config.clues_per_category` deep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    config: GameConfig,
    categories: Vec<Category>,
}

/// Unchecked serialized form, only turned into a [`Board`] through [`Board::new`].
#[derive(Deserialize)]
struct BoardParts {
    config: GameConfig,
    categories: Vec<Category>,
}

impl TryFrom<BoardParts> for Board {
    type Error = TriviaError;

    fn try_from(BoardParts { config, categories }: BoardParts) -> Result<Self> {
        Self::new(config, categories)
    }
}

impl Board {
    /// Fails unless every column is present and every column is full.
    pub fn new(config: GameConfig, categories: Vec<Category>) -> Result<Self> {
        let full = categories.len() == config.categories
            && categories
                .iter()
                .all(|category| category.clues.len() == config.clues_per_category);
        if !full {
            return Err(TriviaError::InvalidBoardShape);
        }
        Ok(Self { config, categories })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn clue(&self, (category, clue): CluePos) -> Option<&Clue> {
        self.categories.get(category)?.clues.get(clue)
    }

    pub fn validate_pos(&self, pos: CluePos) -> Result<CluePos> {
        if pos.0 < self.config.categories && pos.1 < self.config.clues_per_category {
            Ok(pos)
        } else {
            Err(TriviaError::InvalidCoords)
        }
    }

    pub fn reveal_state_at(&self, pos: CluePos) -> Result<RevealState> {
        let pos = self.validate_pos(pos)?;
        Ok(self[pos].showing)
    }

    /// Moves the clue one step forward and returns the text to display.
    pub fn advance_reveal(&mut self, pos: CluePos) -> Result<AdvanceOutcome<'_>> {
        use RevealState::*;

        let (category, clue) = self.validate_pos(pos)?;
        let clue = &mut self.categories[category].clues[clue];

        let showing = clue.showing;
        clue.showing = showing.next();

        Ok(match showing {
            Hidden => AdvanceOutcome::ShowQuestion(&clue.question),
            QuestionShown => AdvanceOutcome::ShowAnswer(&clue.answer),
            AnswerShown => AdvanceOutcome::AlreadyAnswered,
        })
    }

    /// Every clue with its position, column by column.
    pub fn iter_clues(&self) -> impl Iterator<Item = (CluePos, &Clue)> {
        self.categories.iter().enumerate().flat_map(|(cat_idx, category)| {
            category
                .clues
                .iter()
                .enumerate()
                .map(move |(clue_idx, clue)| ((cat_idx, clue_idx), clue))
        })
    }
}

impl Index<CluePos> for Board {
    type Output = Clue;

    fn index(&self, (category, clue): CluePos) -> &Self::Output {
        &self.categories[category].clues[clue]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;

    pub(crate) fn sample_board(config: GameConfig) -> Board {
        let categories = (0..config.categories)
            .map(|cat| {
                let clues = (0..config.clues_per_category)
                    .map(|clue| Clue::new(format!("q{cat}.{clue}"), format!("a{cat}.{clue}")))
                    .collect();
                Category::new(format!("category {cat}"), clues)
            })
            .collect();
        Board::new(config, categories).unwrap()
    }

    #[test]
    fn advance_reveal_walks_every_cell_through_all_states() {
        use RevealState::*;

        let config = GameConfig::default();
        let mut board = sample_board(config);

        for cat in 0..config.categories {
            for clue in 0..config.clues_per_category {
                let pos = (cat, clue);
                assert_eq!(board.reveal_state_at(pos), Ok(Hidden));

                assert!(board.advance_reveal(pos).unwrap().has_update());
                assert_eq!(board.reveal_state_at(pos), Ok(QuestionShown));

                assert!(board.advance_reveal(pos).unwrap().has_update());
                assert_eq!(board.reveal_state_at(pos), Ok(AnswerShown));

                assert_eq!(board.advance_reveal(pos), Ok(AdvanceOutcome::AlreadyAnswered));
                assert_eq!(board.reveal_state_at(pos), Ok(AnswerShown));
            }
        }
        assert!(board.iter_clues().all(|(_, clue)| clue.showing.is_answered()));
    }

    #[test]
    fn advance_reveal_returns_question_then_answer() {
        let config = GameConfig::new(1, 1, 1);
        let math = Category::new("Math", vec![Clue::new("2+2", "4")]);
        let mut board = Board::new(config, vec![math]).unwrap();

        assert_eq!(board.advance_reveal((0, 0)), Ok(AdvanceOutcome::ShowQuestion("2+2")));
        assert_eq!(board[(0, 0)].showing, RevealState::QuestionShown);

        assert_eq!(board.advance_reveal((0, 0)), Ok(AdvanceOutcome::ShowAnswer("4")));
        assert_eq!(board[(0, 0)].showing, RevealState::AnswerShown);

        assert_eq!(board.advance_reveal((0, 0)), Ok(AdvanceOutcome::AlreadyAnswered));
        assert_eq!(board[(0, 0)].shown_text(), Some("4"));
        assert_eq!(board.clue((0, 0)).map(|clue| clue.answer.as_str()), Some("4"));
        assert_eq!(board.clue((0, 1)), None);
    }

    #[test]
    fn advance_reveal_rejects_out_of_range_positions() {
        let config = GameConfig::default();
        let mut board = sample_board(config);

        assert_eq!(
            board.advance_reveal((config.categories, 0)),
            Err(TriviaError::InvalidCoords)
        );
        assert_eq!(
            board.advance_reveal((0, config.clues_per_category)),
            Err(TriviaError::InvalidCoords)
        );
        assert!(board
            .iter_clues()
            .all(|(_, clue)| clue.showing == RevealState::Hidden));
    }

    #[test]
    fn new_rejects_short_rows_and_missing_columns() {
        let config = GameConfig::new(2, 2, 2);
        let full = || vec![Clue::new("q", "a"), Clue::new("q2", "a2")];

        let short_row = vec![
            Category::new("full", full()),
            Category::new("short", vec![Clue::new("q", "a")]),
        ];
        assert_eq!(Board::new(config, short_row), Err(TriviaError::InvalidBoardShape));

        let missing_column = vec![Category::new("full", full())];
        assert_eq!(
            Board::new(config, missing_column),
            Err(TriviaError::InvalidBoardShape)
        );
    }

    #[test]
    fn deserialize_keeps_shape_check() {
        let config = GameConfig::new(2, 2, 2);
        let board = sample_board(config);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["categories"][1]["clues"]
            .as_array_mut()
            .unwrap()
            .pop();
        let err = serde_json::from_value::<Board>(value).unwrap_err();
        assert!(err.to_string().contains("Board shape does not match"));
    }
}
