use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use trivia_protocol::ClueRecord;

/// How much of a clue has been shown. Only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    QuestionShown,
    AnswerShown,
}

impl RevealState {
    /// The state after one activation; `AnswerShown` is terminal.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => QuestionShown,
            QuestionShown => AnswerShown,
            AnswerShown => AnswerShown,
        }
    }

    pub const fn is_answered(self) -> bool {
        matches!(self, Self::AnswerShown)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    /// Keeps only the question and answer text, or `None` if either is unusable.
    pub fn from_record(record: &ClueRecord) -> Option<Self> {
        let question = normalize_text(record.question.as_deref()?);
        let answer = normalize_text(record.answer.as_deref()?);
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self::new(question, answer))
    }

    /// Text currently on display, `None` while hidden.
    pub fn shown_text(&self) -> Option<&str> {
        use RevealState::*;
        match self.showing {
            Hidden => None,
            QuestionShown => Some(self.question.as_str()),
            AnswerShown => Some(self.answer.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

/// Flattens API markup into plain text: drops `<...>` tags and backslash
/// escapes and collapses runs of whitespace.
pub fn normalize_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    // start of a `<` that may still turn out to open a tag
    let mut tag_start = None;

    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => continue,
            // same rule as the HTML tokenizer: `< 5` is text, `<i>` and `</i>` are tags
            '<' if chars
                .peek()
                .is_some_and(|&next| next.is_ascii_alphabetic() || next == '/' || next == '!') =>
            {
                tag_start = Some(text.len())
            }
            '>' => {
                if let Some(start) = tag_start.take() {
                    text.truncate(start);
                    continue;
                }
            }
            _ => {}
        }
        text.push(ch);
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
