use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    FreeText,
    Timestamp,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleChoice => "Single Choice",
            Self::MultiChoice => "Multi Choice",
            Self::FreeText => "Free Text",
            Self::Timestamp => "Timestamp",
        }
    }

    /// Multi-choice answers go through the selection splitter before
    /// aggregation; every other kind counts at most one selection per row.
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::MultiChoice)
    }
}

/// One question of the questionnaire: the exact header label of the export
/// column and the declared answer kind.
#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub label: &'static str,
    pub kind: QuestionKind,
}

/// A single cell of the response table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    Absent,
    Text(String),
    Number(f64),
    Timestamp(NaiveDateTime),
}

impl AnswerValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    /// The answer rendered as one countable selection. Absent answers
    /// contribute nothing; scalars render through their display form.
    pub fn as_selection(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => {
                if value.fract() == 0.0 {
                    Some(format!("{value:.0}"))
                } else {
                    Some(value.to_string())
                }
            }
            Self::Timestamp(value) => Some(value.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

/// One questionnaire response (one row of the export).
#[derive(Debug, Clone)]
pub struct Response {
    cells: Vec<AnswerValue>,
}

impl Response {
    pub fn new(cells: Vec<AnswerValue>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, column: usize) -> Option<&AnswerValue> {
        self.cells.get(column)
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}
