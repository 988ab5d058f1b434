use super::domain::{AnswerValue, Response};
use std::collections::HashMap;

static ABSENT: AnswerValue = AnswerValue::Absent;

/// The loaded response table: rows are responses, columns are question
/// labels. Immutable for the duration of an analysis run; subgroups and
/// findings are derived values.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    questions: Vec<String>,
    index: HashMap<String, usize>,
    responses: Vec<Response>,
}

impl SurveyDataset {
    pub fn new(questions: Vec<String>, responses: Vec<Response>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(at, label)| (label.clone(), at))
            .collect();
        Self {
            questions,
            index,
            responses,
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn has_question(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Answer of one response for a question label. Unknown labels and rows
    /// shorter than the header read as absent.
    pub fn answer(&self, row: usize, label: &str) -> &AnswerValue {
        let Some(&column) = self.index.get(label) else {
            return &ABSENT;
        };
        self.responses
            .get(row)
            .and_then(|response| response.cell(column))
            .unwrap_or(&ABSENT)
    }

    /// Distinct non-absent answers for a question, in first-observed row
    /// order.
    pub fn distinct_answers(&self, label: &str) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in 0..self.len() {
            if let Some(value) = self.answer(row, label).as_selection() {
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
        }
        seen
    }
}
