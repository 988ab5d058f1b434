use super::dataset::SurveyDataset;
use super::domain::QuestionKind;
use super::filter::Subgroup;
use super::selections::split_selections;
use serde::Serialize;
use std::collections::HashMap;

/// One ranked value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub value: String,
    pub count: usize,
}

/// Occurrence counts for one question over one subgroup.
///
/// `answered` is the number of respondents with a non-absent answer and is
/// the percentage denominator. `selections` counts (respondent, selection)
/// pairs and can exceed `answered` for multi-choice questions; it is never
/// used as a denominator.
#[derive(Debug, Clone, Serialize)]
pub struct Tally {
    pub question: String,
    pub answered: usize,
    pub selections: usize,
    pub entries: Vec<TallyEntry>,
}

impl Tally {
    /// Count selections over the subgroup in its row order. Ranking is by
    /// count descending; ties keep the order in which a value was first
    /// observed, which the stable sort preserves from the insertion order
    /// of the counting pass.
    pub fn count(
        dataset: &SurveyDataset,
        subgroup: &Subgroup,
        question: &str,
        kind: QuestionKind,
    ) -> Self {
        let mut entries: Vec<TallyEntry> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut answered = 0usize;
        let mut selections = 0usize;

        for &row in subgroup.rows() {
            let answer = dataset.answer(row, question);
            if answer.is_absent() {
                continue;
            }
            answered += 1;

            let picked = if kind.is_multi() {
                split_selections(answer)
            } else {
                answer.as_selection().into_iter().collect()
            };
            for value in picked {
                selections += 1;
                match positions.get(&value) {
                    Some(&at) => entries[at].count += 1,
                    None => {
                        positions.insert(value.clone(), entries.len());
                        entries.push(TallyEntry { value, count: 1 });
                    }
                }
            }
        }

        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            question: question.to_string(),
            answered,
            selections,
            entries,
        }
    }

    /// Keep only the `k` most frequent values.
    pub fn top(mut self, k: usize) -> Self {
        self.entries.truncate(k);
        self
    }

    /// Reorder entries lexicographically by value, for distributions that
    /// read in bracket order rather than by frequency.
    pub fn sorted_by_value(mut self) -> Self {
        self.entries.sort_by(|a, b| a.value.cmp(&b.value));
        self
    }

    /// Percentage of answering respondents behind `count`, or `None` when
    /// nobody in the subgroup answered the question.
    pub fn percent_of(&self, count: usize) -> Option<f64> {
        if self.answered == 0 {
            None
        } else {
            Some(count as f64 / self.answered as f64 * 100.0)
        }
    }

    /// True when the ratio is undefined because nobody answered. Consumers
    /// branch on this instead of treating the result as zero.
    pub fn is_undefined(&self) -> bool {
        self.answered == 0
    }
}
