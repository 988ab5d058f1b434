use super::dataset::SurveyDataset;
use super::domain::AnswerValue;
use tracing::warn;

/// How a subgroup filter matches one answer. Absent answers never match.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Answer text equals the value exactly.
    Equals(String),
    /// Answer text contains the value as a substring.
    Contains(String),
    /// Answer text contains at least one of the values as a substring.
    ContainsAny(Vec<String>),
    /// Answer text is one of the listed values.
    OneOf(Vec<String>),
    /// Any non-absent answer.
    Answered,
}

impl MatchRule {
    fn matches(&self, answer: &AnswerValue) -> bool {
        if answer.is_absent() {
            return false;
        }
        let text = answer.as_selection();
        match self {
            MatchRule::Answered => true,
            MatchRule::Equals(value) => text.is_some_and(|text| text == *value),
            MatchRule::Contains(value) => text.is_some_and(|text| text.contains(value.as_str())),
            MatchRule::ContainsAny(values) => text.is_some_and(|text| {
                values.iter().any(|value| text.contains(value.as_str()))
            }),
            MatchRule::OneOf(values) => {
                text.is_some_and(|text| values.iter().any(|value| *value == text))
            }
        }
    }
}

/// A named predicate over one question, used to carve subgroups.
#[derive(Debug, Clone)]
pub struct SubgroupFilter {
    pub question: String,
    pub rule: MatchRule,
}

impl SubgroupFilter {
    pub fn equals(question: &str, value: &str) -> Self {
        Self {
            question: question.to_string(),
            rule: MatchRule::Equals(value.to_string()),
        }
    }

    pub fn contains(question: &str, value: &str) -> Self {
        Self {
            question: question.to_string(),
            rule: MatchRule::Contains(value.to_string()),
        }
    }

    pub fn contains_any(question: &str, values: &[&str]) -> Self {
        Self {
            question: question.to_string(),
            rule: MatchRule::ContainsAny(values.iter().map(|value| value.to_string()).collect()),
        }
    }

    pub fn one_of(question: &str, values: &[&str]) -> Self {
        Self {
            question: question.to_string(),
            rule: MatchRule::OneOf(values.iter().map(|value| value.to_string()).collect()),
        }
    }

    pub fn answered(question: &str) -> Self {
        Self {
            question: question.to_string(),
            rule: MatchRule::Answered,
        }
    }
}

/// An ordered subsequence of responses carved out by zero or more filters.
/// Rows keep the original dataset order; an empty subgroup is valid and
/// propagates as a zero denominator downstream.
#[derive(Debug, Clone)]
pub struct Subgroup {
    label: String,
    rows: Vec<usize>,
}

impl Subgroup {
    pub fn everyone(dataset: &SurveyDataset) -> Self {
        Self {
            label: "全回答者".to_string(),
            rows: (0..dataset.len()).collect(),
        }
    }

    /// Sequential narrowing: keep the rows of this subgroup that also
    /// satisfy `filter`. Filtering on a question the dataset does not carry
    /// yields the empty subgroup.
    pub fn narrow(&self, dataset: &SurveyDataset, filter: &SubgroupFilter) -> Self {
        if !dataset.has_question(&filter.question) {
            warn!(
                question = %filter.question,
                "question missing from dataset, subgroup is empty"
            );
            return Self {
                label: self.label.clone(),
                rows: Vec::new(),
            };
        }
        let rows = self
            .rows
            .iter()
            .copied()
            .filter(|&row| filter.rule.matches(dataset.answer(row, &filter.question)))
            .collect();
        Self {
            label: self.label.clone(),
            rows,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::domain::Response;

    fn text(value: &str) -> AnswerValue {
        AnswerValue::Text(value.to_string())
    }

    fn dataset() -> SurveyDataset {
        let rows = vec![
            ("30代", "外あそびレジャー保険の1年契約に加入し、現在も加入中"),
            ("40代", "7日契約に加入したことがある"),
            ("30代", "山歩保険の1年契約に加入し、現在も加入中"),
            ("30代", ""),
            ("50代", "30日契約に加入したことがある"),
        ];
        let responses = rows
            .into_iter()
            .map(|(age, status)| {
                let status = if status.is_empty() {
                    AnswerValue::Absent
                } else {
                    text(status)
                };
                Response::new(vec![text(age), status])
            })
            .collect();
        SurveyDataset::new(vec!["age".to_string(), "status".to_string()], responses)
    }

    #[test]
    fn narrowing_composes_by_and_and_keeps_row_order() {
        let dataset = dataset();
        let subgroup = Subgroup::everyone(&dataset)
            .narrow(&dataset, &SubgroupFilter::equals("age", "30代"))
            .narrow(&dataset, &SubgroupFilter::contains("status", "1年契約"));
        assert_eq!(subgroup.rows(), &[0, 2]);
    }

    #[test]
    fn contains_any_matches_either_fragment() {
        let dataset = dataset();
        let short_term = Subgroup::everyone(&dataset).narrow(
            &dataset,
            &SubgroupFilter::contains_any("status", &["7日契約", "30日契約"]),
        );
        assert_eq!(short_term.rows(), &[1, 4]);
    }

    #[test]
    fn answered_skips_absent_answers() {
        let dataset = dataset();
        let answered = Subgroup::everyone(&dataset)
            .narrow(&dataset, &SubgroupFilter::answered("status"));
        assert_eq!(answered.rows(), &[0, 1, 2, 4]);
    }

    #[test]
    fn missing_question_yields_empty_subgroup() {
        let dataset = dataset();
        let subgroup = Subgroup::everyone(&dataset)
            .narrow(&dataset, &SubgroupFilter::equals("no-such-question", "x"));
        assert!(subgroup.is_empty());
    }
}
