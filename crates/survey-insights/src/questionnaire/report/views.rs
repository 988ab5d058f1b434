use super::super::rate::Rate;
use super::super::tally::Tally;
use serde::Serialize;

/// One ranked value with its count and share of answering respondents.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntryView {
    pub value: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    pub percent_label: String,
}

/// A ranked breakdown of one question over one subgroup, ready for any
/// renderer. `answered == 0` marks an undefined distribution; renderers
/// branch on it instead of printing zero percentages.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownView {
    pub title: String,
    pub subgroup: String,
    pub question: String,
    pub multi_choice: bool,
    pub answered: usize,
    pub selections: usize,
    pub entries: Vec<RankedEntryView>,
}

impl BreakdownView {
    pub fn from_tally(
        title: impl Into<String>,
        subgroup: impl Into<String>,
        tally: Tally,
        multi_choice: bool,
    ) -> Self {
        let entries = tally
            .entries
            .iter()
            .map(|entry| {
                let percent = tally.percent_of(entry.count);
                RankedEntryView {
                    value: entry.value.clone(),
                    count: entry.count,
                    percent,
                    percent_label: match percent {
                        Some(percent) => format!("{percent:.1}%"),
                        None => "n/a".to_string(),
                    },
                }
            })
            .collect();
        Self {
            title: title.into(),
            subgroup: subgroup.into(),
            question: tally.question,
            multi_choice,
            answered: tally.answered,
            selections: tally.selections,
            entries,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.answered == 0
    }

    /// Counting unit for display: selections for multi-choice questions,
    /// respondents otherwise.
    pub fn unit(&self) -> &'static str {
        if self.multi_choice {
            "回"
        } else {
            "人"
        }
    }
}

/// A named rate with its numerator and denominator kept visible.
#[derive(Debug, Clone, Serialize)]
pub struct RateView {
    pub title: String,
    pub numerator: usize,
    pub denominator: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    pub percent_label: String,
}

impl RateView {
    pub fn from_rate(title: impl Into<String>, rate: Rate) -> Self {
        Self {
            title: title.into(),
            numerator: rate.numerator,
            denominator: rate.denominator,
            percent: rate.percent(),
            percent_label: rate.percent_label(),
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.percent.is_none()
    }
}
