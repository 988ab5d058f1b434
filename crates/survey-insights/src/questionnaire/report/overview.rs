use super::super::catalog::{labels, QuestionCatalog};
use super::super::dataset::SurveyDataset;
use super::super::filter::Subgroup;
use super::views::BreakdownView;
use super::{question_breakdown, SectionOrder};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Earliest and latest response timestamps.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponsePeriod {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

/// One row of the summary sheet (item name, numeric value).
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub item: String,
    pub value: usize,
}

/// Basic statistics over the whole dataset, plus the rows of the exported
/// summary sheet. All fields are plain data for the renderers.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub total_responses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_period: Option<ResponsePeriod>,
    pub sections: Vec<BreakdownView>,
    pub sheet: Vec<SummaryRow>,
}

impl OverviewReport {
    pub fn build(dataset: &SurveyDataset, catalog: &QuestionCatalog, top: usize) -> Self {
        let everyone = Subgroup::everyone(dataset);

        let specs: [(&str, &str, SectionOrder); 11] = [
            ("年代別の分布", labels::AGE_BRACKET, SectionOrder::ByValue),
            ("性別の分布", labels::GENDER, SectionOrder::ByCount),
            (
                "地域別の分布（上位10）",
                labels::REGION,
                SectionOrder::Top(top),
            ),
            ("加入タイミング", labels::ENROLL_TIMING, SectionOrder::ByCount),
            (
                "初めての登山保険加入かどうか",
                labels::FIRST_ENROLLMENT,
                SectionOrder::ByCount,
            ),
            (
                "現在の加入状況",
                labels::CONTRACT_STATUS,
                SectionOrder::ByCount,
            ),
            (
                "加入手続きの簡単さ",
                labels::PROCEDURE_EASE,
                SectionOrder::ByValue,
            ),
            (
                "家族・友人への推奨意向",
                labels::RECOMMENDATION,
                SectionOrder::ByCount,
            ),
            (
                "登山頻度",
                labels::HIKING_FREQUENCY,
                SectionOrder::ByCount,
            ),
            ("登山歴", labels::HIKING_HISTORY, SectionOrder::ByCount),
            (
                "加入理由（複数選択可）",
                labels::ENROLL_REASONS,
                SectionOrder::Top(top),
            ),
        ];

        let mut sections = Vec::new();
        for (title, question, order) in specs {
            if let Some(view) =
                question_breakdown(dataset, catalog, &everyone, title, question, order)
            {
                sections.push(view);
            }
        }

        let sheet = vec![
            SummaryRow {
                item: "総回答数".to_string(),
                value: dataset.len(),
            },
            SummaryRow {
                item: "年代数".to_string(),
                value: dataset.distinct_answers(labels::AGE_BRACKET).len(),
            },
            SummaryRow {
                item: "性別数".to_string(),
                value: dataset.distinct_answers(labels::GENDER).len(),
            },
            SummaryRow {
                item: "地域数".to_string(),
                value: dataset.distinct_answers(labels::REGION).len(),
            },
        ];

        Self {
            total_responses: dataset.len(),
            response_period: response_period(dataset),
            sections,
            sheet,
        }
    }
}

fn response_period(dataset: &SurveyDataset) -> Option<ResponsePeriod> {
    let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for row in 0..dataset.len() {
        if let Some(ts) = dataset.answer(row, labels::TIMESTAMP).as_timestamp() {
            bounds = Some(match bounds {
                None => (ts, ts),
                Some((first, last)) => (first.min(ts), last.max(ts)),
            });
        }
    }
    bounds.map(|(first, last)| ResponsePeriod { first, last })
}
