mod insights;
mod overview;
mod research;
pub mod views;

pub use insights::{
    generate_insights, AgeProfileInsight, InsightBlock, InsightData, MarketingInsights,
    ResearchQuestionInsights,
};
pub use overview::{OverviewReport, ResponsePeriod, SummaryRow};
pub use research::{
    AttributeGroupView, AttributeProfilesView, ContinuationView, ResearchReport, UpsellView,
};

use super::catalog::QuestionCatalog;
use super::dataset::SurveyDataset;
use super::domain::QuestionKind;
use super::filter::Subgroup;
use super::tally::Tally;
use tracing::warn;
use views::BreakdownView;

/// How the entries of a section are ordered.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SectionOrder {
    /// Count descending with first-observed tie-break, full ranking.
    ByCount,
    /// Count descending, truncated to the top `k`.
    Top(usize),
    /// Lexicographic by value, for bracket-style distributions.
    ByValue,
}

/// Tally one question over a subgroup into a renderable breakdown. Returns
/// `None` when the dataset does not carry the question; the step is logged
/// as skipped rather than failing the run.
pub(crate) fn question_breakdown(
    dataset: &SurveyDataset,
    catalog: &QuestionCatalog,
    subgroup: &Subgroup,
    title: &str,
    question: &str,
    order: SectionOrder,
) -> Option<BreakdownView> {
    if !dataset.has_question(question) {
        warn!(%question, "question missing from dataset, analysis step skipped");
        return None;
    }
    let kind = catalog.kind_of(question).unwrap_or(QuestionKind::FreeText);
    let tally = Tally::count(dataset, subgroup, question, kind);
    let tally = match order {
        SectionOrder::ByCount => tally,
        SectionOrder::Top(k) => tally.top(k),
        SectionOrder::ByValue => tally.sorted_by_value(),
    };
    Some(BreakdownView::from_tally(
        title,
        subgroup.label(),
        tally,
        kind.is_multi(),
    ))
}
