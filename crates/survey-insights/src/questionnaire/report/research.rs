use super::super::catalog::{intention, labels, status, AttributeAxis, QuestionCatalog};
use super::super::dataset::SurveyDataset;
use super::super::filter::{Subgroup, SubgroupFilter};
use super::super::rate::Rate;
use super::views::{BreakdownView, RateView};
use super::{question_breakdown, SectionOrder};
use serde::Serialize;

/// Cross-tabulation of the motivation/value/timing/channel questions for
/// one value of one attribute axis.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeGroupView {
    pub value: String,
    pub respondents: usize,
    pub sections: Vec<BreakdownView>,
}

/// All groups of one attribute axis.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeProfilesView {
    pub axis: AttributeAxis,
    pub axis_label: &'static str,
    pub question: &'static str,
    pub groups: Vec<AttributeGroupView>,
}

/// Short-term → year-contract upsell findings.
#[derive(Debug, Clone, Serialize)]
pub struct UpsellView {
    pub year_contract: usize,
    pub switchers: usize,
    pub switch_rate: RateView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_triggers: Option<BreakdownView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_timing: Option<BreakdownView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hesitations: Option<BreakdownView>,
    pub short_term: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future_intention: Option<BreakdownView>,
    pub not_considering: RateView,
}

/// Year-contract continuation and cancellation findings.
#[derive(Debug, Clone, Serialize)]
pub struct ContinuationView {
    pub continuing: usize,
    pub discontinued: usize,
    pub continuation_rate: RateView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deciding_factors: Option<BreakdownView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reasons: Option<BreakdownView>,
    pub cancel_details: Vec<String>,
    pub continuing_profile: Vec<BreakdownView>,
    pub discontinued_profile: Vec<BreakdownView>,
}

/// The research-question deep dive: attribute cross-tabs, upsell, and
/// continuation, plus the whole-dataset age distribution the exported
/// summary sheet carries.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchReport {
    pub attribute_profiles: Vec<AttributeProfilesView>,
    pub upsell: UpsellView,
    pub continuation: ContinuationView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_distribution: Option<BreakdownView>,
}

impl ResearchReport {
    pub fn build(dataset: &SurveyDataset, catalog: &QuestionCatalog, top: usize) -> Self {
        Self {
            attribute_profiles: attribute_profiles(dataset, catalog, top),
            upsell: upsell(dataset, catalog),
            continuation: continuation(dataset, catalog),
            age_distribution: question_breakdown(
                dataset,
                catalog,
                &Subgroup::everyone(dataset),
                "年代別回答者数",
                labels::AGE_BRACKET,
                SectionOrder::ByValue,
            ),
        }
    }
}

fn attribute_profiles(
    dataset: &SurveyDataset,
    catalog: &QuestionCatalog,
    top: usize,
) -> Vec<AttributeProfilesView> {
    let everyone = Subgroup::everyone(dataset);
    let mut profiles = Vec::new();

    for axis in AttributeAxis::ordered() {
        if !dataset.has_question(axis.question()) {
            tracing::warn!(
                question = axis.question(),
                "attribute question missing from dataset, axis skipped"
            );
            continue;
        }

        let mut groups = Vec::new();
        for value in dataset.distinct_answers(axis.question()) {
            let subgroup = everyone
                .narrow(dataset, &SubgroupFilter::equals(axis.question(), &value))
                .labeled(format!("{}: {}", axis.label(), value));
            if subgroup.is_empty() {
                continue;
            }

            let specs: [(&str, &str, SectionOrder); 5] = [
                (
                    "加入理由（上位3）",
                    labels::ENROLL_REASONS,
                    SectionOrder::Top(top),
                ),
                (
                    "加入タイミング",
                    labels::ENROLL_TIMING,
                    SectionOrder::ByCount,
                ),
                (
                    "認知経路（上位3）",
                    labels::AWARENESS_CHANNELS,
                    SectionOrder::Top(top),
                ),
                (
                    "感じた価値・便益（上位3）",
                    labels::FELT_BENEFIT,
                    SectionOrder::Top(top),
                ),
                (
                    "決め手となった情報（上位3）",
                    labels::DECIDING_INFO,
                    SectionOrder::Top(top),
                ),
            ];

            let mut sections = Vec::new();
            for (title, question, order) in specs {
                if let Some(view) =
                    question_breakdown(dataset, catalog, &subgroup, title, question, order)
                {
                    sections.push(view);
                }
            }

            groups.push(AttributeGroupView {
                value,
                respondents: subgroup.len(),
                sections,
            });
        }

        profiles.push(AttributeProfilesView {
            axis,
            axis_label: axis.label(),
            question: axis.question(),
            groups,
        });
    }

    profiles
}

fn upsell(dataset: &SurveyDataset, catalog: &QuestionCatalog) -> UpsellView {
    let everyone = Subgroup::everyone(dataset);

    let year_contract = everyone
        .narrow(
            dataset,
            &SubgroupFilter::contains(labels::CONTRACT_STATUS, status::YEAR_CONTRACT),
        )
        .labeled("年契約加入者");
    let switchers = year_contract
        .narrow(dataset, &SubgroupFilter::answered(labels::SWITCH_TIMING))
        .labeled("短期契約から年契約への切り替え経験者");

    let short_term = everyone
        .narrow(
            dataset,
            &SubgroupFilter::contains_any(
                labels::CONTRACT_STATUS,
                &[status::SHORT_TERM_7DAY, status::SHORT_TERM_30DAY],
            ),
        )
        .labeled("短期プラン加入者");
    let not_considering = short_term.narrow(
        dataset,
        &SubgroupFilter::one_of(
            labels::FUTURE_INTENTION,
            &[intention::NOT_MUCH_CONSIDERED, intention::NOT_AT_ALL_CONSIDERED],
        ),
    );

    UpsellView {
        year_contract: year_contract.len(),
        switchers: switchers.len(),
        switch_rate: RateView::from_rate(
            "短期→年契約への切り替え率".to_string(),
            Rate::from_subgroups(&switchers, &year_contract),
        ),
        switch_triggers: question_breakdown(
            dataset,
            catalog,
            &switchers,
            "切り替えきっかけ",
            labels::SWITCH_TRIGGERS,
            SectionOrder::ByCount,
        ),
        switch_timing: question_breakdown(
            dataset,
            catalog,
            &switchers,
            "切り替えタイミング",
            labels::SWITCH_TIMING,
            SectionOrder::ByCount,
        ),
        hesitations: question_breakdown(
            dataset,
            catalog,
            &switchers,
            "迷った点",
            labels::SWITCH_HESITATIONS,
            SectionOrder::ByCount,
        ),
        short_term: short_term.len(),
        future_intention: question_breakdown(
            dataset,
            catalog,
            &short_term,
            "年契約への切り替え意向",
            labels::FUTURE_INTENTION,
            SectionOrder::ByCount,
        ),
        not_considering: RateView::from_rate(
            "あまり/全く検討していない割合".to_string(),
            Rate::from_subgroups(&not_considering, &short_term),
        ),
    }
}

fn continuation(dataset: &SurveyDataset, catalog: &QuestionCatalog) -> ContinuationView {
    let everyone = Subgroup::everyone(dataset);

    let continuing = everyone
        .narrow(
            dataset,
            &SubgroupFilter::contains(labels::CONTRACT_STATUS, status::LEISURE_YEAR_ACTIVE),
        )
        .labeled("1年契約継続者");
    let discontinued = everyone
        .narrow(
            dataset,
            &SubgroupFilter::contains_any(
                labels::CONTRACT_STATUS,
                &[status::CONTRACT_ENDED, status::CANCELLED],
            ),
        )
        .labeled("1年契約非継続者");

    let continuation_rate = RateView::from_rate(
        "継続率".to_string(),
        Rate::new(continuing.len(), continuing.len() + discontinued.len()),
    );

    let profile_specs: [(&str, &str); 3] = [
        ("年代", labels::AGE_BRACKET),
        ("性別", labels::GENDER),
        ("登山頻度", labels::HIKING_FREQUENCY),
    ];
    let profile = |subgroup: &Subgroup| {
        let mut views = Vec::new();
        for (title, question) in profile_specs {
            if let Some(view) = question_breakdown(
                dataset,
                catalog,
                subgroup,
                title,
                question,
                SectionOrder::ByCount,
            ) {
                views.push(view);
            }
        }
        views
    };

    ContinuationView {
        continuing: continuing.len(),
        discontinued: discontinued.len(),
        continuation_rate,
        deciding_factors: question_breakdown(
            dataset,
            catalog,
            &continuing,
            "1年契約を選んだ決め手",
            labels::YEAR_DECIDING_FACTORS,
            SectionOrder::ByCount,
        ),
        cancel_reasons: question_breakdown(
            dataset,
            catalog,
            &discontinued,
            "解約理由",
            labels::CANCEL_REASONS,
            SectionOrder::ByCount,
        ),
        cancel_details: cancel_details(dataset, &discontinued),
        continuing_profile: profile(&continuing),
        discontinued_profile: profile(&discontinued),
    }
}

/// Up to five free-text cancellation details of at least ten characters,
/// previewed at one hundred characters.
fn cancel_details(dataset: &SurveyDataset, discontinued: &Subgroup) -> Vec<String> {
    const MIN_CHARS: usize = 10;
    const PREVIEW_CHARS: usize = 100;
    const MAX_EXAMPLES: usize = 5;

    let mut details = Vec::new();
    for &row in discontinued.rows() {
        let Some(text) = dataset.answer(row, labels::CANCEL_DETAILS).as_text() else {
            continue;
        };
        if text.chars().count() <= MIN_CHARS {
            continue;
        }
        if text.chars().count() > PREVIEW_CHARS {
            let preview: String = text.chars().take(PREVIEW_CHARS).collect();
            details.push(format!("{preview}..."));
        } else {
            details.push(text.to_string());
        }
        if details.len() == MAX_EXAMPLES {
            break;
        }
    }
    details
}
