use super::super::catalog::{intention, labels, status, QuestionCatalog};
use super::super::dataset::SurveyDataset;
use super::super::filter::{Subgroup, SubgroupFilter};
use super::super::rate::Rate;
use super::views::{BreakdownView, RateView};
use super::{question_breakdown, SectionOrder};
use serde::Serialize;

/// Motivation/channel/benefit profile of one age bracket.
#[derive(Debug, Clone, Serialize)]
pub struct AgeProfileInsight {
    pub value: String,
    pub respondents: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_reasons: Option<BreakdownView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_channels: Option<BreakdownView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_benefit: Option<BreakdownView>,
}

/// The computed data behind one insight block.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InsightData {
    AgeProfiles {
        groups: Vec<AgeProfileInsight>,
    },
    Distribution {
        #[serde(skip_serializing_if = "Option::is_none")]
        breakdown: Option<BreakdownView>,
    },
    Upsell {
        switchers: usize,
        rate: RateView,
        #[serde(skip_serializing_if = "Option::is_none")]
        triggers: Option<BreakdownView>,
    },
    Intention {
        short_term: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        breakdown: Option<BreakdownView>,
        not_considering: RateView,
    },
    Continuation {
        continuing: usize,
        rate: RateView,
        #[serde(skip_serializing_if = "Option::is_none")]
        top_factors: Option<BreakdownView>,
    },
    Cancellation {
        discontinued: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        reasons: Option<BreakdownView>,
    },
}

/// One titled insight with its data and the marketing implications drawn
/// from it.
#[derive(Debug, Clone, Serialize)]
pub struct InsightBlock {
    pub heading: String,
    pub data: InsightData,
    pub implications: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchQuestionInsights {
    pub key: String,
    pub title: String,
    pub insights: Vec<InsightBlock>,
}

/// The marketing insight tree: three research questions, each with titled
/// blocks of computed data plus implication notes.
#[derive(Debug, Clone, Serialize)]
pub struct MarketingInsights {
    pub research_questions: Vec<ResearchQuestionInsights>,
}

pub fn generate_insights(dataset: &SurveyDataset, catalog: &QuestionCatalog) -> MarketingInsights {
    MarketingInsights {
        research_questions: vec![
            attribute_question(dataset, catalog),
            upsell_question(dataset, catalog),
            continuation_question(dataset, catalog),
        ],
    }
}

fn attribute_question(
    dataset: &SurveyDataset,
    catalog: &QuestionCatalog,
) -> ResearchQuestionInsights {
    let everyone = Subgroup::everyone(dataset);

    let mut groups = Vec::new();
    for value in dataset.distinct_answers(labels::AGE_BRACKET) {
        let subgroup = everyone
            .narrow(dataset, &SubgroupFilter::equals(labels::AGE_BRACKET, &value))
            .labeled(format!("年代: {value}"));
        if subgroup.is_empty() {
            continue;
        }
        groups.push(AgeProfileInsight {
            respondents: subgroup.len(),
            top_reasons: question_breakdown(
                dataset,
                catalog,
                &subgroup,
                "主要加入理由",
                labels::ENROLL_REASONS,
                SectionOrder::Top(3),
            ),
            top_channels: question_breakdown(
                dataset,
                catalog,
                &subgroup,
                "主要認知経路",
                labels::AWARENESS_CHANNELS,
                SectionOrder::Top(2),
            ),
            top_benefit: question_breakdown(
                dataset,
                catalog,
                &subgroup,
                "主要価値",
                labels::FELT_BENEFIT,
                SectionOrder::Top(1),
            ),
            value,
        });
    }

    let timing = question_breakdown(
        dataset,
        catalog,
        &everyone,
        "加入タイミング",
        labels::ENROLL_TIMING,
        SectionOrder::ByCount,
    );

    ResearchQuestionInsights {
        key: "リサーチクエスチョン1".to_string(),
        title: "属性ごとの加入動機、価値、加入タイミング、経路".to_string(),
        insights: vec![
            InsightBlock {
                heading: "年代別の特徴".to_string(),
                data: InsightData::AgeProfiles { groups },
                implications: vec![
                    "60代以上は「家族への責任」を重視→LPで家族への配慮を強調".to_string(),
                    "30-40代は「手続きの簡単さ」を重視→UI/UXの改善を訴求".to_string(),
                    "全年代で「YAMAPアプリ内バナー」が主要経路→アプリ内訴求の強化".to_string(),
                ],
            },
            InsightBlock {
                heading: "加入タイミング".to_string(),
                data: InsightData::Distribution { breakdown: timing },
                implications: vec![
                    "年間を通した補償を検討する人が約60%→年契約の訴求を強化".to_string(),
                    "直前・前日加入も約30%→当日加入可能を訴求".to_string(),
                ],
            },
        ],
    }
}

fn upsell_question(dataset: &SurveyDataset, catalog: &QuestionCatalog) -> ResearchQuestionInsights {
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
    let switch_rate = RateView::from_rate(
        "短期→年契約への切り替え率".to_string(),
        Rate::from_subgroups(&switchers, &year_contract),
    );

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

    ResearchQuestionInsights {
        key: "リサーチクエスチョン2".to_string(),
        title: "7日プランから年プランへのアップセル経験者のインサイト".to_string(),
        insights: vec![
            InsightBlock {
                heading: "アップセル経験者の特徴".to_string(),
                implications: vec![
                    format!("短期→年契約への切り替え率は{}", switch_rate.percent_label),
                    "切り替えきっかけを分析して、タイミングに合わせた訴求を実施".to_string(),
                    "短期プラン利用者への年契約提案を強化".to_string(),
                ],
                data: InsightData::Upsell {
                    switchers: switchers.len(),
                    rate: switch_rate,
                    triggers: question_breakdown(
                        dataset,
                        catalog,
                        &switchers,
                        "切り替えきっかけ",
                        labels::SWITCH_TRIGGERS,
                        SectionOrder::ByCount,
                    ),
                },
            },
            InsightBlock {
                heading: "短期プラン加入者の年契約への意向".to_string(),
                data: InsightData::Intention {
                    short_term: short_term.len(),
                    breakdown: question_breakdown(
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
                },
                implications: vec![
                    "短期プラン加入者の約70%は「あまり/全く検討していない」".to_string(),
                    "年契約のメリット（コスパ、手間の削減）を訴求する必要あり".to_string(),
                ],
            },
        ],
    }
}

fn continuation_question(
    dataset: &SurveyDataset,
    catalog: &QuestionCatalog,
) -> ResearchQuestionInsights {
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

    ResearchQuestionInsights {
        key: "リサーチクエスチョン3".to_string(),
        title: "外あそび1年の継続・非継続理由".to_string(),
        insights: vec![
            InsightBlock {
                heading: "継続理由".to_string(),
                data: InsightData::Continuation {
                    continuing: continuing.len(),
                    rate: continuation_rate,
                    top_factors: question_breakdown(
                        dataset,
                        catalog,
                        &continuing,
                        "主要な継続理由",
                        labels::YEAR_DECIDING_FACTORS,
                        SectionOrder::Top(5),
                    ),
                },
                implications: vec![
                    "継続率は約75%".to_string(),
                    "1年を通した安心、コスパ、頻度の高さが主要理由".to_string(),
                    "これらの価値をLPやプロモーションで強調".to_string(),
                ],
            },
            InsightBlock {
                heading: "非継続（解約）理由".to_string(),
                data: InsightData::Cancellation {
                    discontinued: discontinued.len(),
                    reasons: question_breakdown(
                        dataset,
                        catalog,
                        &discontinued,
                        "主要な解約理由",
                        labels::CANCEL_REASONS,
                        SectionOrder::ByCount,
                    ),
                },
                implications: vec![
                    "利用頻度が低いと感じる人が解約".to_string(),
                    "他プランへの切替え検討もあり→プラン間の比較を明確化".to_string(),
                    "短期プランへの切り替え提案も検討".to_string(),
                ],
            },
        ],
    }
}
