use std::io::Cursor;
use survey_insights::forms::FormsExportImporter;
use survey_insights::questionnaire::catalog::labels;
use survey_insights::questionnaire::report::{
    generate_insights, OverviewReport, ResearchReport,
};
use survey_insights::questionnaire::{AttributeAxis, QuestionCatalog, SurveyDataset};

const ACTIVE_YEAR: &str = "外あそびレジャー保険の1年契約に加入し、現在も加入中";
const ACTIVE_YEAR_SANPO: &str = "山歩保険の1年契約に加入し、現在も加入中";
const ENDED_YEAR: &str = "外あそびレジャー保険の1年契約に加入していたが、契約が終了している";
const SHORT_7: &str = "7日契約に加入したことがある";
const SHORT_30: &str = "30日契約に加入したことがある";

fn csv_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

fn fixture() -> SurveyDataset {
    let columns = [
        labels::TIMESTAMP,
        labels::AGE_BRACKET,
        labels::CONTRACT_STATUS,
        labels::SWITCH_TIMING,
        labels::FUTURE_INTENTION,
        labels::YEAR_DECIDING_FACTORS,
        labels::CANCEL_REASONS,
        labels::CANCEL_DETAILS,
    ];
    let rows: [[&str; 8]; 10] = [
        [
            "2025/10/01 10:00:00",
            "30代",
            ACTIVE_YEAR,
            "加入から1ヶ月後",
            "",
            "1年を通した安心, コスパ",
            "",
            "",
        ],
        [
            "2025/10/01 12:00:00",
            "40代",
            ACTIVE_YEAR,
            "",
            "",
            "1年を通した安心",
            "",
            "",
        ],
        ["2025/10/02 09:00:00", "30代", ACTIVE_YEAR_SANPO, "", "", "", "", ""],
        [
            "2025/10/02 11:00:00",
            "20代",
            ACTIVE_YEAR,
            "更新のタイミング",
            "",
            "コスパ",
            "",
            "",
        ],
        [
            "2025/10/03 08:00:00",
            "30代",
            SHORT_7,
            "",
            "あまり検討していない",
            "",
            "",
            "",
        ],
        [
            "2025/10/03 10:00:00",
            "50代",
            ENDED_YEAR,
            "",
            "",
            "",
            "利用頻度が低い, 価格",
            "あまり登山に行かなくなったため解約しました",
        ],
        [
            "2025/10/04 15:00:00",
            "30代",
            ACTIVE_YEAR,
            "",
            "",
            "1年を通した安心, 頻度が高い",
            "",
            "",
        ],
        [
            "2025/10/04 16:00:00",
            "30代",
            SHORT_30,
            "",
            "全く検討していない",
            "",
            "",
            "",
        ],
        ["2025/10/05 09:00:00", "20代", ENDED_YEAR, "", "", "", "利用頻度が低い", "短い"],
        [
            "2025/10/05 09:30:00",
            "30代",
            SHORT_7,
            "",
            "積極的に検討している",
            "",
            "",
            "",
        ],
    ];

    let mut out = csv_line(&columns);
    out.push('\n');
    for row in rows {
        out.push_str(&csv_line(&row));
        out.push('\n');
    }

    let catalog = QuestionCatalog::standard();
    FormsExportImporter::from_reader(Cursor::new(out), &catalog).expect("fixture imports")
}

#[test]
fn upsell_rates_are_computed_independently_and_keep_counts() {
    let dataset = fixture();
    let catalog = QuestionCatalog::standard();
    let report = ResearchReport::build(&dataset, &catalog, 3);

    let upsell = &report.upsell;
    assert_eq!(upsell.year_contract, 7, "every status containing 1年契約 counts");
    assert_eq!(upsell.switchers, 2);
    assert_eq!(upsell.switch_rate.numerator, 2);
    assert_eq!(upsell.switch_rate.denominator, 7);
    assert_eq!(upsell.switch_rate.percent_label, "28.6%");

    assert_eq!(upsell.short_term, 3);
    assert_eq!(upsell.not_considering.numerator, 2);
    assert_eq!(upsell.not_considering.denominator, 3);
    assert_eq!(upsell.not_considering.percent_label, "66.7%");

    let timing = upsell.switch_timing.as_ref().expect("switch timing present");
    assert_eq!(timing.answered, 2);

    let intention = upsell
        .future_intention
        .as_ref()
        .expect("future intention present");
    assert_eq!(intention.answered, 3);
}

#[test]
fn continuation_report_covers_rates_factors_and_details() {
    let dataset = fixture();
    let catalog = QuestionCatalog::standard();
    let report = ResearchReport::build(&dataset, &catalog, 3);

    let continuation = &report.continuation;
    assert_eq!(continuation.continuing, 4);
    assert_eq!(continuation.discontinued, 2);
    assert_eq!(continuation.continuation_rate.numerator, 4);
    assert_eq!(continuation.continuation_rate.denominator, 6);
    assert_eq!(continuation.continuation_rate.percent_label, "66.7%");

    let factors = continuation
        .deciding_factors
        .as_ref()
        .expect("deciding factors present");
    assert_eq!(factors.answered, 4);
    assert_eq!(factors.entries[0].value, "1年を通した安心");
    assert_eq!(factors.entries[0].count, 3);
    assert_eq!(factors.entries[0].percent_label, "75.0%");

    let reasons = continuation
        .cancel_reasons
        .as_ref()
        .expect("cancel reasons present");
    assert_eq!(reasons.answered, 2);
    assert_eq!(reasons.entries[0].value, "利用頻度が低い");
    assert_eq!(reasons.entries[0].count, 2);

    assert_eq!(
        continuation.cancel_details,
        vec!["あまり登山に行かなくなったため解約しました".to_string()],
        "short free-text details are not sampled"
    );

    // Only the age question exists in the fixture, so each profile keeps
    // exactly that breakdown and skips the missing ones.
    assert_eq!(continuation.continuing_profile.len(), 1);
    assert_eq!(continuation.discontinued_profile.len(), 1);
}

#[test]
fn attribute_profiles_skip_missing_axes_and_keep_first_seen_groups() {
    let dataset = fixture();
    let catalog = QuestionCatalog::standard();
    let report = ResearchReport::build(&dataset, &catalog, 3);

    let axes: Vec<AttributeAxis> = report
        .attribute_profiles
        .iter()
        .map(|profile| profile.axis)
        .collect();
    assert_eq!(axes, vec![AttributeAxis::AgeBracket]);

    let ages = &report.attribute_profiles[0];
    let values: Vec<&str> = ages.groups.iter().map(|g| g.value.as_str()).collect();
    assert_eq!(values, vec!["30代", "40代", "20代", "50代"]);
    assert_eq!(ages.groups[0].respondents, 6);
}

#[test]
fn overview_reports_totals_period_and_skips_missing_sections() {
    let dataset = fixture();
    let catalog = QuestionCatalog::standard();
    let report = OverviewReport::build(&dataset, &catalog, 10);

    assert_eq!(report.total_responses, 10);
    let period = report.response_period.expect("timestamps present");
    assert_eq!(period.first.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-10-01 10:00:00");
    assert_eq!(period.last.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-10-05 09:30:00");

    assert!(report.sections.iter().any(|s| s.title == "年代別の分布"));
    assert!(
        !report.sections.iter().any(|s| s.title == "性別の分布"),
        "sections for questions missing from the export are skipped"
    );

    let ages = report
        .sections
        .iter()
        .find(|s| s.title == "年代別の分布")
        .expect("age section present");
    let values: Vec<&str> = ages.entries.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["20代", "30代", "40代", "50代"]);

    let total_row = report
        .sheet
        .iter()
        .find(|row| row.item == "総回答数")
        .expect("summary sheet carries the total");
    assert_eq!(total_row.value, 10);
}

#[test]
fn insight_tree_serializes_with_computed_rates() {
    let dataset = fixture();
    let catalog = QuestionCatalog::standard();
    let insights = generate_insights(&dataset, &catalog);

    assert_eq!(insights.research_questions.len(), 3);
    assert_eq!(insights.research_questions[0].key, "リサーチクエスチョン1");

    let json = serde_json::to_value(&insights).expect("insights serialize");
    let upsell = &json["research_questions"][1]["insights"][0]["data"];
    assert_eq!(upsell["switchers"], 2);
    assert_eq!(upsell["rate"]["percent_label"], "28.6%");
    assert_eq!(upsell["rate"]["numerator"], 2);
    assert_eq!(upsell["rate"]["denominator"], 7);

    let continuation = &json["research_questions"][2]["insights"][0]["data"];
    assert_eq!(continuation["continuing"], 4);
    assert_eq!(continuation["rate"]["percent_label"], "66.7%");

    let implications = &insights.research_questions[1].insights[0].implications;
    assert!(implications[0].contains("28.6%"));
}
