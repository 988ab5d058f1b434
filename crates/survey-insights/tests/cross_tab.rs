use survey_insights::questionnaire::domain::{AnswerValue, QuestionKind, Response};
use survey_insights::questionnaire::{
    Rate, Subgroup, SubgroupFilter, SurveyDataset, Tally,
};

fn text(value: &str) -> AnswerValue {
    AnswerValue::Text(value.to_string())
}

fn answer(value: &str) -> AnswerValue {
    if value.is_empty() {
        AnswerValue::Absent
    } else {
        text(value)
    }
}

/// Ten responses with an age bracket and a contract status, three of which
/// are thirty-somethings on a year contract.
fn age_status_fixture() -> SurveyDataset {
    let rows = [
        ("30代", "外あそびレジャー保険の1年契約に加入し、現在も加入中"),
        ("40代", "外あそびレジャー保険の1年契約に加入し、現在も加入中"),
        ("30代", "山歩保険の1年契約に加入し、現在も加入中"),
        ("20代", "7日契約に加入したことがある"),
        ("30代", "30日契約に加入したことがある"),
        ("50代", "外あそびレジャー保険の1年契約に加入していたが、契約が終了している"),
        ("30代", "外あそびレジャー保険の1年契約に加入し、現在も加入中"),
        ("30代", ""),
        ("20代", "7日契約に加入したことがある"),
        ("40代", "解約した"),
    ];
    let responses = rows
        .into_iter()
        .map(|(age, status)| Response::new(vec![answer(age), answer(status)]))
        .collect();
    SurveyDataset::new(
        vec!["年代".to_string(), "加入状況".to_string()],
        responses,
    )
}

#[test]
fn composed_filters_return_matching_rows_in_original_order() {
    let dataset = age_status_fixture();
    let subgroup = Subgroup::everyone(&dataset)
        .narrow(&dataset, &SubgroupFilter::equals("年代", "30代"))
        .narrow(&dataset, &SubgroupFilter::contains("加入状況", "1年契約"));

    assert_eq!(subgroup.len(), 3);
    assert_eq!(subgroup.rows(), &[0, 2, 6]);
}

#[test]
fn top_n_breaks_ties_by_first_observation() {
    let responses = vec![
        Response::new(vec![text("B")]),
        Response::new(vec![text("A")]),
        Response::new(vec![text("C")]),
        Response::new(vec![text("A")]),
        Response::new(vec![text("B")]),
    ];
    let dataset = SurveyDataset::new(vec!["q".to_string()], responses);
    let tally = Tally::count(
        &dataset,
        &Subgroup::everyone(&dataset),
        "q",
        QuestionKind::SingleChoice,
    )
    .top(2);

    let ranked: Vec<&str> = tally.entries.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(ranked, vec!["B", "A"]);
}

#[test]
fn unbounded_counts_sum_to_selection_pairs() {
    let responses = vec![
        Response::new(vec![text("安心感, 補償内容, 価格")]),
        Response::new(vec![text("安心感")]),
        Response::new(vec![AnswerValue::Absent]),
        Response::new(vec![text("価格, 安心感")]),
    ];
    let dataset = SurveyDataset::new(vec!["理由".to_string()], responses);
    let tally = Tally::count(
        &dataset,
        &Subgroup::everyone(&dataset),
        "理由",
        QuestionKind::MultiChoice,
    );

    let total: usize = tally.entries.iter().map(|e| e.count).sum();
    assert_eq!(total, 6);
    assert_eq!(tally.selections, 6);
    assert_eq!(tally.answered, 3, "denominator counts respondents, not selections");
    assert_eq!(tally.percent_of(3), Some(100.0));
}

#[test]
fn zero_match_filter_yields_undefined_ratio_everywhere() {
    let dataset = age_status_fixture();
    let nobody = Subgroup::everyone(&dataset)
        .narrow(&dataset, &SubgroupFilter::equals("年代", "90代"));
    assert!(nobody.is_empty());

    let tally = Tally::count(&dataset, &nobody, "加入状況", QuestionKind::SingleChoice);
    assert!(tally.is_undefined());
    assert_eq!(tally.percent_of(0), None);

    let rate = Rate::from_subgroups(&nobody, &nobody);
    assert_eq!(rate.percent(), None);
    assert_eq!(rate.percent_label(), "n/a");
}

#[test]
fn named_rate_keeps_counts_next_to_the_percentage() {
    let rate = Rate::new(40, 120);
    assert_eq!(rate.numerator, 40);
    assert_eq!(rate.denominator, 120);
    assert_eq!(rate.percent_label(), "33.3%");
}

#[test]
fn independently_filtered_numerator_may_sit_outside_the_denominator() {
    let dataset = age_status_fixture();
    let everyone = Subgroup::everyone(&dataset);
    let thirties = everyone.narrow(&dataset, &SubgroupFilter::equals("年代", "30代"));
    let short_term = everyone.narrow(
        &dataset,
        &SubgroupFilter::contains_any("加入状況", &["7日契約", "30日契約"]),
    );

    let rate = Rate::from_subgroups(&thirties, &short_term);
    assert_eq!(rate.numerator, 5);
    assert_eq!(rate.denominator, 3);
    assert_eq!(rate.percent_label(), "166.7%");
}
