use std::io::Cursor;
use survey_insights::forms::FormsExportImporter;
use survey_insights::questionnaire::catalog::labels;
use survey_insights::questionnaire::domain::AnswerValue;
use survey_insights::questionnaire::QuestionCatalog;

fn csv_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

fn export(columns: &[&str], rows: &[Vec<&str>]) -> String {
    let mut out = csv_line(columns);
    out.push('\n');
    for row in rows {
        out.push_str(&csv_line(row));
        out.push('\n');
    }
    out
}

#[test]
fn import_classifies_cells_by_declared_kind() {
    let bom_header = format!("\u{feff}{}", labels::TIMESTAMP);
    let columns = [
        bom_header.as_str(),
        labels::USER_ID,
        labels::AGE_BRACKET,
        labels::ENROLL_REASONS,
    ];
    let rows = vec![
        vec![
            "2025/10/01 10:00:00",
            "10045",
            "30代",
            "万が一の備え, 手続きが簡単",
        ],
        vec!["2025/10/02 18:30:00", "10046", "", ""],
    ];

    let catalog = QuestionCatalog::standard();
    let dataset = FormsExportImporter::from_reader(
        Cursor::new(export(&columns, &rows)),
        &catalog,
    )
    .expect("export imports");

    assert_eq!(dataset.len(), 2);
    assert!(
        dataset.has_question(labels::TIMESTAMP),
        "BOM must be stripped from the first header"
    );

    assert!(matches!(
        dataset.answer(0, labels::TIMESTAMP),
        AnswerValue::Timestamp(_)
    ));
    assert_eq!(
        dataset.answer(0, labels::USER_ID),
        &AnswerValue::Number(10045.0)
    );
    assert_eq!(
        dataset.answer(0, labels::AGE_BRACKET),
        &AnswerValue::Text("30代".to_string())
    );

    assert!(dataset.answer(1, labels::AGE_BRACKET).is_absent());
    assert!(dataset.answer(1, labels::ENROLL_REASONS).is_absent());
}

#[test]
fn import_tolerates_short_rows() {
    let input = format!(
        "{},{}\n30代\n40代,女性\n",
        labels::AGE_BRACKET,
        labels::GENDER
    );
    let catalog = QuestionCatalog::standard();
    let dataset = FormsExportImporter::from_reader(Cursor::new(input), &catalog)
        .expect("short rows import");

    assert_eq!(dataset.len(), 2);
    assert!(dataset.answer(0, labels::GENDER).is_absent());
    assert_eq!(
        dataset.answer(1, labels::GENDER),
        &AnswerValue::Text("女性".to_string())
    );
}

#[test]
fn unknown_questions_read_as_absent() {
    let input = format!("{}\n30代\n", labels::AGE_BRACKET);
    let catalog = QuestionCatalog::standard();
    let dataset = FormsExportImporter::from_reader(Cursor::new(input), &catalog)
        .expect("single column imports");

    assert!(!dataset.has_question(labels::REGION));
    assert!(dataset.answer(0, labels::REGION).is_absent());
}
