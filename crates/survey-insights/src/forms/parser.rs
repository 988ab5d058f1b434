use super::normalizer::normalize_header;
use crate::questionnaire::catalog::QuestionCatalog;
use crate::questionnaire::domain::{AnswerValue, QuestionKind, Response};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::Read;

pub(crate) struct ParsedExport {
    pub(crate) questions: Vec<String>,
    pub(crate) responses: Vec<Response>,
}

pub(crate) fn parse_export<R: Read>(
    reader: R,
    catalog: &QuestionCatalog,
) -> Result<ParsedExport, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let questions: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    let kinds: Vec<Option<QuestionKind>> = questions
        .iter()
        .map(|label| catalog.kind_of(label))
        .collect();

    let mut responses = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cells = kinds
            .iter()
            .enumerate()
            .map(|(column, &kind)| classify_cell(record.get(column).unwrap_or(""), kind))
            .collect();
        responses.push(Response::new(cells));
    }

    Ok(ParsedExport {
        questions,
        responses,
    })
}

/// Classify one cell the way the analyses expect it: empty text is an
/// absent answer, timestamp columns parse through the datetime formats the
/// export uses, and bare numbers become numeric scalars.
fn classify_cell(raw: &str, kind: Option<QuestionKind>) -> AnswerValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return AnswerValue::Absent;
    }
    if kind == Some(QuestionKind::Timestamp) {
        if let Some(parsed) = parse_datetime(trimmed) {
            return AnswerValue::Timestamp(parsed);
        }
    }
    if looks_numeric(trimmed) {
        if let Ok(value) = trimmed.parse::<f64>() {
            return AnswerValue::Number(value);
        }
    }
    AnswerValue::Text(trimmed.to_string())
}

fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_digit() || first == '-')
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '.')
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y/%m/%d %H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    for format in ["%Y/%m/%d", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_datetime_supports_export_and_iso_formats() {
        let slashed = parse_datetime("2025/10/01 09:15:30").expect("parse slashed datetime");
        assert_eq!(
            slashed,
            NaiveDate::from_ymd_opt(2025, 10, 1)
                .unwrap()
                .and_hms_opt(9, 15, 30)
                .unwrap()
        );

        let rfc = parse_datetime("2025-10-01T09:15:30Z").expect("parse rfc3339");
        assert_eq!(rfc, slashed);

        let date_only = parse_datetime("2025-10-01").expect("parse date");
        assert_eq!(
            date_only,
            NaiveDate::from_ymd_opt(2025, 10, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        assert!(parse_datetime("not a date").is_none());
    }

    #[test]
    fn classify_cell_distinguishes_absent_number_and_text() {
        assert_eq!(classify_cell("", None), AnswerValue::Absent);
        assert_eq!(classify_cell("  ", None), AnswerValue::Absent);
        assert_eq!(classify_cell("42", None), AnswerValue::Number(42.0));
        assert_eq!(
            classify_cell("30代", None),
            AnswerValue::Text("30代".to_string())
        );
        assert_eq!(
            classify_cell("1年契約", None),
            AnswerValue::Text("1年契約".to_string())
        );
    }

    #[test]
    fn timestamp_columns_fall_back_to_text_when_unparsable() {
        let parsed = classify_cell("2025/10/01 09:15:30", Some(QuestionKind::Timestamp));
        assert!(matches!(parsed, AnswerValue::Timestamp(_)));
        let unparsable = classify_cell("回答済み", Some(QuestionKind::Timestamp));
        assert_eq!(unparsable, AnswerValue::Text("回答済み".to_string()));
    }
}
