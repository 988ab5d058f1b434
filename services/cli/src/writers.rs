use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use survey_insights::error::AppError;
use survey_insights::questionnaire::report::views::BreakdownView;
use survey_insights::questionnaire::report::{
    InsightData, MarketingInsights, ResearchReport, SummaryRow,
};
use survey_insights::questionnaire::Rate;

fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

pub(crate) fn write_json<T: Serialize>(
    dir: &Path,
    file: &str,
    value: &T,
) -> Result<PathBuf, AppError> {
    ensure_dir(dir)?;
    let path = dir.join(file);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// The overview summary sheet: one row per item, columns item/value.
pub(crate) fn write_summary_sheet(dir: &Path, rows: &[SummaryRow]) -> Result<PathBuf, AppError> {
    ensure_dir(dir)?;
    let path = dir.join("data_summary.csv");
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["項目", "値"])?;
    for row in rows {
        writer.write_record([row.item.as_str(), &row.value.to_string()])?;
    }
    writer.flush()?;
    Ok(path)
}

/// The research sheets: a headline summary (counts and shares of the key
/// subgroups) and the whole-dataset age distribution.
pub(crate) fn write_research_sheets(
    dir: &Path,
    report: &ResearchReport,
    total_responses: usize,
) -> Result<Vec<PathBuf>, AppError> {
    ensure_dir(dir)?;
    let mut paths = Vec::new();

    let summary_path = dir.join("research_summary.csv");
    let mut writer = csv::Writer::from_path(&summary_path)?;
    writer.write_record(["項目", "人数", "割合"])?;
    let rows = [
        ("総回答数", total_responses),
        ("年契約継続者", report.continuation.continuing),
        ("年契約非継続者", report.continuation.discontinued),
        ("アップセル経験者", report.upsell.switchers),
    ];
    for (item, count) in rows {
        let share = Rate::new(count, total_responses).percent_label();
        writer.write_record([item, &count.to_string(), &share])?;
    }
    writer.flush()?;
    paths.push(summary_path);

    if let Some(ages) = &report.age_distribution {
        let ages_path = dir.join("age_distribution.csv");
        let mut writer = csv::Writer::from_path(&ages_path)?;
        writer.write_record(["年代", "回答者数"])?;
        for entry in &ages.entries {
            writer.write_record([entry.value.as_str(), &entry.count.to_string()])?;
        }
        writer.flush()?;
        paths.push(ages_path);
    }

    Ok(paths)
}

/// The Markdown rendition of the marketing insight tree, mirroring the
/// JSON report.
pub(crate) fn write_markdown(
    dir: &Path,
    insights: &MarketingInsights,
) -> Result<PathBuf, AppError> {
    ensure_dir(dir)?;
    let path = dir.join("marketing_insights_report.md");

    let mut md = String::new();
    md.push_str("# マーケティングインサイトレポート\n\n");

    for question in &insights.research_questions {
        let _ = writeln!(md, "## {}: {}\n", question.key, question.title);
        for block in &question.insights {
            let _ = writeln!(md, "### {}\n", block.heading);
            md.push_str("**データ:**\n");
            push_data(&mut md, &block.data);
            md.push('\n');
            md.push_str("**マーケティング施策への示唆:**\n");
            for implication in &block.implications {
                let _ = writeln!(md, "- {implication}");
            }
            md.push('\n');
        }
    }

    fs::write(&path, md)?;
    Ok(path)
}

fn push_data(md: &mut String, data: &InsightData) {
    match data {
        InsightData::AgeProfiles { groups } => {
            for group in groups {
                let _ = writeln!(md, "- {} (n={})", group.value, group.respondents);
                for view in [&group.top_reasons, &group.top_channels, &group.top_benefit]
                    .into_iter()
                    .flatten()
                {
                    let _ = writeln!(md, "  - {}: {}", view.title, breakdown_line(view));
                }
            }
        }
        InsightData::Distribution { breakdown } => {
            if let Some(view) = breakdown {
                push_breakdown(md, view);
            }
        }
        InsightData::Upsell {
            switchers,
            rate,
            triggers,
        } => {
            let _ = writeln!(md, "- 切り替え人数: {switchers}人");
            let _ = writeln!(
                md,
                "- 切り替え率: {} ({}/{})",
                rate.percent_label, rate.numerator, rate.denominator
            );
            if let Some(view) = triggers {
                let _ = writeln!(md, "- {}: {}", view.title, breakdown_line(view));
            }
        }
        InsightData::Intention {
            short_term,
            breakdown,
            not_considering,
        } => {
            let _ = writeln!(md, "- 短期プラン加入者総数: {short_term}人");
            if let Some(view) = breakdown {
                push_breakdown(md, view);
            }
            let _ = writeln!(
                md,
                "- {}: {} ({}/{})",
                not_considering.title,
                not_considering.percent_label,
                not_considering.numerator,
                not_considering.denominator
            );
        }
        InsightData::Continuation {
            continuing,
            rate,
            top_factors,
        } => {
            let _ = writeln!(md, "- 継続者数: {continuing}人");
            let _ = writeln!(
                md,
                "- 継続率: {} ({}/{})",
                rate.percent_label, rate.numerator, rate.denominator
            );
            if let Some(view) = top_factors {
                let _ = writeln!(md, "- {}: {}", view.title, breakdown_line(view));
            }
        }
        InsightData::Cancellation {
            discontinued,
            reasons,
        } => {
            let _ = writeln!(md, "- 非継続者数: {discontinued}人");
            if let Some(view) = reasons {
                let _ = writeln!(md, "- {}: {}", view.title, breakdown_line(view));
            }
        }
    }
}

fn push_breakdown(md: &mut String, view: &BreakdownView) {
    if view.is_undefined() {
        let _ = writeln!(md, "- {}: 回答なし", view.title);
        return;
    }
    for entry in &view.entries {
        let _ = writeln!(
            md,
            "- {}: {}{} ({})",
            entry.value,
            entry.count,
            view.unit(),
            entry.percent_label
        );
    }
}

fn breakdown_line(view: &BreakdownView) -> String {
    if view.is_undefined() {
        return "回答なし".to_string();
    }
    view.entries
        .iter()
        .map(|entry| {
            format!(
                "{} {}{} ({})",
                entry.value,
                entry.count,
                view.unit(),
                entry.percent_label
            )
        })
        .collect::<Vec<_>>()
        .join("、")
}
