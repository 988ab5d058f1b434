use survey_insights::questionnaire::report::views::{BreakdownView, RateView};
use survey_insights::questionnaire::report::{OverviewReport, ResearchReport};

const RULE: &str = "================================================================================";

pub(crate) fn render_overview(report: &OverviewReport) {
    println!("{RULE}");
    println!("アンケート分析サマリー");
    println!("{RULE}");
    println!("総回答数: {}件", report.total_responses);
    if let Some(period) = &report.response_period {
        println!(
            "回答期間: {} ～ {}",
            period.first.format("%Y-%m-%d %H:%M:%S"),
            period.last.format("%Y-%m-%d %H:%M:%S")
        );
    }

    for section in &report.sections {
        render_breakdown(section, "");
    }
}

pub(crate) fn render_research(report: &ResearchReport) {
    println!("{RULE}");
    println!("① 属性ごとの加入動機、価値、加入タイミング、経路の分析");
    println!("{RULE}");
    for profile in &report.attribute_profiles {
        println!("\n【{}別の分析】", profile.axis_label);
        for group in &profile.groups {
            println!("\n■ {}: {} (n={})", profile.axis_label, group.value, group.respondents);
            for section in &group.sections {
                render_breakdown(section, "  ");
            }
        }
    }

    println!("\n{RULE}");
    println!("② 7日プランから年プランへのアップセル経験者のインサイト");
    println!("{RULE}");
    let upsell = &report.upsell;
    println!("\n【アップセル経験者数】");
    println!("  短期プランから年プランに切り替えた人: {}人", upsell.switchers);
    println!("  年契約加入者全体: {}人", upsell.year_contract);
    render_rate(&upsell.switch_rate, "  ");
    for section in [&upsell.switch_triggers, &upsell.switch_timing, &upsell.hesitations]
        .into_iter()
        .flatten()
    {
        render_breakdown(section, "  ");
    }
    println!("\n【現在短期プラン加入者の年契約への切り替え意向】");
    println!("  短期プラン加入者総数: {}人", upsell.short_term);
    if let Some(section) = &upsell.future_intention {
        render_breakdown(section, "  ");
    }
    render_rate(&upsell.not_considering, "  ");

    println!("\n{RULE}");
    println!("③ 外あそびレジャー保険1年契約の継続・非継続理由");
    println!("{RULE}");
    let continuation = &report.continuation;
    println!("\n【継続状況】");
    println!("  継続者数: {}人", continuation.continuing);
    println!("  非継続者数: {}人", continuation.discontinued);
    render_rate(&continuation.continuation_rate, "  ");
    if let Some(section) = &continuation.deciding_factors {
        render_breakdown(section, "  ");
    }
    if !continuation.continuing_profile.is_empty() {
        println!("\n  【継続者の属性特徴】");
        for section in &continuation.continuing_profile {
            render_breakdown(section, "    ");
        }
    }
    if let Some(section) = &continuation.cancel_reasons {
        render_breakdown(section, "  ");
    }
    if !continuation.cancel_details.is_empty() {
        println!("\n  【解約理由の詳細（例）】");
        for detail in &continuation.cancel_details {
            println!("    - {detail}");
        }
    }
    if !continuation.discontinued_profile.is_empty() {
        println!("\n  【非継続者の属性特徴】");
        for section in &continuation.discontinued_profile {
            render_breakdown(section, "    ");
        }
    }
}

/// One breakdown block: title, then value/count/percentage lines. An
/// undefined distribution renders as such instead of a list of zeros.
pub(crate) fn render_breakdown(view: &BreakdownView, indent: &str) {
    println!("\n{indent}【{}】", view.title);
    if view.is_undefined() {
        println!("{indent}  回答なし（割合は算出不可）");
        return;
    }
    for entry in &view.entries {
        println!(
            "{indent}  {}: {}{} ({})",
            entry.value,
            entry.count,
            view.unit(),
            entry.percent_label
        );
    }
}

/// A named rate with numerator and denominator always shown next to the
/// percentage.
pub(crate) fn render_rate(rate: &RateView, indent: &str) {
    println!("\n{indent}【{}】", rate.title);
    println!("{indent}  分子: {}人", rate.numerator);
    println!("{indent}  分母: {}人", rate.denominator);
    if rate.is_undefined() {
        println!("{indent}  割合: 算出不可（分母が0）");
    } else {
        println!("{indent}  割合: {}", rate.percent_label);
    }
}
