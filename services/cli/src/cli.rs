use crate::render;
use crate::writers;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use survey_insights::config::AppConfig;
use survey_insights::error::AppError;
use survey_insights::forms::FormsExportImporter;
use survey_insights::questionnaire::report::{generate_insights, OverviewReport, ResearchReport};
use survey_insights::questionnaire::{QuestionCatalog, SurveyDataset};
use survey_insights::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Survey Insights",
    about = "Compute cross-tabulated findings and reports from a questionnaire export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print overview statistics and write the summary sheet (default command)
    Overview(OverviewArgs),
    /// Run the research-question deep dive and write its sheets
    Research(ResearchArgs),
    /// Build the marketing insight report as JSON and Markdown
    Insights(InsightsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct OverviewArgs {
    /// Override the configured questionnaire export path
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Directory generated report files are written to
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
    /// How many ranked values region and reason breakdowns keep
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Skip writing the summary sheet
    #[arg(long)]
    pub(crate) no_sheet: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ResearchArgs {
    /// Override the configured questionnaire export path
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Directory generated report files are written to
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
    /// How many ranked values attribute cross-tabs keep
    #[arg(long, default_value_t = 3)]
    pub(crate) top: usize,
    /// Skip writing the research sheets
    #[arg(long)]
    pub(crate) no_sheet: bool,
}

#[derive(Args, Debug)]
pub(crate) struct InsightsArgs {
    /// Override the configured questionnaire export path
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Directory generated report files are written to
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Overview(OverviewArgs::default()));

    match command {
        Command::Overview(args) => run_overview(args, &config),
        Command::Research(args) => run_research(args, &config),
        Command::Insights(args) => run_insights(args, &config),
    }
}

fn load_dataset(input: Option<PathBuf>, config: &AppConfig) -> Result<SurveyDataset, AppError> {
    let path = input.unwrap_or_else(|| config.dataset.input_path.clone());
    info!(path = %path.display(), "loading questionnaire export");
    let catalog = QuestionCatalog::standard();
    Ok(FormsExportImporter::from_path(&path, &catalog)?)
}

fn run_overview(args: OverviewArgs, config: &AppConfig) -> Result<(), AppError> {
    let OverviewArgs {
        input,
        out_dir,
        top,
        no_sheet,
    } = args;

    let dataset = load_dataset(input, config)?;
    let catalog = QuestionCatalog::standard();
    let top = top.unwrap_or(config.output.top_n);

    let report = OverviewReport::build(&dataset, &catalog, top);
    render::render_overview(&report);

    if !no_sheet {
        let dir = out_dir.unwrap_or_else(|| config.output.dir.clone());
        let path = writers::write_summary_sheet(&dir, &report.sheet)?;
        println!("\nサマリーシートを保存: {}", path.display());
    }

    Ok(())
}

fn run_research(args: ResearchArgs, config: &AppConfig) -> Result<(), AppError> {
    let ResearchArgs {
        input,
        out_dir,
        top,
        no_sheet,
    } = args;

    let dataset = load_dataset(input, config)?;
    let catalog = QuestionCatalog::standard();

    let report = ResearchReport::build(&dataset, &catalog, top);
    render::render_research(&report);

    if !no_sheet {
        let dir = out_dir.unwrap_or_else(|| config.output.dir.clone());
        let paths = writers::write_research_sheets(&dir, &report, dataset.len())?;
        println!();
        for path in paths {
            println!("研究レポートシートを保存: {}", path.display());
        }
    }

    Ok(())
}

fn run_insights(args: InsightsArgs, config: &AppConfig) -> Result<(), AppError> {
    let InsightsArgs { input, out_dir } = args;

    let dataset = load_dataset(input, config)?;
    let catalog = QuestionCatalog::standard();

    let insights = generate_insights(&dataset, &catalog);
    let dir = out_dir.unwrap_or_else(|| config.output.dir.clone());
    let json_path = writers::write_json(&dir, "marketing_insights_report.json", &insights)?;
    let md_path = writers::write_markdown(&dir, &insights)?;

    println!("マーケティングインサイトレポートを保存:");
    println!("  - JSON: {}", json_path.display());
    println!("  - Markdown: {}", md_path.display());

    Ok(())
}
