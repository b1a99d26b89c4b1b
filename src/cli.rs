use child_screening::config::{AppConfig, OutputConfig, OutputFormat};
use child_screening::error::AppError;
use child_screening::screening::{
    annotate_responses, bank_for, compute_results, load_responses, load_submissions, report,
    AgeBand, CohortSummary, ResultsRecord,
};
use child_screening::telemetry;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "child-screening",
    about = "Score age-banded child development screenings from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the question bank for a child's age
    Questions(QuestionsArgs),
    /// Score one child's responses
    Score(ScoreArgs),
    /// Score a file of submissions and summarize the cohort
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct QuestionsArgs {
    /// Child's age in whole years
    #[arg(long, allow_negative_numbers = true)]
    age: i32,
    /// Output format (defaults to SCREENING_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Child's age in whole years
    #[arg(long, allow_negative_numbers = true)]
    age: i32,
    /// Responses file (.json or .csv)
    #[arg(long)]
    responses: PathBuf,
    /// Include per-response points and domain attribution
    #[arg(long)]
    annotate: bool,
    /// Output format (defaults to SCREENING_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSON array of `{ childAgeYears, responses }` submissions
    #[arg(long)]
    input: PathBuf,
    /// Output format (defaults to SCREENING_OUTPUT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "child screening cli started");

    match cli.command {
        Command::Questions(args) => run_questions(args, &config.output),
        Command::Score(args) => run_score(args, &config.output),
        Command::Batch(args) => run_batch(args, &config.output),
    }
}

fn run_questions(args: QuestionsArgs, output: &OutputConfig) -> Result<(), AppError> {
    let band = AgeBand::classify(args.age);
    match args.format.unwrap_or(output.format) {
        OutputFormat::Text => print!("{}", report::render_question_bank(band)),
        OutputFormat::Json => print_json(bank_for(band), output.pretty_json)?,
    }
    Ok(())
}

fn run_score(args: ScoreArgs, output: &OutputConfig) -> Result<(), AppError> {
    let responses = load_responses(&args.responses)?;
    let record = compute_results(&responses, args.age);
    let annotated = args
        .annotate
        .then(|| annotate_responses(&responses, record.metadata.age_group));

    match args.format.unwrap_or(output.format) {
        OutputFormat::Text => {
            print!("{}", report::render_results(&record));
            if let Some(annotated) = annotated {
                println!("\nResponses");
                for response in annotated {
                    println!(
                        "- Q{} [{}] {} -> {} pts",
                        response.question_number,
                        response.domain,
                        response.selected_option,
                        response.points
                    );
                }
            }
        }
        OutputFormat::Json => match annotated {
            Some(annotated) => print_json(
                &json!({ "results": record, "responses": annotated }),
                output.pretty_json,
            )?,
            None => print_json(&record, output.pretty_json)?,
        },
    }
    Ok(())
}

fn run_batch(args: BatchArgs, output: &OutputConfig) -> Result<(), AppError> {
    let submissions = load_submissions(&args.input)?;
    let records: Vec<ResultsRecord> = submissions
        .iter()
        .map(|submission| compute_results(&submission.responses, submission.child_age_years))
        .collect();
    let summary = CohortSummary::from_records(&records);

    match args.format.unwrap_or(output.format) {
        OutputFormat::Text => {
            for (index, record) in records.iter().enumerate() {
                println!("{}", report::render_headline(index, record));
            }
            println!();
            print!("{}", report::render_cohort(&summary));
        }
        OutputFormat::Json => print_json(
            &json!({ "results": records, "summary": summary }),
            output.pretty_json,
        )?,
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
