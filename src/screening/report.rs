//! Plain-text renderings for terminal output.

use super::age::AgeBand;
use super::cohort::CohortSummary;
use super::domain::ResultsRecord;
use super::question_bank::{bank_for, QuestionKind};
use std::fmt::Write;

/// The questionnaire for a band, as a parent would see it.
pub fn render_question_bank(band: AgeBand) -> String {
    let bank = bank_for(band);
    let mut out = String::new();

    let _ = writeln!(out, "{}", bank.title);
    let _ = writeln!(out, "Age group: {}", band.label());

    for question in &bank.questions {
        let _ = writeln!(out, "\n{}. {}", question.number, question.prompt);
        match &question.kind {
            QuestionKind::Scored { domain, options } => {
                for option in options {
                    let _ = writeln!(out, "   {}) {}", option.code, option.label);
                }
                let _ = writeln!(out, "   [{}]", domain.display_name());
            }
            QuestionKind::Pricing { placeholder } => {
                let _ = writeln!(out, "   {}", placeholder);
            }
        }
    }

    out
}

pub fn render_results(record: &ResultsRecord) -> String {
    let mut out = String::new();
    let overall = &record.overall;

    let _ = writeln!(out, "Screening results");
    let _ = writeln!(
        out,
        "Child age: {} ({}), {} responses, completed {}",
        record.metadata.child_age,
        record.metadata.age_group.label(),
        record.metadata.total_questions,
        record.metadata.completed_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        out,
        "Overall: {}/{} ({:.2}%) - {}",
        overall.total_score, overall.max_score, overall.percentage, overall.level
    );

    let _ = writeln!(out, "\nDomains");
    for (domain, result) in record.domains.iter() {
        if result.is_assessed() {
            let _ = writeln!(
                out,
                "- {}: {}/{} ({:.0}%) {}",
                domain.display_name(),
                result.score,
                result.max,
                result.percentage,
                result.level.label()
            );
        } else {
            let _ = writeln!(out, "- {}: not assessed", domain.display_name());
        }
    }

    if record.red_flags.is_empty() {
        let _ = writeln!(out, "\nRed flags: none");
    } else {
        let _ = writeln!(out, "\nRed flags");
        for flag in &record.red_flags {
            let _ = writeln!(out, "- {}", flag);
        }
    }

    let _ = writeln!(out, "\nRecommendations");
    for recommendation in &record.recommendations {
        let _ = writeln!(out, "- {}: {}", recommendation.title, recommendation.description);
        if let Some(next_steps) = &recommendation.next_steps {
            let _ = writeln!(out, "  Next steps: {}", next_steps);
        }
        for activity in &recommendation.activities {
            let _ = writeln!(out, "  {}", activity);
        }
    }

    if let Some(amount) = record.pricing_preference {
        let _ = writeln!(out, "\nWilling to pay: ₦{} per month", amount);
    }

    out
}

/// One line per assessment, for batch runs.
pub fn render_headline(index: usize, record: &ResultsRecord) -> String {
    format!(
        "#{} age {} ({}): {}/{} {} [{} red flags, {} recommendations]",
        index + 1,
        record.metadata.child_age,
        record.metadata.age_group,
        record.overall.total_score,
        record.overall.max_score,
        record.overall.level,
        record.red_flags.len(),
        record.recommendations.len()
    )
}

pub fn render_cohort(summary: &CohortSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Cohort summary");
    let _ = writeln!(out, "Assessments: {}", summary.assessments);
    for (band, count) in &summary.by_age_group {
        let _ = writeln!(out, "- {}: {}", band.label(), count);
    }
    let _ = writeln!(
        out,
        "Average age: {}",
        format_optional(summary.average_child_age, "years")
    );
    let _ = writeln!(
        out,
        "Average overall: {}",
        format_optional(summary.average_overall_percentage, "%")
    );
    for (domain, average) in &summary.domain_averages {
        let _ = writeln!(out, "- {}: {:.1}%", domain.display_name(), average);
    }
    let _ = writeln!(out, "Flagged assessments: {}", summary.flagged_assessments);

    let pricing = &summary.pricing;
    match (pricing.average, pricing.median, pricing.min, pricing.max) {
        (Some(average), Some(median), Some(min), Some(max)) => {
            let _ = writeln!(
                out,
                "Pricing ({} answers): mean ₦{:.0}, median ₦{:.0}, range ₦{}-₦{}",
                pricing.responses, average, median, min, max
            );
        }
        _ => {
            let _ = writeln!(out, "Pricing: no answers");
        }
    }

    out
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{:.1} {}", value, unit),
        None => "n/a".to_string(),
    }
}
