use super::age::AgeBand;
use super::domain::{Response, ResultsMetadata, ResultsRecord};
use super::question_bank::{bank_for, PRICING_QUESTION_NUMBER};
use super::recommendations::generate_recommendations;
use super::red_flags::detect_red_flags;
use super::scoring::{score_domains, score_overall};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Scores a completed submission for a child of the given age.
///
/// Total: malformed input degrades to zero scores rather than failing.
pub fn compute_results(responses: &[Response], child_age_years: i32) -> ResultsRecord {
    compute_results_at(responses, child_age_years, Utc::now())
}

/// Same as [`compute_results`] with a caller-supplied completion time.
pub fn compute_results_at(
    responses: &[Response],
    child_age_years: i32,
    completed_at: DateTime<Utc>,
) -> ResultsRecord {
    let band = AgeBand::classify(child_age_years);

    let domains = score_domains(responses, band);
    let overall = score_overall(responses, band);
    let red_flags = detect_red_flags(responses, &domains, band);
    let recommendations =
        generate_recommendations(&domains, &overall, child_age_years, band, &red_flags);

    debug!(
        age_group = band.code(),
        responses = responses.len(),
        total_score = overall.total_score,
        max_score = overall.max_score,
        red_flags = red_flags.len(),
        recommendations = recommendations.len(),
        "scored screening submission"
    );

    ResultsRecord {
        overall,
        domains,
        red_flags,
        recommendations,
        pricing_preference: pricing_preference(responses),
        metadata: ResultsMetadata {
            total_questions: responses.len(),
            completed_at,
            child_age: child_age_years,
            age_group: band,
        },
    }
}

/// Per-response attribution stored next to the raw answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedResponse {
    pub question_number: u32,
    pub question_text: String,
    pub selected_option: String,
    pub points: u32,
    /// Domain code, `pricing`, or `unknown` when the ordinal does not resolve.
    pub domain: &'static str,
}

pub fn annotate_responses(responses: &[Response], band: AgeBand) -> Vec<AnnotatedResponse> {
    let bank = bank_for(band);
    responses
        .iter()
        .map(|response| {
            let question = bank.question(response.question_number);
            let domain = match question {
                Some(question) => question
                    .domain()
                    .map(|domain| domain.code())
                    .unwrap_or("pricing"),
                None => "unknown",
            };
            let points = question
                .map(|question| question.points_for(&response.selected_option))
                .unwrap_or(0);

            AnnotatedResponse {
                question_number: response.question_number,
                question_text: response.question_text.clone(),
                selected_option: response.selected_option.clone(),
                points,
                domain,
            }
        })
        .collect()
}

/// Monthly amount from the pricing item. Reads the leading digits of the
/// first answer to that ordinal, after one optional `+`; zero, a minus sign,
/// overflow, or no digits yield `None`.
pub fn pricing_preference(responses: &[Response]) -> Option<u64> {
    let answer = responses
        .iter()
        .find(|response| response.question_number == PRICING_QUESTION_NUMBER)?;

    let trimmed = answer.selected_option.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<u64>()
        .ok()
        .filter(|amount| *amount > 0)
}
