use chrono::{DateTime, TimeZone, Utc};

use crate::screening::age::AgeBand;
use crate::screening::domain::{Response, ResultsRecord};
use crate::screening::question_bank::{bank_for, PRICING_QUESTION_NUMBER};

pub(super) fn completed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 10, 15, 0)
        .single()
        .expect("valid timestamp")
}

/// Option code worth the given points on a question, if one exists.
fn code_worth(band: AgeBand, number: u32, points: u32) -> &'static str {
    let question = bank_for(band).question(number).expect("question exists");
    ["A", "B", "C"]
        .into_iter()
        .find(|code| question.points_for(code) == points)
        .expect("option with requested points exists")
}

fn response(band: AgeBand, number: u32, option: &str) -> Response {
    let prompt = bank_for(band)
        .question(number)
        .map(|question| question.prompt)
        .unwrap_or("unlisted question");
    Response::new(number, prompt, option)
}

/// Ten scored answers, each the best option for its question.
pub(super) fn best_answers(band: AgeBand) -> Vec<Response> {
    (1..=10)
        .map(|number| response(band, number, code_worth(band, number, 2)))
        .collect()
}

/// Ten scored answers, each worth nothing.
pub(super) fn weakest_answers(band: AgeBand) -> Vec<Response> {
    (1..=10)
        .map(|number| response(band, number, code_worth(band, number, 0)))
        .collect()
}

/// Best answers with the listed ordinals replaced by a zero-point option.
pub(super) fn best_except(band: AgeBand, critical: &[u32]) -> Vec<Response> {
    (1..=10)
        .map(|number| {
            let points = if critical.contains(&number) { 0 } else { 2 };
            response(band, number, code_worth(band, number, points))
        })
        .collect()
}

/// A realistic mix of answers plus the pricing item.
pub(super) fn mixed_submission(band: AgeBand) -> Vec<Response> {
    let mut responses: Vec<Response> = (1..=10)
        .map(|number| {
            let option = match number % 3 {
                0 => "C",
                1 => "A",
                _ => "B",
            };
            response(band, number, option)
        })
        .collect();
    responses.push(response(band, PRICING_QUESTION_NUMBER, "12000"));
    responses
}

pub(super) fn with_pricing(mut responses: Vec<Response>, value: &str) -> Vec<Response> {
    responses.push(Response::new(PRICING_QUESTION_NUMBER, "pricing", value));
    responses
}

pub(super) fn has_flag(record: &ResultsRecord, message: &str) -> bool {
    record.red_flags.iter().any(|flag| flag == message)
}
