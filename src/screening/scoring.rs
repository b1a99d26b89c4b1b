use super::age::AgeBand;
use super::domain::{
    DevelopmentDomain, DomainBreakdown, DomainResult, OverallResult, QuestionContribution,
    Response,
};
use super::question_bank::{bank_for, MAX_POINTS_PER_QUESTION, PRICING_QUESTION_NUMBER};

#[derive(Default)]
struct DomainTally {
    score: u32,
    max: u32,
    questions: Vec<QuestionContribution>,
}

impl DomainTally {
    fn into_result(self) -> DomainResult {
        DomainResult::from_tally(self.score, self.max, self.questions)
    }
}

/// Accumulates points per domain. Unresolved ordinals and the pricing item
/// are skipped; unknown option codes score 0 but still count toward the max.
pub fn score_domains(responses: &[Response], band: AgeBand) -> DomainBreakdown {
    let bank = bank_for(band);
    let mut tallies: [DomainTally; 4] = Default::default();

    for response in responses {
        let Some(question) = bank.question(response.question_number) else {
            continue;
        };
        let Some(domain) = question.domain() else {
            continue;
        };

        let points = question.points_for(&response.selected_option);
        let tally = &mut tallies[slot(domain)];
        tally.score += points;
        tally.max += MAX_POINTS_PER_QUESTION;
        tally.questions.push(QuestionContribution {
            number: response.question_number,
            points,
            option: response.selected_option.clone(),
        });
    }

    let [speech_language, literacy, numeracy, cognitive] = tallies;
    DomainBreakdown {
        speech_language: speech_language.into_result(),
        literacy: literacy.into_result(),
        numeracy: numeracy.into_result(),
        cognitive: cognitive.into_result(),
    }
}

fn slot(domain: DevelopmentDomain) -> usize {
    match domain {
        DevelopmentDomain::SpeechLanguage => 0,
        DevelopmentDomain::Literacy => 1,
        DevelopmentDomain::Numeracy => 2,
        DevelopmentDomain::Cognitive => 3,
    }
}

/// Totals every non-pricing response against the band's absolute thresholds.
///
/// Responses whose ordinal does not resolve still count toward the max with
/// zero points, so a malformed submission lowers the percentage rather than
/// disappearing from it.
pub fn score_overall(responses: &[Response], band: AgeBand) -> OverallResult {
    let bank = bank_for(band);
    let mut total_score = 0;
    let mut counted: u32 = 0;

    for response in responses {
        if response.question_number == PRICING_QUESTION_NUMBER {
            continue;
        }
        let question = bank.question(response.question_number);
        if question.is_some_and(|question| question.is_pricing()) {
            continue;
        }

        counted += 1;
        total_score += question
            .map(|question| question.points_for(&response.selected_option))
            .unwrap_or(0);
    }

    let max_score = counted * MAX_POINTS_PER_QUESTION;
    let percentage = if max_score > 0 {
        round_to_hundredths(f64::from(total_score) / f64::from(max_score) * 100.0)
    } else {
        0.0
    };

    let tier = bank.thresholds.classify(total_score);

    OverallResult {
        total_score,
        max_score,
        percentage,
        tier,
        level: bank.thresholds.label(tier),
        age_group: band,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
