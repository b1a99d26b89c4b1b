use super::age::AgeBand;
use super::domain::{DevelopmentDomain, DomainBreakdown, Response};
use super::question_bank::bank_for;

/// Fires when at least `min_count` critical answers fall on `ordinals`.
struct PatternRule {
    ordinals: &'static [u32],
    min_count: usize,
    message: &'static str,
}

impl PatternRule {
    fn matches(&self, critical: &[u32]) -> bool {
        critical
            .iter()
            .filter(|number| self.ordinals.contains(*number))
            .count()
            >= self.min_count
    }
}

static TODDLER_PATTERNS: [PatternRule; 3] = [
    PatternRule {
        ordinals: &[6],
        min_count: 1,
        message: "Lack of pretend play - possible early autism indicator",
    },
    PatternRule {
        ordinals: &[4, 10],
        min_count: 1,
        message: "Auditory processing concern - difficulty following instructions",
    },
    PatternRule {
        ordinals: &[1, 2, 5, 8, 9],
        min_count: 3,
        message: "Significant expressive language delay",
    },
];

static PRESCHOOL_PATTERNS: [PatternRule; 3] = [
    PatternRule {
        ordinals: &[1, 6, 7],
        min_count: 1,
        message: "Phonological awareness deficit - dyslexia risk indicator",
    },
    PatternRule {
        ordinals: &[3, 9],
        min_count: 2,
        message: "Math concept delays - dyscalculia risk",
    },
    PatternRule {
        ordinals: &[10],
        min_count: 1,
        message: "Narrative skills deficit - language development concern",
    },
];

static SCHOOL_PATTERNS: [PatternRule; 3] = [
    PatternRule {
        ordinals: &[2, 8],
        min_count: 1,
        message: "Reading comprehension below grade level",
    },
    PatternRule {
        ordinals: &[5, 8, 9],
        min_count: 2,
        message: "Math reasoning significantly below grade level",
    },
    PatternRule {
        ordinals: &[10],
        min_count: 1,
        message: "Executive function/working memory concern",
    },
];

fn patterns_for(band: AgeBand) -> &'static [PatternRule] {
    match band {
        AgeBand::Toddler => &TODDLER_PATTERNS,
        AgeBand::Preschool => &PRESCHOOL_PATTERNS,
        AgeBand::School => &SCHOOL_PATTERNS,
    }
}

/// Domains scoring under this percentage raise a universal flag.
const CRITICAL_DOMAIN_PERCENTAGE: f64 = 30.0;

struct DomainFloorRule {
    domain: DevelopmentDomain,
    /// Band in which the domain is not assessed, so the rule stays quiet.
    exempt: Option<AgeBand>,
    message: &'static str,
}

static DOMAIN_FLOORS: [DomainFloorRule; 3] = [
    DomainFloorRule {
        domain: DevelopmentDomain::SpeechLanguage,
        exempt: None,
        message: "Critical speech and language development delay",
    },
    DomainFloorRule {
        domain: DevelopmentDomain::Cognitive,
        exempt: None,
        message: "Significant cognitive processing concerns",
    },
    DomainFloorRule {
        domain: DevelopmentDomain::Literacy,
        exempt: Some(AgeBand::Toddler),
        message: "Severe literacy readiness concern for age group",
    },
];

/// Ordinals of answers that resolved to a declared zero-point option.
pub(crate) fn critical_answers(responses: &[Response], band: AgeBand) -> Vec<u32> {
    let bank = bank_for(band);
    responses
        .iter()
        .filter(|response| {
            bank.question(response.question_number)
                .is_some_and(|question| question.is_critical_answer(&response.selected_option))
        })
        .map(|response| response.question_number)
        .collect()
}

/// Age-specific answer patterns first, then universal domain floors.
/// Flags are appended in rule order and never removed or deduplicated.
pub fn detect_red_flags(
    responses: &[Response],
    domains: &DomainBreakdown,
    band: AgeBand,
) -> Vec<String> {
    let critical = critical_answers(responses, band);
    let mut flags = Vec::new();

    for rule in patterns_for(band) {
        if rule.matches(&critical) {
            flags.push(rule.message.to_string());
        }
    }

    for rule in &DOMAIN_FLOORS {
        if rule.exempt == Some(band) {
            continue;
        }
        // A domain with no answered questions has nothing to judge.
        let result = domains.get(rule.domain);
        if result.is_assessed() && result.percentage < CRITICAL_DOMAIN_PERCENTAGE {
            flags.push(rule.message.to_string());
        }
    }

    flags
}
