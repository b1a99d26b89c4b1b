use super::age::AgeBand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Developmental areas the questionnaire scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentDomain {
    SpeechLanguage,
    Literacy,
    Numeracy,
    Cognitive,
}

impl DevelopmentDomain {
    /// Fixed iteration order; tie-breaks in the recommendation generator follow it.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SpeechLanguage,
            Self::Literacy,
            Self::Numeracy,
            Self::Cognitive,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::SpeechLanguage => "speech_language",
            Self::Literacy => "literacy",
            Self::Numeracy => "numeracy",
            Self::Cognitive => "cognitive",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SpeechLanguage => "Speech & Language",
            Self::Literacy => "Literacy",
            Self::Numeracy => "Numeracy",
            Self::Cognitive => "Focus & Memory",
        }
    }
}

impl fmt::Display for DevelopmentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Qualitative tier for a single domain, derived from its percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainLevel {
    Strong,
    Developing,
    NeedsSupport,
    Urgent,
}

impl DomainLevel {
    /// Inclusive lower bounds: 75 strong, 50 developing, 25 needs support.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            Self::Strong
        } else if percentage >= 50.0 {
            Self::Developing
        } else if percentage >= 25.0 {
            Self::NeedsSupport
        } else {
            Self::Urgent
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Strong => "green",
            Self::Developing => "yellow",
            Self::NeedsSupport => "orange",
            Self::Urgent => "red",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Developing => "Developing",
            Self::NeedsSupport => "Needs Support",
            Self::Urgent => "Urgent",
        }
    }
}

/// Recommendation ordering tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    NeedsSupport,
    Strength,
    Maintain,
}

/// One submitted answer. The prompt text is kept verbatim for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(alias = "question_number")]
    pub question_number: u32,
    #[serde(default, alias = "question_text")]
    pub question_text: String,
    /// An option code (`A`/`B`/`C`), or a raw number for the pricing item.
    #[serde(alias = "selected_option")]
    pub selected_option: String,
}

impl Response {
    pub fn new(
        question_number: u32,
        question_text: impl Into<String>,
        selected_option: impl Into<String>,
    ) -> Self {
        Self {
            question_number,
            question_text: question_text.into(),
            selected_option: selected_option.into(),
        }
    }
}

/// A single question's contribution to a domain, kept for explainability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionContribution {
    pub number: u32,
    pub points: u32,
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    pub score: u32,
    pub max: u32,
    pub percentage: f64,
    pub level: DomainLevel,
    pub color: &'static str,
    pub questions: Vec<QuestionContribution>,
}

impl DomainResult {
    pub(crate) fn from_tally(score: u32, max: u32, questions: Vec<QuestionContribution>) -> Self {
        let percentage = if max > 0 {
            f64::from(score) / f64::from(max) * 100.0
        } else {
            0.0
        };
        let level = DomainLevel::from_percentage(percentage);

        Self {
            score,
            max,
            percentage,
            level,
            color: level.color(),
            questions,
        }
    }

    /// False when the band asks no scored question in this domain.
    pub fn is_assessed(&self) -> bool {
        self.max > 0
    }
}

/// Results for all four domains. Every domain is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DomainBreakdown {
    pub speech_language: DomainResult,
    pub literacy: DomainResult,
    pub numeracy: DomainResult,
    pub cognitive: DomainResult,
}

impl DomainBreakdown {
    pub fn get(&self, domain: DevelopmentDomain) -> &DomainResult {
        match domain {
            DevelopmentDomain::SpeechLanguage => &self.speech_language,
            DevelopmentDomain::Literacy => &self.literacy,
            DevelopmentDomain::Numeracy => &self.numeracy,
            DevelopmentDomain::Cognitive => &self.cognitive,
        }
    }

    /// Domains in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (DevelopmentDomain, &DomainResult)> + '_ {
        DevelopmentDomain::ordered()
            .into_iter()
            .map(move |domain| (domain, self.get(domain)))
    }
}

/// Which of the band's three overall ranges the total fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallTier {
    Excellent,
    Moderate,
    Concern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallResult {
    pub total_score: u32,
    pub max_score: u32,
    /// Rounded to two decimal places.
    pub percentage: f64,
    pub tier: OverallTier,
    /// Band-specific label for the tier.
    pub level: &'static str,
    pub age_group: AgeBand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_this_means: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<DevelopmentDomain>,
}

impl Recommendation {
    pub(crate) fn summary(
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            title: title.into(),
            description: description.into(),
            what_this_means: None,
            next_steps: None,
            activities: Vec::new(),
            domain: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsMetadata {
    pub total_questions: usize,
    pub completed_at: DateTime<Utc>,
    pub child_age: i32,
    pub age_group: AgeBand,
}

/// The complete outcome of one assessment. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsRecord {
    pub overall: OverallResult,
    pub domains: DomainBreakdown,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    /// Monthly amount from the pricing item; never part of any score.
    pub pricing_preference: Option<u64>,
    pub metadata: ResultsMetadata,
}
