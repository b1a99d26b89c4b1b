//! Age-banded developmental screening: question banks, scoring, red flags,
//! and recommendations, plus the intake and reporting around them.

pub mod age;
pub mod cohort;
pub mod domain;
mod guidance;
pub mod intake;
pub mod question_bank;
pub mod recommendations;
pub mod red_flags;
pub mod report;
pub mod results;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use age::AgeBand;
pub use cohort::{CohortSummary, PricingStatistics};
pub use domain::{
    DevelopmentDomain, DomainBreakdown, DomainLevel, DomainResult, OverallResult, OverallTier,
    Priority, QuestionContribution, Recommendation, Response, ResultsMetadata, ResultsRecord,
};
pub use intake::{load_responses, load_submissions, IntakeError, Submission};
pub use question_bank::{bank_for, questions_for, AnswerOption, Question, QuestionBank, QuestionKind};
pub use recommendations::generate_recommendations;
pub use red_flags::detect_red_flags;
pub use results::{
    annotate_responses, compute_results, compute_results_at, pricing_preference,
    AnnotatedResponse,
};
pub use scoring::{score_domains, score_overall};
