//! Child development screening engine.
//!
//! Scores a parent-completed questionnaire against a fixed, age-banded
//! question bank and produces domain levels, red flags, and recommendations.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
