//! Rule-based loan-eligibility scoring.
//!
//! A fixed seven-question questionnaire maps each categorical answer to a
//! point value from a per-question lookup table. The total score (0-150)
//! lands in a qualitative band, and a fixed-order rule pass produces the
//! advisory recommendations. Rules are data, not control flow, so the point
//! tables and band cut-offs can be tuned without touching the algorithm.

pub mod questions;
pub mod scoring;

mod recommendations;

pub use questions::{question, QuestionSpec, MAX_TOTAL_SCORE, QUESTIONS};
pub use scoring::{assess_eligibility, EligibilityInput, EligibilityOutput, EligibilityStatus};
