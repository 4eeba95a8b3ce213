//! Score aggregation and banding for the eligibility questionnaire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::eligibility::questions::QUESTIONS;
use crate::eligibility::recommendations::build_recommendations;
use crate::error::HousingFinanceError;
use crate::HousingFinanceResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Questionnaire responses: a flat mapping of question identifier to the
/// chosen option value. Extra keys (boundary forms post contact fields
/// alongside the answers) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EligibilityInput {
    pub responses: BTreeMap<String, String>,
}

/// Qualitative eligibility band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl std::fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityStatus::Excellent => write!(f, "Excellent"),
            EligibilityStatus::Good => write!(f, "Good"),
            EligibilityStatus::Fair => write!(f, "Fair"),
            EligibilityStatus::Poor => write!(f, "Poor"),
            EligibilityStatus::VeryPoor => write!(f, "Very Poor"),
        }
    }
}

/// Result of an eligibility assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityOutput {
    /// Total score, 0-150.
    pub score: u32,
    /// Band the score falls in.
    pub status: EligibilityStatus,
    /// Ordered advisory recommendations, never empty.
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Banding
// ---------------------------------------------------------------------------

/// Band cut-offs, highest first. A score lands in the first band whose
/// threshold it meets.
const STATUS_BANDS: [(u32, EligibilityStatus); 5] = [
    (120, EligibilityStatus::Excellent),
    (90, EligibilityStatus::Good),
    (60, EligibilityStatus::Fair),
    (30, EligibilityStatus::Poor),
    (0, EligibilityStatus::VeryPoor),
];

fn band_for_score(score: u32) -> EligibilityStatus {
    STATUS_BANDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, status)| *status)
        .unwrap_or(EligibilityStatus::VeryPoor)
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Assess loan eligibility from questionnaire responses.
///
/// Every question in the fixed set must be answered with one of its
/// enumerated option values; there is no partial scoring.
pub fn assess_eligibility(input: &EligibilityInput) -> HousingFinanceResult<EligibilityOutput> {
    let mut score: u32 = 0;

    for question in &QUESTIONS {
        let answer = input.responses.get(question.id).ok_or_else(|| {
            HousingFinanceError::MissingAnswer {
                question: question.id.to_string(),
            }
        })?;

        let points =
            question
                .points_for(answer)
                .ok_or_else(|| HousingFinanceError::UnknownOption {
                    question: question.id.to_string(),
                    value: answer.clone(),
                })?;

        score += points;
    }

    let status = band_for_score(score);
    let recommendations = build_recommendations(&input.responses, status);

    Ok(EligibilityOutput {
        score,
        status,
        recommendations,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::eligibility::questions::MAX_TOTAL_SCORE;

    fn input_from(pairs: &[(&str, &str)]) -> EligibilityInput {
        EligibilityInput {
            responses: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn best_responses() -> EligibilityInput {
        input_from(&[
            ("age_group", "31-40"),
            ("income_range", "above-20lakh"),
            ("employment_type", "salaried"),
            ("city_tier", "tier-1"),
            ("existing_loans", "none"),
            ("credit_score_range", "excellent-750+"),
            ("property_type", "ready-to-move"),
        ])
    }

    fn worst_responses() -> EligibilityInput {
        input_from(&[
            ("age_group", "60+"),
            ("income_range", "below-3lakh"),
            ("employment_type", "retired"),
            ("city_tier", "rural"),
            ("existing_loans", "multiple"),
            ("credit_score_range", "very-poor-below-600"),
            ("property_type", "renovation"),
        ])
    }

    #[test]
    fn test_best_profile_scores_maximum() {
        let out = assess_eligibility(&best_responses()).unwrap();
        assert_eq!(out.score, MAX_TOTAL_SCORE);
        assert_eq!(out.status, EligibilityStatus::Excellent);
    }

    #[test]
    fn test_worst_profile_scores_zero() {
        let out = assess_eligibility(&worst_responses()).unwrap();
        assert_eq!(out.score, 0);
        assert_eq!(out.status, EligibilityStatus::VeryPoor);
    }

    #[test]
    fn test_score_always_within_bounds() {
        // A mid-range profile stays inside [0, 150] and in the band set.
        let out = assess_eligibility(&input_from(&[
            ("age_group", "41-50"),
            ("income_range", "5-10lakh"),
            ("employment_type", "business"),
            ("city_tier", "tier-2"),
            ("existing_loans", "home-loan"),
            ("credit_score_range", "fair-650-700"),
            ("property_type", "under-construction"),
        ]))
        .unwrap();
        assert!(out.score <= MAX_TOTAL_SCORE);
        // 18 + 12 + 12 + 12 + 10 + 18 + 11
        assert_eq!(out.score, 93);
        assert_eq!(out.status, EligibilityStatus::Good);
    }

    #[test]
    fn test_missing_answer_names_the_question() {
        let mut input = best_responses();
        input.responses.remove("city_tier");
        let err = assess_eligibility(&input).unwrap_err();
        assert!(matches!(
            err,
            HousingFinanceError::MissingAnswer { ref question } if question == "city_tier"
        ));
    }

    #[test]
    fn test_unknown_option_names_question_and_value() {
        let mut input = best_responses();
        input
            .responses
            .insert("existing_loans".into(), "car-loan".into());
        let err = assess_eligibility(&input).unwrap_err();
        assert!(matches!(
            err,
            HousingFinanceError::UnknownOption { ref question, ref value }
                if question == "existing_loans" && value == "car-loan"
        ));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let mut input = best_responses();
        input
            .responses
            .insert("phone_number".into(), "9876543210".into());
        let out = assess_eligibility(&input).unwrap();
        assert_eq!(out.score, MAX_TOTAL_SCORE);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let input = input_from(&[
            ("age_group", "21-30"),
            ("income_range", "10-20lakh"),
            ("employment_type", "professional"),
            ("city_tier", "tier-1"),
            ("existing_loans", "credit-card"),
            ("credit_score_range", "good-700-750"),
            ("property_type", "refinance"),
        ]);
        let a = assess_eligibility(&input).unwrap();
        let b = assess_eligibility(&input).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.status, b.status);
        assert_eq!(a.recommendations, b.recommendations);
    }

    #[test]
    fn test_recommendations_never_empty() {
        for input in [best_responses(), worst_responses()] {
            let out = assess_eligibility(&input).unwrap();
            assert!(!out.recommendations.is_empty());
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(band_for_score(150), EligibilityStatus::Excellent);
        assert_eq!(band_for_score(120), EligibilityStatus::Excellent);
        assert_eq!(band_for_score(119), EligibilityStatus::Good);
        assert_eq!(band_for_score(90), EligibilityStatus::Good);
        assert_eq!(band_for_score(89), EligibilityStatus::Fair);
        assert_eq!(band_for_score(60), EligibilityStatus::Fair);
        assert_eq!(band_for_score(59), EligibilityStatus::Poor);
        assert_eq!(band_for_score(30), EligibilityStatus::Poor);
        assert_eq!(band_for_score(29), EligibilityStatus::VeryPoor);
        assert_eq!(band_for_score(0), EligibilityStatus::VeryPoor);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&EligibilityStatus::VeryPoor).unwrap();
        assert_eq!(json, r#""very-poor""#);
        let json = serde_json::to_string(&EligibilityStatus::Excellent).unwrap();
        assert_eq!(json, r#""excellent""#);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let out = assess_eligibility(&best_responses()).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: EligibilityOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, out.score);
        assert_eq!(back.status, out.status);
    }

    #[test]
    fn test_input_deserializes_from_flat_object() {
        let input: EligibilityInput = serde_json::from_str(
            r#"{
                "age_group": "31-40",
                "income_range": "5-10lakh",
                "employment_type": "salaried",
                "city_tier": "tier-2",
                "existing_loans": "none",
                "credit_score_range": "good-700-750",
                "property_type": "ready-to-move"
            }"#,
        )
        .unwrap();
        let out = assess_eligibility(&input).unwrap();
        // 20 + 12 + 20 + 12 + 20 + 28 + 15
        assert_eq!(out.score, 127);
        assert_eq!(out.status, EligibilityStatus::Excellent);
    }
}
