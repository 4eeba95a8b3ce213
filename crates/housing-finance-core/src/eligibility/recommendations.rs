//! Advisory recommendations derived from the assessment.
//!
//! A fixed-order rule pass: the band summary always fires first, then each
//! answer-specific rule appends its advice when its trigger matches. Order
//! and wording are stable, so identical responses always produce the same
//! list.

use std::collections::BTreeMap;

use super::scoring::EligibilityStatus;

/// An answer-triggered advisory rule.
struct AdvisoryRule {
    question: &'static str,
    triggers: &'static [&'static str],
    advice: &'static str,
}

/// Evaluated top to bottom after the band summary.
const ADVISORY_RULES: [AdvisoryRule; 6] = [
    AdvisoryRule {
        question: "credit_score_range",
        triggers: &["poor-600-650", "very-poor-below-600"],
        advice: "Improve your credit score before applying: clear overdue payments and \
                 bring card utilisation down, then let two or three billing cycles pass.",
    },
    AdvisoryRule {
        question: "credit_score_range",
        triggers: &["unknown"],
        advice: "Pull your credit report from a bureau so your application reflects your \
                 actual score band rather than an assumed one.",
    },
    AdvisoryRule {
        question: "existing_loans",
        triggers: &["multiple"],
        advice: "Reduce your existing loan obligations first; closing smaller loans lowers \
                 your fixed-obligation-to-income ratio and frees up repayment capacity.",
    },
    AdvisoryRule {
        question: "income_range",
        triggers: &["below-3lakh", "3-5lakh"],
        advice: "Consider adding an earning co-applicant to strengthen repayment capacity \
                 and qualify for a larger sanction.",
    },
    AdvisoryRule {
        question: "employment_type",
        triggers: &["self-employed", "business"],
        advice: "Keep two to three years of income-tax returns and business banking records \
                 ready; lenders ask for them from non-salaried applicants.",
    },
    AdvisoryRule {
        question: "property_type",
        triggers: &["under-construction"],
        advice: "Verify the builder's RERA registration and project approvals before \
                 committing to an under-construction property.",
    },
];

fn band_summary(status: EligibilityStatus) -> &'static str {
    match status {
        EligibilityStatus::Excellent => {
            "You are well placed for approval; compare lenders for the best rate and apply \
             with confidence."
        }
        EligibilityStatus::Good => {
            "Your profile is strong; most lenders would process this application with \
             standard documentation."
        }
        EligibilityStatus::Fair => {
            "Your profile sits mid-band; a stronger credit score or income bracket would \
             unlock better rates."
        }
        EligibilityStatus::Poor => {
            "Approval is possible but likely on stricter terms; strengthen the weaker \
             factors in your profile before applying."
        }
        EligibilityStatus::VeryPoor => {
            "Your profile needs significant strengthening before a lender is likely to \
             approve a home loan."
        }
    }
}

/// Build the ordered recommendation list for a validated response set.
pub(crate) fn build_recommendations(
    responses: &BTreeMap<String, String>,
    status: EligibilityStatus,
) -> Vec<String> {
    let mut recommendations = vec![band_summary(status).to_string()];

    for rule in &ADVISORY_RULES {
        if let Some(answer) = responses.get(rule.question) {
            if rule.triggers.contains(&answer.as_str()) {
                recommendations.push(rule.advice.to_string());
            }
        }
    }

    recommendations
}
