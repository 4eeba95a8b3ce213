//! Reducing-balance EMI calculation.
//!
//! Covers:
//! 1. **Installment** -- standard annuity formula on the monthly rate.
//! 2. **Totals** -- total payable and total interest derived from the
//!    *rounded* installment, matching what a borrower is actually billed.
//! 3. **Schedule** -- optional month-by-month amortization breakdown.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::schedule::{build_schedule, AmortizationRow};
use crate::error::HousingFinanceError;
use crate::rounding::{annuity_payment, monthly_rate, round_currency};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::HousingFinanceResult;

// ---------------------------------------------------------------------------
// Business bounds (advisory, not hard invariants of the pure function)
// ---------------------------------------------------------------------------

/// Smallest loan the product desk underwrites.
const MIN_LOAN_AMOUNT: Decimal = dec!(100000);

/// Offered interest-rate band, percent per annum.
const RATE_BAND: (Decimal, Decimal) = (dec!(5), dec!(20));

/// Offered tenure band, months.
const TENURE_BAND: (u32, u32) = (12, 360);

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Loan terms for an EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    /// Principal borrowed.
    pub loan_amount: Money,
    /// Annual interest rate in percent (8.5 = 8.5% p.a.).
    pub interest_rate: Rate,
    /// Repayment duration in months.
    pub tenure_months: u32,
    /// Emit the month-by-month amortization schedule.
    #[serde(default)]
    pub include_schedule: bool,
}

/// Result of an EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    /// Level monthly installment, rounded to the currency unit.
    pub monthly_emi: Money,
    /// Installment times tenure.
    pub total_amount: Money,
    /// Total payable minus principal.
    pub total_interest: Money,
    /// Amortization breakdown, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<AmortizationRow>>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Calculate the equated monthly installment for the given loan terms.
pub fn calculate_emi(input: &EmiInput) -> HousingFinanceResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();

    validate_input(input)?;
    let warnings = business_bound_warnings(input);

    let rate = monthly_rate(input.interest_rate);
    let monthly_emi = round_currency(annuity_payment(
        input.loan_amount,
        rate,
        input.tenure_months,
    ));

    // Totals come from the rounded installment, not the raw annuity value,
    // so monthly_emi * tenure_months == total_amount holds to the paisa.
    let total_amount = round_currency(monthly_emi * Decimal::from(input.tenure_months));
    let total_interest = total_amount - round_currency(input.loan_amount);

    let schedule = input.include_schedule.then(|| {
        build_schedule(input.loan_amount, rate, monthly_emi, input.tenure_months)
    });

    let output = EmiOutput {
        monthly_emi,
        total_amount,
        total_interest,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Reducing-Balance Annuity (EMI)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &EmiInput) -> HousingFinanceResult<()> {
    if input.loan_amount <= Decimal::ZERO {
        return Err(HousingFinanceError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount must be positive.".into(),
        });
    }
    if input.interest_rate <= Decimal::ZERO {
        return Err(HousingFinanceError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate must be positive.".into(),
        });
    }
    if input.tenure_months == 0 {
        return Err(HousingFinanceError::InvalidInput {
            field: "tenure_months".into(),
            reason: "Tenure must be at least one month.".into(),
        });
    }
    Ok(())
}

fn business_bound_warnings(input: &EmiInput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.loan_amount < MIN_LOAN_AMOUNT {
        warnings.push(format!(
            "Loan amount {} is below the product minimum of {}",
            input.loan_amount, MIN_LOAN_AMOUNT
        ));
    }
    if input.interest_rate < RATE_BAND.0 || input.interest_rate > RATE_BAND.1 {
        warnings.push(format!(
            "Interest rate {}% is outside the offered band of {}%-{}%",
            input.interest_rate, RATE_BAND.0, RATE_BAND.1
        ));
    }
    if input.tenure_months < TENURE_BAND.0 || input.tenure_months > TENURE_BAND.1 {
        warnings.push(format!(
            "Tenure of {} months is outside the offered band of {}-{} months",
            input.tenure_months, TENURE_BAND.0, TENURE_BAND.1
        ));
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn base_input() -> EmiInput {
        EmiInput {
            loan_amount: dec!(5000000),
            interest_rate: dec!(8.5),
            tenure_months: 240,
            include_schedule: false,
        }
    }

    #[test]
    fn test_standard_home_loan_scenario() {
        // 50 lakh at 8.5% over 20 years: the well-known ~43,391 installment.
        let out = calculate_emi(&base_input()).unwrap().result;
        assert_eq!(out.monthly_emi.round(), dec!(43391));
        assert!((out.total_amount - dec!(10413876)).abs() < dec!(250));
        assert!((out.total_interest - dec!(5413876)).abs() < dec!(250));
    }

    #[test]
    fn test_totals_derive_from_rounded_installment() {
        let out = calculate_emi(&base_input()).unwrap().result;
        assert_eq!(out.total_amount, out.monthly_emi * dec!(240));
        assert_eq!(out.total_interest, out.total_amount - dec!(5000000));
    }

    #[test]
    fn test_total_interest_non_negative() {
        for (amount, rate, months) in [
            (dec!(100000), dec!(5), 12u32),
            (dec!(750000), dec!(11.4), 84),
            (dec!(50000000), dec!(20), 360),
            (dec!(100000), dec!(0.01), 12),
        ] {
            let input = EmiInput {
                loan_amount: amount,
                interest_rate: rate,
                tenure_months: months,
                include_schedule: false,
            };
            let out = calculate_emi(&input).unwrap().result;
            assert!(
                out.total_interest >= Decimal::ZERO,
                "negative interest for {amount} at {rate}% over {months}m"
            );
        }
    }

    #[test]
    fn test_near_zero_rate_approaches_straight_line() {
        let input = EmiInput {
            loan_amount: dec!(1200000),
            interest_rate: dec!(0.0001),
            tenure_months: 120,
            include_schedule: false,
        };
        let out = calculate_emi(&input).unwrap().result;
        // principal / tenure = 10,000
        assert!((out.monthly_emi - dec!(10000)).abs() < dec!(1));
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_emi(&base_input()).unwrap().result;
        let b = calculate_emi(&base_input()).unwrap().result;
        assert_eq!(a.monthly_emi, b.monthly_emi);
        assert_eq!(a.total_amount, b.total_amount);
        assert_eq!(a.total_interest, b.total_interest);
    }

    #[test]
    fn test_schedule_omitted_by_default() {
        let out = calculate_emi(&base_input()).unwrap().result;
        assert!(out.schedule.is_none());
    }

    #[test]
    fn test_schedule_terminates_at_zero() {
        let input = EmiInput {
            include_schedule: true,
            ..base_input()
        };
        let out = calculate_emi(&input).unwrap().result;
        let schedule = out.schedule.unwrap();
        assert_eq!(schedule.len(), 240);
        assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
        let repaid: Decimal = schedule.iter().map(|r| r.principal_component).sum();
        assert_eq!(repaid, dec!(5000000));
    }

    #[test]
    fn test_reject_non_positive_loan_amount() {
        let input = EmiInput {
            loan_amount: Decimal::ZERO,
            ..base_input()
        };
        let err = calculate_emi(&input).unwrap_err();
        assert!(matches!(
            err,
            HousingFinanceError::InvalidInput { ref field, .. } if field == "loan_amount"
        ));
    }

    #[test]
    fn test_reject_non_positive_rate() {
        let input = EmiInput {
            interest_rate: dec!(-1),
            ..base_input()
        };
        let err = calculate_emi(&input).unwrap_err();
        assert!(matches!(
            err,
            HousingFinanceError::InvalidInput { ref field, .. } if field == "interest_rate"
        ));
    }

    #[test]
    fn test_reject_zero_tenure() {
        let input = EmiInput {
            tenure_months: 0,
            ..base_input()
        };
        let err = calculate_emi(&input).unwrap_err();
        assert!(matches!(
            err,
            HousingFinanceError::InvalidInput { ref field, .. } if field == "tenure_months"
        ));
    }

    #[test]
    fn test_no_warnings_inside_business_bounds() {
        let out = calculate_emi(&base_input()).unwrap();
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_warnings_outside_business_bounds() {
        let input = EmiInput {
            loan_amount: dec!(50000),
            interest_rate: dec!(24),
            tenure_months: 6,
            include_schedule: false,
        };
        let out = calculate_emi(&input).unwrap();
        assert_eq!(out.warnings.len(), 3);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = EmiInput {
            include_schedule: true,
            ..base_input()
        };
        let out = calculate_emi(&input).unwrap();
        let json = serde_json::to_string(&out).unwrap();
        let back: ComputationOutput<EmiOutput> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.result.monthly_emi, out.result.monthly_emi);
    }

    #[test]
    fn test_include_schedule_defaults_false_in_json() {
        let input: EmiInput = serde_json::from_str(
            r#"{"loan_amount": "2500000", "interest_rate": "9.25", "tenure_months": 180}"#,
        )
        .unwrap();
        assert!(!input.include_schedule);
        assert!(calculate_emi(&input).is_ok());
    }
}
