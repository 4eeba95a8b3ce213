//! Shared numeric utilities: currency rounding, rate conversion, annuity
//! payments and Indian-style currency grouping for display.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Round a monetary amount to the smallest currency unit (2 decimal places),
/// half-up (midpoints round away from zero).
pub fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an annual percentage rate into a monthly fractional rate
/// (8.5% p.a. -> 0.00708333...).
pub fn monthly_rate(annual_pct: Rate) -> Decimal {
    annual_pct / dec!(12) / dec!(100)
}

/// Level payment that amortises `principal` over `periods` at the periodic
/// rate `rate`. Zero rate degenerates to straight-line repayment rather than
/// dividing by zero in the annuity formula.
pub fn annuity_payment(principal: Money, rate: Decimal, periods: u32) -> Money {
    if rate.is_zero() {
        return principal / Decimal::from(periods);
    }

    let factor = (Decimal::ONE + rate).powi(periods as i64);
    principal * rate * factor / (factor - Decimal::ONE)
}

/// Format an amount with Indian digit grouping: the last three integer
/// digits, then groups of two (10413876 -> "1,04,13,876"). Paise are kept
/// only when non-zero. Used by display surfaces, never by the engines.
pub fn format_inr(amount: Money) -> String {
    let rounded = round_currency(amount);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs();

    let int_part = abs.trunc();
    let fract = abs - int_part;

    let digits = int_part.to_string();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&grouped);
    if !fract.is_zero() {
        let paise = (fract * dec!(100)).round().normalize().to_string();
        out.push('.');
        if paise.len() < 2 {
            out.push('0');
        }
        out.push_str(&paise);
    }
    out
}
