//! Month-by-month amortization of a reducing-balance loan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rounding::round_currency;
use crate::types::Money;

/// A single month in an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number (1-indexed).
    pub month: u32,
    /// Portion of the installment repaying principal.
    pub principal_component: Money,
    /// Portion of the installment paying interest on the open balance.
    pub interest_component: Money,
    /// Balance outstanding after this month's payment.
    pub remaining_balance: Money,
}

/// Amortise `principal` over `tenure_months` with the already-rounded level
/// `installment` at monthly rate `rate`.
///
/// Each month's interest is charged on the open balance and rounded to the
/// currency unit; the principal component is the installment remainder. The
/// final month's principal component absorbs the residual rounding drift so
/// the balance terminates at exactly zero.
pub fn build_schedule(
    principal: Money,
    rate: Decimal,
    installment: Money,
    tenure_months: u32,
) -> Vec<AmortizationRow> {
    let mut rows = Vec::with_capacity(tenure_months as usize);
    let mut balance = round_currency(principal);

    for month in 1..=tenure_months {
        let interest = round_currency(balance * rate);

        let principal_component = if month == tenure_months {
            balance
        } else {
            installment - interest
        };

        balance -= principal_component;
        if month == tenure_months {
            balance = Decimal::ZERO;
        }

        rows.push(AmortizationRow {
            month,
            principal_component: round_currency(principal_component),
            interest_component: interest,
            remaining_balance: round_currency(balance),
        });
    }

    rows
}
