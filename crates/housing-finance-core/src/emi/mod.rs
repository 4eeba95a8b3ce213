//! Equated Monthly Installment (EMI) engine.
//!
//! Reducing-balance annuity installment plus an optional month-by-month
//! amortization schedule.

pub mod calculator;
pub mod schedule;

pub use calculator::{calculate_emi, EmiInput, EmiOutput};
pub use schedule::AmortizationRow;
