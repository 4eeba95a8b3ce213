use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use housing_finance_core::emi::{calculate_emi, EmiInput};

use crate::input;

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Principal borrowed (e.g. 5000000)
    #[arg(long, alias = "loan-amount")]
    pub amount: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Repayment duration in months (e.g. 240)
    #[arg(long)]
    pub tenure_months: Option<u32>,

    /// Emit the month-by-month amortization schedule
    #[arg(long)]
    pub schedule: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: EmiInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EmiInput {
            loan_amount: args
                .amount
                .ok_or("--amount is required (or pass --input / pipe JSON on stdin)")?,
            interest_rate: args
                .rate
                .ok_or("--rate is required (or pass --input / pipe JSON on stdin)")?,
            tenure_months: args
                .tenure_months
                .ok_or("--tenure-months is required (or pass --input / pipe JSON on stdin)")?,
            include_schedule: args.schedule,
        }
    };
    let result = calculate_emi(&input_data)?;
    Ok(serde_json::to_value(result)?)
}
