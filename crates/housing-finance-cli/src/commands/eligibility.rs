use std::collections::BTreeMap;

use clap::Args;
use serde_json::Value;

use housing_finance_core::eligibility::{assess_eligibility, EligibilityInput};

use crate::input;

/// Arguments for an eligibility assessment. One flag per questionnaire
/// answer; a JSON file or piped stdin overrides the flags.
#[derive(Args)]
pub struct EligibilityArgs {
    /// Applicant age group (21-30, 31-40, 41-50, 51-60, 60+)
    #[arg(long)]
    pub age_group: Option<String>,

    /// Annual income bracket (below-3lakh .. above-20lakh)
    #[arg(long)]
    pub income_range: Option<String>,

    /// Employment type (salaried, self-employed, business, professional, retired)
    #[arg(long)]
    pub employment_type: Option<String>,

    /// City tier (tier-1, tier-2, tier-3, rural)
    #[arg(long)]
    pub city_tier: Option<String>,

    /// Existing loan exposure (none, home-loan, personal-loan, multiple, credit-card)
    #[arg(long)]
    pub existing_loans: Option<String>,

    /// Credit score band (excellent-750+ .. very-poor-below-600, unknown)
    #[arg(long)]
    pub credit_score_range: Option<String>,

    /// Property type (ready-to-move, under-construction, plot, renovation, refinance)
    #[arg(long)]
    pub property_type: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: EligibilityInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let flags = [
            ("age_group", args.age_group),
            ("income_range", args.income_range),
            ("employment_type", args.employment_type),
            ("city_tier", args.city_tier),
            ("existing_loans", args.existing_loans),
            ("credit_score_range", args.credit_score_range),
            ("property_type", args.property_type),
        ];
        let mut responses = BTreeMap::new();
        for (question, answer) in flags {
            if let Some(value) = answer {
                responses.insert(question.to_string(), value);
            }
        }
        EligibilityInput { responses }
    };
    let result = assess_eligibility(&input_data)?;
    Ok(serde_json::to_value(result)?)
}
