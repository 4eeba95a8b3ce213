//! Node.js bindings for the housing-finance engines.
//!
//! JSON strings in, JSON strings out: the serving layer posts the request
//! body straight through and persists the response body, so no conversion
//! layer is needed on either side. Core validation errors surface as JS
//! exceptions carrying the typed error's message.

use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// EMI
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: housing_finance_core::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = housing_finance_core::emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[napi]
pub fn assess_eligibility(input_json: String) -> NapiResult<String> {
    let input: housing_finance_core::eligibility::EligibilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        housing_finance_core::eligibility::assess_eligibility(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
