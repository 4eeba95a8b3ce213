pub mod error;
pub mod rounding;
pub mod types;

#[cfg(feature = "emi")]
pub mod emi;

#[cfg(feature = "eligibility")]
pub mod eligibility;

pub use error::HousingFinanceError;
pub use types::*;

/// Standard result type for all housing-finance operations
pub type HousingFinanceResult<T> = Result<T, HousingFinanceError>;
