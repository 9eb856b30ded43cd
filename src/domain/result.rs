use super::instrument::InstrumentKind;
use super::trace::DecisionTrace;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassificationStatus {
    Success,
    Pending,
    RequiresVerification,
}

impl fmt::Display for ClassificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("SUCCESS"),
            Self::Pending => f.write_str("PENDING"),
            Self::RequiresVerification => f.write_str("REQUIRES_VERIFICATION"),
        }
    }
}

/// Outcome of classifying one payment instrument.
///
/// Created once per call and owned by the caller afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub transaction_id: String,
    pub status: ClassificationStatus,
    pub processed_amount: Decimal,
    pub instrument_kind: InstrumentKind,
    pub customer_id: String,
    pub message: String,
    pub requires_additional_verification: bool,
    pub trace: DecisionTrace,
}
