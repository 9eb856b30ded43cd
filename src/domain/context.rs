use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tier names are matched case-insensitively, so every `Display` form parses
/// back to the same tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CustomerTier {
    #[default]
    Basic,
    Premium,
    Vip,
}

impl FromStr for CustomerTier {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            "vip" => Ok(Self::Vip),
            _ => Err(PaymentError::UnknownCustomerTier(s.to_string())),
        }
    }
}

impl TryFrom<String> for CustomerTier {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("BASIC"),
            Self::Premium => f.write_str("PREMIUM"),
            Self::Vip => f.write_str("VIP"),
        }
    }
}

/// Per-call inputs to classification that are not part of the instrument.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingContext {
    pub customer_tier: CustomerTier,
    pub is_international: bool,
}

impl ProcessingContext {
    pub fn new(customer_tier: CustomerTier, is_international: bool) -> Self {
        Self {
            customer_tier,
            is_international,
        }
    }
}
