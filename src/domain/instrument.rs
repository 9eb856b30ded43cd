use super::trace::mask_tail;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a strictly positive monetary amount.
///
/// This is a wrapper around `rust_decimal::Decimal` so that every payment
/// instrument carries an amount that has already been validated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::InvalidAmount(format!(
                "amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Option<Decimal>> for Amount {
    type Error = PaymentError;

    fn try_from(value: Option<Decimal>) -> Result<Self> {
        match value {
            Some(value) => Self::new(value),
            None => Err(PaymentError::InvalidAmount(
                "amount is required".to_string(),
            )),
        }
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Read-only contract shared by every payment instrument.
pub trait Payment {
    fn amount(&self) -> Amount;
    fn customer_id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentKind {
    CreditCard,
    PayPal,
    BankTransfer,
}

impl InstrumentKind {
    /// Parses the selector string carried by a generic payment request.
    pub fn parse(selector: &str) -> Result<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "creditcard" | "credit-card" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::PayPal),
            "bank_transfer" | "banktransfer" | "bank-transfer" => Ok(Self::BankTransfer),
            _ => Err(PaymentError::UnknownInstrumentKind(selector.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "CreditCard",
            Self::PayPal => "PayPal",
            Self::BankTransfer => "BankTransfer",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card details as submitted. Not serializable, and `Debug` masks the card
/// number and hides the CVV.
#[derive(Clone, PartialEq)]
pub struct CreditCard {
    pub card_number: String,
    pub card_type: String,
    pub cvv: String,
    pub expiry: String,
    pub amount: Amount,
    pub customer_id: String,
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("card_number", &mask_tail(&self.card_number))
            .field("card_type", &self.card_type)
            .field("cvv", &"***")
            .field("expiry", &self.expiry)
            .field("amount", &self.amount)
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

impl CreditCard {
    pub fn new(
        card_number: impl Into<String>,
        card_type: impl Into<String>,
        cvv: impl Into<String>,
        expiry: impl Into<String>,
        amount: Decimal,
        customer_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            card_number: card_number.into(),
            card_type: card_type.into(),
            cvv: cvv.into(),
            expiry: expiry.into(),
            amount: Amount::new(amount)?,
            customer_id: customer_id.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayPal {
    pub email: String,
    pub account_id: String,
    pub amount: Amount,
    pub customer_id: String,
}

impl PayPal {
    pub fn new(
        email: impl Into<String>,
        account_id: impl Into<String>,
        amount: Decimal,
        customer_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            email: email.into(),
            account_id: account_id.into(),
            amount: Amount::new(amount)?,
            customer_id: customer_id.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankTransfer {
    pub routing_number: String,
    pub account_number: String,
    pub bank_name: String,
    pub amount: Amount,
    pub customer_id: String,
}

impl BankTransfer {
    pub fn new(
        routing_number: impl Into<String>,
        account_number: impl Into<String>,
        bank_name: impl Into<String>,
        amount: Decimal,
        customer_id: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            routing_number: routing_number.into(),
            account_number: account_number.into(),
            bank_name: bank_name.into(),
            amount: Amount::new(amount)?,
            customer_id: customer_id.into(),
        })
    }
}

/// A payment instrument submitted for classification.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentInstrument {
    CreditCard(CreditCard),
    PayPal(PayPal),
    BankTransfer(BankTransfer),
}

impl PaymentInstrument {
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::CreditCard(_) => InstrumentKind::CreditCard,
            Self::PayPal(_) => InstrumentKind::PayPal,
            Self::BankTransfer(_) => InstrumentKind::BankTransfer,
        }
    }
}

macro_rules! impl_payment {
    ($($ty:ty),+) => {
        $(impl Payment for $ty {
            fn amount(&self) -> Amount {
                self.amount
            }

            fn customer_id(&self) -> &str {
                &self.customer_id
            }
        })+
    };
}

impl_payment!(CreditCard, PayPal, BankTransfer);

impl Payment for PaymentInstrument {
    fn amount(&self) -> Amount {
        match self {
            Self::CreditCard(cc) => cc.amount(),
            Self::PayPal(pp) => pp.amount(),
            Self::BankTransfer(bt) => bt.amount(),
        }
    }

    fn customer_id(&self) -> &str {
        match self {
            Self::CreditCard(cc) => cc.customer_id(),
            Self::PayPal(pp) => pp.customer_id(),
            Self::BankTransfer(bt) => bt.customer_id(),
        }
    }
}

impl From<CreditCard> for PaymentInstrument {
    fn from(card: CreditCard) -> Self {
        Self::CreditCard(card)
    }
}

impl From<PayPal> for PaymentInstrument {
    fn from(paypal: PayPal) -> Self {
        Self::PayPal(paypal)
    }
}

impl From<BankTransfer> for PaymentInstrument {
    fn from(transfer: BankTransfer) -> Self {
        Self::BankTransfer(transfer)
    }
}
