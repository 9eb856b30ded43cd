use super::context::{CustomerTier, ProcessingContext};
use super::instrument::{
    Amount, BankTransfer, CreditCard, InstrumentKind, PayPal, PaymentInstrument,
};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A loosely-typed payment request, as decoded from CSV or JSON.
///
/// `kind` selects the instrument variant; fields that do not belong to the
/// selected variant are ignored.
#[derive(Debug, Default, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct PaymentRequest {
    pub kind: String,
    pub customer_id: Option<String>,
    pub amount: Option<Decimal>,
    pub card_number: Option<String>,
    pub card_type: Option<String>,
    pub cvv: Option<String>,
    pub expiry: Option<String>,
    pub email: Option<String>,
    pub account_id: Option<String>,
    pub routing_number: Option<String>,
    pub account_number: Option<String>,
    pub bank_name: Option<String>,
    pub tier: Option<CustomerTier>,
    pub international: Option<bool>,
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

impl PaymentRequest {
    /// Builds the instrument variant named by `kind`.
    ///
    /// Fails with `UnknownInstrumentKind` before looking at the amount, and
    /// with `InvalidAmount` when the amount is missing or not positive.
    pub fn to_instrument(&self) -> Result<PaymentInstrument> {
        let kind = InstrumentKind::parse(&self.kind)?;
        let amount: Decimal = Amount::try_from(self.amount)?.into();
        let customer_id = text(&self.customer_id);

        let instrument = match kind {
            InstrumentKind::CreditCard => CreditCard::new(
                text(&self.card_number),
                text(&self.card_type),
                text(&self.cvv),
                text(&self.expiry),
                amount,
                customer_id,
            )?
            .into(),
            InstrumentKind::PayPal => PayPal::new(
                text(&self.email),
                text(&self.account_id),
                amount,
                customer_id,
            )?
            .into(),
            InstrumentKind::BankTransfer => BankTransfer::new(
                text(&self.routing_number),
                text(&self.account_number),
                text(&self.bank_name),
                amount,
                customer_id,
            )?
            .into(),
        };
        Ok(instrument)
    }

    pub fn context(&self) -> ProcessingContext {
        ProcessingContext::new(
            self.tier.unwrap_or_default(),
            self.international.unwrap_or(false),
        )
    }
}
