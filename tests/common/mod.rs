#![allow(dead_code)]

use paymatch::domain::context::CustomerTier;
use paymatch::domain::instrument::{BankTransfer, CreditCard, InstrumentKind, PayPal, PaymentInstrument};
use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const KINDS: [InstrumentKind; 3] = [
    InstrumentKind::CreditCard,
    InstrumentKind::PayPal,
    InstrumentKind::BankTransfer,
];

pub const TIERS: [CustomerTier; 3] = [CustomerTier::Basic, CustomerTier::Premium, CustomerTier::Vip];

pub fn instrument(kind: InstrumentKind, amount: Decimal, customer: &str) -> PaymentInstrument {
    match kind {
        InstrumentKind::CreditCard => {
            CreditCard::new("4111111111111234", "VISA", "123", "12/30", amount, customer)
                .unwrap()
                .into()
        }
        InstrumentKind::PayPal => PayPal::new("buyer@example.com", "PP-1", amount, customer)
            .unwrap()
            .into(),
        InstrumentKind::BankTransfer => {
            BankTransfer::new("021000021", "000123456789", "First Bank", amount, customer)
                .unwrap()
                .into()
        }
    }
}

/// Amounts clustered around the 1000 and 5000 thresholds, in whole cents.
pub fn random_amount<R: Rng>(rng: &mut R) -> Decimal {
    let cents: i64 = match rng.gen_range(0..3) {
        0 => rng.gen_range(1..200_000),
        1 => rng.gen_range(99_000..101_000),
        _ => rng.gen_range(499_000..501_000),
    };
    Decimal::new(cents, 2)
}

pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["kind", "customer_id", "amount", "tier", "international"])?;

    for i in 1..=rows {
        let kind = ["credit_card", "paypal", "bank_transfer"][rng.gen_range(0..3)];
        let tier = ["basic", "premium", "vip"][rng.gen_range(0..3)];
        let international = if rng.gen_bool(0.5) { "true" } else { "false" };
        wtr.write_record([
            kind,
            &format!("C{i}"),
            &random_amount(&mut rng).to_string(),
            tier,
            international,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
