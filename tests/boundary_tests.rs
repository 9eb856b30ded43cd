use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_thresholds_are_exclusive() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "kind, customer_id, amount, tier, international").unwrap();
    writeln!(csv, "credit_card, C1, 1000, basic, true").unwrap();
    writeln!(csv, "bank_transfer, C2, 5000, basic, false").unwrap();

    let mut cmd = Command::new(cargo_bin!("paymatch"));
    cmd.arg(csv.path()).arg("--format").arg("sms");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "$1000 SUCCESS: International credit card payment processed successfully",
        ))
        .stdout(predicate::str::contains(
            "$5000 PENDING: Bank transfer initiated (1-2 business days)",
        ));
}

#[test]
fn test_extreme_decimal_precision() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "kind, customer_id, amount, tier, international").unwrap();
    writeln!(csv, "credit_card, C1, 1000.0001, basic, true").unwrap();
    writeln!(csv, "paypal, C2, 0.0001, basic, false").unwrap();

    let mut cmd = Command::new(cargo_bin!("paymatch"));
    cmd.arg(csv.path()).arg("--format").arg("sms");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("$1000.0001 REQUIRES_VERIFICATION"))
        .stdout(predicate::str::contains("$0.0001 SUCCESS"));
}
