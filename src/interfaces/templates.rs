//! Plain-text renderings of a classification result.
//!
//! These only read the result's plain fields; the engine knows nothing about
//! them.

use crate::domain::result::ClassificationResult;

/// Strips `'`, `;`, `"` and `--` from `value`.
///
/// This is an illustration of denylist filtering and is NOT an injection
/// defence: it misses comments, backslashes, encodings and everything else
/// a real query needs. Use bound parameters for anything that reaches a
/// database.
pub fn naive_sanitize(value: &str) -> String {
    value
        .replace("--", "")
        .chars()
        .filter(|c| !matches!(c, '\'' | ';' | '"'))
        .collect()
}

pub fn confirmation_email(result: &ClassificationResult) -> String {
    let verification = if result.requires_additional_verification {
        "Additional verification is required before this payment completes."
    } else {
        "No further action is required."
    };
    format!(
        "Subject: Payment {id} - {status}\n\
         \n\
         Dear customer {customer},\n\
         \n\
         We received your {kind} payment of ${amount}.\n\
         {message}.\n\
         {verification}\n\
         \n\
         Transaction reference: {id}",
        id = result.transaction_id,
        status = result.status,
        customer = result.customer_id,
        kind = result.instrument_kind,
        amount = result.processed_amount,
        message = result.message,
    )
}

pub fn sms_notification(result: &ClassificationResult) -> String {
    format!(
        "[{}] ${} {}: {}",
        result.transaction_id, result.processed_amount, result.status, result.message
    )
}

/// Renders an audit `INSERT` for display. Text values go through
/// [`naive_sanitize`].
pub fn audit_sql(result: &ClassificationResult) -> String {
    format!(
        "INSERT INTO payment_audit (transaction_id, customer_id, kind, amount, status, message) \
         VALUES ('{}', '{}', '{}', {}, '{}', '{}');",
        naive_sanitize(&result.transaction_id),
        naive_sanitize(&result.customer_id),
        result.instrument_kind,
        result.processed_amount,
        result.status,
        naive_sanitize(&result.message),
    )
}
