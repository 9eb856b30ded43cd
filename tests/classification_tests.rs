use paymatch::application::engine::{ClassificationEngine, RuleInput, rules, select_rule};
use paymatch::domain::context::CustomerTier;
use paymatch::domain::instrument::{Amount, InstrumentKind, PayPal, PaymentInstrument};
use paymatch::domain::result::ClassificationStatus;
use paymatch::domain::trace::Step;
use paymatch::error::PaymentError;
use paymatch::infrastructure::random_id::FixedIdGenerator;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod common;

/// Independent statement of the rule table as a chain of conditionals.
fn expected_rule(kind: InstrumentKind, amount: Decimal, international: bool) -> usize {
    match kind {
        InstrumentKind::CreditCard if amount > dec!(1000) && international => 1,
        InstrumentKind::CreditCard if amount > dec!(1000) => 2,
        InstrumentKind::CreditCard => 3,
        InstrumentKind::PayPal if international => 4,
        InstrumentKind::PayPal => 5,
        InstrumentKind::BankTransfer if amount > dec!(5000) => 6,
        InstrumentKind::BankTransfer => 7,
    }
}

fn expected_outcome(rule: usize) -> (ClassificationStatus, bool) {
    match rule {
        1 => (ClassificationStatus::RequiresVerification, true),
        2..=5 => (ClassificationStatus::Success, false),
        6 => (ClassificationStatus::Pending, true),
        _ => (ClassificationStatus::Pending, false),
    }
}

#[test]
fn test_construction_rejects_non_positive_amounts() {
    for amount in [dec!(0), dec!(-0.01), dec!(-1000)] {
        assert!(matches!(
            PayPal::new("a@b.com", "PP", amount, "C1"),
            Err(PaymentError::InvalidAmount(_))
        ));
    }
    assert!(matches!(
        Amount::try_from(None::<Decimal>),
        Err(PaymentError::InvalidAmount(_))
    ));
}

#[test]
fn test_first_matching_rule_always_fires() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2_000 {
        let kind = common::KINDS[rng.gen_range(0..3)];
        let tier = common::TIERS[rng.gen_range(0..3)];
        let international = rng.gen_bool(0.5);
        let amount = common::random_amount(&mut rng);

        let input = RuleInput {
            amount: Amount::new(amount).unwrap(),
            tier,
            international,
        };
        let (rule, _) = select_rule(kind, &input);
        let expected = expected_rule(kind, amount, international);
        assert_eq!(rule.index, expected, "{kind} {amount} intl={international}");

        let result = ClassificationEngine::new().classify(
            &common::instrument(kind, amount, "C1"),
            tier,
            international,
        );
        let (status, verify) = expected_outcome(expected);
        assert_eq!(result.status, status);
        assert_eq!(result.requires_additional_verification, verify);
    }
}

#[test]
fn test_guard_conditions_agree_with_passed_flag() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let kind = common::KINDS[rng.gen_range(0..3)];
        let amount = common::random_amount(&mut rng);
        let result = ClassificationEngine::new().classify(
            &common::instrument(kind, amount, "C1"),
            CustomerTier::Premium,
            rng.gen_bool(0.5),
        );
        for step in result.trace.guard_evaluations() {
            if let Step::GuardEvaluation {
                passed, conditions, ..
            } = step
            {
                assert!(!conditions.is_empty());
                assert_eq!(*passed, conditions.iter().all(|c| c.passed));
            }
        }
    }
}

#[test]
fn test_every_kind_has_a_fallback() {
    for kind in common::KINDS {
        let fallbacks = rules()
            .filter(|r| r.kind == kind && r.guard.is_none())
            .count();
        assert_eq!(fallbacks, 1, "{kind}");
        let last = rules().filter(|r| r.kind == kind).last().unwrap();
        assert!(last.guard.is_none(), "fallback for {kind} must come last");
    }
}

#[test]
fn test_classification_is_pure_modulo_transaction_id() {
    let engine = ClassificationEngine::new();
    let instrument = common::instrument(InstrumentKind::CreditCard, dec!(1500), "C1");
    let first = engine.classify(&instrument, CustomerTier::Vip, false);
    let second = engine.classify(&instrument, CustomerTier::Vip, false);

    assert_eq!(first.status, second.status);
    assert_eq!(first.message, second.message);
    assert_eq!(
        first.requires_additional_verification,
        second.requires_additional_verification
    );
    assert_eq!(first.trace, second.trace);
}

#[test]
fn test_scenarios() {
    let engine = ClassificationEngine::with_id_generator(FixedIdGenerator::new("SCENARIO"));

    let card = common::instrument(InstrumentKind::CreditCard, dec!(1500), "C1");
    let r = engine.classify(&card, CustomerTier::Basic, true);
    assert_eq!(r.status, ClassificationStatus::RequiresVerification);
    assert!(r.requires_additional_verification);

    let r = engine.classify(&card, CustomerTier::Vip, false);
    assert_eq!(r.status, ClassificationStatus::Success);
    assert!(r.message.contains("VIP") && r.message.contains("express"));
    assert!(!r.requires_additional_verification);

    let transfer = common::instrument(InstrumentKind::BankTransfer, dec!(6000), "C2");
    let r = engine.classify(&transfer, CustomerTier::Basic, false);
    assert_eq!(r.status, ClassificationStatus::Pending);
    assert!(r.requires_additional_verification);
    assert!(r.message.contains("3-5 business days"));

    let paypal: PaymentInstrument = PayPal::new("x@y.io", "PP", dec!(50), "C3").unwrap().into();
    let r = engine.classify(&paypal, CustomerTier::Basic, true);
    assert_eq!(r.status, ClassificationStatus::Success);
    assert!(r.message.contains("currency conversion"));
}
