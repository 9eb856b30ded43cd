use crate::domain::context::{CustomerTier, ProcessingContext};
use crate::domain::instrument::{Amount, InstrumentKind, Payment, PaymentInstrument};
use crate::domain::ports::TransactionIdGenerator;
use crate::domain::result::{ClassificationResult, ClassificationStatus};
use crate::domain::trace::{Condition, DecisionTrace, mask_email, mask_tail};
use crate::infrastructure::random_id::RandomIdGenerator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

pub const HIGH_VALUE_CARD_THRESHOLD: Decimal = dec!(1000);
pub const LARGE_TRANSFER_THRESHOLD: Decimal = dec!(5000);

/// Values a rule may look at once the instrument type has matched.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput {
    pub amount: Amount,
    pub tier: CustomerTier,
    pub international: bool,
}

/// What a rule decides when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub status: ClassificationStatus,
    pub message: String,
    pub requires_additional_verification: bool,
}

impl Decision {
    fn new(status: ClassificationStatus, message: &str, verify: bool) -> Self {
        Self {
            status,
            message: message.to_string(),
            requires_additional_verification: verify,
        }
    }
}

/// A boolean guard attached to a rule, evaluated only after the type matched.
#[derive(Clone, Copy)]
pub struct Guard {
    pub expression: &'static str,
    conditions: fn(&RuleInput) -> Vec<Condition>,
}

impl Guard {
    pub fn evaluate(&self, input: &RuleInput) -> Vec<Condition> {
        (self.conditions)(input)
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    /// 1-based position in the overall rule table.
    pub index: usize,
    pub kind: InstrumentKind,
    pub guard: Option<Guard>,
    decide: fn(&RuleInput) -> Decision,
}

impl Rule {
    pub fn decide(&self, input: &RuleInput) -> Decision {
        (self.decide)(input)
    }
}

/// Guarded rules for one instrument kind, in precedence order, followed by an
/// unguarded fallback so that some rule always fires.
pub struct RuleChain {
    pub kind: InstrumentKind,
    pub guarded: &'static [Rule],
    pub fallback: Rule,
}

fn amount_over(input: &RuleInput, threshold: Decimal) -> Condition {
    Condition::new(
        format!("amount > {threshold}"),
        input.amount.value() > threshold,
        format!("{} > ${threshold}", input.amount),
    )
}

fn international(input: &RuleInput) -> Condition {
    Condition::new(
        "isInternational",
        input.international,
        format!("isInternational = {}", input.international),
    )
}

const CREDIT_CARD_RULES: &[Rule] = &[
    Rule {
        index: 1,
        kind: InstrumentKind::CreditCard,
        guard: Some(Guard {
            expression: "amount > 1000 && isInternational",
            conditions: |input| {
                vec![
                    amount_over(input, HIGH_VALUE_CARD_THRESHOLD),
                    international(input),
                ]
            },
        }),
        decide: |_| {
            Decision::new(
                ClassificationStatus::RequiresVerification,
                "High-value international credit card transaction requires verification",
                true,
            )
        },
    },
    // Status stays Success and the verification flag stays unset here, even
    // though the non-VIP message mentions enhanced verification.
    Rule {
        index: 2,
        kind: InstrumentKind::CreditCard,
        guard: Some(Guard {
            expression: "amount > 1000",
            conditions: |input| vec![amount_over(input, HIGH_VALUE_CARD_THRESHOLD)],
        }),
        decide: |input| {
            let message = if input.tier == CustomerTier::Vip {
                "VIP customer: high-value credit card approved with express processing"
            } else {
                "High-value credit card transaction approved with enhanced verification"
            };
            Decision::new(ClassificationStatus::Success, message, false)
        },
    },
];

const PAYPAL_RULES: &[Rule] = &[Rule {
    index: 4,
    kind: InstrumentKind::PayPal,
    guard: Some(Guard {
        expression: "isInternational",
        conditions: |input| vec![international(input)],
    }),
    decide: |_| {
        Decision::new(
            ClassificationStatus::Success,
            "International PayPal payment processed with currency conversion",
            false,
        )
    },
}];

const BANK_TRANSFER_RULES: &[Rule] = &[Rule {
    index: 6,
    kind: InstrumentKind::BankTransfer,
    guard: Some(Guard {
        expression: "amount > 5000",
        conditions: |input| vec![amount_over(input, LARGE_TRANSFER_THRESHOLD)],
    }),
    decide: |input| {
        let message = if input.international {
            "Large international bank transfer pending verification (5-7 business days)"
        } else {
            "Large bank transfer pending verification (3-5 business days)"
        };
        Decision::new(ClassificationStatus::Pending, message, true)
    },
}];

static RULE_TABLE: [RuleChain; 3] = [
    RuleChain {
        kind: InstrumentKind::CreditCard,
        guarded: CREDIT_CARD_RULES,
        fallback: Rule {
            index: 3,
            kind: InstrumentKind::CreditCard,
            guard: None,
            decide: |input| {
                let message = if input.international {
                    "International credit card payment processed successfully"
                } else {
                    "Credit card payment processed successfully"
                };
                Decision::new(ClassificationStatus::Success, message, false)
            },
        },
    },
    RuleChain {
        kind: InstrumentKind::PayPal,
        guarded: PAYPAL_RULES,
        fallback: Rule {
            index: 5,
            kind: InstrumentKind::PayPal,
            guard: None,
            decide: |_| {
                Decision::new(
                    ClassificationStatus::Success,
                    "PayPal payment processed successfully",
                    false,
                )
            },
        },
    },
    RuleChain {
        kind: InstrumentKind::BankTransfer,
        guarded: BANK_TRANSFER_RULES,
        fallback: Rule {
            index: 7,
            kind: InstrumentKind::BankTransfer,
            guard: None,
            decide: |input| {
                let message = if input.international {
                    "International bank transfer initiated (3-5 business days)"
                } else {
                    "Bank transfer initiated (1-2 business days)"
                };
                Decision::new(ClassificationStatus::Pending, message, false)
            },
        },
    },
];

/// Every rule in declared precedence order.
pub fn rules() -> impl Iterator<Item = &'static Rule> {
    RULE_TABLE
        .iter()
        .flat_map(|chain| chain.guarded.iter().chain(std::iter::once(&chain.fallback)))
}

fn chain_for(kind: InstrumentKind) -> &'static RuleChain {
    match kind {
        InstrumentKind::CreditCard => &RULE_TABLE[0],
        InstrumentKind::PayPal => &RULE_TABLE[1],
        InstrumentKind::BankTransfer => &RULE_TABLE[2],
    }
}

/// Picks the first rule whose guard holds, returning it with the conditions
/// that were evaluated for it (empty for the fallback).
pub fn select_rule(kind: InstrumentKind, input: &RuleInput) -> (&'static Rule, Vec<Condition>) {
    let chain = chain_for(kind);
    for rule in chain.guarded {
        if let Some(guard) = &rule.guard {
            let conditions = guard.evaluate(input);
            if conditions.iter().all(|c| c.passed) {
                return (rule, conditions);
            }
        }
    }
    (&chain.fallback, Vec::new())
}

fn destructure(instrument: &PaymentInstrument) -> String {
    match instrument {
        PaymentInstrument::CreditCard(cc) => format!(
            "cardType={}, cardNumber={}, expiry={}, amount={}, customerId={}",
            cc.card_type,
            mask_tail(&cc.card_number),
            cc.expiry,
            cc.amount,
            cc.customer_id
        ),
        PaymentInstrument::PayPal(pp) => format!(
            "email={}, accountId={}, amount={}, customerId={}",
            mask_email(&pp.email),
            pp.account_id,
            pp.amount,
            pp.customer_id
        ),
        PaymentInstrument::BankTransfer(bt) => format!(
            "bankName={}, routingNumber={}, accountNumber={}, amount={}, customerId={}",
            bt.bank_name,
            bt.routing_number,
            mask_tail(&bt.account_number),
            bt.amount,
            bt.customer_id
        ),
    }
}

/// Maps a payment instrument and its context to a processing decision.
///
/// The engine holds no mutable state: each call builds its own trace and
/// result, so a shared reference can be used from many tasks at once.
pub struct ClassificationEngine<G: TransactionIdGenerator = RandomIdGenerator> {
    id_generator: G,
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationEngine {
    pub fn new() -> Self {
        Self {
            id_generator: RandomIdGenerator,
        }
    }
}

impl<G: TransactionIdGenerator> ClassificationEngine<G> {
    pub fn with_id_generator(id_generator: G) -> Self {
        Self { id_generator }
    }

    pub fn classify(
        &self,
        instrument: &PaymentInstrument,
        tier: CustomerTier,
        is_international: bool,
    ) -> ClassificationResult {
        self.classify_in(instrument, &ProcessingContext::new(tier, is_international))
    }

    pub fn classify_in(
        &self,
        instrument: &PaymentInstrument,
        ctx: &ProcessingContext,
    ) -> ClassificationResult {
        let kind = instrument.kind();
        let input = RuleInput {
            amount: instrument.amount(),
            tier: ctx.customer_tier,
            international: ctx.is_international,
        };
        let (rule, conditions) = select_rule(kind, &input);

        let mut trace = DecisionTrace::new();
        trace.type_check(kind.label());
        trace.destructure(destructure(instrument));
        if let Some(guard) = &rule.guard {
            trace.guard(rule.index, guard.expression, conditions);
        }

        let decision = rule.decide(&input);
        debug!(
            rule = rule.index,
            kind = %kind,
            status = %decision.status,
            customer = instrument.customer_id(),
            "payment classified"
        );

        ClassificationResult {
            transaction_id: self.id_generator.next_id(),
            status: decision.status,
            processed_amount: input.amount.value(),
            instrument_kind: kind,
            customer_id: instrument.customer_id().to_string(),
            message: decision.message,
            requires_additional_verification: decision.requires_additional_verification,
            trace,
        }
    }
}
