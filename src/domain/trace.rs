//! Decision trace recorded alongside every classification.
//!
//! The trace is explanatory only: the engine never reads it back to make a
//! decision. Ordinals start at 1 and follow the order steps were recorded.

use serde::Serialize;

/// Outcome of one boolean condition inside a guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub name: String,
    pub passed: bool,
    pub rendered_comparison: String,
}

impl Condition {
    pub fn new(
        name: impl Into<String>,
        passed: bool,
        rendered_comparison: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passed,
            rendered_comparison: rendered_comparison.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Step {
    TypeCheck {
        ordinal: usize,
        matched_variant_name: String,
    },
    Destructure {
        ordinal: usize,
        extracted_field_summary: String,
    },
    GuardEvaluation {
        ordinal: usize,
        rule_index: usize,
        guard_expression_text: String,
        passed: bool,
        conditions: Vec<Condition>,
    },
}

impl Step {
    pub fn ordinal(&self) -> usize {
        match self {
            Step::TypeCheck { ordinal, .. }
            | Step::Destructure { ordinal, .. }
            | Step::GuardEvaluation { ordinal, .. } => *ordinal,
        }
    }
}

/// Ordered, append-only log of decision steps.
///
/// Only the engine appends; callers get read access through `steps()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecisionTrace {
    steps: Vec<Step>,
}

impl DecisionTrace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn next_ordinal(&self) -> usize {
        self.steps.len() + 1
    }

    pub(crate) fn type_check(&mut self, matched_variant_name: &str) {
        let ordinal = self.next_ordinal();
        self.steps.push(Step::TypeCheck {
            ordinal,
            matched_variant_name: matched_variant_name.to_string(),
        });
    }

    pub(crate) fn destructure(&mut self, extracted_field_summary: String) {
        let ordinal = self.next_ordinal();
        self.steps.push(Step::Destructure {
            ordinal,
            extracted_field_summary,
        });
    }

    /// Records a guard evaluation. `passed` is the conjunction of `conditions`.
    pub(crate) fn guard(
        &mut self,
        rule_index: usize,
        guard_expression_text: &str,
        conditions: Vec<Condition>,
    ) -> bool {
        let ordinal = self.next_ordinal();
        let passed = conditions.iter().all(|c| c.passed);
        self.steps.push(Step::GuardEvaluation {
            ordinal,
            rule_index,
            guard_expression_text: guard_expression_text.to_string(),
            passed,
            conditions,
        });
        passed
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn guard_evaluations(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::GuardEvaluation { .. }))
    }
}

/// Masks an email to `***@domain`, or `***@***.com` if there is no `@`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((_, domain)) => format!("***@{domain}"),
        None => "***@***.com".to_string(),
    }
}

/// Keeps the last four characters of an account-like number. Numbers of four
/// characters or fewer are masked entirely.
pub fn mask_tail(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
