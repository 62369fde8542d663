// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Condition strings: `<metric> <op> <number><unit>` or `<metric> <op> <text>`

use noc_core::{unit_for, Condition, ConditionValue, Operator};
use regex::Regex;
use std::sync::LazyLock;

// Two-character operators precede their one-character prefixes in the
// alternation so `>=` is never read as `>` followed by `=`.
#[allow(clippy::expect_used)]
static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*(>=|<=|==|!=|>|<)\s*(-?\d+)(.*)$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static GENERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*(>=|<=|==|!=|>|<)\s*(.+)$").expect("constant regex pattern is valid")
});

/// Decode a persisted condition
///
/// Tries a numeric comparison first (trailing unit text is ignored), then a
/// comparison against arbitrary text such as `BGP State != Established`.
/// Anything else becomes a pass-through condition holding the whole input.
pub fn decode_condition(text: &str) -> Condition {
    if let Some(caps) = NUMERIC_PATTERN.captures(text) {
        if let (Ok(operator), Ok(value)) = (caps[2].parse::<Operator>(), caps[3].parse::<i64>()) {
            return Condition::numeric(caps[1].trim(), operator, value);
        }
    }

    if let Some(caps) = GENERIC_PATTERN.captures(text) {
        let rhs = caps[3].trim();
        if let Ok(operator) = caps[2].parse::<Operator>() {
            if !rhs.is_empty() {
                return Condition::text(caps[1].trim(), operator, rhs);
            }
        }
    }

    tracing::debug!(text, "condition does not match grammar, passing through");
    Condition::pass_through(text)
}

/// Encode a numeric condition, appending the metric's catalog unit
///
/// Unknown metrics get no unit. Values are written as given; range clamping
/// belongs to the form layer.
pub fn encode_condition(metric: &str, operator: Operator, value: i64) -> String {
    format!("{} {} {}{}", metric, operator, value, unit_for(metric).suffix())
}

/// Re-encode any decoded condition
///
/// Text comparisons are written without a unit, and a pass-through condition
/// is written back exactly as it was read.
pub fn render_condition(condition: &Condition) -> String {
    match (condition.operator, &condition.value) {
        (Some(op), ConditionValue::Number(n)) => encode_condition(&condition.metric, op, *n),
        (Some(op), ConditionValue::Text(text)) => format!("{} {} {}", condition.metric, op, text),
        _ => condition.metric.clone(),
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
