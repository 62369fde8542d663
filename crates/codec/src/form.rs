// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form state for rule and maintenance editors
//!
//! Forms own the input-boundary invariants the codec leaves to its callers:
//! percentage thresholds are clamped to 0..=100 whenever a value or metric
//! changes, and schedule/duration fields are only built through validated
//! constructors.

use crate::{
    decode_condition, decode_duration, decode_schedule, encode_condition, encode_duration,
    encode_schedule, render_condition,
};
use noc_core::{
    unit_for, Condition, ConditionValue, Duration, MaintenanceWindow, Operator, Schedule,
    ThresholdRule,
};
use serde::Serialize;

/// Clamp a threshold value to its metric's accepted range
pub fn clamp_value(metric: &str, value: i64) -> i64 {
    match unit_for(metric).bounds() {
        Some((lo, hi)) => value.clamp(lo, hi),
        None => value,
    }
}

/// Editable numeric threshold condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionForm {
    metric: String,
    operator: Operator,
    value: i64,
}

impl Default for ConditionForm {
    fn default() -> Self {
        Self {
            metric: "CPU".to_string(),
            operator: Operator::Gt,
            value: 80,
        }
    }
}

impl ConditionForm {
    pub fn new(metric: impl Into<String>, operator: Operator, value: i64) -> Self {
        let metric = metric.into();
        let value = clamp_value(&metric, value);
        Self {
            metric,
            operator,
            value,
        }
    }

    /// Load from persisted text
    ///
    /// Only numeric conditions fit this form; text comparisons and
    /// unparseable input start from the default form.
    pub fn from_text(text: &str) -> Self {
        match decode_condition(text) {
            Condition {
                metric,
                operator: Some(operator),
                value: ConditionValue::Number(value),
            } => Self::new(metric, operator, value),
            _ => Self::default(),
        }
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Switching metric re-clamps the current value to the new unit
    pub fn set_metric(&mut self, metric: impl Into<String>) {
        self.metric = metric.into();
        self.value = clamp_value(&self.metric, self.value);
    }

    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = clamp_value(&self.metric, value);
    }

    pub fn encode(&self) -> String {
        encode_condition(&self.metric, self.operator, self.value)
    }

    pub fn to_condition(&self) -> Condition {
        Condition::numeric(self.metric.clone(), self.operator, self.value)
    }
}

/// Threshold rule editor
///
/// Holds the decoded condition as-is so that text comparisons and
/// pass-through conditions survive an edit of other fields unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleForm {
    pub condition: Condition,
    pub duration: Duration,
}

impl RuleForm {
    pub fn from_rule(rule: &ThresholdRule) -> Self {
        Self {
            condition: decode_condition(&rule.condition),
            duration: decode_duration(&rule.duration),
        }
    }

    /// Replace the condition with a numeric threshold from a condition form
    pub fn set_threshold(&mut self, form: &ConditionForm) {
        self.condition = form.to_condition();
    }

    pub fn apply_to(&self, rule: &mut ThresholdRule) {
        rule.condition = render_condition(&self.condition);
        rule.duration = encode_duration(self.duration.value, self.duration.unit);
    }
}

/// Maintenance window editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceForm {
    pub schedule: Schedule,
    pub duration: Duration,
}

impl MaintenanceForm {
    pub fn from_window(window: &MaintenanceWindow) -> Self {
        Self {
            schedule: decode_schedule(&window.schedule),
            duration: decode_duration(&window.duration),
        }
    }

    pub fn apply_to(&self, window: &mut MaintenanceWindow) {
        window.schedule =
            encode_schedule(self.schedule.day, self.schedule.hour, self.schedule.minute);
        window.duration = encode_duration(self.duration.value, self.duration.unit);
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
