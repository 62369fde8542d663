// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold conditions: metric, comparison operator, and value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operator: {0:?} (expected one of >, <, >=, <=, ==, !=)")]
pub struct ParseOperatorError(pub String);

/// Comparison operator of a threshold condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
}

impl Operator {
    /// All operators, two-character tokens first so that matching a prefix
    /// never shadows a longer token.
    pub const ALL: [Operator; 6] = [
        Operator::Ge,
        Operator::Le,
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| op.token() == token)
            .ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}

/// Right-hand side of a condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(i64),
    Text(String),
    Empty,
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Number(n) => write!(f, "{}", n),
            ConditionValue::Text(s) => f.write_str(s),
            ConditionValue::Empty => Ok(()),
        }
    }
}

/// A structured threshold comparison
///
/// A condition without an operator is the pass-through shape produced when
/// persisted text doesn't follow the condition grammar: the whole text is
/// kept as the metric so it still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub metric: String,
    pub operator: Option<Operator>,
    pub value: ConditionValue,
}

impl Condition {
    pub fn numeric(metric: impl Into<String>, operator: Operator, value: i64) -> Self {
        Self {
            metric: metric.into(),
            operator: Some(operator),
            value: ConditionValue::Number(value),
        }
    }

    pub fn text(metric: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            operator: Some(operator),
            value: ConditionValue::Text(value.into()),
        }
    }

    pub fn pass_through(text: impl Into<String>) -> Self {
        Self {
            metric: text.into(),
            operator: None,
            value: ConditionValue::Empty,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        self.operator.is_none()
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
