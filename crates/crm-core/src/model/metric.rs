//! Dashboard metrics.
//!
//! The mock variant addresses metrics by position; records read from the
//! backend carry an `Id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::overlay;
use super::enums::Trend;
use super::numeric::NumberInput;
use crate::storage::{Entity, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub label: String,
    pub value: f64,
    /// Percentage delta against the previous period
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub trend: Trend,
}

impl Metric {
    /// Whether the value is a currency amount.
    pub fn is_currency(&self) -> bool {
        self.label.contains("MRR") || self.label.contains("Value")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl Entity for Metric {
    type Input = MetricInput;
    const KIND: &'static str = "Metric";

    fn build(input: &MetricInput, _now: DateTime<Utc>) -> Self {
        let mut metric = Metric {
            id: None,
            label: String::new(),
            value: 0.0,
            change: 0.0,
            trend: Trend::Flat,
        };
        metric.apply(input);
        metric
    }

    fn apply(&mut self, input: &MetricInput) {
        overlay(&mut self.label, &input.label);
        if let Some(ref value) = input.value {
            self.value = value.resolve(0.0);
        }
        if let Some(ref change) = input.change {
            self.change = change.resolve(0.0);
        }
        if let Some(trend) = input.trend {
            self.trend = trend;
        }
    }
}
