use serde_json::Value;

use super::fields::{metric as f, system};
use super::read::{self, float_value};
use super::{put, BackendRecord, RecordMapper};
use crate::model::{Metric, MetricInput, Trend};
use crate::remote::DeletePolicy;

pub struct MetricMapper;

impl RecordMapper for MetricMapper {
    type Record = Metric;

    const TABLE: &'static str = f::TABLE_NAME;
    const FIELDS: &'static [&'static str] = f::FIELDS;
    const ORDER_BY: &'static str = system::CREATED_ON;
    const DELETE_POLICY: DeletePolicy = DeletePolicy::AllOrNothing;

    fn to_backend(m: &Metric) -> BackendRecord {
        let mut row = BackendRecord::new();
        put(&mut row, system::ID, m.id);
        row.insert(system::NAME.into(), Value::from(m.label.clone()));
        row.insert(f::LABEL.into(), Value::from(m.label.clone()));
        row.insert(f::VALUE.into(), float_value(m.value));
        row.insert(f::CHANGE.into(), float_value(m.change));
        row.insert(f::TREND.into(), Value::from(m.trend.as_str()));
        row
    }

    fn input_to_backend(input: &MetricInput) -> BackendRecord {
        let mut row = BackendRecord::new();
        put(&mut row, system::NAME, input.label.clone());
        put(&mut row, f::LABEL, input.label.clone());
        put(&mut row, f::VALUE, input.value.as_ref().map(|v| float_value(v.resolve(0.0))));
        put(&mut row, f::CHANGE, input.change.as_ref().map(|c| float_value(c.resolve(0.0))));
        put(&mut row, f::TREND, input.trend.map(|t| t.as_str()));
        row
    }

    fn from_backend(row: &BackendRecord) -> Metric {
        Metric {
            id: read::id(row, system::ID),
            label: read::first_text(row, &[f::LABEL, system::NAME]),
            value: read::number(row, f::VALUE, 0.0),
            change: read::number(row, f::CHANGE, 0.0),
            trend: Trend::from_backend_str(&read::text(row, f::TREND)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_ui_fields() {
        let metric = Metric {
            id: Some(4),
            label: "Total MRR".into(),
            value: 48250.0,
            change: -3.5,
            trend: Trend::Down,
        };
        let row = MetricMapper::to_backend(&metric);
        assert_eq!(row["Name"], "Total MRR");
        assert_eq!(MetricMapper::from_backend(&row), metric);
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let mut row = BackendRecord::new();
        row.insert("Name".into(), json!("Churn Rate"));
        row.insert("value_c".into(), json!(0));
        let metric = MetricMapper::from_backend(&row);
        assert_eq!(metric.label, "Churn Rate");
        assert_eq!(metric.value, 0.0);
        assert_eq!(metric.trend, Trend::Flat);
        assert_eq!(metric.id, None);
    }
}
