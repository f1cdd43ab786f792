//! JSON output formatting.

use serde::Serialize;
use serde_json::{json, Value};

use crm_core::model::Metric;
use crm_core::views::display::format_metric_value;
use crm_core::views::Dashboard;

/// Serialize any record (or list of records) in its UI shape.
pub fn record_json<T: Serialize + ?Sized>(record: &T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Metrics carry their position, which is what `IndexedStore` keys on.
pub fn metrics_json(metrics: &[Metric]) -> Vec<Value> {
    metrics
        .iter()
        .enumerate()
        .map(|(index, m)| {
            json!({
                "index": index,
                "label": m.label,
                "value": m.value,
                "display": format_metric_value(m),
                "change": m.change,
                "trend": m.trend,
            })
        })
        .collect()
}

pub fn dashboard_json(dashboard: &Dashboard) -> anyhow::Result<Value> {
    Ok(json!({
        "metrics": metrics_json(&dashboard.metrics),
        "recentActivities": record_json(&dashboard.recent_activities)?,
    }))
}

/// Receipt for a deletion.
pub fn deleted_json(kind: &str, id: i64) -> Value {
    json!({
        "deleted": true,
        "kind": kind.to_lowercase(),
        "id": id,
    })
}
