//! Dashboard loader.

use crate::model::{Activity, Metric};
use crate::storage::RecordRepository;

use super::filter::sort_newest_first;

/// Activities shown in the recent-activity panel.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

pub const DASHBOARD_LOAD_ERROR: &str = "Failed to load dashboard data";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub metrics: Vec<Metric>,
    pub recent_activities: Vec<Activity>,
    pub error: Option<String>,
}

impl Dashboard {
    /// Load metrics and activities concurrently. If either fails, the
    /// dashboard carries only the error message.
    pub async fn load(
        metrics: &dyn RecordRepository<Metric>,
        activities: &dyn RecordRepository<Activity>,
    ) -> Self {
        let (metrics, activities) = tokio::join!(metrics.get_all(), activities.get_all());
        match (metrics, activities) {
            (Ok(metrics), Ok(mut activities)) => {
                sort_newest_first(&mut activities);
                activities.truncate(RECENT_ACTIVITY_LIMIT);
                Dashboard {
                    metrics,
                    recent_activities: activities,
                    error: None,
                }
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!(error = %err, "Error loading dashboard data");
                Dashboard {
                    error: Some(DASHBOARD_LOAD_ERROR.to_string()),
                    ..Default::default()
                }
            }
        }
    }
}
