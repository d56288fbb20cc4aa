//! Dashboard statistics domain models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate statistics for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardStats {
    pub prayers_today: i64,
    pub prayers_total: i64,
    pub intercessions_published: i64,
    pub prayers_since_last_intercession: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_intercession_date: Option<DateTime<Utc>>,
    pub prayers_for_others_total: i64,
    pub prayers_for_others_today: i64,
    pub unique_prayers_for_others_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialization_skips_missing_date() {
        let stats = DashboardStats {
            prayers_today: 2,
            prayers_total: 40,
            intercessions_published: 3,
            prayers_since_last_intercession: 5,
            last_intercession_date: None,
            prayers_for_others_total: 10,
            prayers_for_others_today: 1,
            unique_prayers_for_others_count: 7,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("last_intercession_date"));
        assert!(json.contains("\"prayers_total\":40"));
    }
}
