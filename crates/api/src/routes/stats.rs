//! Admin dashboard statistics handler.

use axum::{extract::State, Json};
use chrono::{NaiveTime, Utc};

use domain::models::stats::DashboardStats;
use persistence::repositories::DashboardRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/admin/stats
///
/// Aggregate counters for the dashboard header. "Today" is the current UTC
/// calendar day. Prayers since the last intercession fall back to the total
/// when no post has been published yet.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    let repo = DashboardRepository::new(state.pool.clone());

    let today_start = Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let prayers_total = repo.count_prayers().await?;
    let prayers_today = repo.count_prayers_since(today_start).await?;
    let intercessions_published = repo.count_published_intercessions().await?;
    let last_intercession_date = repo.last_published_intercession_date().await?;

    let prayers_since_last_intercession = match last_intercession_date {
        Some(date) => repo.count_prayers_since(date).await?,
        None => prayers_total,
    };

    let prayers_for_others_total = repo.count_prayers_for_others().await?;
    let prayers_for_others_today = repo.count_prayers_for_others_since(today_start).await?;
    let unique_prayers_for_others_count = repo.count_distinct_for_other_emails().await?;

    Ok(Json(DashboardStats {
        prayers_today,
        prayers_total,
        intercessions_published,
        prayers_since_last_intercession,
        last_intercession_date,
        prayers_for_others_total,
        prayers_for_others_today,
        unique_prayers_for_others_count,
    }))
}
