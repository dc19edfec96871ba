use tc_core::paging::Page;

use super::PageQuery;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::{DailyVisits, GeoStat, VisitLog};

pub struct VisitApi;

impl VisitApi {
    pub async fn list(gateway: &Gateway, query: &PageQuery) -> ClientResult<Page<VisitLog>> {
        gateway.get_with("/visit-logs", query).await
    }

    pub async fn geo_stats(gateway: &Gateway) -> ClientResult<Vec<GeoStat>> {
        gateway.get("/visit-logs/stats/geo").await
    }

    /// Visits per day over the last week, oldest first.
    pub async fn trend(gateway: &Gateway) -> ClientResult<Vec<DailyVisits>> {
        gateway.get("/visit-logs/stats/trend").await
    }
}
