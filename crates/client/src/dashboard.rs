use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::{DailyVisits, DashboardStats, GeoStat};
use crate::resources::{DashboardApi, VisitApi};

/// Everything the dashboard shows, fetched concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    /// Last seven days, oldest first.
    pub trend: Vec<DailyVisits>,
    pub geo: Vec<GeoStat>,
}

impl DashboardView {
    pub async fn load(gateway: &Gateway) -> ClientResult<Self> {
        let (stats, trend, geo) = tokio::try_join!(
            DashboardApi::stats(gateway),
            VisitApi::trend(gateway),
            VisitApi::geo_stats(gateway),
        )?;
        Ok(Self { stats, trend, geo })
    }

    pub fn visits_this_week(&self) -> i64 {
        self.trend.iter().map(|d| d.count).sum()
    }

    /// The location with the most visits.
    pub fn top_location(&self) -> Option<&GeoStat> {
        self.geo.iter().max_by_key(|g| g.value)
    }
}
