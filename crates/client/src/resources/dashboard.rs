use crate::error::ClientResult;
use crate::gateway::Gateway;
use crate::models::DashboardStats;

pub struct DashboardApi;

impl DashboardApi {
    pub async fn stats(gateway: &Gateway) -> ClientResult<DashboardStats> {
        gateway.get("/dashboard/stats").await
    }
}
