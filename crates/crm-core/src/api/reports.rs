//! Read-only reporting endpoints

use super::client::ApiClient;
use super::query::ActivityLogQuery;
use crate::error::ApiResult;
use crate::models::{ActivityLogList, UserPerformance};

impl ApiClient {
    /// `GET /users/performance`
    pub async fn performance(&self) -> ApiResult<Vec<UserPerformance>> {
        self.get_data("/users/performance").await
    }

    /// `GET /activitylogs?limit=&actionType=`
    pub async fn activity_logs(&self, query: &ActivityLogQuery) -> ApiResult<ActivityLogList> {
        self.get_data(&format!("/activitylogs{}", query.to_params().to_query_string()))
            .await
    }
}
