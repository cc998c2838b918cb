//! Dashboard Counters

use tracing::warn;

use crate::api::{
    ActivityLogQuery, ApiClient, LeadQuery, Listing, QueryParams, RecordApi, RestResource,
};
use crate::error::ApiResult;
use crate::models::{ActivityLogList, Customer, Lead, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_customers: u32,
    pub total_leads: u32,
    pub active_users: u32,
    pub recent_activities: u32,
    pub stale_leads: u32,
}

impl DashboardStats {
    /// Issue the five reads concurrently; any failure fails the whole card set
    pub async fn load(client: &ApiClient) -> ApiResult<Self> {
        let customers = RestResource::<Customer>::customers(client);
        let leads = RestResource::<Lead>::leads(client);
        let users = RestResource::<User>::users(client);

        let lead_count = LeadQuery::new(1, 1).to_params();
        let mut stale = LeadQuery::new(1, 1);
        stale.is_stale = "true".to_string();
        let stale = stale.to_params();
        let logs = ActivityLogQuery { limit: 1, action_type: String::new() };
        let all = QueryParams::new();

        let result = futures::try_join!(
            customers.list(&all),
            leads.list(&lead_count),
            users.list(&all),
            client.activity_logs(&logs),
            leads.list(&stale),
        );
        let (customers, leads, users, logs, stale) = match result {
            Ok(all) => all,
            Err(err) => {
                warn!(error = %err, "dashboard stats unavailable");
                return Err(err);
            }
        };

        Ok(Self::from_reads(&customers, &leads, &users, &logs, &stale))
    }

    pub fn from_reads(
        customers: &Listing<Customer>,
        leads: &Listing<Lead>,
        users: &Listing<User>,
        logs: &ActivityLogList,
        stale: &Listing<Lead>,
    ) -> Self {
        Self {
            total_customers: customers.items.len() as u32,
            total_leads: leads.total_count,
            active_users: users.items.iter().filter(|u| u.is_active).count() as u32,
            recent_activities: logs.total_count(),
            stale_leads: stale.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn counted<R>(total_count: u32) -> Listing<R> {
        Listing { items: Vec::new(), total_count, total_pages: 1 }
    }

    #[test]
    fn test_from_reads_maps_each_card() {
        let customers: Listing<Customer> = Listing::unpaged(
            serde_json::from_value(json!([
                { "id": 1, "firstName": "Ali", "lastName": "Kaya" },
                { "id": 2, "firstName": "Ayşe", "lastName": "Demir" },
            ]))
            .unwrap(),
        );
        let users: Listing<User> = Listing::unpaged(
            serde_json::from_value(json!([
                { "id": 1, "firstName": "Can", "lastName": "Öz" },
                { "id": 2, "firstName": "Ece", "lastName": "Ak", "isActive": false },
                { "id": 3, "firstName": "Efe", "lastName": "Us", "isActive": true },
            ]))
            .unwrap(),
        );
        let logs: ActivityLogList =
            serde_json::from_value(json!({ "logs": [], "totalCount": 57 })).unwrap();

        let stats =
            DashboardStats::from_reads(&customers, &counted(150), &users, &logs, &counted(12));

        assert_eq!(
            stats,
            DashboardStats {
                total_customers: 2,
                total_leads: 150,
                active_users: 2,
                recent_activities: 57,
                stale_leads: 12,
            }
        );
    }

    #[test]
    fn test_stale_card_query_asks_server_for_stale_leads() {
        let mut stale = LeadQuery::new(1, 1);
        stale.is_stale = "true".to_string();
        let params = stale.to_params();
        assert_eq!(params.get("isStale"), Some("true"));
        assert_eq!(params.get("limit"), Some("1"));
    }

    #[test]
    fn test_default_is_zeroed() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_leads + stats.stale_leads + stats.active_users, 0);
    }
}
