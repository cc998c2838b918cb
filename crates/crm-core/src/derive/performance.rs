use crate::models::UserPerformance;

/// Colour of the conversion-rate pill
pub fn conversion_rate_class(rate: f64) -> &'static str {
    if rate >= 80.0 {
        "bg-green-600"
    } else if rate >= 60.0 {
        "bg-green-500"
    } else if rate >= 40.0 {
        "bg-yellow-500"
    } else if rate >= 20.0 {
        "bg-orange-500"
    } else {
        "bg-red-500"
    }
}

/// Header cards on the consultant performance page
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub total_leads: u32,
    pub won_leads: u32,
    pub lost_leads: u32,
    /// Mean of the per-consultant rates, two decimals
    pub average_rate: String,
    /// Consultant with the highest rate
    pub top_performer: Option<UserPerformance>,
}

impl From<&[UserPerformance]> for PerformanceSummary {
    fn from(rows: &[UserPerformance]) -> Self {
        let total_leads = rows.iter().map(|r| r.total_leads).sum();
        let won_leads = rows.iter().map(|r| r.won_leads).sum();
        let lost_leads = rows.iter().map(|r| r.lost_leads).sum();
        let average = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(UserPerformance::conversion_rate_value).sum::<f64>() / rows.len() as f64
        };
        let top_performer = rows
            .iter()
            .fold(None::<&UserPerformance>, |best, row| match best {
                Some(b) if b.conversion_rate_value() >= row.conversion_rate_value() => Some(b),
                _ => Some(row),
            })
            .cloned();
        Self {
            total_leads,
            won_leads,
            lost_leads,
            average_rate: format!("{:.2}", average),
            top_performer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: i64, total: u32, won: u32, rate: &str) -> UserPerformance {
        serde_json::from_value(json!({
            "id": id, "firstName": format!("D{}", id), "lastName": "X",
            "totalLeads": total, "wonLeads": won, "lostLeads": 1, "conversionRate": rate
        }))
        .unwrap()
    }

    #[test]
    fn test_rate_classes() {
        assert_eq!(conversion_rate_class(80.0), "bg-green-600");
        assert_eq!(conversion_rate_class(65.5), "bg-green-500");
        assert_eq!(conversion_rate_class(40.0), "bg-yellow-500");
        assert_eq!(conversion_rate_class(20.0), "bg-orange-500");
        assert_eq!(conversion_rate_class(19.99), "bg-red-500");
    }

    #[test]
    fn test_summary() {
        let rows = vec![row(1, 10, 5, "50.00"), row(2, 4, 3, "75.00"), row(3, 6, 0, "0.00")];
        let summary = PerformanceSummary::from(rows.as_slice());
        assert_eq!(summary.total_leads, 20);
        assert_eq!(summary.won_leads, 8);
        assert_eq!(summary.lost_leads, 3);
        assert_eq!(summary.average_rate, "41.67");
        assert_eq!(summary.top_performer.map(|p| p.id), Some(2));
    }

    #[test]
    fn test_empty_summary() {
        let summary = PerformanceSummary::from(&[][..]);
        assert_eq!(summary.average_rate, "0.00");
        assert!(summary.top_performer.is_none());
    }
}
