//! Dashboard summary returned by the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Headline counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_clients: u64,
    #[serde(rename = "active_reservas")]
    pub active_reservations: u64,
    pub occupied_rooms: u64,
    pub total_rooms: u64,
    pub monthly_revenue: f64,
}

impl DashboardStats {
    /// Share of rooms currently occupied, in percent
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_rooms == 0 {
            return 0.0;
        }
        self.occupied_rooms as f64 * 100.0 / self.total_rooms as f64
    }
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardActivity {
    pub id: i64,
    pub description: String,
    pub status: String,
    pub event_type: String,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_activities: Vec<DashboardActivity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_summary() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "stats": {"total_clients": 12, "active_reservas": 3,
                          "occupied_rooms": 5, "total_rooms": 20,
                          "monthly_revenue": 15400.5},
                "recent_activities": [
                    {"id": 1, "description": "Reserva #3 criada", "status": "pendente",
                     "event_type": "reserva", "created_at": "2025-06-01T10:00:00.123456"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(summary.stats.active_reservations, 3);
        assert_eq!(summary.stats.occupancy_rate(), 25.0);
        assert_eq!(summary.recent_activities.len(), 1);
    }

    #[test]
    fn test_occupancy_without_rooms() {
        let stats = DashboardStats {
            total_clients: 0,
            active_reservations: 0,
            occupied_rooms: 0,
            total_rooms: 0,
            monthly_revenue: 0.0,
        };
        assert_eq!(stats.occupancy_rate(), 0.0);
    }
}
