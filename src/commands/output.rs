//! Text and JSON rendering of command results.

use serde::Serialize;

use super::CommandContext;
use crate::domain::{Client, DashboardSummary, Reservation, Room, RoomCalendar};
use crate::errors::{AppError, AppResult};

/// Print `value` as pretty JSON, or the text produced by `render`
pub fn emit<T, F>(ctx: &CommandContext, value: &T, render: F) -> AppResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if ctx.json {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::internal(format!("Failed to encode output: {}", e)))?;
        println!("{}", json);
    } else {
        println!("{}", render(value));
    }
    Ok(())
}

/// One line per item, or a placeholder for an empty list
pub fn lines<T>(items: &[T], render: fn(&T) -> String) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items.iter().map(render).collect::<Vec<_>>().join("\n")
}

pub fn client_line(client: &Client) -> String {
    format!(
        "#{:<5} {:<28} {:<30} {:<18} {}",
        client.id, client.name, client.email, client.phone, client.document
    )
}

pub fn room_line(room: &Room) -> String {
    format!(
        "#{:<5} {:<6} {:<9} {:<11} cap {:<3} {:>10.2}/day",
        room.id,
        room.number,
        room.kind.to_string(),
        room.status.to_string(),
        room.capacity,
        room.daily_rate
    )
}

pub fn reservation_line(reservation: &Reservation) -> String {
    format!(
        "#{:<5} room {:<5} client {:<5} {} -> {} ({} nights) {:>10.2} {}",
        reservation.id,
        reservation.room_id,
        reservation.client_id,
        reservation.check_in,
        reservation.check_out,
        reservation.nights(),
        reservation.total,
        reservation.status
    )
}

pub fn calendar_line(calendar: &RoomCalendar) -> String {
    let days: String = calendar
        .days
        .iter()
        .map(|day| if day.reservation_id.is_some() { '#' } else { '.' })
        .collect();
    format!(
        "{:<6} {:<9} {} ({}/{} booked)",
        calendar.number,
        calendar.kind,
        days,
        calendar.booked_days(),
        calendar.days.len()
    )
}

pub fn dashboard_text(summary: &DashboardSummary) -> String {
    let stats = &summary.stats;
    let mut out = vec![
        format!("Clients:              {}", stats.total_clients),
        format!("Active reservations:  {}", stats.active_reservations),
        format!(
            "Occupied rooms:       {}/{} ({:.0}%)",
            stats.occupied_rooms,
            stats.total_rooms,
            stats.occupancy_rate()
        ),
        format!("Monthly revenue:      {:.2}", stats.monthly_revenue),
    ];

    if !summary.recent_activities.is_empty() {
        out.push(String::new());
        out.push("Recent activity:".to_string());
        out.extend(summary.recent_activities.iter().map(|activity| {
            format!(
                "  {}  [{}] {} ({})",
                activity.created_at.format("%Y-%m-%d %H:%M"),
                activity.event_type,
                activity.description,
                activity.status
            )
        }));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardActivity, DashboardStats, RoomStatus, RoomType};

    #[test]
    fn test_empty_list_placeholder() {
        let rooms: Vec<Room> = Vec::new();
        assert_eq!(lines(&rooms, room_line), "(none)");
    }

    #[test]
    fn test_room_line() {
        let room = Room {
            id: 3,
            number: "101".into(),
            kind: RoomType::Deluxe,
            status: RoomStatus::Occupied,
            capacity: 2,
            daily_rate: 320.0,
            description: None,
        };
        let line = room_line(&room);
        assert!(line.contains("deluxe"));
        assert!(line.contains("ocupado"));
        assert!(line.contains("320.00/day"));
    }

    #[test]
    fn test_dashboard_text() {
        let summary = DashboardSummary {
            stats: DashboardStats {
                total_clients: 4,
                active_reservations: 2,
                occupied_rooms: 1,
                total_rooms: 4,
                monthly_revenue: 999.5,
            },
            recent_activities: vec![DashboardActivity {
                id: 1,
                description: "Check-in room 101".into(),
                status: "ativa".into(),
                event_type: "checkin".into(),
                created_at: chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
                    .unwrap()
                    .and_hms_opt(14, 30, 0)
                    .unwrap(),
            }],
        };

        let text = dashboard_text(&summary);
        assert!(text.contains("1/4 (25%)"));
        assert!(text.contains("999.50"));
        assert!(text.contains("2025-06-01 14:30  [checkin] Check-in room 101 (ativa)"));
    }
}
