// Shared event fixtures for integration tests

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use slotgrid::models::event::{Event, EventStatus};

pub fn local_dt(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(day.year(), day.month(), day.day(), hour, minute, 0)
        .unwrap()
}

pub fn event_on(id: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
    Event {
        id: id.to_string(),
        name: format!("Event {}", id),
        start_at: local_dt(day, start.0, start.1),
        end_at: local_dt(day, end.0, end.1),
        status: EventStatus::default(),
    }
}
