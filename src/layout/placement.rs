// Per-day event placement
// Maps events onto discrete row positions within one day's slot grid

use chrono::{DateTime, Local, NaiveDate, Timelike};

use super::rounding::{round_to_grid, Rounding};
use super::slots::{parse_time_string, TimeSlot};
use crate::models::event::Event;

/// An event annotated with its row offset and row span within a specific
/// day's grid. Computed fresh on every call; borrows the caller's event.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent<'a> {
    pub event: &'a Event,
    /// Row index of the first slot the event occupies
    pub top_offset_slots: usize,
    /// Number of slot rows the event spans (always >= 1)
    pub height_slots: usize,
    /// Grid-aligned start, minutes since midnight
    pub start_minutes: i32,
    /// Grid-aligned end, minutes since midnight
    pub end_minutes: i32,
}

fn minutes_of_day(ts: DateTime<Local>) -> i32 {
    (ts.hour() * 60 + ts.minute()) as i32
}

/// Compute grid positions for every event belonging to `day`.
///
/// An event belongs to the civil date of its *end* timestamp, even when it
/// starts on an earlier date. Starts round down and ends round up onto the
/// grid, so an event never loses its visible start or duration; rounding
/// that collapses a short event is floored to a one-slot height. Events
/// whose snapped start lands at or past the grid's closing boundary are
/// omitted from the result, not clipped.
///
/// Input order is preserved; overlapping events are not stacked here.
pub fn place_events<'a>(
    events: &'a [Event],
    day: NaiveDate,
    slots: &[TimeSlot],
    start_time: &str,
    interval: u32,
) -> Vec<PositionedEvent<'a>> {
    let grid_start = parse_time_string(start_time);
    let grid_end = grid_start + slots.len() as i32 * interval as i32;
    let step = interval as i32;

    let mut placed = Vec::new();
    for event in events.iter().filter(|e| e.end_at.date_naive() == day) {
        let raw_start = minutes_of_day(event.start_at);
        let raw_end = minutes_of_day(event.end_at);

        let start_minutes =
            round_to_grid(raw_start, interval, grid_start, grid_end, Rounding::Down);
        let end_minutes = round_to_grid(raw_end, interval, grid_start, grid_end, Rounding::Up);

        let top_offset = (start_minutes - grid_start) / step;
        if top_offset < 0 || top_offset as usize >= slots.len() {
            log::debug!(
                "event {} starts outside the {} visible slots, hidden",
                event.id,
                slots.len()
            );
            continue;
        }

        let height_slots = ((end_minutes - start_minutes) / step).max(1) as usize;

        placed.push(PositionedEvent {
            event,
            top_offset_slots: top_offset as usize,
            height_slots,
            start_minutes,
            end_minutes,
        });
    }

    placed
}
