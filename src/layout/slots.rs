// Time-slot generation
// The slot grid is the row unit every other layout computation builds on

use serde::{Deserialize, Serialize};

use super::LayoutError;

/// Slot intervals the grid supports, in minutes.
pub const VALID_INTERVALS: [u32; 3] = [15, 30, 60];

/// One row of the time grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// "HH:MM" label for the slot start
    pub label: String,
    /// Minutes since midnight at the slot start
    pub minutes: i32,
}

/// Parse an "HH:MM" string into minutes since midnight.
///
/// No range validation: `"27:80"` parses to `27 * 60 + 80`. Malformed input
/// yields malformed output; supplying well-formed times is the caller's
/// responsibility.
pub fn parse_time_string(time: &str) -> i32 {
    let mut parts = time.splitn(2, ':');
    let hours: i32 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(0);
    let minutes: i32 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(0);
    hours * 60 + minutes
}

/// Format minutes since midnight as a zero-padded "HH:MM" string.
pub fn format_time_from_minutes(total_minutes: i32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Generate the ordered slot sequence covering `[start_time, end_time)`.
///
/// One slot per `interval` minutes starting at `start_time`; `end_time`
/// itself is never a slot start. An empty grid (`start_time >= end_time`)
/// is not an error.
pub fn generate_time_slots(
    start_time: &str,
    end_time: &str,
    interval: u32,
) -> Result<Vec<TimeSlot>, LayoutError> {
    if !VALID_INTERVALS.contains(&interval) {
        return Err(LayoutError::InvalidInterval(interval));
    }

    let start_minutes = parse_time_string(start_time);
    let end_minutes = parse_time_string(end_time);
    let step = interval as i32;

    let mut slots = Vec::new();
    let mut minutes = start_minutes;
    while minutes < end_minutes {
        slots.push(TimeSlot {
            label: format_time_from_minutes(minutes),
            minutes,
        });
        minutes += step;
    }

    Ok(slots)
}

/// Pixel height of one slot row for a given interval.
pub fn slot_height_px(interval: u32) -> Result<u32, LayoutError> {
    match interval {
        15 => Ok(32),
        30 => Ok(48),
        60 => Ok(64),
        other => Err(LayoutError::InvalidInterval(other)),
    }
}

/// Whether the slot at `slot_index` starts on an hour boundary.
///
/// Only meaningful for intervals accepted by `generate_time_slots`.
pub fn is_hour_slot(slot_index: usize, interval: u32) -> bool {
    let slots_per_hour = (60 / interval.max(1)).max(1) as usize;
    slot_index % slots_per_hour == 0
}
