// Drag-and-drop rescheduling
// Pure time recalculation for drop targets. Operates on raw timestamps only;
// the slot grid and rounding are never consulted here.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

use crate::layout::slots::TimeSlot;
use crate::models::event::Event;
use crate::state::ViewType;

/// Payload captured when an event starts being dragged.
///
/// The original endpoints are frozen at drag start so the duration survives
/// intermediate hover updates.
#[derive(Debug, Clone, PartialEq)]
pub struct DragItem {
    pub event_id: String,
    pub original_start: DateTime<Local>,
    pub original_end: DateTime<Local>,
}

impl DragItem {
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            original_start: event.start_at,
            original_end: event.end_at,
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.original_end - self.original_start
    }
}

/// Where a dragged event is dropped.
///
/// Time-grid drops carry the slot under the pointer; month-cell drops carry
/// only the date.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub date: NaiveDate,
    pub slot: Option<TimeSlot>,
    pub view: ViewType,
}

impl DropTarget {
    /// Capability check: a target on a disabled weekday refuses any drop.
    ///
    /// `disabled_days` holds days-from-Sunday indices (0 = Sunday).
    pub fn can_accept(&self, disabled_days: &[u8]) -> bool {
        use chrono::Datelike;
        let weekday = self.date.weekday().num_days_from_sunday() as u8;
        !disabled_days.contains(&weekday)
    }
}

/// Recompute an event's endpoints for a drop target.
///
/// Day/week drops with a slot move the start to the slot's wall-clock time
/// on the target date and keep the original duration. Month drops (or any
/// drop without a slot) keep the original wall-clock times, seconds and
/// sub-seconds included, and change only the date.
pub fn recalculate_times(
    item: &DragItem,
    target: &DropTarget,
) -> (DateTime<Local>, DateTime<Local>) {
    match (target.view, &target.slot) {
        (ViewType::Day | ViewType::Week, Some(slot)) => {
            let time = NaiveTime::from_hms_opt(
                (slot.minutes.div_euclid(60)) as u32,
                (slot.minutes.rem_euclid(60)) as u32,
                0,
            )
            .unwrap_or(NaiveTime::MIN);

            let new_start = local_datetime(target.date, time, item.original_start);
            (new_start, new_start + item.duration())
        }
        _ => {
            let new_start = local_datetime(target.date, item.original_start.time(), item.original_start);
            let new_end = local_datetime(target.date, item.original_end.time(), item.original_end);
            (new_start, new_end)
        }
    }
}

// DST gaps and folds resolve to the earlier mapping; a nonexistent local
// time keeps the original timestamp.
fn local_datetime(date: NaiveDate, time: NaiveTime, fallback: DateTime<Local>) -> DateTime<Local> {
    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => fallback,
    }
}
