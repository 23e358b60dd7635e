//! Event layout engine.
//!
//! Pure computation from `(events, day, slot grid)` to discrete grid
//! positions. No rendering, no I/O, no shared state: every function here is
//! safe to call repeatedly and from independent invocations.

pub mod month;
pub mod placement;
pub mod rounding;
pub mod slots;

use thiserror::Error;

/// Configuration errors raised by the layout engine.
///
/// These propagate to the caller; nothing here is coerced or logged away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("slot interval must be 15, 30, or 60 minutes, got {0}")]
    InvalidInterval(u32),
}

pub use month::{
    day_cell_events, events_on_day, DayCellEvents, MonthCell, MonthGrid,
    MAX_MONTH_EVENTS_DISPLAY,
};
pub use placement::{place_events, PositionedEvent};
pub use rounding::{round_to_grid, Rounding};
pub use slots::{
    format_time_from_minutes, generate_time_slots, is_hour_slot, parse_time_string,
    slot_height_px, TimeSlot,
};
