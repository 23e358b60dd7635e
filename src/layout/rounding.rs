// Grid rounding
// Snaps raw event times onto the slot grid

/// Direction to snap a time onto the grid.
///
/// Event starts round `Down` (a visible start is never lost) and event ends
/// round `Up` (a visible duration is never truncated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

/// Clamp `minutes` into `[grid_start, grid_end]` and snap it onto the grid.
///
/// The result is always `grid_start` plus a multiple of `interval`, and
/// always within the grid bounds. Snapping happens after clamping, so a
/// time far outside the window lands exactly on the nearer boundary.
pub fn round_to_grid(
    minutes: i32,
    interval: u32,
    grid_start: i32,
    grid_end: i32,
    rounding: Rounding,
) -> i32 {
    let clamped = grid_start.max(grid_end.min(minutes));
    let step = interval as i32;
    let offset = clamped - grid_start;

    let snapped = match rounding {
        Rounding::Down => offset.div_euclid(step) * step,
        Rounding::Up => (offset + step - 1).div_euclid(step) * step,
    };

    grid_start + snapped
}
