// Month grid layout
// Cell arrangement for the month view plus per-day event bucketing

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::event::Event;
use crate::utils::date::last_day_of_month;

/// Maximum events shown inside one month cell; the rest become an overflow count.
pub const MAX_MONTH_EVENTS_DISPLAY: usize = 3;

pub const DAYS_IN_WEEK: usize = 7;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for the adjacent-month filler days at the grid edges
    pub in_month: bool,
}

/// A month laid out as consecutive week rows.
///
/// Leading cells come from the previous month when the first of the month is
/// not on the configured week start. Trailing cells from the next month are
/// added only when the final week is partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    cells: Vec<MonthCell>,
}

impl MonthGrid {
    /// Build the grid for the month containing `date`.
    pub fn for_date(date: NaiveDate, first_day_of_week: u8) -> Self {
        let year = date.year();
        let month = date.month();
        let first = date.with_day(1).expect("first of month exists");
        let days_in_month = last_day_of_month(year, month) as usize;

        let leading = (first.weekday().num_days_from_sunday() as i64
            - first_day_of_week as i64
            + DAYS_IN_WEEK as i64)
            % DAYS_IN_WEEK as i64;

        let mut cells = Vec::with_capacity(leading as usize + days_in_month + DAYS_IN_WEEK);
        let grid_start = first - Duration::days(leading);

        for offset in 0..leading as usize + days_in_month {
            let cell_date = grid_start + Duration::days(offset as i64);
            cells.push(MonthCell {
                date: cell_date,
                in_month: cell_date.month() == month,
            });
        }

        let remaining = DAYS_IN_WEEK - (cells.len() % DAYS_IN_WEEK);
        if remaining < DAYS_IN_WEEK {
            let last = cells[cells.len() - 1].date;
            for offset in 1..=remaining {
                cells.push(MonthCell {
                    date: last + Duration::days(offset as i64),
                    in_month: false,
                });
            }
        }

        Self { year, month, cells }
    }

    pub fn cells(&self) -> &[MonthCell] {
        &self.cells
    }

    /// Iterate the grid one week row at a time.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(DAYS_IN_WEEK)
    }
}

/// Events shown in one month cell: the visible slice and the "+N more" count.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCellEvents<'a> {
    pub visible: Vec<&'a Event>,
    pub overflow: usize,
}

/// Events belonging to `day`, keyed by their end date as in time-grid placement.
pub fn events_on_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| e.end_at.date_naive() == day)
        .collect()
}

/// Bucket a day's events into the visible slice and overflow count for a cell.
pub fn day_cell_events<'a>(events: &'a [Event], day: NaiveDate) -> DayCellEvents<'a> {
    let day_events = events_on_day(events, day);
    let overflow = day_events.len().saturating_sub(MAX_MONTH_EVENTS_DISPLAY);
    let mut visible = day_events;
    visible.truncate(MAX_MONTH_EVENTS_DISPLAY);
    DayCellEvents { visible, overflow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_march_2026_sunday_start() {
        // March 1, 2026 is a Sunday: no leading filler, 31 days, 4 trailing
        let grid = MonthGrid::for_date(date(2026, 3, 15), 0);

        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.cells()[0].date, date(2026, 3, 1));
        assert!(grid.cells()[0].in_month);
        assert_eq!(grid.cells()[30].date, date(2026, 3, 31));
        assert!(!grid.cells()[31].in_month);
        assert_eq!(grid.cells()[34].date, date(2026, 4, 4));
    }

    #[test]
    fn test_leading_days_come_from_previous_month() {
        // February 2026 starts on a Sunday; with a Monday week start the
        // grid leads with six January days
        let grid = MonthGrid::for_date(date(2026, 2, 1), 1);

        assert_eq!(grid.cells()[0].date, date(2026, 1, 26));
        assert!(!grid.cells()[0].in_month);
        assert_eq!(grid.cells()[6].date, date(2026, 2, 1));
        assert!(grid.cells()[6].in_month);
    }

    #[test]
    fn test_exact_weeks_have_no_trailing_fill() {
        // February 2027 starts on a Monday and spans exactly four weeks
        let grid = MonthGrid::for_date(date(2027, 2, 10), 1);

        assert_eq!(grid.cells().len(), 28);
        assert!(grid.cells().iter().all(|c| c.in_month));
    }

    #[test]
    fn test_cells_are_consecutive_dates() {
        let grid = MonthGrid::for_date(date(2026, 7, 4), 0);
        for pair in grid.cells().windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test]
    fn test_weeks_are_full_rows() {
        let grid = MonthGrid::for_date(date(2026, 3, 15), 0);
        for week in grid.weeks() {
            assert_eq!(week.len(), DAYS_IN_WEEK);
        }
    }

    fn event_ending(id: &str, day: NaiveDate, hour: u32) -> Event {
        let end = Local
            .with_ymd_and_hms(day.year(), day.month(), day.day(), hour, 0, 0)
            .unwrap();
        Event {
            id: id.to_string(),
            name: id.to_string(),
            start_at: end - Duration::minutes(30),
            end_at: end,
            status: Default::default(),
        }
    }

    #[test]
    fn test_events_on_day_keys_by_end_date() {
        let day = date(2026, 3, 2);
        let other = date(2026, 3, 3);
        let events = vec![
            event_ending("a", day, 9),
            event_ending("b", other, 9),
            event_ending("c", day, 14),
        ];

        let found = events_on_day(&events, day);
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_day_cell_events_overflow() {
        let day = date(2026, 3, 2);
        let events: Vec<Event> = (0..5)
            .map(|i| event_ending(&format!("e{}", i), day, 9 + i))
            .collect();

        let cell = day_cell_events(&events, day);
        assert_eq!(cell.visible.len(), MAX_MONTH_EVENTS_DISPLAY);
        assert_eq!(cell.overflow, 2);
        assert_eq!(cell.visible[0].id, "e0");
    }

    #[test]
    fn test_day_cell_events_no_overflow() {
        let day = date(2026, 3, 2);
        let events = vec![event_ending("a", day, 9)];

        let cell = day_cell_events(&events, day);
        assert_eq!(cell.visible.len(), 1);
        assert_eq!(cell.overflow, 0);
    }
}
