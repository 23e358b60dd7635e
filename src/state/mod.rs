// Calendar view state
// Explicit, caller-owned selection state: which view is active and which
// day/week/month it is looking at. Passed by reference to whatever needs it;
// nothing here is process-wide.

pub mod view_type;

pub use view_type::ViewType;

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::utils::date::{month_name, week_start_of, weekday_names};

/// Number of day columns in week-based views.
pub const DAYS_IN_WEEK: i64 = 7;

/// Selection state for one calendar widget.
///
/// `current_date` drives the day and month views; `week_start` drives the
/// week view. They move independently, matching how navigation behaves per
/// view (switching views never re-anchors the other views' selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    pub view: ViewType,
    pub current_date: NaiveDate,
    pub week_start: NaiveDate,
    /// Days from Sunday (0 = Sunday, 1 = Monday, ...)
    pub first_day_of_week: u8,
}

impl CalendarState {
    /// State anchored at `today` in the default month view.
    pub fn new(today: NaiveDate, first_day_of_week: u8) -> Self {
        Self {
            view: ViewType::Month,
            current_date: today,
            week_start: week_start_of(today, first_day_of_week),
            first_day_of_week,
        }
    }

    /// State anchored at the current local date.
    pub fn today(first_day_of_week: u8) -> Self {
        Self::new(Local::now().date_naive(), first_day_of_week)
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn navigate_previous(&mut self) {
        match self.view {
            ViewType::Day => self.current_date = self.current_date - Duration::days(1),
            ViewType::Week => self.week_start = self.week_start - Duration::weeks(1),
            ViewType::Month => {
                self.current_date = shift_month_preserving_day(self.current_date, -1)
            }
        }
    }

    pub fn navigate_next(&mut self) {
        match self.view {
            ViewType::Day => self.current_date = self.current_date + Duration::days(1),
            ViewType::Week => self.week_start = self.week_start + Duration::weeks(1),
            ViewType::Month => {
                self.current_date = shift_month_preserving_day(self.current_date, 1)
            }
        }
    }

    /// Re-anchor the active view at today.
    ///
    /// The month view moves to today's month but keeps the selected
    /// day-of-month, mirroring the other views' anchor-only behavior.
    pub fn jump_to_today(&mut self) {
        let today = Local::now().date_naive();
        match self.view {
            ViewType::Day => self.current_date = today,
            ViewType::Week => self.week_start = week_start_of(today, self.first_day_of_week),
            ViewType::Month => {
                self.current_date = clamp_day(today.year(), today.month(), self.current_date.day())
            }
        }
    }

    /// Date-picker selection: moves the active view to `date`.
    pub fn select_date(&mut self, date: NaiveDate) {
        match self.view {
            ViewType::Day => self.current_date = date,
            ViewType::Week => self.week_start = week_start_of(date, self.first_day_of_week),
            ViewType::Month => {
                self.current_date = clamp_day(date.year(), date.month(), self.current_date.day())
            }
        }
    }

    /// The seven dates shown by the week view.
    pub fn week_days(&self) -> Vec<NaiveDate> {
        let start = week_start_of(self.week_start, self.first_day_of_week);
        (0..DAYS_IN_WEEK).map(|i| start + Duration::days(i)).collect()
    }

    /// Heading string for the active view.
    pub fn title(&self) -> String {
        match self.view {
            ViewType::Day => self.current_date.format("%A, %B %-d, %Y").to_string(),
            ViewType::Week => {
                let start = week_start_of(self.week_start, self.first_day_of_week);
                let end = start + Duration::days(DAYS_IN_WEEK - 1);
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            }
            ViewType::Month => {
                format!("{} {}", month_name(self.current_date.month()), self.current_date.year())
            }
        }
    }

    /// Column header names for the active view.
    ///
    /// Week and month views get seven short weekday names from the
    /// configured week start; the day view gets the single full day name.
    pub fn weekday_header(&self) -> Vec<String> {
        match self.view {
            ViewType::Day => vec![self.current_date.format("%A").to_string()],
            ViewType::Week | ViewType::Month => weekday_names(self.first_day_of_week)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day())
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let max_day = crate::utils::date::last_day_of_month(year, month);
    let day = desired_day.min(max_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, max_day))
        .expect("valid calendar date")
}
