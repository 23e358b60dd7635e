// Date utility functions

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

/// First day of the week containing `date`.
///
/// `first_day_of_week` counts days from Sunday (0 = Sunday, 1 = Monday, ...).
pub fn week_start_of(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.saturating_sub(1) % 12) as usize]
}

/// Short weekday names starting from the configured first day of the week.
pub fn weekday_names(first_day_of_week: u8) -> [&'static str; 7] {
    let mut names = [""; 7];
    for (i, name) in names.iter_mut().enumerate() {
        *name = WEEKDAY_NAMES_SHORT[(first_day_of_week as usize + i) % 7];
    }
    names
}
