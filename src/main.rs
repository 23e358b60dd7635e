// Slotgrid demo
// Renders the layout engine's output as text: a day time grid and a month grid

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};

use slotgrid::layout::{
    day_cell_events, generate_time_slots, is_hour_slot, place_events, MonthGrid,
};
use slotgrid::models::event::Event;
use slotgrid::state::{CalendarState, ViewType};

const START_TIME: &str = "08:00";
const END_TIME: &str = "20:00";
const INTERVAL: u32 = 30;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting slotgrid demo");

    let events = match std::env::args().nth(1) {
        Some(path) => load_events(&path)?,
        None => sample_events()?,
    };
    log::info!("Loaded {} events", events.len());

    let mut state = CalendarState::today(0);

    state.set_view(ViewType::Day);
    print_day_grid(&state, &events)?;

    state.set_view(ViewType::Month);
    print_month_grid(&state, &events);

    Ok(())
}

fn load_events(path: &str) -> Result<Vec<Event>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event file {}", path))?;
    let events: Vec<Event> =
        serde_json::from_str(&json).with_context(|| format!("failed to parse {}", path))?;
    for event in &events {
        if let Err(reason) = event.validate() {
            log::warn!("event {} failed validation: {}", event.id, reason);
        }
    }
    Ok(events)
}

fn sample_events() -> Result<Vec<Event>> {
    let today = Local::now().date_naive();
    use chrono::Datelike;
    let at = |hour: u32, minute: u32| {
        Local
            .with_ymd_and_hms(today.year(), today.month(), today.day(), hour, minute, 0)
            .single()
            .context("ambiguous local time for sample event")
    };

    let standup = Event::new("evt-1", "Standup", at(9, 0)?, at(9, 15)?)
        .map_err(|e| anyhow::anyhow!(e))?;
    let review = Event::new("evt-2", "Design review", at(10, 10)?, at(11, 5)?)
        .map_err(|e| anyhow::anyhow!(e))?;
    let lunch = Event::new("evt-3", "Lunch", at(12, 0)?, at(13, 0)?)
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(vec![standup, review, lunch])
}

fn print_day_grid(state: &CalendarState, events: &[Event]) -> Result<()> {
    let slots = generate_time_slots(START_TIME, END_TIME, INTERVAL)?;
    let placed = place_events(events, state.current_date, &slots, START_TIME, INTERVAL);

    println!("{}", state.title());
    for (index, slot) in slots.iter().enumerate() {
        let label = if is_hour_slot(index, INTERVAL) {
            slot.label.as_str()
        } else {
            ""
        };

        let mut line = format!("{:>5} |", label);
        for positioned in placed.iter().filter(|p| p.top_offset_slots == index) {
            line.push_str(&format!(
                " {} ({} slots)",
                positioned.event.name, positioned.height_slots
            ));
        }
        println!("{}", line);
    }
    println!();

    Ok(())
}

fn print_month_grid(state: &CalendarState, events: &[Event]) {
    let grid = MonthGrid::for_date(state.current_date, state.first_day_of_week);

    println!("{}", state.title());
    println!(
        "{}",
        state
            .weekday_header()
            .iter()
            .map(|name| format!("{:>4}", name))
            .collect::<String>()
    );

    use chrono::Datelike;
    for week in grid.weeks() {
        let mut line = String::new();
        for cell in week {
            if cell.in_month {
                let count = day_cell_events(events, cell.date).visible.len();
                let marker = if count > 0 { '*' } else { ' ' };
                line.push_str(&format!("{:>3}{}", cell.date.day(), marker));
            } else {
                line.push_str("  . ");
            }
        }
        println!("{}", line);
    }
}
