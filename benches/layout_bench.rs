// Benchmarks for the event layout engine
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::{Duration, Local, NaiveDate, TimeZone};
use slotgrid::layout::{generate_time_slots, place_events, MonthGrid};
use slotgrid::models::event::{Event, EventStatus};

fn build_events(count: usize) -> Vec<Event> {
    let base = Local.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
    (0..count)
        .map(|i| Event {
            id: format!("evt-{}", i),
            name: format!("Event {}", i),
            start_at: base + Duration::minutes((i % 600) as i64),
            end_at: base + Duration::minutes((i % 600) as i64 + 25),
            status: EventStatus::default(),
        })
        .collect()
}

fn bench_place_events(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let slots = generate_time_slots("08:00", "20:00", 30).unwrap();

    for count in [100, 1_000, 10_000] {
        let events = build_events(count);
        c.bench_function(&format!("place_events_{}", count), |b| {
            b.iter(|| {
                let placed = place_events(
                    black_box(&events),
                    black_box(day),
                    black_box(&slots),
                    "08:00",
                    30,
                );
                black_box(placed)
            })
        });
    }
}

fn bench_generate_slots(c: &mut Criterion) {
    c.bench_function("generate_time_slots_15", |b| {
        b.iter(|| generate_time_slots(black_box("00:00"), black_box("24:00"), 15))
    });
}

fn bench_month_grid(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    c.bench_function("month_grid", |b| {
        b.iter(|| MonthGrid::for_date(black_box(date), 0))
    });
}

criterion_group!(
    benches,
    bench_place_events,
    bench_generate_slots,
    bench_month_grid
);
criterion_main!(benches);
