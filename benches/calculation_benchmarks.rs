//! Performance benchmarks for the Timesheet Engine.
//!
//! Every calculation is expected to finish well under a millisecond:
//! - Hours for a single shift: < 1μs mean
//! - Overnight split with breaks: < 5μs mean
//! - Full entry pipeline from raw strings: < 20μs mean
//! - A week of entries for 100 employees: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use timesheet_engine::calculation::{
    EntryProcessor, FixedClock, calculate_hours_from_time_in_out, can_modify_entry,
    format_week_range, split_cross_midnight_shift,
};
use timesheet_engine::config::TimesheetPolicy;
use timesheet_engine::models::{BreakPeriod, ClockTime, EntryStatus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn bench_hours(c: &mut Criterion) {
    let time_in: ClockTime = "07:00".parse().unwrap();
    let time_out: ClockTime = "15:30".parse().unwrap();

    c.bench_function("calculate_hours_same_day", |b| {
        b.iter(|| calculate_hours_from_time_in_out(black_box(time_in), black_box(time_out), 30))
    });
}

fn bench_split(c: &mut Criterion) {
    let date = today();
    let time_in: ClockTime = "22:00".parse().unwrap();
    let time_out: ClockTime = "06:00".parse().unwrap();
    let breaks = vec![
        BreakPeriod::parse("23:30", "23:45").unwrap(),
        BreakPeriod::parse("03:00", "03:45").unwrap(),
    ];

    c.bench_function("split_overnight_with_breaks", |b| {
        b.iter(|| split_cross_midnight_shift(black_box(date), time_in, time_out, black_box(&breaks)))
    });
}

fn bench_eligibility(c: &mut Criterion) {
    let entry_date = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();

    c.bench_function("can_modify_entry", |b| {
        b.iter(|| can_modify_entry(black_box(entry_date), EntryStatus::Draft, today()))
    });

    c.bench_function("format_week_range", |b| {
        b.iter(|| format_week_range(black_box(entry_date)))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let processor = EntryProcessor::new(TimesheetPolicy::default(), FixedClock(today()));

    c.bench_function("process_raw_overnight_entry", |b| {
        b.iter(|| {
            processor
                .process_raw(
                    black_box("2026-01-14"),
                    black_box("22:00"),
                    black_box("06:00"),
                    &[("02:00", "02:30")],
                    Some("Draft"),
                )
                .unwrap()
        })
    });

    let days = [
        "2026-01-11",
        "2026-01-12",
        "2026-01-13",
        "2026-01-14",
        "2026-01-15",
    ];

    let mut group = c.benchmark_group("weekly_batch");
    for employees in [10usize, 100] {
        group.throughput(Throughput::Elements((employees * days.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employees),
            &employees,
            |b, &employees| {
                b.iter(|| {
                    for _ in 0..employees {
                        for day in days {
                            let processed = processor
                                .process_raw(day, "06:30", "15:00", &[("11:00", "11:30")], None)
                                .unwrap();
                            black_box(processed);
                        }
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hours, bench_split, bench_eligibility, bench_pipeline);
criterion_main!(benches);
