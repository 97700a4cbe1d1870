use criterion::{Criterion, criterion_group, criterion_main};
use daqlog::fmt::{compose_line, expand, format_timestamp};
use daqlog::level::label;
use daqlog::{CalendarDate, Timestamp};
use std::hint::black_box;

fn sample_timestamp() -> Timestamp {
    Timestamp {
        date: CalendarDate::new(2025, 1, 15),
        hour: 14,
        minute: 30,
        second: 0,
        millis: 125,
    }
}

fn bench_format_timestamp(c: &mut Criterion) {
    let ts = sample_timestamp();
    c.bench_function("format_timestamp", |b| {
        b.iter(|| format_timestamp(black_box(&ts)));
    });
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    group.bench_function("literal", |b| {
        b.iter(|| expand(format_args!("Run started")));
    });

    group.bench_function("typed_args", |b| {
        b.iter(|| {
            expand(format_args!(
                "Board {} link {} rate {:.2} MB/s",
                black_box(17),
                black_box(3),
                black_box(42.125)
            ))
        });
    });

    let long = "x".repeat(4096);
    group.bench_function("long_arg", |b| {
        b.iter(|| expand(format_args!("payload {}", black_box(&long))));
    });

    group.finish();
}

fn bench_compose_line(c: &mut Criterion) {
    let ts = sample_timestamp();
    c.bench_function("compose_line", |b| {
        b.iter(|| {
            compose_line(
                black_box(&ts),
                label(black_box(2)),
                black_box("Crate 3 busy, retrying"),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_format_timestamp,
    bench_expand,
    bench_compose_line
);
criterion_main!(benches);
