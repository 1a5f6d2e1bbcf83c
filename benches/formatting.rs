use chrono::{Local, TimeZone};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use plume::fmt::{StripResolver, Theme, highlight};
use plume::meta::{ErrorInfo, Meta, MetaValue, serialize};
use plume::{Level, LogRecord, Message, PlainOutput, StyledOutput};

fn sample_record(meta: Option<Meta>) -> LogRecord {
    LogRecord {
        timestamp: Local.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap(),
        name: "App".to_string(),
        level: Level::Info,
        message: Message::from("Request handled in 42ms"),
        meta,
    }
}

fn bench_plain_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("PlainOutput::format");

    let bare = sample_record(None);
    group.bench_function("message_only", |b| {
        let output = PlainOutput::new();
        b.iter(|| output.format(black_box(&bare)));
    });

    let with_meta = sample_record(Some(
        Meta::new()
            .field("status", 200)
            .field("path", "/api/users")
            .field("elapsed_ms", 42),
    ));
    group.bench_function("with_metadata", |b| {
        let output = PlainOutput::new();
        b.iter(|| output.format(black_box(&with_meta)));
    });

    group.finish();
}

fn bench_styled_format(c: &mut Criterion) {
    let record = sample_record(Some(Meta::new().field("status", 200)));
    let output = StyledOutput::new();

    c.bench_function("StyledOutput::format", |b| {
        b.iter(|| output.format(black_box(&record)));
    });
}

fn bench_block_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("meta::serialize");

    let flat = Meta::new()
        .field("status", 200)
        .field("path", "/api/users")
        .field("ok", true)
        .to_value();
    group.bench_function("flat", |b| {
        b.iter(|| serialize(black_box(&flat), &StripResolver));
    });

    let nested = MetaValue::Map(vec![
        (
            "request".to_string(),
            MetaValue::Map(vec![
                ("method".to_string(), MetaValue::from("GET")),
                ("path".to_string(), MetaValue::from("/api/users")),
                (
                    "params".to_string(),
                    MetaValue::Seq(vec![MetaValue::from("limit"), MetaValue::from("offset")]),
                ),
            ]),
        ),
        (
            "error".to_string(),
            MetaValue::Error(
                ErrorInfo::new("Timeout", "upstream took too long").field("elapsed_ms", 5000),
            ),
        ),
    ]);
    group.bench_function("nested", |b| {
        b.iter(|| serialize(black_box(&nested), &StripResolver));
    });

    group.finish();
}

fn bench_highlight_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight::render");
    let theme = Theme::default();

    group.bench_function("sql", |b| {
        b.iter(|| {
            highlight::render(
                black_box("SELECT id, name FROM users WHERE active = 1 LIMIT 10"),
                "sql",
                &theme,
            )
        });
    });

    group.bench_function("rust", |b| {
        b.iter(|| {
            highlight::render(
                black_box("fn main() { let x = \"hi\"; // greet\n    println!(\"{x}\"); }"),
                "rust",
                &theme,
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_format,
    bench_styled_format,
    bench_block_serialize,
    bench_highlight_render
);
criterion_main!(benches);
