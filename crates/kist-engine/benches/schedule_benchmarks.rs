//! Benchmarks for schedule generation.
//!
//! Run with: cargo bench -p kist-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kist_core::types::Date;
use kist_engine::prelude::*;

fn build_terms(months: u32, pre_emi: bool) -> LoanTerms {
    LoanTerms::builder()
        .principal(9_400_000.0)
        .annual_rate(7.45)
        .tenure_months(months)
        .disbursal_date(Date::from_ymd(2025, 1, 1).unwrap())
        .emi_start_date(Date::from_ymd(2025, 4, 1).unwrap())
        .pre_emi(pre_emi)
        .build()
        .unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_generate");

    for months in [12u32, 60, 240, 360] {
        let terms = build_terms(months, false);
        group.bench_with_input(BenchmarkId::new("plain", months), &terms, |b, terms| {
            b.iter(|| ScheduleGenerator::generate(black_box(terms)).unwrap());
        });
    }

    let terms = build_terms(360, true);
    group.bench_with_input(BenchmarkId::new("pre_emi", 360u32), &terms, |b, terms| {
        b.iter(|| ScheduleGenerator::generate(black_box(terms)).unwrap());
    });

    group.finish();
}

fn bench_projections(c: &mut Criterion) {
    let schedule = ScheduleGenerator::generate(&build_terms(360, true)).unwrap();

    c.bench_function("group_by_year_360", |b| {
        b.iter(|| kist_engine::projections::group_by_year(black_box(&schedule)));
    });
    c.bench_function("chart_series_360", |b| {
        b.iter(|| ChartSeries::from_schedule(black_box(&schedule)));
    });
}

criterion_group!(benches, bench_generate, bench_projections);
criterion_main!(benches);
