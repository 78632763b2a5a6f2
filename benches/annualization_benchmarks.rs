//! Performance benchmarks for the Pay Annualization Engine.
//!
//! This benchmark suite verifies that the engine meets performance targets:
//! - Single record annualization: < 1μs mean
//! - Series of 10,000 records: < 10ms mean
//! - HTTP batch of 1000 records: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use pay_annualizer::api::{AppState, create_router};
use pay_annualizer::calculation::{DEFAULT_UNMATCHED, annualize, annualize_series};
use pay_annualizer::models::PeriodCode;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Period codes cycled through generated batches, including sentinel cases.
const BENCH_PERIODS: [i64; 8] = [1, 2, 5, 52, 26, 97, 6, 90];

/// Generates parallel value/period series of the requested size.
fn generate_series(size: usize) -> (Vec<Decimal>, Vec<PeriodCode>) {
    let values = (0..size)
        .map(|i| Decimal::new(10_000 + (i as i64 % 5_000) * 7, 2))
        .collect();
    let periods = (0..size)
        .map(|i| PeriodCode::new(BENCH_PERIODS[i % BENCH_PERIODS.len()]))
        .collect();
    (values, periods)
}

/// Generates a JSON request body with the requested number of records.
fn generate_request_body(record_count: usize) -> String {
    let records: Vec<serde_json::Value> = (0..record_count)
        .map(|i| {
            serde_json::json!({
                "value": format!("{}.{:02}", 100 + i % 5000, i % 100),
                "period": BENCH_PERIODS[i % BENCH_PERIODS.len()],
            })
        })
        .collect();

    serde_json::json!({ "records": records }).to_string()
}

fn bench_scalar_annualize(c: &mut Criterion) {
    let value = Decimal::new(50_000, 2);
    let weekly = PeriodCode::new(1);

    c.bench_function("annualize_single_record", |b| {
        b.iter(|| annualize(black_box(value), black_box(weekly), DEFAULT_UNMATCHED))
    });
}

fn bench_series_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("annualize_series");

    for size in [100, 1_000, 10_000] {
        let (values, periods) = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |b, _| {
                b.iter(|| {
                    annualize_series(black_box(&values), black_box(&periods), DEFAULT_UNMATCHED)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_router_batch(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let router = create_router(AppState::default());

    let mut group = c.benchmark_group("http_annualize_batch");

    for record_count in [100, 1_000] {
        let body = generate_request_body(record_count);
        group.throughput(Throughput::Elements(record_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(record_count),
            &record_count,
            |b, _| {
                b.to_async(&runtime).iter(|| {
                    let router = router.clone();
                    let body = body.clone();
                    async move {
                        let response = router
                            .oneshot(
                                Request::builder()
                                    .method("POST")
                                    .uri("/annualize")
                                    .header("Content-Type", "application/json")
                                    .body(Body::from(body))
                                    .unwrap(),
                            )
                            .await
                            .unwrap();
                        assert!(response.status().is_success());
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_annualize,
    bench_series_throughput,
    bench_router_batch
);
criterion_main!(benches);
