//! Performance benchmarks for the Timeclock Reconstruction Engine.
//!
//! This benchmark suite verifies that reconstruction meets performance targets:
//! - Single employee week: < 100μs mean
//! - Sheet with 50 employees: < 5ms mean
//! - Sheet with 500 employees: < 50ms mean
//! - Full HTTP round trip for a 50-employee sheet: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use timeclock_engine::api::{AppState, create_router};
use timeclock_engine::config::ConfigLoader;
use timeclock_engine::models::{CellValue, Sheet};
use timeclock_engine::reconstruct::reconstruct_sheet;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/nis").expect("Failed to load config");
    AppState::new(config)
}

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

/// Builds a synthetic Logs sheet with the given number of employees.
///
/// Punch patterns cycle through plain day shifts, split-cell overnight
/// shifts, and an occasional lone punch so the benchmark exercises every
/// reconstruction path.
fn synthetic_sheet(employee_count: usize) -> Sheet {
    let mut rows = vec![
        vec![
            text("Duration:"),
            CellValue::Empty,
            text("2026/01/23 ~ 01/31 ( atherlys )"),
        ],
        {
            let mut header = vec![CellValue::Empty];
            header.extend((23..=29).map(|d| CellValue::Number(f64::from(d))));
            header
        },
    ];

    let patterns: [&[&str]; 3] = [
        &["08:00 16:00", "08:00 16:00", "", "09:00 17:00", "08:00 16:00", "", ""],
        &["", "16:00 23:59", "23:30", "02:00", "", "15:00 23:00", ""],
        &["09:00 17:00", "", "09:00", "", "10:00 18:30", "", "17:00"],
    ];

    for i in 0..employee_count {
        let mut marker = vec![CellValue::Empty; 11];
        marker[0] = text("No:");
        marker[2] = text(&format!("{:04}", 1000 + i));
        marker[10] = text(&format!("Employee {:04}", i));
        rows.push(marker);

        let pattern = patterns[i % patterns.len()];
        let mut punch_row = vec![CellValue::Empty];
        punch_row.extend(pattern.iter().map(|cell| {
            if cell.is_empty() {
                CellValue::Empty
            } else {
                text(cell)
            }
        }));
        rows.push(punch_row);
    }

    Sheet {
        name: "Logs".to_string(),
        rows,
    }
}

/// Serializes a synthetic sheet as a `/reconstruct` request body.
fn synthetic_request_body(employee_count: usize) -> String {
    let sheet = synthetic_sheet(employee_count);
    serde_json::json!({
        "sheets": [{ "name": sheet.name, "rows": sheet.rows }]
    })
    .to_string()
}

/// Benchmark: reconstructing a single employee week.
///
/// Target: < 100μs mean
fn bench_single_employee(c: &mut Criterion) {
    let sheet = synthetic_sheet(1);

    c.bench_function("single_employee", |b| {
        b.iter(|| black_box(reconstruct_sheet(black_box(&sheet)).unwrap()))
    });
}

/// Benchmark: various employee counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for employee_count in [1, 10, 50, 200, 500].iter() {
        let sheet = synthetic_sheet(*employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| b.iter(|| black_box(reconstruct_sheet(black_box(&sheet)).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: full HTTP round trip for a 50-employee sheet.
///
/// Target: < 10ms mean
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = synthetic_request_body(50);

    let mut group = c.benchmark_group("http");
    group.throughput(Throughput::Elements(50));

    group.bench_function("reconstruct_50_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reconstruct")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_employee,
    bench_scaling,
    bench_http_round_trip,
);
criterion_main!(benches);
