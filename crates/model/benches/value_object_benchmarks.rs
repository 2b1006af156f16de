use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use costexplorer_model::{
    DateInterval, Expression, GetCostAndUsageRequest, Granularity, GroupDefinition, Metric,
    ModelValue, ValueObject,
};

fn populated_request(metric_count: usize) -> GetCostAndUsageRequest {
    GetCostAndUsageRequest::new()
        .with_time_period(DateInterval::new().with_start("2020-01-01").with_end("2020-12-31"))
        .with_granularity(Granularity::Daily)
        .with_filter(Expression::all_of([
            Expression::dimension("SERVICE", ["Amazon Simple Storage Service"]),
            Expression::negate(Expression::tag("env", ["dev", "test"])),
        ]))
        .with_metrics(Metric::ALL.iter().cycle().take(metric_count).copied())
        .with_group_by([GroupDefinition::dimension("LINKED_ACCOUNT")])
        .with_next_page_token("AAMA-EFRSURBSGhCSGIzWFh5S2JvT05QWXZrWHlTZkoz")
}

fn bench_hash_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_code");
    for metric_count in [1usize, 7, 64] {
        let request = populated_request(metric_count);
        group.bench_with_input(BenchmarkId::from_parameter(metric_count), &request, |b, request| {
            b.iter(|| black_box(request).hash_code());
        });
    }
    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let request = populated_request(7);
    c.bench_function("display", |b| b.iter(|| black_box(&request).to_string()));
}

fn bench_json(c: &mut Criterion) {
    let request = populated_request(7);
    let encoded = request.to_json().unwrap();

    c.bench_function("to_json", |b| b.iter(|| black_box(&request).to_json().unwrap()));
    c.bench_function("from_json", |b| {
        b.iter(|| GetCostAndUsageRequest::from_json(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, bench_hash_code, bench_display, bench_json);
criterion_main!(benches);
