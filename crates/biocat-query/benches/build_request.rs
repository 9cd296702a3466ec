// SPDX-License-Identifier: Apache-2.0

use biocat_model::Category;
use biocat_query::{build_query_request, request_fingerprint, QueryLimits, SearchFilters};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_build_request(c: &mut Criterion) {
    let limits = QueryLimits::default();
    let filters = SearchFilters {
        name: "Cardiac Myocyte Calcium Dynamics".to_string(),
        category: Category::Public,
        owner: "Dr. Smith".to_string(),
        max_rows: 250,
        ..SearchFilters::default()
    };

    c.bench_function("build_query_request", |b| {
        b.iter(|| build_query_request(black_box(&filters), black_box(&limits)).expect("build"))
    });

    let request = build_query_request(&filters, &limits).expect("build");
    c.bench_function("request_fingerprint", |b| {
        b.iter(|| request_fingerprint(black_box(&request)).expect("fingerprint"))
    });
}

criterion_group!(benches, bench_build_request);
criterion_main!(benches);
