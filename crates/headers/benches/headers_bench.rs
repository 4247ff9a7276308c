use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use easy_headers::compose::compose_line;
use easy_headers::{HeaderMap, ListHandle, list};

fn bench_compose(c: &mut Criterion) {
    c.bench_function("compose_line", |b| {
        b.iter(|| compose_line(black_box("User-Agent"), black_box("easy-headers/0.1")));
    });

    c.bench_function("compose_line_escaped", |b| {
        b.iter(|| compose_line(black_box("X-Bin"), black_box("a\0b\0c")));
    });
}

fn bench_build(c: &mut Criterion) {
    let headers: HeaderMap = (0..32).map(|i| (format!("X-Key-{i}"), format!("value-{i}"))).collect();

    c.bench_function("build_32_headers", |b| {
        b.iter(|| {
            let head = list::build(black_box(&headers)).unwrap();
            // SAFETY: the freshly built list has exactly one owner.
            head.map(|list| unsafe { ListHandle::from_raw(list) })
        });
    });
}

criterion_group!(benches, bench_compose, bench_build);
criterion_main!(benches);
