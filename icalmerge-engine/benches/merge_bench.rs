use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use icalmerge_engine::{merge_all, MergeConfig};
use icalmerge_index::IdentifierIndex;
use icalmerge_types::{CalendarEvent, Timestamp};

fn calendar(source: usize, events: usize) -> Vec<CalendarEvent> {
    (0..events)
        .map(|i| {
            CalendarEvent::new()
                .with_uid(format!("event-{i}@example.org"))
                .with_last_modified(Timestamp::from_unix((source * 1000 + i) as i64).unwrap())
        })
        .collect()
}

fn bench_index_store(c: &mut Criterion) {
    let keys: Vec<String> = (0..1500).map(|i| format!("event-{i}@example.org")).collect();

    c.bench_function("index_store_1500", |b| {
        b.iter(|| {
            let mut index = IdentifierIndex::with_capacity(2000).unwrap();
            for (i, key) in keys.iter().enumerate() {
                index.store(key, i).unwrap();
            }
            black_box(index.len())
        })
    });
}

fn bench_index_find(c: &mut Criterion) {
    let mut index = IdentifierIndex::with_capacity(2000).unwrap();
    for i in 0..1500 {
        index.store(&format!("event-{i}@example.org"), i).unwrap();
    }

    c.bench_function("index_find_hit", |b| {
        b.iter(|| index.find(black_box("event-750@example.org")))
    });
    c.bench_function("index_find_miss", |b| {
        b.iter(|| index.find(black_box("missing@example.org")))
    });
}

fn bench_merge_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_all");
    for sources in [2usize, 4, 8] {
        let input: Vec<Vec<CalendarEvent>> = (0..sources).map(|s| calendar(s, 200)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(sources), &input, |b, input| {
            b.iter(|| merge_all(MergeConfig::default(), input.clone()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_store, bench_index_find, bench_merge_sources);
criterion_main!(benches);
