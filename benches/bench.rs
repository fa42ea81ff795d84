// Criterion benchmarks for the explore service

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use explore_service::core::filters::filter_new_likers;
use explore_service::models::{Decision, Liker};

fn create_likers(count: usize) -> Vec<Liker> {
    (0..count)
        .map(|i| Liker {
            actor_id: format!("user{}", i),
            timestamp: Utc::now(),
        })
        .collect()
}

fn create_given(count: usize) -> Vec<Decision> {
    (0..count)
        .map(|i| Decision {
            actor_id: "recipient".to_string(),
            target_id: format!("user{}", i * 2),
            liked: i % 3 != 0,
            timestamp: Utc::now(),
        })
        .collect()
}

fn bench_filter_new_likers(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_new_likers");
    let received = create_likers(50);

    for given_count in [0usize, 100, 1_000, 10_000] {
        let given = create_given(given_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(given_count),
            &given,
            |b, given| {
                b.iter(|| filter_new_likers(black_box(received.clone()), black_box(given)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter_new_likers);
criterion_main!(benches);
