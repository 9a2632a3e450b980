use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use dynprog::FloydWarshall;

fn random_graph(nodes: usize, seed: u64) -> FloydWarshall {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut fw = FloydWarshall::new(nodes).unwrap();
    for i in 0..nodes {
        for j in 0..nodes {
            if i != j && rng.gen_bool(0.3) {
                fw.set_edge(i, j, rng.gen_range(1.0..100.0));
            }
        }
    }
    fw
}

fn bench_floyd(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    for nodes in [16, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            b.iter_batched(
                || random_graph(nodes, 42),
                |mut fw| {
                    fw.run();
                    black_box(fw.distance(0, nodes - 1))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_floyd);
criterion_main!(benches);
