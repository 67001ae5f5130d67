mod utils;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use utils::{make_linear, make_rtree, make_simulation, particle_counts, query_all};

pub fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood_query");

    for num_particles in particle_counts() {
        let sim = make_simulation(num_particles);
        println!("Benchmarking {} particles", num_particles);

        let mut rtree = make_rtree(4);
        sim.rebuild(&mut rtree).unwrap();
        group.bench_function(BenchmarkId::new("rtree_query", num_particles), |b| {
            b.iter(|| query_all(&sim, &rtree))
        });

        let mut linear = make_linear();
        sim.rebuild(&mut linear).unwrap();
        group.bench_function(BenchmarkId::new("linear_query", num_particles), |b| {
            b.iter(|| query_all(&sim, &linear))
        });

        // One simulated tick: move everything, rebuild, query everyone.
        group.bench_function(BenchmarkId::new("rtree_tick", num_particles), |b| {
            b.iter_batched(
                || (sim.clone(), make_rtree(4)),
                |(mut sim, mut rtree)| {
                    sim.tick();
                    sim.rebuild(&mut rtree).unwrap();
                    query_all(&sim, &rtree)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, query_benchmark);

criterion_main!(benches);
