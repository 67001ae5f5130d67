mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use utils::{make_linear, make_rtree, make_simulation, particle_counts};

pub fn rebuild_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");

    for num_particles in particle_counts() {
        let sim = make_simulation(num_particles);
        for &degree in [4, 8, 16].iter() {
            let mut rtree = make_rtree(degree);
            group.bench_with_input(
                BenchmarkId::new(format!("rtree_rebuild.{}", degree), num_particles),
                &num_particles,
                |b, _| b.iter(|| sim.rebuild(&mut rtree).unwrap()),
            );
        }

        let mut linear = make_linear();
        group.bench_with_input(
            BenchmarkId::new("linear_rebuild", num_particles),
            &num_particles,
            |b, _| b.iter(|| sim.rebuild(&mut linear).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, rebuild_benchmark);

criterion_main!(benches);
