#![allow(dead_code)]

use rtree_index::particle::Simulation;
use rtree_index::{LinearScan, RTree, Rectangle, SpatialIndex};

pub const WIDTH: f64 = 500.;
pub const HEIGHT: f64 = 500.;
pub const PARTICLE_SIZE: f64 = 10.;
pub const NEIGHBORHOOD: f64 = 50.;

pub type Entry = (usize, Rectangle);

pub fn particle_counts() -> Vec<usize> {
    (1..=5).map(|i| i * 100).collect()
}

pub fn make_simulation(num_particles: usize) -> Simulation {
    Simulation::new(num_particles, WIDTH, HEIGHT, PARTICLE_SIZE, 0)
}

pub fn make_rtree(max_per_level: usize) -> RTree<Entry> {
    RTree::new((0., 0.).into(), (WIDTH, HEIGHT).into(), max_per_level).unwrap()
}

pub fn make_linear() -> LinearScan<Entry> {
    LinearScan::new()
}

/// One neighborhood query per particle; returns the total hit count.
pub fn query_all<I: SpatialIndex<Entry>>(sim: &Simulation, index: &I) -> usize {
    (0..sim.particles.len())
        .map(|i| index.search(&sim.neighborhood(i, NEIGHBORHOOD)).unwrap().len())
        .sum()
}
