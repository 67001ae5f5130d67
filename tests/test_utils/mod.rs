#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rtree_index::{NodeView, RTree, Rectangle, CONTAINER_LEVEL};

pub type Entry = (usize, Rectangle);

//// Utility functions

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rectangle {
    Rectangle::new((x_min, y_min).into(), (x_max, y_max).into())
}

pub fn get_random_rects(universe: Rectangle, n: usize, max_size: f64, seed: u64) -> Vec<Entry> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let x = rng.gen_range(universe.x_min, universe.x_max - max_size);
            let y = rng.gen_range(universe.y_min, universe.y_max - max_size);
            let w = rng.gen_range(0., max_size);
            let h = rng.gen_range(0., max_size);
            (i, rect(x, y, x + w, y + h))
        })
        .collect()
}

pub fn get_random_queries(universe: Rectangle, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Rectangle::spanning(
                (
                    rng.gen_range(universe.x_min, universe.x_max),
                    rng.gen_range(universe.y_min, universe.y_max),
                )
                    .into(),
                (
                    rng.gen_range(universe.x_min, universe.x_max),
                    rng.gen_range(universe.y_min, universe.y_max),
                )
                    .into(),
            )
        })
        .collect()
}

pub fn get_results_brute_force(query: &Rectangle, entries: &[Entry]) -> Vec<usize> {
    entries
        .iter()
        .filter(|(_, r)| query.intersects(r))
        .map(|(i, _)| *i)
        .collect()
}

pub fn sorted_ids(results: Vec<&Entry>) -> Vec<usize> {
    let mut ids: Vec<usize> = results.into_iter().map(|(i, _)| *i).collect();
    ids.sort_unstable();
    ids
}

/// Check the structural invariants of the whole tree and return the number
/// of payloads found in it.
///
/// Every non-root branch holds exactly the MBR of its children; the root
/// covers its children's MBR. No node exceeds the fanout, and levels step
/// down by one until the containers at `CONTAINER_LEVEL`.
pub fn check_invariants<T>(tree: &RTree<T>) -> usize {
    let mut containers = 0;
    check_node(tree.root(), tree.degree(), true, &mut containers);
    assert_eq!(containers, tree.len(), "payload count mismatch");
    containers
}

fn check_node<T>(
    view: NodeView<'_, T>,
    max_per_level: usize,
    is_root: bool,
    containers: &mut usize,
) {
    if view.is_container() {
        *containers += 1;
        assert!(view.item().is_some());
        let envelope = view.item_envelope().unwrap();
        assert!(view.rect().contains(envelope), "container smaller than payload");
        return;
    }

    assert!(
        view.len() <= max_per_level,
        "node at level {} has {} children",
        view.level(),
        view.len()
    );
    let child_rects: Vec<Rectangle> = view.children().map(|c| c.rect()).collect();
    let mbr = Rectangle::of(&child_rects);
    if is_root {
        if !view.is_empty() {
            assert!(view.rect().contains(mbr), "root does not cover its children");
        }
    } else {
        assert!(!view.is_empty(), "empty branch at level {}", view.level());
        assert_eq!(view.rect(), mbr, "stale MBR at level {}", view.level());
    }

    let child_level = if view.level() == 0 {
        CONTAINER_LEVEL
    } else {
        view.level() - 1
    };
    for child in view.children() {
        assert_eq!(child.level(), child_level);
        check_node(child, max_per_level, false, containers);
    }
}
