//! Graph generators for property-based tests.
//!
//! Each generator is driven by a seeded `SmallRng` so rstest cases can pin a
//! shape and seed while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, GraphShape};

const MIN_NODES: usize = 1;
const MAX_NODES: usize = 48;

/// Samples a shape and seed, then generates the fixture.
pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture of the requested shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let (friends, blocks) = match shape {
        GraphShape::Sparse => {
            let friends = sample_pairs(rng, node_count, 0.05);
            let blocks = disjoint_blocks(rng, node_count, &friends, 0.05);
            (friends, blocks)
        }
        GraphShape::Dense => {
            let friends = sample_pairs(rng, node_count, 0.85);
            let blocks = disjoint_blocks(rng, node_count, &friends, 0.5);
            (friends, blocks)
        }
        GraphShape::Clustered => clustered(rng, node_count),
        GraphShape::Star => {
            let friends: Vec<(usize, usize)> = (2..=node_count).map(|leaf| (1, leaf)).collect();
            let blocks = disjoint_blocks(rng, node_count, &friends, 0.1);
            (friends, blocks)
        }
        GraphShape::Multigraph => multigraph(rng, node_count),
    };
    GraphFixture {
        node_count,
        friends,
        blocks,
        shape,
    }
}

fn sample_pairs(rng: &mut SmallRng, node_count: usize, probability: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for left in 1..=node_count {
        for right in (left + 1)..=node_count {
            if rng.gen_bool(probability) {
                pairs.push(if rng.gen_bool(0.5) {
                    (left, right)
                } else {
                    (right, left)
                });
            }
        }
    }
    pairs.shuffle(rng);
    pairs
}

fn disjoint_blocks(
    rng: &mut SmallRng,
    node_count: usize,
    friends: &[(usize, usize)],
    probability: f64,
) -> Vec<(usize, usize)> {
    let taken: std::collections::HashSet<(usize, usize)> = friends
        .iter()
        .map(|&(left, right)| (left.min(right), left.max(right)))
        .collect();
    sample_pairs(rng, node_count, probability)
        .into_iter()
        .filter(|&(left, right)| !taken.contains(&(left.min(right), left.max(right))))
        .collect()
}

fn clustered(rng: &mut SmallRng, node_count: usize) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let groups = rng.gen_range(1..=node_count.min(6));
    let group_of = |node: usize| node % groups;
    let mut friends = Vec::new();
    let mut blocks = Vec::new();
    for left in 1..=node_count {
        for right in (left + 1)..=node_count {
            if group_of(left) == group_of(right) {
                if rng.gen_bool(0.4) {
                    friends.push((left, right));
                }
            } else if rng.gen_bool(0.2) {
                blocks.push((right, left));
            }
        }
    }
    friends.shuffle(rng);
    (friends, blocks)
}

fn multigraph(
    rng: &mut SmallRng,
    node_count: usize,
) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let edge_budget = node_count * 2;
    let random_pair = |rng: &mut SmallRng| {
        (
            rng.gen_range(1..=node_count),
            rng.gen_range(1..=node_count),
        )
    };
    let friends: Vec<(usize, usize)> = (0..edge_budget)
        .map(|_| random_pair(&mut *rng))
        .collect();
    let mut blocks: Vec<(usize, usize)> = (0..node_count)
        .map(|_| random_pair(&mut *rng))
        .collect();
    if let Some(&overlap) = friends.first() {
        blocks.push(overlap);
    }
    (friends, blocks)
}
