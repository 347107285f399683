//! 表示等价性测试
//!
//! 对两种表示同步执行随机操作序列，逐步比较返回值和全部可观察状态。

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wgraph::{AdjacencyGraph, EdgeListGraph, Graph, Weight};

const LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const STEPS: usize = 500;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(&'static str),
    Set(&'static str, &'static str, Weight),
    Remove(&'static str),
}

fn random_op(rng: &mut StdRng) -> Op {
    let label = |rng: &mut StdRng| LABELS[rng.gen_range(0..LABELS.len())];
    match rng.gen_range(0..10) {
        0..=1 => Op::Add(label(rng)),
        2 => Op::Remove(label(rng)),
        _ => {
            let source = label(rng);
            let target = label(rng);
            // 包含负权重与 0 权重
            Op::Set(source, target, rng.gen_range(-1..=4))
        }
    }
}

fn apply<G: Graph<&'static str>>(graph: &mut G, op: Op) -> String {
    match op {
        Op::Add(v) => format!("{:?}", graph.add(v)),
        Op::Set(s, t, w) => format!("{:?}", graph.set(s, t, w)),
        Op::Remove(v) => format!("{:?}", graph.remove(&v)),
    }
}

fn assert_same_state(a: &impl Graph<&'static str>, b: &impl Graph<&'static str>, step: usize) {
    assert_eq!(a.vertices(), b.vertices(), "步骤 {} 顶点集合不一致", step);
    for label in LABELS {
        assert_eq!(
            a.sources(&label),
            b.sources(&label),
            "步骤 {} sources({}) 不一致",
            step,
            label
        );
        assert_eq!(
            a.targets(&label),
            b.targets(&label),
            "步骤 {} targets({}) 不一致",
            step,
            label
        );
        assert_eq!(a.contains(&label), b.contains(&label));
    }
}

fn run_lockstep(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edge_list = EdgeListGraph::new();
    let mut adjacency = AdjacencyGraph::new();

    for step in 0..STEPS {
        let op = random_op(&mut rng);
        let left = apply(&mut edge_list, op);
        let right = apply(&mut adjacency, op);
        assert_eq!(left, right, "种子 {} 步骤 {} 操作 {:?} 返回值不一致", seed, step, op);
        assert_same_state(&edge_list, &adjacency, step);
    }

    assert_eq!(edge_list.vertex_count(), adjacency.vertex_count());
    assert_eq!(edge_list.edge_count(), adjacency.edge_count());
}

#[test]
fn test_random_sequences_agree() {
    common::init_tracing();
    for seed in 0..32 {
        run_lockstep(seed);
    }
}

#[test]
fn test_sources_and_targets_agree_with_edge_records() {
    common::init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = EdgeListGraph::new();
    for _ in 0..STEPS {
        apply(&mut graph, random_op(&mut rng));
    }

    let total: usize = LABELS.iter().map(|l| graph.targets(l).len()).sum();
    assert_eq!(total, graph.edge_count());
    for edge in graph.edges() {
        assert_eq!(graph.sources(edge.target()).get(edge.source()), Some(&edge.weight()));
        assert_eq!(graph.targets(edge.source()).get(edge.target()), Some(&edge.weight()));
    }
}

#[test]
fn test_adjacency_edge_count_matches_targets() {
    common::init_tracing();
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph = AdjacencyGraph::new();
    for _ in 0..STEPS {
        apply(&mut graph, random_op(&mut rng));
    }

    let outgoing: usize = LABELS.iter().map(|l| graph.targets(l).len()).sum();
    let incoming: usize = LABELS.iter().map(|l| graph.sources(l).len()).sum();
    assert_eq!(outgoing, graph.edge_count());
    assert_eq!(incoming, graph.edge_count());
}
