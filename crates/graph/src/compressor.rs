use crate::types::CausalGraph;
use petgraph::visit::EdgeRef;
use timeline_events::CausalEvent;

/// PageRank damping factor.
const DAMPING: f64 = 0.85;
/// Convergence threshold on the max per-node score delta.
const CONVERGENCE: f64 = 1e-6;
/// Iteration cap for graphs that converge slowly.
const MAX_ITERATIONS: usize = 100;

/// Weighted PageRank over the causal graph, by power iteration.
///
/// Each node distributes its score across outgoing edges proportionally to
/// edge weight; dangling-node mass is redistributed uniformly. Scores sum
/// to 1, so isolated nodes keep the uniform baseline component.
pub fn page_rank(graph: &CausalGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut out_weight = vec![0.0f64; n];
    for edge in graph.graph.edge_references() {
        out_weight[edge.source().index()] += f64::from(edge.weight().weight);
    }

    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];

    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![0.0f64; n];
        for edge in graph.graph.edge_references() {
            let source = edge.source().index();
            let share = f64::from(edge.weight().weight) / out_weight[source];
            next[edge.target().index()] += scores[source] * share;
        }

        let dangling: f64 = (0..n)
            .filter(|&i| out_weight[i] <= f64::EPSILON)
            .map(|i| scores[i])
            .sum();
        let base = (1.0 - DAMPING) * uniform + DAMPING * dangling * uniform;

        let mut max_diff = 0.0f64;
        for (i, value) in next.iter_mut().enumerate() {
            *value = base + DAMPING * *value;
            max_diff = max_diff.max((*value - scores[i]).abs());
        }

        scores = next;
        if max_diff < CONVERGENCE {
            break;
        }
    }

    scores
}

/// Compress the graph to its `top_k` most salient events, re-sorted
/// chronologically for presentation.
///
/// Selection is a hard cap by salience rank, never a score cutoff; ties
/// break by node index ascending. The final sort is descending by event
/// date, with missing dates taking the maximal sentinel and therefore
/// appearing first.
pub fn compress_timeline(graph: &CausalGraph, top_k: usize) -> Vec<CausalEvent> {
    if graph.is_empty() {
        return Vec::new();
    }

    let scores = page_rank(graph);

    let mut ranked: Vec<usize> = (0..graph.node_count()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });

    let mut selected: Vec<CausalEvent> = ranked
        .into_iter()
        .take(top_k)
        .filter_map(|i| graph.event(petgraph::graph::NodeIndex::new(i)).cloned())
        .collect();

    // Stable sort: equal dates keep salience order.
    selected.sort_by(|a, b| b.sort_date().cmp(a.sort_date()));
    selected
}
