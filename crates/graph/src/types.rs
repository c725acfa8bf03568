use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use timeline_events::CausalEvent;

/// Node in the causal graph: one event, immutable after construction.
#[derive(Debug, Clone)]
pub struct EventNode {
    pub event: CausalEvent,
}

/// Directed causal edge, cause -> effect.
///
/// The weight always comes from the effect event's declared link strength
/// (1.0 / 0.8 / 0.5).
#[derive(Debug, Clone, Copy)]
pub struct CausalEdge {
    pub weight: f32,
}

/// Directed, weighted graph over candidate events.
///
/// Nodes are added in input order, so petgraph indices coincide with
/// positions in the input sequence; nodes are never removed once added.
pub struct CausalGraph {
    pub graph: DiGraph<EventNode, CausalEdge>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Add one event node; returns its index.
    pub fn add_event(&mut self, event: CausalEvent) -> NodeIndex {
        self.graph.add_node(EventNode { event })
    }

    /// Add a cause -> effect edge. A duplicate (cause, effect) pair
    /// overwrites the previous weight (last write wins).
    pub fn add_causal_edge(&mut self, cause: NodeIndex, effect: NodeIndex, weight: f32) {
        self.graph.update_edge(cause, effect, CausalEdge { weight });
    }

    /// Event payload at a node.
    pub fn event(&self, idx: NodeIndex) -> Option<&CausalEvent> {
        self.graph.node_weight(idx).map(|node| &node.event)
    }

    /// Weight of the cause -> effect edge, if present.
    pub fn edge_weight(&self, cause: NodeIndex, effect: NodeIndex) -> Option<f32> {
        self.graph
            .edges(cause)
            .find(|edge| edge.target() == effect)
            .map(|edge| edge.weight().weight)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for CausalGraph {
    fn default() -> Self {
        Self::new()
    }
}
