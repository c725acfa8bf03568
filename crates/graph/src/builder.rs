use crate::error::Result;
use crate::types::CausalGraph;
use petgraph::graph::NodeIndex;
use timeline_events::CausalEvent;
use timeline_vector_store::{EmbeddingProvider, FlatIndex};

/// Minimum similarity between a causal-agent phrase and a summary for an
/// edge to be inferred (strict: the score must exceed this).
pub const SIMILARITY_THRESHOLD: f32 = 0.65;

/// Neighbors requested per agent query. Two, not one: for small graphs the
/// top match is frequently the querying event itself or a numerically
/// identical duplicate.
const AGENT_NEIGHBORS: usize = 2;

/// Builds a directed, weighted causal graph over a sequence of events.
///
/// The embedding provider is an injected dependency; the builder holds no
/// ambient model state and a fresh similarity index is built per call.
pub struct CausalGraphBuilder<'a> {
    provider: &'a dyn EmbeddingProvider,
    use_second_match: bool,
}

impl<'a> CausalGraphBuilder<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider) -> Self {
        Self {
            provider,
            use_second_match: true,
        }
    }

    /// Whether agent resolution takes the second-ranked neighbor (default)
    /// or the best match.
    ///
    /// Taking the second result compensates for the agent text matching
    /// its own event's summary at rank 0. It also means that when the
    /// true cause IS the best match, the edge lands elsewhere; callers who
    /// want best-match semantics flip this instead of patching the search.
    pub fn use_second_match(mut self, enabled: bool) -> Self {
        self.use_second_match = enabled;
        self
    }

    /// Build the graph: one node per event in input order, then at most one
    /// inferred cause -> effect edge per event with an asserted cause.
    ///
    /// A batch embedding or index-construction failure is systemic and
    /// propagates; a failure while resolving one event's agent only costs
    /// that event its edge.
    pub fn build(&self, events: &[CausalEvent]) -> Result<CausalGraph> {
        let mut graph = CausalGraph::new();

        let nodes: Vec<NodeIndex> = events
            .iter()
            .map(|event| graph.add_event(event.clone()))
            .collect();

        // Positions of events that can participate in similarity edges,
        // mapping index-slot -> original index.
        let valid: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.has_summary())
            .map(|(i, _)| i)
            .collect();

        if valid.is_empty() {
            log::info!("No events with summaries; returning node-only graph");
            return Ok(graph);
        }

        let summaries: Vec<String> = valid
            .iter()
            .map(|&i| events[i].milestone_summary.clone())
            .collect();
        let vectors = self.provider.embed_batch(&summaries)?;
        let index = FlatIndex::build(vectors)?;

        for &i in &valid {
            let Some(agent) = events[i].asserted_cause() else {
                continue;
            };

            match self.resolve_cause(agent, &index, &valid) {
                Ok(Some((j, score))) if j != i => {
                    let weight = events[i].causal_link_strength.weight();
                    log::debug!("Causal edge {j} -> {i} (similarity {score:.3}, weight {weight})");
                    graph.add_causal_edge(nodes[j], nodes[i], weight);
                }
                Ok(_) => {}
                Err(err) => {
                    log::debug!("Skipping causal link for event {i}: {err}");
                }
            }
        }

        log::info!(
            "Built causal graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Resolve an agent phrase to the original index of its likeliest
    /// cause event, with the similarity score.
    fn resolve_cause(
        &self,
        agent: &str,
        index: &FlatIndex,
        valid: &[usize],
    ) -> Result<Option<(usize, f32)>> {
        let query = self.provider.embed(agent)?;
        let hits = index.search(&query, AGENT_NEIGHBORS)?;

        let rank = usize::from(self.use_second_match);
        let Some(&(slot, score)) = hits.get(rank) else {
            return Ok(None);
        };
        if score <= SIMILARITY_THRESHOLD {
            return Ok(None);
        }
        Ok(Some((valid[slot], score)))
    }
}
