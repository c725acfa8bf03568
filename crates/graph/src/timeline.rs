use crate::builder::CausalGraphBuilder;
use crate::compressor::compress_timeline;
use crate::error::Result;
use serde::Serialize;
use timeline_events::CausalEvent;
use timeline_vector_store::EmbeddingProvider;

/// Build-and-compress in one call. Pure composition: the contract is the
/// sum of [`CausalGraphBuilder::build`] and [`compress_timeline`].
///
/// `Ok` with an empty vec means "nothing found"; `Err` means the pipeline
/// could not compute at all (embedding provider down, index failure).
pub fn generate_causal_timeline(
    events: &[CausalEvent],
    top_k: usize,
    provider: &dyn EmbeddingProvider,
) -> Result<Vec<CausalEvent>> {
    let graph = CausalGraphBuilder::new(provider).build(events)?;
    Ok(compress_timeline(&graph, top_k))
}

/// Presentation record for one compressed timeline event.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    /// Event date, falling back to the source document's date.
    pub date: Option<String>,

    pub summary: String,

    /// Source article URL.
    pub url: Option<String>,

    /// Causal agent, with the no-cause sentinel suppressed.
    pub causal_agent: Option<String>,
}

/// Project compressed events into display entries, preserving order.
pub fn assemble_timeline(events: &[CausalEvent]) -> Vec<TimelineEntry> {
    events
        .iter()
        .map(|event| TimelineEntry {
            date: event.display_date().map(str::to_string),
            summary: if event.has_summary() {
                event.milestone_summary.clone()
            } else {
                "Summary not available.".to_string()
            },
            url: event.source_url.clone(),
            causal_agent: event.asserted_cause().map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assembles_display_fields() {
        let events = vec![
            CausalEvent {
                milestone_summary: "Ceasefire announced.".to_string(),
                causal_agent: Some("border talks".to_string()),
                event_date: Some("2025-05-10".to_string()),
                source_url: Some("https://example.com/a".to_string()),
                ..CausalEvent::default()
            },
            CausalEvent {
                causal_agent: Some("none".to_string()),
                doc_date: Some("2025-05-09".to_string()),
                ..CausalEvent::default()
            },
        ];

        let entries = assemble_timeline(&events);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].date.as_deref(), Some("2025-05-10"));
        assert_eq!(entries[0].summary, "Ceasefire announced.");
        assert_eq!(entries[0].causal_agent.as_deref(), Some("border talks"));

        // Missing event date falls back to the doc date; sentinel agent
        // and empty summary get presentation defaults.
        assert_eq!(entries[1].date.as_deref(), Some("2025-05-09"));
        assert_eq!(entries[1].summary, "Summary not available.");
        assert_eq!(entries[1].causal_agent, None);
    }
}
