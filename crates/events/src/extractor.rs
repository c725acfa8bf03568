use crate::error::Result;
use crate::types::{CausalEvent, CausalLinkStrength};
use regex::Regex;

/// Date the extractor stamps on events when it cannot determine one; callers
/// replace it with the document date via [`EventExtractor::anchor_dates`].
const PLACEHOLDER_DATE: &str = "2025-01-01";

/// Unfilled-template value some upstream tools leak into the date field.
const TEMPLATE_DATE: &str = "YYYY-MM-DD";

/// Surface phrases that signal an explicit cause in the article text.
const CAUSAL_PHRASES: &[&str] = &["due to", "following the", "in response to", "after the"];

/// Maximum summary length when the chunk has no sentence boundary.
const SUMMARY_FALLBACK_CHARS: usize = 100;

/// Rule-based causal-event extraction.
///
/// Stands in for a language-model call: lead-sentence summary, a scan for
/// causal surface phrases, and a link-strength tag. Intended to be swapped
/// for a model-backed extractor without changing the event contract.
pub struct EventExtractor {
    sentence_end: Regex,
    topic: String,
}

impl EventExtractor {
    pub fn new(topic: impl Into<String>) -> Result<Self> {
        Ok(Self {
            sentence_end: Regex::new(r"[.!?]\s")?,
            topic: topic.into(),
        })
    }

    /// Extract a structured causal event from one article text chunk.
    ///
    /// The event date is a placeholder until [`anchor_dates`] runs.
    ///
    /// [`anchor_dates`]: EventExtractor::anchor_dates
    pub fn extract(&self, text_chunk: &str) -> CausalEvent {
        let milestone_summary = self.lead_sentence(text_chunk);

        let lowered = text_chunk.to_lowercase();
        let (causal_agent, causal_link_strength) = match CAUSAL_PHRASES
            .iter()
            .find(|phrase| lowered.contains(*phrase))
        {
            Some(phrase) => (
                format!("Preceding event related to '{phrase}'"),
                CausalLinkStrength::EnablingCondition,
            ),
            None => (
                format!("General {} development", self.topic),
                CausalLinkStrength::TemporalSequence,
            ),
        };

        CausalEvent {
            milestone_summary,
            causal_agent: Some(causal_agent),
            causal_link_strength,
            event_date: Some(PLACEHOLDER_DATE.to_string()),
            ..CausalEvent::default()
        }
    }

    /// Replace a placeholder or absent event date with the source document's
    /// date, and record the document date itself.
    pub fn anchor_dates(&self, mut event: CausalEvent, doc_date: Option<&str>) -> CausalEvent {
        let needs_anchor = matches!(
            event.event_date.as_deref(),
            None | Some("") | Some(PLACEHOLDER_DATE) | Some(TEMPLATE_DATE)
        );
        if needs_anchor {
            event.event_date = doc_date.map(str::to_string);
        }
        event.doc_date = doc_date.map(str::to_string);
        event
    }

    /// First sentence of the chunk; truncated raw text when no boundary.
    fn lead_sentence(&self, text: &str) -> String {
        let trimmed = text.trim();
        if let Some(found) = self.sentence_end.find(trimmed) {
            // Boundary punctuation is ASCII, so +1 stays on a char boundary.
            return trimmed[..found.start() + 1].to_string();
        }
        if trimmed.chars().count() > SUMMARY_FALLBACK_CHARS {
            let head: String = trimmed.chars().take(SUMMARY_FALLBACK_CHARS).collect();
            return format!("{head}...");
        }
        trimmed.to_string()
    }
}
