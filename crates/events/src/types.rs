use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Sort key used for events without a date. Sorts FIRST under the
/// descending date order, so underdated recent events surface instead of
/// sinking to the bottom.
pub const MISSING_DATE_SENTINEL: &str = "9999-99-99";

/// Declared strength of the causal link between an event and its stated
/// causal agent. The tag is produced by the upstream extractor; anything it
/// emits outside the known set degrades to [`TemporalSequence`].
///
/// [`TemporalSequence`]: CausalLinkStrength::TemporalSequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CausalLinkStrength {
    /// A directly caused B.
    DirectCause,

    /// A made B possible without directly triggering it.
    EnablingCondition,

    /// A merely preceded B.
    #[default]
    TemporalSequence,
}

impl CausalLinkStrength {
    /// Edge weight used during graph construction.
    pub fn weight(self) -> f32 {
        match self {
            CausalLinkStrength::DirectCause => 1.0,
            CausalLinkStrength::EnablingCondition => 0.8,
            CausalLinkStrength::TemporalSequence => 0.5,
        }
    }

    /// Parse a wire tag; unrecognized tags map to the default.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "DIRECT_CAUSE" => CausalLinkStrength::DirectCause,
            "ENABLING_CONDITION" => CausalLinkStrength::EnablingCondition,
            _ => CausalLinkStrength::TemporalSequence,
        }
    }
}

impl<'de> Deserialize<'de> for CausalLinkStrength {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(CausalLinkStrength::from_tag(&raw))
    }
}

/// One candidate news milestone with its purported cause.
///
/// Unknown upstream fields are kept in `extra` and passed through opaquely;
/// graph logic never inspects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CausalEvent {
    /// Primary text representation. Events with an empty summary still get
    /// a graph node but can never originate or receive a similarity edge.
    #[serde(default)]
    pub milestone_summary: String,

    /// Free-text description of what is claimed to have caused this event.
    /// The literals "None"/"none" are a no-cause sentinel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causal_agent: Option<String>,

    /// Declared strength of the causal link; defaults to the weakest tag.
    #[serde(default)]
    pub causal_link_strength: CausalLinkStrength,

    /// Event date, pre-normalized to YYYY-MM-DD by upstream collaborators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,

    /// Publication date of the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_date: Option<String>,

    /// Source article URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Arbitrary passthrough fields, opaque to graph logic.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CausalEvent {
    /// Whether this event can participate in similarity-based edges.
    pub fn has_summary(&self) -> bool {
        !self.milestone_summary.is_empty()
    }

    /// The causal agent text, with the absent/empty/"None"/"none" sentinel
    /// collapsed to `None`. Sentinel comparison is case-sensitive against
    /// the two literals the upstream extractor emits.
    pub fn asserted_cause(&self) -> Option<&str> {
        match self.causal_agent.as_deref() {
            None | Some("") | Some("None") | Some("none") => None,
            Some(agent) => Some(agent),
        }
    }

    /// Date key for the final descending sort; missing or empty dates take
    /// the maximal sentinel and therefore sort first.
    pub fn sort_date(&self) -> &str {
        match self.event_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => MISSING_DATE_SENTINEL,
        }
    }

    /// Display date: the extracted event date, falling back to the source
    /// document's publication date.
    pub fn display_date(&self) -> Option<&str> {
        self.event_date.as_deref().or(self.doc_date.as_deref())
    }
}
