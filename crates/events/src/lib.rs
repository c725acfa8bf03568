//! # Timeline Events
//!
//! Shared event data model for causal timeline generation, plus the thin
//! upstream collaborators that produce and persist events.
//!
//! ## Architecture
//!
//! ```text
//! Article text
//!     │
//!     ├──> Event Extractor (rule-based)
//!     │      ├─ Lead-sentence summary
//!     │      ├─ Causal-phrase scan -> causal agent
//!     │      └─ Link strength tag
//!     │
//!     ├──> CausalEvent
//!     │      ├─ milestone_summary / causal_agent / link strength
//!     │      ├─ event_date (YYYY-MM-DD, pre-normalized upstream)
//!     │      └─ passthrough fields (source URL, ...)
//!     │
//!     └──> Event Store (JSONL)
//!            └─ causal_events_*.jsonl, one record per line
//! ```

mod error;
mod extractor;
mod store;
mod types;

pub use error::{EventError, Result};
pub use extractor::EventExtractor;
pub use store::{latest_events_file, read_events, write_events, EVENTS_FILE_PREFIX};
pub use types::{CausalEvent, CausalLinkStrength, MISSING_DATE_SENTINEL};
