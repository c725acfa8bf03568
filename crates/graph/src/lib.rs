//! # Timeline Graph
//!
//! Causal graph construction and compression: the core of timeline
//! generation.
//!
//! ## Architecture
//!
//! ```text
//! CausalEvent[]
//!     │
//!     ├──> Graph Builder (semantic causal linking)
//!     │      ├─ Embed event summaries (one batch call)
//!     │      ├─ Resolve each causal agent against the summary index
//!     │      └─ Add cause -> effect edges weighted by link strength
//!     │
//!     ├──> Causal Graph (petgraph)
//!     │      ├─ Nodes: events, in input order
//!     │      └─ Edges: inferred causal links
//!     │
//!     └──> Compressor
//!            ├─ Weighted PageRank salience
//!            ├─ Top-K selection (hard cap, no score cutoff)
//!            └─ Chronological re-sort for presentation
//! ```
//!
//! The graph is built fresh per request, compressed once, and discarded.

mod builder;
mod compressor;
mod error;
mod timeline;
mod types;

pub use builder::{CausalGraphBuilder, SIMILARITY_THRESHOLD};
pub use compressor::{compress_timeline, page_rank};
pub use error::{GraphError, Result};
pub use timeline::{assemble_timeline, generate_causal_timeline, TimelineEntry};
pub use types::{CausalEdge, CausalGraph, EventNode};
