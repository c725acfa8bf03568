use crate::error::Result;
use crate::types::CausalEvent;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Filename prefix for processed causal-event files.
pub const EVENTS_FILE_PREFIX: &str = "causal_events_";

const EVENTS_FILE_SUFFIX: &str = ".jsonl";

/// Load causal events from a JSONL file, one JSON object per line.
///
/// Malformed lines are skipped with a warning; a partially readable file is
/// never fatal.
pub fn read_events(path: impl AsRef<Path>) -> Result<Vec<CausalEvent>> {
    let raw = fs::read_to_string(path.as_ref())?;

    let mut events = Vec::new();
    let mut skipped = 0usize;
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<CausalEvent>(line) {
            Ok(event) => events.push(event),
            Err(err) => {
                skipped += 1;
                log::warn!("Skipping malformed event line: {err}");
            }
        }
    }

    log::info!(
        "Loaded {} events from {:?} ({} skipped)",
        events.len(),
        path.as_ref(),
        skipped
    );
    Ok(events)
}

/// Write causal events as JSONL, one compact object per line.
pub fn write_events(path: impl AsRef<Path>, events: &[CausalEvent]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path.as_ref())?;
    for event in events {
        serde_json::to_writer(&mut file, event)?;
        file.write_all(b"\n")?;
    }

    log::info!("Wrote {} events to {:?}", events.len(), path.as_ref());
    Ok(())
}

/// Newest `causal_events_*.jsonl` file under a processed-data directory,
/// by modification time. `None` when the directory is missing or holds no
/// matching file.
pub fn latest_events_file(dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(EVENTS_FILE_PREFIX) || !name.ends_with(EVENTS_FILE_SUFFIX) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().map_or(true, |(ts, _)| modified > *ts) {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
