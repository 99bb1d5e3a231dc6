//! Walk `<input>/entries/*.xml` and hand each parsed record to a sink.

use crate::model::{EntryRecord, KindTally};
use crate::parser;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Subdirectory of the documentation checkout holding one XML file per entry.
pub const ENTRIES_DIR: &str = "entries";

/// What a completed walk saw.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub files: usize,
    pub kinds: KindTally,
}

/// Entry files under `<input>/entries`, sorted by file name.
pub fn list_entry_files(input: &Path) -> Result<Vec<PathBuf>> {
    let dir = input.join(ENTRIES_DIR);
    let entries = fs::read_dir(&dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let path = entry.path();
        let is_xml = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".xml"));
        if is_xml && path.is_file() {
            files.push(path);
        }
    }
    // Sort for deterministic output
    files.sort();
    Ok(files)
}

/// Parse every entry file and pass each record to `sink` as soon as it is
/// built. The first failure aborts the walk.
pub fn walk<F>(input: &Path, mut sink: F) -> Result<WalkSummary>
where
    F: FnMut(&EntryRecord) -> Result<()>,
{
    let mut summary = WalkSummary::default();

    for path in list_entry_files(input)? {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Parsing '{}' ...", file_name);

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let records = parser::parse_document(&content, &file_name, &mut summary.kinds)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        for record in &records {
            sink(record)?;
        }
        summary.files += 1;

        info!("Done parsing '{}'.", file_name);
    }

    Ok(summary)
}
