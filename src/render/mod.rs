//! Index document writer — fixed mapping header, streamed `updates` array.

mod header;

pub use header::INDEX_HEADER;

use crate::model::EntryRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const INDEX_TRAILER: &str = "\n]\n}\n";

/// Streams records into the `updates` array, one pretty-printed object at a
/// time, with `,\n` between consecutive records.
pub struct UpdatesWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> UpdatesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn push(&mut self, record: &EntryRecord) -> io::Result<()> {
        if self.written > 0 {
            self.out.write_all(b",\n")?;
        }
        serde_json::to_writer_pretty(&mut self.out, record)?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    fn into_inner(self) -> W {
        self.out
    }
}

/// Write a complete index document to `out`.
///
/// `body` receives the updates writer after the header has been written;
/// the trailer follows once it returns successfully.
pub fn write_document<W, F, T>(mut out: W, body: F) -> Result<T>
where
    W: Write,
    F: FnOnce(&mut UpdatesWriter<W>) -> Result<T>,
{
    out.write_all(INDEX_HEADER.as_bytes())
        .context("failed to write index header")?;

    let mut updates = UpdatesWriter::new(out);
    let value = body(&mut updates)?;

    let mut out = updates.into_inner();
    out.write_all(INDEX_TRAILER.as_bytes())
        .context("failed to write index trailer")?;
    out.flush().context("failed to flush index document")?;
    Ok(value)
}

/// Create (or truncate) `path` and write the index document into it.
///
/// The file handle is dropped on every return path, so a failing `body`
/// leaves a closed, truncated file behind.
pub fn write_index<F, T>(path: &Path, body: F) -> Result<T>
where
    F: FnOnce(&mut UpdatesWriter<BufWriter<File>>) -> Result<T>,
{
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_document(BufWriter::new(file), body)
        .with_context(|| format!("failed to write {}", path.display()))
}
