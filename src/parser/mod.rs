//! Parser module — entry XML files into [`EntryRecord`]s.

pub mod entry;
pub mod node;
pub mod xml;

use crate::error::ParseError;
use crate::model::{EntryRecord, KindTally};
use roxmltree::{Document, ParsingOptions};

/// Parse every `<entry>` in an entry file, in document order.
///
/// Files usually hold a single entry as the root element; some wrap several
/// in `<entries>`.
pub fn parse_document(
    source: &str,
    file_name: &str,
    kinds: &mut KindTally,
) -> Result<Vec<EntryRecord>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(source, options)?;

    doc.descendants()
        .filter(|n| n.is_element() && n.has_tag_name("entry"))
        .map(|n| entry::parse_entry(n, file_name, kinds))
        .collect()
}
