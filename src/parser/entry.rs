//! `<entry>` elements → [`EntryRecord`].

use super::{node, xml};
use crate::error::ParseError;
use crate::model::{EntryRecord, ExampleRecord, KindTally, SignatureRecord};
use roxmltree::Node;
use std::path::Path;

pub const BASE_URL: &str = "https://api.jquery.com/";

pub const RECOGNITION_KEY_PREFIX: &str =
    "com.solveforall.recognition.programming.web.javascript.jquery.";

/// Parse one entry element read from `file_name`, recording its kind.
pub fn parse_entry(
    entry: Node,
    file_name: &str,
    kinds: &mut KindTally,
) -> Result<EntryRecord, ParseError> {
    let kind = xml::required_attr(entry, "type")?;
    kinds.record(&kind);

    let name = xml::required_attr(entry, "name")?;
    let title = xml::text(xml::required_child(entry, "title")?);
    let summary_html = xml::inner_markup(xml::required_child(entry, "desc")?);
    let description_html = xml::inner_markup(xml::required_child(entry, "longdesc")?);

    let signatures = xml::children(entry, "signature")
        .map(parse_signature)
        .collect::<Result<Vec<_>, _>>()?;

    let examples = xml::children(entry, "example").map(parse_example).collect();

    // Categories without a slug are skipped.
    let categories = xml::children(entry, "category")
        .filter_map(|c| xml::attr(c, "slug"))
        .collect();

    let recognition_keys = vec![recognition_key(&kind)];

    Ok(EntryRecord {
        name,
        url: derive_url(file_name),
        title,
        kind,
        return_type: xml::attr(entry, "return"),
        summary_html,
        description_html,
        sample_html: xml::child(entry, "sample").map(xml::inner_markup),
        deprecated: xml::attr(entry, "deprecated"),
        removed: xml::attr(entry, "removed"),
        signatures,
        examples,
        categories,
        recognition_keys,
    })
}

fn parse_signature(sig: Node) -> Result<SignatureRecord, ParseError> {
    let added = xml::child(sig, "added").map(xml::text).unwrap_or_default();
    let args = xml::children(sig, "argument")
        .map(node::normalize)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SignatureRecord { added, args })
}

fn parse_example(example: Node) -> ExampleRecord {
    ExampleRecord {
        description_html: xml::child(example, "desc")
            .map(xml::inner_markup)
            .unwrap_or_default(),
        code_html: xml::child(example, "code")
            .map(xml::inner_markup)
            .unwrap_or_default(),
        example_html: xml::child(example, "html").map(xml::text).unwrap_or_default(),
    }
}

/// "entries/jQuery.browser.xml" → "https://api.jquery.com/jQuery.browser/"
pub fn derive_url(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{}{}/", BASE_URL, stem)
}

pub fn recognition_key(kind: &str) -> String {
    format!("{}{}", RECOGNITION_KEY_PREFIX, capitalize(kind))
}

/// Upper-case the first character, leave the rest alone.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
