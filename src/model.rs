//! Records emitted into the `updates` array of the index document.
//!
//! Field order in each struct is the order keys appear in the JSON output.

use serde::Serialize;
use std::collections::BTreeMap;

/// One documented API member (method, property, selector, ...).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub name: String,
    pub url: String,
    pub title: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    pub summary_html: String,
    pub description_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<String>,
    pub signatures: Vec<SignatureRecord>,
    pub examples: Vec<ExampleRecord>,
    pub categories: Vec<String>,
    /// Always exactly one key, derived from `kind`.
    pub recognition_keys: Vec<String>,
}

/// One call pattern of an entry.
#[derive(Debug, Serialize)]
pub struct SignatureRecord {
    /// Version the signature was added in, empty when undeclared.
    pub added: String,
    pub args: Vec<ArgOrProperty>,
}

/// An argument or property declaration. Properties and callback arguments
/// nest, so this is a tree.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgOrProperty {
    pub name: String,
    pub possible_types: Vec<String>,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<ArgOrProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<ArgOrProperty>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRecord {
    pub description_html: String,
    pub code_html: String,
    pub example_html: String,
}

/// Every entry kind seen during a run, with how often it occurred.
#[derive(Debug, Default)]
pub struct KindTally {
    counts: BTreeMap<String, usize>,
}

impl KindTally {
    pub fn record(&mut self, kind: &str) {
        *self.counts.entry(kind.to_string()).or_insert(0) += 1;
    }

    /// Distinct kinds in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn count(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
