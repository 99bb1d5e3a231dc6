//! `<argument>` and `<property>` declarations.

use super::xml;
use crate::error::ParseError;
use crate::model::ArgOrProperty;
use roxmltree::Node;

/// Declared types of an argument or property.
///
/// A `type` attribute wins; otherwise every direct `<type name="...">` child
/// contributes one entry, in document order.
pub fn extract_types(node: Node) -> Vec<String> {
    if let Some(declared) = xml::attr(node, "type") {
        return vec![declared];
    }
    xml::children(node, "type")
        .filter_map(|t| xml::attr(t, "name"))
        .collect()
}

/// Normalize an argument or property node, recursing into the properties and
/// callback arguments it declares.
pub fn normalize(node: Node) -> Result<ArgOrProperty, ParseError> {
    let name = xml::required_attr(node, "name")?;
    let possible_types = extract_types(node);
    let optional = xml::attr(node, "optional").is_some_and(|v| v == "true");
    let description_html = xml::child(node, "desc").map(xml::inner_markup);
    let added = xml::attr(node, "added").filter(|v| !v.is_empty());

    Ok(ArgOrProperty {
        name,
        possible_types,
        optional,
        description_html,
        added,
        properties: normalize_nested(node, "property")?,
        arguments: normalize_nested(node, "argument")?,
    })
}

/// `None` rather than an empty list when the node has no such children.
fn normalize_nested(
    node: Node,
    tag: &'static str,
) -> Result<Option<Vec<ArgOrProperty>>, ParseError> {
    let nested = xml::children(node, tag)
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((!nested.is_empty()).then_some(nested))
}
