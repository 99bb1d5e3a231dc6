//! Small accessors over `roxmltree` nodes.
//!
//! Only direct children are ever selected, never descendants, so a nested
//! `<desc>` inside an `<argument>` is not mistaken for the entry's own.

use crate::error::ParseError;
use roxmltree::Node;

/// Direct child elements named `tag`, in document order.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |c| c.is_element() && c.has_tag_name(tag))
}

/// First direct child element named `tag`.
pub fn child<'a, 'input: 'a>(node: Node<'a, 'input>, tag: &'static str) -> Option<Node<'a, 'input>> {
    children(node, tag).next()
}

pub fn required_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> Result<Node<'a, 'input>, ParseError> {
    child(node, tag).ok_or_else(|| ParseError::MissingChild {
        element: describe(node),
        child: tag,
    })
}

/// Trimmed attribute value, `None` when the attribute is absent.
pub fn attr(node: Node, name: &str) -> Option<String> {
    node.attribute(name).map(|v| v.trim().to_string())
}

pub fn required_attr(node: Node, name: &'static str) -> Result<String, ParseError> {
    attr(node, name).ok_or_else(|| ParseError::MissingAttribute {
        element: describe(node),
        attribute: name,
    })
}

/// Concatenated text of every descendant text node, trimmed.
pub fn text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// The markup between the element's start and end tags, trimmed.
///
/// Tags, CDATA sections and comments are copied from the source as written.
/// Character references in text are decoded, except those for `<`, `>` and
/// `&`, which stay escaped so the result is still markup.
pub fn inner_markup(node: Node) -> String {
    let source = node.document().input_text();
    match source.get(node.range()) {
        Some(outer) => normalize_references(inner_of(outer)).trim().to_string(),
        None => String::new(),
    }
}

fn inner_of(outer: &str) -> &str {
    let Some(open_end) = start_tag_end(outer) else {
        return "";
    };
    if outer[..open_end].ends_with('/') {
        return "";
    }
    let body = &outer[open_end + 1..];
    match body.rfind("</") {
        Some(close) => &body[..close],
        None => "",
    }
}

/// Byte offset of the `>` closing the start tag, skipping quoted attribute values.
fn start_tag_end(outer: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in outer.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

fn normalize_references(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let consumed = if rest.starts_with('<') {
            let len = verbatim_len(rest);
            out.push_str(&rest[..len]);
            len
        } else {
            let (text, len) = decode_reference(rest);
            out.push_str(&text);
            len
        };
        rest = &rest[consumed..];
    }
    out.push_str(rest);
    out
}

/// Length of the tag, CDATA section, comment or processing instruction
/// starting at `s`.
fn verbatim_len(s: &str) -> usize {
    let end = if s.starts_with("<![CDATA[") {
        s.find("]]>").map(|i| i + 3)
    } else if s.starts_with("<!--") {
        s[4..].find("-->").map(|i| i + 7)
    } else if s.starts_with("<?") {
        s.find("?>").map(|i| i + 2)
    } else {
        start_tag_end(s).map(|i| i + 1)
    };
    end.unwrap_or(s.len())
}

/// Decode the reference starting at `s` (which begins with `&`). Returns the
/// replacement text and the number of bytes consumed.
fn decode_reference(s: &str) -> (String, usize) {
    let Some((semi, _)) = s.char_indices().take(12).find(|&(_, c)| c == ';') else {
        return ("&amp;".to_string(), 1);
    };
    let name = &s[1..semi];
    let decoded = match name {
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => name.strip_prefix('#').and_then(|num| {
            let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => num.parse::<u32>().ok(),
            };
            code.and_then(char::from_u32)
        }),
    };
    let text = match decoded {
        Some('<') => "&lt;".to_string(),
        Some('>') => "&gt;".to_string(),
        Some('&') => "&amp;".to_string(),
        Some(c) => c.to_string(),
        None => s[..=semi].to_string(),
    };
    (text, semi + 1)
}

/// `<argument name="x">`-style label used in error messages.
fn describe(node: Node) -> String {
    let tag = node.tag_name().name();
    match node.attribute("name") {
        Some(name) => format!("{} name=\"{}\"", tag, name),
        None => tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn with_root<F: FnOnce(Node)>(xml: &str, f: F) {
        let doc = Document::parse(xml).unwrap();
        f(doc.root_element());
    }

    #[test]
    fn inner_markup_keeps_nested_tags() {
        with_root("<desc>Get the <code>value</code> of it.</desc>", |node| {
            assert_eq!(inner_markup(node), "Get the <code>value</code> of it.");
        });
    }

    #[test]
    fn inner_markup_ignores_gt_in_attributes() {
        with_root(r#"<longdesc title="a > b">  <p>x</p>  </longdesc>"#, |node| {
            assert_eq!(inner_markup(node), "<p>x</p>");
        });
    }

    #[test]
    fn inner_markup_keeps_cdata_verbatim() {
        with_root("<code><![CDATA[if (a < b) {}]]></code>", |node| {
            assert_eq!(inner_markup(node), "<![CDATA[if (a < b) {}]]>");
        });
    }

    #[test]
    fn inner_markup_decodes_character_references() {
        with_root(
            "<desc>a &lt; b <b>x</b> &#x2019; &quot;q&quot; &#233;t&#xE9; &amp; &#60;</desc>",
            |node| {
                assert_eq!(
                    inner_markup(node),
                    "a &lt; b <b>x</b> \u{2019} \"q\" \u{e9}t\u{e9} &amp; &lt;"
                );
            },
        );
    }

    #[test]
    fn inner_markup_leaves_tags_and_cdata_alone() {
        with_root(
            r#"<desc><a title="&quot;x&quot;">&apos;y&apos;</a><![CDATA[&#233;]]><!-- &quot; --></desc>"#,
            |node| {
                assert_eq!(
                    inner_markup(node),
                    r#"<a title="&quot;x&quot;">'y'</a><![CDATA[&#233;]]><!-- &quot; -->"#
                );
            },
        );
    }

    #[test]
    fn inner_markup_of_empty_elements() {
        with_root("<sample/>", |node| assert_eq!(inner_markup(node), ""));
        with_root("<sample></sample>", |node| assert_eq!(inner_markup(node), ""));
    }

    #[test]
    fn text_collects_descendants() {
        with_root("<title>  <b>.each</b>() </title>", |node| {
            assert_eq!(text(node), ".each()");
        });
    }

    #[test]
    fn children_are_direct_only() {
        with_root(
            "<entry><desc>top</desc><signature><desc>nested</desc></signature></entry>",
            |node| {
                let descs: Vec<_> = children(node, "desc").map(text).collect();
                assert_eq!(descs, ["top"]);
            },
        );
    }

    #[test]
    fn attr_is_trimmed_and_optional() {
        with_root(r#"<argument name=" options " />"#, |node| {
            assert_eq!(attr(node, "name").as_deref(), Some("options"));
            assert_eq!(attr(node, "type"), None);
        });
    }

    #[test]
    fn missing_attribute_names_the_element() {
        with_root(r#"<argument type="String" />"#, |node| {
            let err = required_attr(node, "name").unwrap_err();
            assert_eq!(
                err.to_string(),
                "<argument> is missing required attribute `name`"
            );
        });
    }

    #[test]
    fn missing_child_names_the_element() {
        with_root(r#"<entry name="each"></entry>"#, |node| {
            let err = required_child(node, "title").unwrap_err();
            assert_eq!(
                err.to_string(),
                "<entry name=\"each\"> is missing required child <title>"
            );
        });
    }
}
