//! SVG document loading.
//!
//! Parses one diagram into a lightweight in-memory tree. Only what the
//! indexer needs is retained per element: the raw tag name, the `id` and
//! `class` attributes, and the children in document order. Text, comments,
//! and all other attributes are discarded during parsing.

use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

use super::side::Side;
use crate::error::IndexError;

/// One element of a parsed diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Tag name as written in the source, namespace qualifier included.
    pub tag: String,
    /// The `id` attribute, if present.
    pub id: Option<String>,
    /// The raw `class` attribute, if present (not yet tokenized).
    pub class: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

/// Strip a namespace qualifier from a tag name.
///
/// Handles both the brace-wrapped URI form (`{http://www.w3.org/2000/svg}g`)
/// and the prefix form an event parser reports (`svg:g`). Unqualified names
/// pass through unchanged.
pub fn strip_namespace(tag: &str) -> &str {
    if let Some(rest) = tag.strip_prefix('{') {
        rest.split_once('}').map_or(tag, |(_, local)| local)
    } else {
        tag.rsplit_once(':').map_or(tag, |(_, local)| local)
    }
}

/// Load one diagram and resolve its side label.
///
/// An explicit `side_hint` wins verbatim; otherwise the side is inferred
/// from the file name (see [`Side::infer`]).
///
/// Fails with [`IndexError::NotFound`] when `path` is not an existing file
/// and [`IndexError::Parse`] when the content is not well-formed XML. Both
/// are fatal; nothing is retried.
pub fn load(path: &Path, side_hint: Option<Side>) -> Result<(Element, Side), IndexError> {
    if !path.is_file() {
        return Err(IndexError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let root = parse_str(&text).map_err(|err| IndexError::Parse {
        path: path.to_path_buf(),
        detail: format!("{err:#}"),
    })?;

    let side = side_hint.unwrap_or_else(|| Side::infer(path));
    Ok((root, side))
}

/// Parse an XML document into its root [`Element`].
///
/// The whole document is held in memory; target diagrams are small,
/// hand-authored files, not arbitrary-scale XML.
pub fn parse_str(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);

    // Open elements between the root and the current parse position.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => bail!(
                "XML parse error at position {}: {err}",
                reader.error_position()
            ),
        };
        match event {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // quick-xml validates that the closing name matches.
                let Some(element) = stack.pop() else {
                    bail!("closing tag without a matching opening tag");
                };
                attach(element, &mut stack, &mut root)?;
            }
            Event::Eof => break,
            // Text, CDATA, comments, PIs, declarations: structurally irrelevant.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        bail!("unexpected end of document inside <{}>", open.tag);
    }
    match root {
        Some(root) => Ok(root),
        None => bail!("document has no root element"),
    }
}

/// Finish one element: append to its parent, or install it as the root.
fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        bail!("junk after document element: <{}>", element.tag);
    } else {
        *root = Some(element);
    }
    Ok(())
}

/// Build an [`Element`] from an opening tag, keeping only `id` and `class`.
fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut id = None;
    let mut class = None;
    for attr in start.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"id" => id = Some(attr.unescape_value()?.into_owned()),
            b"class" => class = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    Ok(Element {
        tag,
        id,
        class,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strip_namespace_brace_form() {
        assert_eq!(strip_namespace("{http://www.w3.org/2000/svg}g"), "g");
        assert_eq!(strip_namespace("{urn:x}path"), "path");
    }

    #[test]
    fn test_strip_namespace_prefix_form() {
        assert_eq!(strip_namespace("svg:g"), "g");
        assert_eq!(strip_namespace("g"), "g");
        assert_eq!(strip_namespace(""), "");
    }

    #[test]
    fn test_parse_nested_structure() {
        let root = parse_str(r#"<svg id="torso"><g id="chest"><g class="muscle"/></g></svg>"#)
            .unwrap();

        assert_eq!(root.tag, "svg");
        assert_eq!(root.id.as_deref(), Some("torso"));
        assert_eq!(root.children.len(), 1);

        let chest = &root.children[0];
        assert_eq!(chest.id.as_deref(), Some("chest"));
        assert_eq!(chest.children[0].class.as_deref(), Some("muscle"));
    }

    #[test]
    fn test_parse_ignores_text_and_comments() {
        let root = parse_str("<svg><!-- note --><g>label text</g></svg>").unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "g");
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_parse_unescapes_attributes() {
        let root = parse_str(r#"<svg id="a&amp;b"/>"#).unwrap();
        assert_eq!(root.id.as_deref(), Some("a&b"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_str("<svg><g></svg>").is_err());
        assert!(parse_str("<svg>").is_err());
        assert!(parse_str("").is_err());
        assert!(parse_str("<a/><b/>").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/torso.svg"), None).unwrap_err();
        assert!(matches!(err, IndexError::NotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_load_parse_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("torso.svg");
        fs::write(&path, "<svg><g></svg>").unwrap();

        let err = load(&path, None).unwrap_err();
        assert!(matches!(err, IndexError::Parse { .. }));
        assert!(format!("{err}").contains("torso.svg"));
    }

    #[test]
    fn test_load_side_resolution() {
        let dir = TempDir::new().unwrap();
        let front = dir.path().join("torso.svg");
        let back = dir.path().join("torso_back.svg");
        fs::write(&front, "<svg/>").unwrap();
        fs::write(&back, "<svg/>").unwrap();

        let (_, side) = load(&front, None).unwrap();
        assert_eq!(side, Side::Front);

        let (_, side) = load(&back, None).unwrap();
        assert_eq!(side, Side::Back);

        // An explicit hint overrides the file-name heuristic.
        let (_, side) = load(&front, Some(Side::Back)).unwrap();
        assert_eq!(side, Side::Back);
    }
}
