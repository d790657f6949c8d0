use std::collections::BTreeMap;

use roxmltree::{Document, Node, ParsingOptions, TextPos};
use sb_core::{SourceLocation, SourceSpan, StoryboardError};

/// Owned element tree of a storyboard file.
///
/// Interface Builder output carries everything in attributes, so character
/// data, comments and processing instructions are dropped while lowering.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root: XmlElementNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XmlElementNode {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlElementNode>,
    pub location: SourceSpan,
}

impl XmlElementNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, treating an empty string the same as a missing one.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|value| !value.is_empty())
    }
}

pub fn parse_xml_document(source: &str) -> Result<XmlDocument, StoryboardError> {
    // Xcode writes a `<!DOCTYPE document>` line on some older files.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options).map_err(|error| {
        let at = location(error.pos());
        StoryboardError::with_span(
            "XML_PARSE_ERROR",
            error.to_string(),
            SourceSpan {
                start: at.clone(),
                end: at,
            },
        )
    })?;

    let root = document.root_element();
    Ok(XmlDocument {
        root: lower(&document, root),
    })
}

fn lower(document: &Document<'_>, node: Node<'_, '_>) -> XmlElementNode {
    let range = node.range();
    XmlElementNode {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attribute| (attribute.name().to_string(), attribute.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(Node::is_element)
            .map(|child| lower(document, child))
            .collect(),
        location: SourceSpan {
            start: location(document.text_pos_at(range.start)),
            end: location(document.text_pos_at(range.end)),
        },
    }
}

fn location(pos: TextPos) -> SourceLocation {
    SourceLocation {
        line: pos.row as usize,
        column: pos.col as usize,
    }
}
