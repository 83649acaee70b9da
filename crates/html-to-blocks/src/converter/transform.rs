//! Tree normalization.
//!
//! Reduces a parsed element subtree to a neutral, introspectable record
//! before block dispatch: tag identity, text content, inner markup, an
//! attribute map and the direct element children, recursively for the whole
//! subtree. Normalization is total over element nodes and never mutates the
//! parsed tree.

use std::collections::BTreeMap;
use std::fmt;

/// Identity of an element tag, normalized to a closed set.
///
/// Tag names compare case-insensitively; anything outside the recognized set
/// is preserved under [`TagName::Other`] so dispatch can report it instead of
/// failing on a missing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagName {
    /// `<p>`
    P,
    /// `<a>`
    A,
    /// `<blockquote>`
    Blockquote,
    /// `<img>`
    Img,
    /// `<ul>`
    Ul,
    /// `<ol>`
    Ol,
    /// `<body>`
    Body,
    /// `<main>`
    Main,
    /// `<aside>`
    Aside,
    /// `<section>`
    Section,
    /// `<div>`
    Div,
    /// `<article>`
    Article,
    /// `<span>`
    Span,
    /// `<figure>`
    Figure,
    /// `<picture>`
    Picture,
    /// `<code>`
    Code,
    /// `<pre>`
    Pre,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// Any tag outside the recognized set, carrying its uppercased name.
    Other(String),
}

impl TagName {
    /// Normalizes a raw tag name from the parsed source.
    #[must_use]
    pub fn from_raw(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "P" => Self::P,
            "A" => Self::A,
            "BLOCKQUOTE" => Self::Blockquote,
            "IMG" => Self::Img,
            "UL" => Self::Ul,
            "OL" => Self::Ol,
            "BODY" => Self::Body,
            "MAIN" => Self::Main,
            "ASIDE" => Self::Aside,
            "SECTION" => Self::Section,
            "DIV" => Self::Div,
            "ARTICLE" => Self::Article,
            "SPAN" => Self::Span,
            "FIGURE" => Self::Figure,
            "PICTURE" => Self::Picture,
            "CODE" => Self::Code,
            "PRE" => Self::Pre,
            "H1" => Self::H1,
            "H2" => Self::H2,
            "H3" => Self::H3,
            "H4" => Self::H4,
            "H5" => Self::H5,
            "H6" => Self::H6,
            other => Self::Other(other.to_string()),
        }
    }

    /// Uppercase token form of the tag, as reported in diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::P => "P",
            Self::A => "A",
            Self::Blockquote => "BLOCKQUOTE",
            Self::Img => "IMG",
            Self::Ul => "UL",
            Self::Ol => "OL",
            Self::Body => "BODY",
            Self::Main => "MAIN",
            Self::Aside => "ASIDE",
            Self::Section => "SECTION",
            Self::Div => "DIV",
            Self::Article => "ARTICLE",
            Self::Span => "SPAN",
            Self::Figure => "FIGURE",
            Self::Picture => "PICTURE",
            Self::Code => "CODE",
            Self::Pre => "PRE",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
            Self::H5 => "H5",
            Self::H6 => "H6",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Neutral representation of one element and its subtree.
///
/// Extraction rules:
/// - `text_content` folds the full descendant text and collapses the empty
///   string to `None`, so handlers treat absence and "no content" the same.
/// - `inner_markup` stays an empty string when the node has no child content;
///   handlers that need "has markup" semantics check emptiness themselves.
///
/// The struct is plain data with public fields: hosts that hold their own
/// element tree can build one by hand and enter the pipeline at the dispatch
/// stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNode {
    /// Normalized tag identity.
    pub tag: TagName,
    /// Concatenated text of the node and all descendants, `None` when empty.
    pub text_content: Option<String>,
    /// Serialized markup of the node's children, possibly empty.
    pub inner_markup: String,
    /// Attribute name to value mapping; valueless attributes map to `""`.
    pub attributes: BTreeMap<String, String>,
    /// Direct element children in source order. Text runs and comments are
    /// not represented as children.
    pub children: Vec<NormalizedNode>,
}

impl NormalizedNode {
    /// Normalizes one parsed element and every element below it.
    ///
    /// Returns `None` when the handle does not point at an element; raw text
    /// and comment nodes have no record of their own.
    #[must_use]
    pub fn from_element(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Self> {
        let tl::Node::Tag(tag) = handle.get(parser)? else {
            return None;
        };

        let text = tag.inner_text(parser);
        let attributes = tag
            .attributes()
            .iter()
            .map(|(name, value)| (name.into_owned(), value.map(std::borrow::Cow::into_owned).unwrap_or_default()))
            .collect();
        let children = tag.children();
        let children = children
            .top()
            .iter()
            .filter_map(|child| Self::from_element(*child, parser))
            .collect();

        Some(Self {
            tag: TagName::from_raw(&tag.name().as_utf8_str()),
            text_content: (!text.is_empty()).then(|| text.into_owned()),
            inner_markup: serialize_children(tag, parser),
            attributes,
            children,
        })
    }
}

/// Serializes the direct children of a tag back into markup.
///
/// `tl` hands out parsed structure only, so the markup is rebuilt from tag
/// names, attributes and raw text runs. Comments are kept verbatim, matching
/// what an `innerHTML` read on the source element would produce.
fn serialize_children(tag: &tl::HTMLTag, parser: &tl::Parser) -> String {
    let mut markup = String::new();
    let children = tag.children();
    for child in children.top().iter() {
        serialize_node(*child, parser, &mut markup);
    }
    markup
}

fn serialize_node(handle: tl::NodeHandle, parser: &tl::Parser, out: &mut String) {
    match handle.get(parser) {
        Some(tl::Node::Tag(tag)) => {
            let name = tag.name().as_utf8_str();
            out.push('<');
            out.push_str(&name);
            for (attr, value) in tag.attributes().iter() {
                out.push(' ');
                out.push_str(&attr);
                if let Some(value) = value {
                    out.push_str("=\"");
                    out.push_str(&value);
                    out.push('"');
                }
            }
            out.push('>');
            if !is_void_element(&name) {
                let children = tag.children();
                for child in children.top().iter() {
                    serialize_node(*child, parser, out);
                }
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
        }
        Some(tl::Node::Raw(text)) => out.push_str(&text.as_utf8_str()),
        Some(tl::Node::Comment(comment)) => out.push_str(&comment.as_utf8_str()),
        None => {}
    }
}

/// Void elements never take a closing tag.
fn is_void_element(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}
