//! Block dispatch.
//!
//! Maps a normalized node onto zero or more editor blocks through a fixed
//! tag table. Handlers may recurse into children, producing nested output
//! that is flattened before being returned to the caller. A node whose tag
//! has no table entry contributes nothing beyond a diagnostic; siblings and
//! the overall conversion proceed unaffected.

use crate::blocks::{
    Alignment, Block, HeaderData, ImageData, ListData, ListStyle, ParagraphData, QuoteData, RawData,
};
use crate::converter::transform::{NormalizedNode, TagName};
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Handler output before flattening: a single block, or a nested run
/// produced by recursing into children.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Emit {
    Block(Block),
    Nested(Vec<Emit>),
}

/// Behavioral family a tag dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    /// Structural wrapper: no block of its own, recurse into children.
    Container,
    /// Paragraph-like content; degrades to container behavior when the node
    /// carries no text.
    Paragraph,
    Quote,
    Image,
    Heading { level: u8 },
    List { style: ListStyle },
    Raw,
}

/// The dispatch table: the closed tag set this conversion recognizes.
pub(crate) fn handler_for(tag: &TagName) -> Option<Handler> {
    use TagName::{
        Article, Aside, Blockquote, Body, Code, Div, Figure, Img, Main, Ol, Other, Picture, Pre,
        Section, Span, Ul, A, H1, H2, H3, H4, H5, H6, P,
    };

    let handler = match tag {
        P | A => Handler::Paragraph,
        Blockquote => Handler::Quote,
        Img => Handler::Image,
        Ul => Handler::List {
            style: ListStyle::Unordered,
        },
        Ol => Handler::List {
            style: ListStyle::Ordered,
        },
        Body | Main | Aside | Section | Div | Article | Span | Figure | Picture => {
            Handler::Container
        }
        Code | Pre => Handler::Raw,
        H1 => Handler::Heading { level: 1 },
        H2 => Handler::Heading { level: 2 },
        H3 => Handler::Heading { level: 3 },
        H4 => Handler::Heading { level: 4 },
        H5 => Handler::Heading { level: 5 },
        H6 => Handler::Heading { level: 6 },
        Other(_) => return None,
    };
    Some(handler)
}

/// Dispatches one node through the tag table.
pub(crate) fn dispatch(node: &NormalizedNode, diagnostics: &mut Vec<Diagnostic>) -> Vec<Emit> {
    match handler_for(&node.tag) {
        Some(handler) => handler.apply(node, diagnostics),
        None => {
            log::warn!("no handler for <{}>, dropping subtree", node.tag);
            diagnostics.push(Diagnostic {
                kind: DiagnosticKind::UnhandledTag,
                node: node.clone(),
            });
            Vec::new()
        }
    }
}

impl Handler {
    fn apply(self, node: &NormalizedNode, diagnostics: &mut Vec<Diagnostic>) -> Vec<Emit> {
        match self {
            Self::Container => container(node, diagnostics),
            Self::Paragraph => paragraph(node, diagnostics),
            Self::Quote => quote(node),
            Self::Image => image(node),
            Self::Heading { level } => heading(node, level),
            Self::List { style } => list(node, style),
            Self::Raw => raw(node),
        }
    }
}

fn container(node: &NormalizedNode, diagnostics: &mut Vec<Diagnostic>) -> Vec<Emit> {
    node.children
        .iter()
        .map(|child| Emit::Nested(dispatch(child, diagnostics)))
        .collect()
}

fn paragraph(node: &NormalizedNode, diagnostics: &mut Vec<Diagnostic>) -> Vec<Emit> {
    // An empty paragraph-like tag is a wrapper, not content.
    let Some(text) = node.text_content.as_ref() else {
        return container(node, diagnostics);
    };

    let text = if node.inner_markup.is_empty() {
        text.clone()
    } else {
        node.inner_markup.clone()
    };
    vec![Emit::Block(Block::Paragraph(ParagraphData { text }))]
}

fn quote(node: &NormalizedNode) -> Vec<Emit> {
    match node.text_content.as_ref() {
        Some(text) => vec![Emit::Block(Block::Quote(QuoteData {
            text: text.clone(),
            caption: None,
            alignment: Alignment::Left,
        }))],
        None => Vec::new(),
    }
}

fn image(node: &NormalizedNode) -> Vec<Emit> {
    let url = match node.attributes.get("src") {
        Some(src) if !src.is_empty() => src.clone(),
        _ => return Vec::new(),
    };
    let caption = node.attributes.get("alt").cloned().unwrap_or_default();
    vec![Emit::Block(Block::Image(ImageData {
        url,
        caption,
        with_border: false,
        with_background: false,
        stretched: false,
    }))]
}

fn heading(node: &NormalizedNode, level: u8) -> Vec<Emit> {
    if node.inner_markup.is_empty() {
        return Vec::new();
    }
    vec![Emit::Block(Block::Header(HeaderData {
        text: node.inner_markup.clone(),
        level,
    }))]
}

fn list(node: &NormalizedNode, style: ListStyle) -> Vec<Emit> {
    if node.inner_markup.is_empty() {
        return Vec::new();
    }
    let items = node
        .children
        .iter()
        .filter(|child| !child.inner_markup.is_empty())
        .map(|child| child.inner_markup.clone())
        .collect();
    vec![Emit::Block(Block::List(ListData { style, items }))]
}

fn raw(node: &NormalizedNode) -> Vec<Emit> {
    match node.text_content.as_ref() {
        Some(text) => vec![Emit::Block(Block::Raw(RawData {
            html: text.clone(),
        }))],
        None => Vec::new(),
    }
}

/// Collapses arbitrarily nested handler output into a flat block list.
pub(crate) fn flatten(emitted: Vec<Emit>) -> Vec<Block> {
    let mut blocks = Vec::new();
    flatten_into(emitted, &mut blocks);
    blocks
}

fn flatten_into(emitted: Vec<Emit>, blocks: &mut Vec<Block>) {
    for item in emitted {
        match item {
            Emit::Block(block) => blocks.push(block),
            Emit::Nested(nested) => flatten_into(nested, blocks),
        }
    }
}
