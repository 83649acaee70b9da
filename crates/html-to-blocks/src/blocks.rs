//! Block records produced by a conversion.
//!
//! Blocks serialize in the shape a block-structured editor stores them: a
//! `type` discriminator plus a variant-specific payload under `data`.

use serde::{Deserialize, Serialize};

/// One typed unit of editor content.
///
/// Blocks are immutable value records; a conversion produces a fresh ordered
/// sequence of them with no identity beyond position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    /// Running text, possibly carrying inline markup.
    Paragraph(ParagraphData),
    /// A pulled-out quotation.
    Quote(QuoteData),
    /// A referenced image.
    Image(ImageData),
    /// A section heading.
    Header(HeaderData),
    /// An ordered or unordered list.
    List(ListData),
    /// Markup preserved verbatim.
    Raw(RawData),
}

/// Payload of [`Block::Raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawData {
    /// Markup preserved verbatim.
    pub html: String,
}

/// Payload of [`Block::Paragraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Paragraph text; may contain inline markup.
    pub text: String,
}

/// Payload of [`Block::Quote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteData {
    /// The quoted text.
    pub text: String,
    /// Optional attribution line, omitted from JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Horizontal alignment of the quote.
    pub alignment: Alignment,
}

/// Horizontal alignment of a [`Block::Quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-aligned.
    Left,
    /// Center-aligned.
    Center,
}

/// Payload of [`Block::Image`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// Source URL of the image.
    pub url: String,
    /// Caption text; empty when the source carried no `alt` text.
    pub caption: String,
    /// Whether the editor draws a border around the image.
    pub with_border: bool,
    /// Whether the editor draws a background behind the image.
    pub with_background: bool,
    /// Whether the image stretches to the full content width.
    pub stretched: bool,
}

/// Payload of [`Block::Header`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    /// Heading text; may contain inline markup.
    pub text: String,
    /// Heading depth, 1 through 6.
    pub level: u8,
}

/// Payload of [`Block::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    /// Numbering style of the list.
    pub style: ListStyle,
    /// One entry of inline markup per list item, in source order.
    pub items: Vec<String>,
}

/// Numbering style of a [`Block::List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Bulleted list.
    Unordered,
    /// Numbered list.
    Ordered,
}
