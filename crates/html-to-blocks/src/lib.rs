//! Convert parsed HTML fragments into typed editor content blocks.
//!
//! The pipeline has two stages. A tree normalizer reduces each parsed
//! element to a neutral record ([`NormalizedNode`]); a dispatcher then maps
//! every record onto zero or more [`Block`]s through a fixed tag table.
//! Structural wrappers flatten away, and unrecognized tags are dropped with
//! a [`Diagnostic`] instead of failing the call.
//!
//! ```
//! use html_to_blocks_rs::convert_fragment;
//!
//! let conversion = convert_fragment("<div><h2>Hi</h2><p>There</p></div>")?;
//! assert_eq!(conversion.blocks.len(), 2);
//! assert!(conversion.diagnostics.is_empty());
//! # Ok::<(), html_to_blocks_rs::ConversionError>(())
//! ```

pub mod blocks;
pub mod converter;
pub mod diagnostics;
pub mod error;

pub use blocks::{
    Alignment, Block, HeaderData, ImageData, ListData, ListStyle, ParagraphData, QuoteData, RawData,
};
pub use converter::transform::{NormalizedNode, TagName};
pub use converter::{convert_element, convert_fragment, convert_normalized, Conversion};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{ConversionError, Result};
