//! Conversion pipeline.
//!
//! Normalizes a parsed element tree, dispatches every node to its block
//! handler through the fixed tag table, and flattens the nested handler
//! output into the final ordered block sequence.

pub(crate) mod handlers;
pub mod transform;

use crate::blocks::Block;
use crate::diagnostics::Diagnostic;
use crate::error::{ConversionError, Result};

use handlers::{dispatch, flatten};
use transform::NormalizedNode;

/// Result of one conversion call: the flat block sequence plus any warnings
/// raised along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversion {
    /// Ordered blocks extracted from the input.
    pub blocks: Vec<Block>,
    /// Non-fatal warnings describing content the conversion had to drop.
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts an HTML fragment into editor blocks.
///
/// Every top-level element of the fragment is dispatched through the tag
/// table, so a wrapped document (`<body>...</body>`) and a bare run of
/// sibling elements convert the same way. Parsing is the only fallible step;
/// the conversion itself always completes.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] when the input cannot be parsed
/// into an element tree.
pub fn convert_fragment(html: &str) -> Result<Conversion> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|_| ConversionError::ParseError("Failed to parse HTML".to_string()))?;
    let parser = dom.parser();

    let mut conversion = Conversion::default();
    for handle in dom.children() {
        let Some(node) = NormalizedNode::from_element(*handle, parser) else {
            continue;
        };
        let emitted = dispatch(&node, &mut conversion.diagnostics);
        conversion.blocks.extend(flatten(emitted));
    }
    Ok(conversion)
}

/// Converts one parsed element and its subtree into editor blocks.
///
/// Non-element handles (raw text, comments) convert to nothing.
#[must_use]
pub fn convert_element(handle: tl::NodeHandle, parser: &tl::Parser) -> Conversion {
    NormalizedNode::from_element(handle, parser)
        .as_ref()
        .map_or_else(Conversion::default, convert_normalized)
}

/// Converts an already normalized node.
///
/// This is the seam for callers that hold their own element tree: build a
/// [`NormalizedNode`] for it and dispatch from there.
#[must_use]
pub fn convert_normalized(node: &NormalizedNode) -> Conversion {
    let mut diagnostics = Vec::new();
    let emitted = dispatch(node, &mut diagnostics);
    Conversion {
        blocks: flatten(emitted),
        diagnostics,
    }
}
