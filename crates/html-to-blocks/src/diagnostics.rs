//! Non-fatal conversion warnings.
//!
//! Unrecognized input never aborts a conversion. The affected subtree
//! contributes no blocks and is reported here instead, so callers can log,
//! collect, or ignore the loss as they see fit.

use std::fmt;

use crate::converter::transform::NormalizedNode;

/// A warning raised while converting, carrying the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Classification of the warning.
    pub kind: DiagnosticKind,
    /// The normalized node the conversion could not place.
    pub node: NormalizedNode,
}

/// Classification of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// The node's tag has no entry in the dispatch table.
    UnhandledTag,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnhandledTag => {
                write!(f, "no handler for <{}>, subtree dropped", self.node.tag)
            }
        }
    }
}
