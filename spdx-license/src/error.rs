//! Error types for license node classification

use spdx_graph_ir::Term;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Errors raised while classifying a graph node as a license expression
///
/// Strategy-level "not applicable" outcomes are never represented here -
/// they are absorbed by the classifier and converted into continuation to
/// the next strategy. Every variant below indicates either malformed
/// graph data or an exhausted resolution policy, and propagates to the
/// caller unmodified.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// A required property is absent from the node
    #[error("missing property: {0}")]
    MissingProperty(String),

    /// A single-valued property carries more than one value
    #[error("ambiguous property: {0}")]
    AmbiguousProperty(String),

    /// The node's declared type is not a usable license type
    #[error("invalid license type: {0}")]
    InvalidType(String),

    /// The node's declared type has an unrecognized local name
    #[error("unknown license type '{0}'")]
    UnknownType(String),

    /// No resolution strategy produced a result for the node
    #[error("node {0} could not be resolved to a license expression")]
    UnresolvedNode(String),

    /// A composite expression's member graph cycles back on itself
    #[error("cyclic license expression involving node {0}")]
    CyclicExpression(String),

    /// The listed-license catalog has no entry, or could not be loaded
    #[error("listed license catalog lookup failed: {0}")]
    CatalogLookupFailed(String),
}

impl ResolutionError {
    /// Create a missing property error
    pub fn missing_property(msg: impl Into<String>) -> Self {
        ResolutionError::MissingProperty(msg.into())
    }

    /// Create an ambiguous property error
    pub fn ambiguous_property(msg: impl Into<String>) -> Self {
        ResolutionError::AmbiguousProperty(msg.into())
    }

    /// Create an invalid type error
    pub fn invalid_type(msg: impl Into<String>) -> Self {
        ResolutionError::InvalidType(msg.into())
    }

    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        ResolutionError::UnknownType(name.into())
    }

    /// Create an unresolved node error carrying the node's display form
    pub fn unresolved(node: &Term) -> Self {
        ResolutionError::UnresolvedNode(node.to_string())
    }

    /// Create a cyclic expression error carrying the node's display form
    pub fn cyclic(node: &Term) -> Self {
        ResolutionError::CyclicExpression(node.to_string())
    }

    /// Create a catalog lookup error
    pub fn catalog(msg: impl Into<String>) -> Self {
        ResolutionError::CatalogLookupFailed(msg.into())
    }
}
