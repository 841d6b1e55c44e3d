//! Resolution by the node's identifier property
//!
//! Reads the node's license-id property under a strict cardinality
//! contract: the id must be present exactly once. A listed id or a
//! `LicenseRef-` id settles the node's kind; any other id is
//! inconclusive - the node may still describe a composite expression,
//! whose id carries no type information.

use crate::error::{ResolutionError, Result};
use crate::registry::ListedLicenses;
use crate::store::{self, GraphAccess};
use spdx_graph_ir::Term;
use spdx_vocab::spdx;

/// What the identifier property settled the node to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IdResolution {
    /// The id is a member of the listed-license catalog
    Listed(String),
    /// The id carries the reserved extracted-license prefix
    Extracted(String),
}

/// Check whether the node carries any license-id triple at all
///
/// The resolution contract below demands an id be present; callers that
/// merely *offer* the node to this strategy probe first.
pub(crate) fn has_license_id<G: GraphAccess>(graph: &G, node: &Term) -> bool {
    !store::property_values(graph, node, spdx::LICENSE_ID).is_empty()
}

pub(crate) fn resolve_by_id<G: GraphAccess>(
    graph: &G,
    registry: &ListedLicenses,
    node: &Term,
) -> Result<Option<IdResolution>> {
    let ids = store::property_values(graph, node, spdx::LICENSE_ID);
    match ids.as_slice() {
        [] => Err(ResolutionError::missing_property(format!(
            "no license id associated with node {node}"
        ))),
        [id] => {
            let id = store::object_text(id);
            if registry.is_listed_id(&id) {
                Ok(Some(IdResolution::Listed(id)))
            } else if id.starts_with(spdx::LICENSE_REF_PREFIX) {
                Ok(Some(IdResolution::Extracted(id)))
            } else {
                // Could be a conjunctive or disjunctive expression id.
                Ok(None)
            }
        }
        _ => Err(ResolutionError::ambiguous_property(format!(
            "more than one license id for node {node}"
        ))),
    }
}
