//! Resolution by the node's declared rdf:type
//!
//! The only strategy that recognizes composite expressions. A declared
//! type must be unique, must be a URI, and must be rooted under the SPDX
//! terms namespace; its local name is then matched against a closed table
//! of license type names. An absent type is inconclusive - the node may
//! be resolved some other way.

use crate::error::{ResolutionError, Result};
use crate::store::{self, GraphAccess};
use spdx_graph_ir::Term;
use spdx_vocab::{rdf, spdx, spdx_names};

/// The license type table: declared local name -> expression kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LicenseType {
    Conjunctive,
    Disjunctive,
    Extracted,
    Listed,
    OrLater,
    WithException,
}

pub(crate) fn resolve_type<G: GraphAccess>(graph: &G, node: &Term) -> Result<Option<LicenseType>> {
    let types = store::property_values(graph, node, rdf::TYPE);
    let type_node = match types.as_slice() {
        [] => return Ok(None),
        [t] => t,
        _ => {
            return Err(ResolutionError::ambiguous_property(format!(
                "more than one type for node {node}"
            )))
        }
    };

    let uri = type_node.as_iri().ok_or_else(|| {
        ResolutionError::invalid_type(format!("type of node {node} is not a URI"))
    })?;
    let local = uri.strip_prefix(spdx::NAMESPACE).ok_or_else(|| {
        ResolutionError::invalid_type(format!("type {uri} is not an SPDX type"))
    })?;

    match local {
        spdx_names::CONJUNCTIVE_LICENSE_SET => Ok(Some(LicenseType::Conjunctive)),
        spdx_names::DISJUNCTIVE_LICENSE_SET => Ok(Some(LicenseType::Disjunctive)),
        spdx_names::EXTRACTED_LICENSING_INFO => Ok(Some(LicenseType::Extracted)),
        spdx_names::LICENSE => Ok(Some(LicenseType::Listed)),
        spdx_names::OR_LATER_OPERATOR => Ok(Some(LicenseType::OrLater)),
        spdx_names::WITH_EXCEPTION_OPERATOR => Ok(Some(LicenseType::WithException)),
        other => Err(ResolutionError::unknown_type(other)),
    }
}
