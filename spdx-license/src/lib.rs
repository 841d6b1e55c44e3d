//! License expression resolution from SPDX RDF graph nodes
//!
//! This crate classifies a node in a subject-predicate-object graph of
//! license metadata into a typed [`LicenseExpression`]: a listed license,
//! an extracted (inline) license, a conjunctive or disjunctive set, an
//! "or later" or "with exception" qualifier, or one of the two sentinel
//! values.
//!
//! # Overview
//!
//! Classification works by:
//! 1. Probing the node's own URI for sentinels and listed-license URIs
//! 2. Probing the node's license-id property against the
//!    [`ListedLicenses`] registry and the reserved `LicenseRef-` prefix
//! 3. Probing the node's declared rdf:type against the closed table of
//!    license type names, recursively materializing composite members
//!
//! Strategy-inapplicable outcomes fall through to the next probe; data
//! errors (cardinality violations, bad type URIs, cycles) abort the
//! classification of that node. See [`ResolutionError`] for the taxonomy.
//!
//! The graph itself stays behind the [`GraphAccess`] seam: anything that
//! answers wildcard triple patterns can be classified against, the
//! in-memory [`Graph`](spdx_graph_ir::Graph) being the shipped
//! implementation. The listed-license catalog likewise stays behind
//! [`CatalogSource`], loaded lazily and exactly once per registry.
//!
//! # Example
//!
//! ```
//! use spdx_graph_ir::{Graph, Term};
//! use spdx_license::{LicenseClassifier, LicenseExpression, ListedLicenses};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::blank("n1"),
//!     Term::iri("http://spdx.org/rdf/terms#licenseId"),
//!     Term::string("Apache-2.0"),
//! );
//!
//! let registry = ListedLicenses::bundled();
//! let classifier = LicenseClassifier::new(&graph, &registry);
//!
//! let expr = classifier.classify(&Term::blank("n1")).unwrap();
//! assert_eq!(expr, LicenseExpression::listed("Apache-2.0"));
//! ```

pub mod classify;
pub mod error;
pub mod expression;
pub mod registry;
pub mod store;
mod strategy;

pub use classify::LicenseClassifier;
pub use error::{ResolutionError, Result};
pub use expression::{ExtractedLicense, LicenseExpression};
pub use registry::{
    BundledCatalog, CatalogEntry, CatalogSource, JsonFileCatalog, LicenseCatalog, ListedLicenses,
};
pub use store::GraphAccess;
