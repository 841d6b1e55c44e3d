//! Minimal RDF graph intermediate representation
//!
//! This crate provides the term, triple, and graph types consumed when
//! reading SPDX license metadata out of RDF. It is deliberately small:
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form;
//!    prefix compaction belongs to serializers.
//!
//! 2. **String literals only** - License metadata graphs carry plain and
//!    language-tagged strings (identifiers, license texts, comments,
//!    cross-references). There is no numeric or binary literal model.
//!
//! 3. **Pattern lookup** - [`Graph::find`] answers wildcard
//!    (subject, predicate, object) patterns, the only query shape the
//!    license resolution layer needs.
//!
//! # Example
//!
//! ```
//! use spdx_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::blank("n1"),
//!     Term::iri("http://spdx.org/rdf/terms#licenseId"),
//!     Term::string("LicenseRef-1"),
//! );
//!
//! let subject = Term::blank("n1");
//! let hits: Vec<_> = graph
//!     .find(Some(&subject), None, None)
//!     .collect();
//! assert_eq!(hits.len(), 1);
//! ```

mod graph;
mod term;
mod triple;

pub use graph::Graph;
pub use term::{BlankId, Term};
pub use triple::Triple;
