//! Read-only access to the underlying triple store
//!
//! The classifier only ever needs one query shape: wildcard
//! (subject, predicate, object) pattern lookup. [`GraphAccess`] is the
//! seam for that, implemented here for the in-memory
//! [`Graph`](spdx_graph_ir::Graph) and implementable over any store that
//! can answer triple patterns. No strategy ever mutates graph data.

use crate::error::{ResolutionError, Result};
use spdx_graph_ir::{Graph, Term, Triple};

/// Triple-pattern lookup against a graph
pub trait GraphAccess {
    /// Return the triples matching a pattern; `None` positions are wildcards
    fn find(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Vec<Triple>;
}

impl GraphAccess for Graph {
    fn find(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Vec<Triple> {
        Graph::find(self, s, p, o).cloned().collect()
    }
}

impl<T: GraphAccess + ?Sized> GraphAccess for &T {
    fn find(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> Vec<Triple> {
        (**self).find(s, p, o)
    }
}

/// All object values of `predicate` on `node`
pub(crate) fn property_values<G: GraphAccess>(graph: &G, node: &Term, predicate: &str) -> Vec<Term> {
    graph
        .find(Some(node), Some(&Term::iri(predicate)), None)
        .into_iter()
        .map(|t| t.o)
        .collect()
}

/// The single object value of `predicate` on `node`, if present
///
/// More than one value is a cardinality violation. `what` names the
/// property in the error message.
pub(crate) fn optional_value<G: GraphAccess>(
    graph: &G,
    node: &Term,
    predicate: &str,
    what: &str,
) -> Result<Option<Term>> {
    let mut values = property_values(graph, node, predicate);
    match values.len() {
        0 => Ok(None),
        1 => Ok(values.pop()),
        n => Err(ResolutionError::ambiguous_property(format!(
            "{n} values for {what} on node {node}"
        ))),
    }
}

/// The single object value of `predicate` on `node`
///
/// Absence and multiplicity are both violations.
pub(crate) fn required_value<G: GraphAccess>(
    graph: &G,
    node: &Term,
    predicate: &str,
    what: &str,
) -> Result<Term> {
    optional_value(graph, node, predicate, what)?.ok_or_else(|| {
        ResolutionError::missing_property(format!("no {what} on node {node}"))
    })
}

/// The lexical form of an object term
///
/// License graphs in the wild carry identifiers both as literals and,
/// occasionally, as resource references; either way the string content is
/// what the resolution logic compares.
pub(crate) fn object_text(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri.to_string(),
        Term::BlankNode(id) => id.to_string(),
        Term::Literal { value, .. } => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdx_graph_ir::Graph;

    const NAME: &str = "http://spdx.org/rdf/terms#name";

    fn graph_with_names(names: &[&str]) -> Graph {
        let mut graph = Graph::new();
        for name in names {
            graph.add_triple(Term::blank("n"), Term::iri(NAME), Term::string(*name));
        }
        graph
    }

    #[test]
    fn test_property_values() {
        let graph = graph_with_names(&["a", "b"]);
        let values = property_values(&graph, &Term::blank("n"), NAME);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_optional_value_absent() {
        let graph = graph_with_names(&[]);
        let value = optional_value(&graph, &Term::blank("n"), NAME, "name").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_optional_value_ambiguous() {
        let graph = graph_with_names(&["a", "b"]);
        let err = optional_value(&graph, &Term::blank("n"), NAME, "name").unwrap_err();
        assert!(matches!(err, ResolutionError::AmbiguousProperty(_)));
    }

    #[test]
    fn test_required_value() {
        let graph = graph_with_names(&["a"]);
        let value = required_value(&graph, &Term::blank("n"), NAME, "name").unwrap();
        assert_eq!(value.as_literal(), Some("a"));

        let empty = graph_with_names(&[]);
        let err = required_value(&empty, &Term::blank("n"), NAME, "name").unwrap_err();
        assert!(matches!(err, ResolutionError::MissingProperty(_)));
    }

    #[test]
    fn test_object_text() {
        assert_eq!(object_text(&Term::string("MIT")), "MIT");
        assert_eq!(object_text(&Term::iri("http://a.org")), "http://a.org");
        assert_eq!(object_text(&Term::blank("b0")), "_:b0");
    }
}
