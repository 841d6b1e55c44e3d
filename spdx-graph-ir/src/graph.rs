//! RDF graph - a collection of triples with pattern lookup

use crate::{Term, Triple};

/// An in-memory collection of RDF triples
///
/// Stores triples in insertion order. [`Graph::find`] answers wildcard
/// (subject, predicate, object) patterns by linear scan, which is
/// adequate for the document-sized graphs this representation targets.
///
/// # Example
///
/// ```
/// use spdx_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// graph.add_triple(
///     Term::iri("http://example.org/pkg"),
///     Term::iri("http://spdx.org/rdf/terms#licenseId"),
///     Term::string("MIT"),
/// );
///
/// let id_prop = Term::iri("http://spdx.org/rdf/terms#licenseId");
/// assert_eq!(graph.find(None, Some(&id_prop), None).count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Find triples matching a wildcard pattern
    ///
    /// `None` in a position matches any term in that position.
    pub fn find<'a>(
        &'a self,
        s: Option<&'a Term>,
        p: Option<&'a Term>,
        o: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| {
            s.map_or(true, |s| &t.s == s)
                && p.map_or(true, |p| &t.p == p)
                && o.map_or(true, |o| &t.o == o)
        })
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();

        graph.add_triple(
            Term::blank("n1"),
            Term::iri("http://spdx.org/rdf/terms#licenseId"),
            Term::string("MIT"),
        );
        graph.add_triple(
            Term::blank("n1"),
            Term::iri("http://spdx.org/rdf/terms#name"),
            Term::string("MIT License"),
        );
        graph.add_triple(
            Term::blank("n2"),
            Term::iri("http://spdx.org/rdf/terms#licenseId"),
            Term::string("Apache-2.0"),
        );

        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_find_by_subject() {
        let graph = make_test_graph();
        let n1 = Term::blank("n1");
        assert_eq!(graph.find(Some(&n1), None, None).count(), 2);
    }

    #[test]
    fn test_find_by_predicate() {
        let graph = make_test_graph();
        let id_prop = Term::iri("http://spdx.org/rdf/terms#licenseId");
        assert_eq!(graph.find(None, Some(&id_prop), None).count(), 2);
    }

    #[test]
    fn test_find_full_pattern() {
        let graph = make_test_graph();
        let n2 = Term::blank("n2");
        let id_prop = Term::iri("http://spdx.org/rdf/terms#licenseId");
        let apache = Term::string("Apache-2.0");

        let hits: Vec<_> = graph.find(Some(&n2), Some(&id_prop), Some(&apache)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].o.as_literal(), Some("Apache-2.0"));
    }

    #[test]
    fn test_find_no_match() {
        let graph = make_test_graph();
        let n3 = Term::blank("n3");
        assert_eq!(graph.find(Some(&n3), None, None).count(), 0);
    }

    #[test]
    fn test_from_iterator() {
        let triples = vec![Triple::new(
            Term::blank("n1"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        )];

        let graph: Graph = triples.into_iter().collect();
        assert_eq!(graph.len(), 1);
    }
}
