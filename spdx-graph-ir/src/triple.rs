//! RDF triple: (subject, predicate, object)

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single RDF statement
///
/// The predicate must be an IRI term; subjects are IRIs or blank nodes.
/// Neither is enforced structurally - sources are expected to produce
/// well-formed statements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject
    pub s: Term,
    /// Predicate
    pub p: Term,
    /// Object
    pub o: Term,
}

impl Triple {
    /// Create a triple from its components
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_display() {
        let triple = Triple::new(
            Term::blank("n1"),
            Term::iri("http://spdx.org/rdf/terms#licenseId"),
            Term::string("MIT"),
        );
        assert_eq!(
            format!("{}", triple),
            "_:n1 <http://spdx.org/rdf/terms#licenseId> \"MIT\" ."
        );
    }

    #[test]
    fn test_triple_equality() {
        let a = Triple::new(Term::blank("n1"), Term::iri("p"), Term::string("o"));
        let b = Triple::new(Term::blank("n1"), Term::iri("p"), Term::string("o"));
        assert_eq!(a, b);
    }
}
