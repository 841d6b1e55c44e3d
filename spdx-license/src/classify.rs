//! License node classification
//!
//! [`LicenseClassifier`] turns an untyped graph node into a typed
//! [`LicenseExpression`]. It orchestrates the three resolution strategies
//! into a single policy and drives the recursive materialization of
//! composite expressions.
//!
//! Strategy order: own URI, then identifier, then declared type - cheap
//! sentinel and listed-license recognition first, full type-driven
//! recursive construction last. The first conclusive strategy wins.
//! Strategy-level "not applicable" answers continue to the next strategy;
//! hard errors indicate malformed data and short-circuit immediately.

use crate::error::{ResolutionError, Result};
use crate::expression::{ExtractedLicense, LicenseExpression};
use crate::registry::ListedLicenses;
use crate::store::{self, GraphAccess};
use crate::strategy::{self, IdResolution, LicenseType};
use spdx_graph_ir::Term;
use spdx_vocab::{rdfs, spdx};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Per-invocation resolution state
///
/// The memo keeps shared sub-expression nodes value-consistent within one
/// classification; the in-flight set bounds recursion by detecting a node
/// already being resolved on the current call stack.
#[derive(Default)]
struct ResolveCtx {
    memo: HashMap<Term, LicenseExpression>,
    in_flight: HashSet<Term>,
}

/// Classifies graph nodes into license expressions
///
/// Holds a read-only view of the graph and a shared listed-license
/// registry; one classifier can serve any number of `classify` calls.
///
/// # Example
///
/// ```
/// use spdx_graph_ir::{Graph, Term};
/// use spdx_license::{LicenseCatalog, LicenseClassifier, LicenseExpression, ListedLicenses};
///
/// let mut graph = Graph::new();
/// graph.add_triple(
///     Term::blank("n1"),
///     Term::iri("http://spdx.org/rdf/terms#licenseId"),
///     Term::string("MIT"),
/// );
///
/// let catalog = LicenseCatalog::from_json(
///     r#"{"licenses": [{"licenseId": "MIT", "name": "MIT License"}]}"#,
/// ).unwrap();
/// let registry = ListedLicenses::with_catalog(catalog);
///
/// let classifier = LicenseClassifier::new(&graph, &registry);
/// let expr = classifier.classify(&Term::blank("n1")).unwrap();
/// assert_eq!(expr, LicenseExpression::listed("MIT"));
/// ```
pub struct LicenseClassifier<'a, G> {
    graph: &'a G,
    registry: &'a ListedLicenses,
}

impl<'a, G: GraphAccess> LicenseClassifier<'a, G> {
    /// Create a classifier over a graph and a listed-license registry
    pub fn new(graph: &'a G, registry: &'a ListedLicenses) -> Self {
        Self { graph, registry }
    }

    /// Classify a node into a license expression
    ///
    /// Fails with [`ResolutionError::UnresolvedNode`] when no strategy
    /// yields a result; any hard error from a strategy or from composite
    /// materialization propagates unmodified.
    pub fn classify(&self, node: &Term) -> Result<LicenseExpression> {
        let mut ctx = ResolveCtx::default();
        self.resolve(node, &mut ctx)
    }

    fn resolve(&self, node: &Term, ctx: &mut ResolveCtx) -> Result<LicenseExpression> {
        if let Some(done) = ctx.memo.get(node) {
            return Ok(done.clone());
        }
        if !ctx.in_flight.insert(node.clone()) {
            return Err(ResolutionError::cyclic(node));
        }

        let result = self.resolve_uncached(node, ctx);
        ctx.in_flight.remove(node);
        if let Ok(expr) = &result {
            ctx.memo.insert(node.clone(), expr.clone());
        }
        result
    }

    fn resolve_uncached(&self, node: &Term, ctx: &mut ResolveCtx) -> Result<LicenseExpression> {
        if let Some(expr) = strategy::resolve_by_uri(self.registry, node) {
            return Ok(expr);
        }

        // The identifier strategy demands an id be present, so it is only
        // consulted when the node carries one; composite expression and
        // operator nodes have no id and resolve by declared type below.
        if strategy::has_license_id(self.graph, node) {
            match strategy::resolve_by_id(self.graph, self.registry, node)? {
                Some(IdResolution::Listed(id)) => return Ok(LicenseExpression::Listed { id }),
                Some(IdResolution::Extracted(id)) => {
                    return self.build_extracted(node, id).map(LicenseExpression::Extracted)
                }
                None => {}
            }
        }

        if let Some(kind) = strategy::resolve_type(self.graph, node)? {
            return self.materialize(kind, node, ctx);
        }

        Err(ResolutionError::unresolved(node))
    }

    fn materialize(
        &self,
        kind: LicenseType,
        node: &Term,
        ctx: &mut ResolveCtx,
    ) -> Result<LicenseExpression> {
        match kind {
            LicenseType::Conjunctive => Ok(LicenseExpression::Conjunctive {
                members: self.member_set(node, ctx)?,
            }),
            LicenseType::Disjunctive => Ok(LicenseExpression::Disjunctive {
                members: self.member_set(node, ctx)?,
            }),
            LicenseType::Extracted => {
                let id = store::required_value(self.graph, node, spdx::LICENSE_ID, "license id")?;
                self.build_extracted(node, store::object_text(&id))
                    .map(LicenseExpression::Extracted)
            }
            LicenseType::Listed => {
                let id = store::required_value(self.graph, node, spdx::LICENSE_ID, "license id")?;
                Ok(LicenseExpression::Listed {
                    id: store::object_text(&id),
                })
            }
            LicenseType::OrLater => Ok(LicenseExpression::OrLater {
                base: Box::new(self.member_base(node, ctx)?),
            }),
            LicenseType::WithException => Ok(LicenseExpression::WithException {
                base: Box::new(self.member_base(node, ctx)?),
                exception: self.exception_id(node)?,
            }),
        }
    }

    /// Resolve the members of a conjunctive or disjunctive set
    ///
    /// A license set needs at least two member links; value-equal members
    /// may still collapse in the resulting set.
    fn member_set(&self, node: &Term, ctx: &mut ResolveCtx) -> Result<BTreeSet<LicenseExpression>> {
        let members = store::property_values(self.graph, node, spdx::MEMBER);
        if members.len() < 2 {
            return Err(ResolutionError::missing_property(format!(
                "license set {node} requires at least two members"
            )));
        }
        members.iter().map(|m| self.resolve(m, ctx)).collect()
    }

    /// Resolve the single member link of an operator node
    fn member_base(&self, node: &Term, ctx: &mut ResolveCtx) -> Result<LicenseExpression> {
        let member = store::required_value(self.graph, node, spdx::MEMBER, "member")?;
        self.resolve(&member, ctx)
    }

    /// Read the exception identifier of a WITH operator
    ///
    /// The exception link may carry the identifier directly as a literal,
    /// or point at an exception record node with its own id property.
    fn exception_id(&self, node: &Term) -> Result<String> {
        let exception =
            store::required_value(self.graph, node, spdx::LICENSE_EXCEPTION, "license exception")?;
        if let Some(id) = exception.as_literal() {
            return Ok(id.to_string());
        }
        let id = store::required_value(
            self.graph,
            &exception,
            spdx::LICENSE_EXCEPTION_ID,
            "license exception id",
        )?;
        Ok(store::object_text(&id))
    }

    /// Materialize an extracted license from the node's sibling properties
    ///
    /// The identifier has already been read (and its cardinality checked)
    /// by whichever strategy settled the node as extracted.
    fn build_extracted(&self, node: &Term, id: String) -> Result<ExtractedLicense> {
        let text =
            store::required_value(self.graph, node, spdx::EXTRACTED_TEXT, "extracted text")?;
        let name = store::optional_value(self.graph, node, spdx::NAME, "name")?;
        let comment = store::optional_value(self.graph, node, rdfs::COMMENT, "comment")?;

        // rdfs:seeAlso is multi-valued and unordered; sort so the same
        // node always yields a value-equal expression.
        let mut see_also: Vec<String> = store::property_values(self.graph, node, rdfs::SEE_ALSO)
            .iter()
            .map(store::object_text)
            .collect();
        see_also.sort();

        Ok(ExtractedLicense {
            id,
            text: store::object_text(&text),
            name: name.as_ref().map(store::object_text),
            see_also,
            comment: comment.as_ref().map(store::object_text),
        })
    }
}
