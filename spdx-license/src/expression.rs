//! The license expression value model
//!
//! A [`LicenseExpression`] is the typed result of classifying a graph
//! node. Expressions are immutable once built and own their nested
//! members outright; composite sets use `BTreeSet` so that value-equal
//! members collapse and iteration order is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A license text supplied inline in the document rather than drawn from
/// the listed-license catalog
///
/// The identifier always begins with the reserved `LicenseRef-` prefix.
/// `see_also` is kept sorted: its values come from an unordered
/// multi-valued graph property, and sorting keeps value equality
/// independent of triple order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExtractedLicense {
    /// Document-scoped identifier (`LicenseRef-...`)
    pub id: String,
    /// The license text
    pub text: String,
    /// Human-readable license name
    pub name: Option<String>,
    /// Cross-reference URLs
    pub see_also: Vec<String>,
    /// Free-form comment
    pub comment: Option<String>,
}

/// A fully resolved license expression
///
/// Composite variants nest further expressions; the two sentinel variants
/// carry no payload. `Display` renders the standard surface syntax, e.g.
/// `(Apache-2.0 AND MIT)`, `GPL-2.0+`, or `GPL-2.0 WITH Classpath-exception-2.0`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LicenseExpression {
    /// A license drawn from the listed-license catalog
    Listed {
        /// Catalog identifier, in canonical catalog casing
        id: String,
    },

    /// A license supplied inline in the document
    Extracted(ExtractedLicense),

    /// All member licenses apply
    Conjunctive {
        /// The member expressions (at least two before value-equal collapse)
        members: BTreeSet<LicenseExpression>,
    },

    /// One of the member licenses applies
    Disjunctive {
        /// The member expressions (at least two before value-equal collapse)
        members: BTreeSet<LicenseExpression>,
    },

    /// The base license, this version or any later version
    OrLater {
        /// The qualified license
        base: Box<LicenseExpression>,
    },

    /// The base license qualified with a named exception clause
    WithException {
        /// The qualified license
        base: Box<LicenseExpression>,
        /// The exception identifier
        exception: String,
    },

    /// Sentinel: no license applies
    NoLicense,

    /// Sentinel: no license determination was made
    NoAssertion,
}

impl LicenseExpression {
    /// Create a listed license expression
    pub fn listed(id: impl Into<String>) -> Self {
        LicenseExpression::Listed { id: id.into() }
    }

    /// Create a conjunctive set from member expressions
    pub fn conjunctive(members: impl IntoIterator<Item = LicenseExpression>) -> Self {
        LicenseExpression::Conjunctive {
            members: members.into_iter().collect(),
        }
    }

    /// Create a disjunctive set from member expressions
    pub fn disjunctive(members: impl IntoIterator<Item = LicenseExpression>) -> Self {
        LicenseExpression::Disjunctive {
            members: members.into_iter().collect(),
        }
    }

    /// Qualify a base license as "or any later version"
    pub fn or_later(base: LicenseExpression) -> Self {
        LicenseExpression::OrLater {
            base: Box::new(base),
        }
    }

    /// Qualify a base license with a named exception
    pub fn with_exception(base: LicenseExpression, exception: impl Into<String>) -> Self {
        LicenseExpression::WithException {
            base: Box::new(base),
            exception: exception.into(),
        }
    }

    /// Check if this is one of the two sentinel values
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            LicenseExpression::NoLicense | LicenseExpression::NoAssertion
        )
    }
}

fn write_set(
    f: &mut std::fmt::Formatter<'_>,
    members: &BTreeSet<LicenseExpression>,
    joiner: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", joiner)?;
        }
        write!(f, "{}", member)?;
    }
    write!(f, ")")
}

impl std::fmt::Display for LicenseExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseExpression::Listed { id } => write!(f, "{}", id),
            LicenseExpression::Extracted(info) => write!(f, "{}", info.id),
            LicenseExpression::Conjunctive { members } => write_set(f, members, " AND "),
            LicenseExpression::Disjunctive { members } => write_set(f, members, " OR "),
            LicenseExpression::OrLater { base } => write!(f, "{}+", base),
            LicenseExpression::WithException { base, exception } => {
                write!(f, "{} WITH {}", base, exception)
            }
            LicenseExpression::NoLicense => write!(f, "NONE"),
            LicenseExpression::NoAssertion => write!(f, "NOASSERTION"),
        }
    }
}
