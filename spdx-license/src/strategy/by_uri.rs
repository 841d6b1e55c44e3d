//! Resolution by the node's own URI
//!
//! Recognizes the two sentinel URIs and canonical listed-license URIs.
//! This strategy raises no hard errors: a failed catalog delegation is
//! swallowed (with a warning) so the orchestrator can try the remaining
//! strategies against whatever else the node carries.

use crate::expression::LicenseExpression;
use crate::registry::ListedLicenses;
use spdx_graph_ir::Term;
use spdx_vocab::{licenses, spdx};
use tracing::warn;

pub(crate) fn resolve_by_uri(registry: &ListedLicenses, node: &Term) -> Option<LicenseExpression> {
    let uri = node.as_iri()?;

    if uri == spdx::LICENSE_NOASSERTION {
        return Some(LicenseExpression::NoAssertion);
    }
    if uri == spdx::LICENSE_NONE {
        return Some(LicenseExpression::NoLicense);
    }
    if uri.starts_with(licenses::LISTED_LICENSE_URL) {
        return match registry.license_for_uri(uri) {
            Ok(expr) => Some(expr),
            Err(err) => {
                warn!(%uri, %err, "listed license delegation failed, continuing with other strategies");
                None
            }
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{LicenseCatalog, ListedLicenses};

    fn registry() -> ListedLicenses {
        ListedLicenses::with_catalog(
            LicenseCatalog::from_json(
                r#"{"licenses": [{"licenseId": "MIT", "name": "MIT License"}]}"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_sentinels() {
        let registry = registry();
        assert_eq!(
            resolve_by_uri(&registry, &Term::iri(spdx::LICENSE_NOASSERTION)),
            Some(LicenseExpression::NoAssertion)
        );
        assert_eq!(
            resolve_by_uri(&registry, &Term::iri(spdx::LICENSE_NONE)),
            Some(LicenseExpression::NoLicense)
        );
    }

    #[test]
    fn test_listed_uri() {
        let registry = registry();
        assert_eq!(
            resolve_by_uri(&registry, &Term::iri("http://spdx.org/licenses/MIT")),
            Some(LicenseExpression::listed("MIT"))
        );
    }

    #[test]
    fn test_inconclusive() {
        let registry = registry();
        // Not a URI node.
        assert_eq!(resolve_by_uri(&registry, &Term::blank("n1")), None);
        // URI outside every recognized space.
        assert_eq!(
            resolve_by_uri(&registry, &Term::iri("http://example.org/whatever")),
            None
        );
        // Listed-license space but unknown entry: swallowed, not an error.
        assert_eq!(
            resolve_by_uri(&registry, &Term::iri("http://spdx.org/licenses/Nope")),
            None
        );
    }
}
