//! Listed-license catalog registry
//!
//! The registry answers two questions for the resolution strategies: is an
//! identifier a member of the listed-license catalog, and what canonical
//! expression does a listed-license URI denote. The catalog itself comes
//! from an injected [`CatalogSource`], so tests run against preloaded
//! in-memory catalogs and production callers decide where the document
//! actually comes from.
//!
//! Initialization is lazy and idempotent: the first caller from any
//! thread triggers a one-time load, subsequent callers reuse the loaded
//! state, and a *failed* load is not sticky - the next caller retries.
//! Steady-state reads only take the read side of the lock.

use crate::error::{ResolutionError, Result};
use crate::expression::LicenseExpression;
use serde::{Deserialize, Serialize};
use spdx_vocab::licenses::LISTED_LICENSE_URL;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// One entry in the listed-license catalog
///
/// Field names follow the catalog's JSON document shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Canonical license identifier
    pub license_id: String,
    /// Full license name
    #[serde(default)]
    pub name: String,
    /// Cross-reference URLs
    #[serde(default)]
    pub see_also: Vec<String>,
    /// Whether the license is OSI approved
    #[serde(default)]
    pub is_osi_approved: bool,
    /// Whether the identifier is deprecated in the catalog
    #[serde(default)]
    pub is_deprecated_license_id: bool,
    /// Canonical reference URL for the license text
    #[serde(default)]
    pub reference: Option<String>,
}

/// The listed-license catalog document
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseCatalog {
    /// Version of the catalog release this document was taken from
    #[serde(default)]
    pub license_list_version: Option<String>,
    /// The catalog entries
    pub licenses: Vec<CatalogEntry>,
}

impl LicenseCatalog {
    /// Parse a catalog from its JSON document form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ResolutionError::catalog(format!("malformed catalog document: {e}")))
    }
}

/// Where the catalog document comes from
///
/// The one-time load is the only operation in this crate that may touch
/// disk; isolating it behind this trait lets tests substitute a preloaded
/// catalog and callers retry or swap sources.
pub trait CatalogSource: Send + Sync {
    /// Load the catalog document
    fn load(&self) -> Result<LicenseCatalog>;
}

/// The catalog snapshot vendored with this crate
///
/// A point-in-time copy of the license list, so the registry works with
/// no I/O configuration at all. Callers that need the current catalog
/// release should load it from a file or their own source instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledCatalog;

impl CatalogSource for BundledCatalog {
    fn load(&self) -> Result<LicenseCatalog> {
        LicenseCatalog::from_json(include_str!("../resources/licenses.json"))
    }
}

/// A catalog document on disk, in the standard JSON shape
#[derive(Clone, Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<LicenseCatalog> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            ResolutionError::catalog(format!(
                "cannot read catalog document {}: {e}",
                self.path.display()
            ))
        })?;
        LicenseCatalog::from_json(&json)
    }
}

/// Loaded catalog, indexed by identifier
#[derive(Debug)]
struct CatalogIndex {
    version: Option<String>,
    entries: HashMap<String, CatalogEntry>,
}

impl CatalogIndex {
    fn build(catalog: LicenseCatalog) -> Self {
        let entries = catalog
            .licenses
            .into_iter()
            .map(|entry| (entry.license_id.clone(), entry))
            .collect();
        Self {
            version: catalog.license_list_version,
            entries,
        }
    }
}

/// Process-wide cache of known license identifiers and previously
/// materialized canonical license expressions
///
/// Explicitly constructed and injectable; share one instance (behind
/// `Arc` if needed) across every classification that should see the same
/// catalog. The registry is the single writer of its cache entries and is
/// safe for concurrent read access.
pub struct ListedLicenses {
    source: Option<Box<dyn CatalogSource>>,
    catalog: RwLock<Option<Arc<CatalogIndex>>>,
    resolved: RwLock<HashMap<String, LicenseExpression>>,
}

impl std::fmt::Debug for ListedLicenses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListedLicenses")
            .field("loaded", &self.catalog.read().unwrap().is_some())
            .finish()
    }
}

impl ListedLicenses {
    /// Create a registry over a catalog source
    ///
    /// Nothing is loaded until the first membership or URI lookup.
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            catalog: RwLock::new(None),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry over the vendored catalog snapshot
    pub fn bundled() -> Self {
        Self::new(BundledCatalog)
    }

    /// Create a registry over an already-loaded catalog
    ///
    /// No source is consulted; useful for deterministic tests.
    pub fn with_catalog(catalog: LicenseCatalog) -> Self {
        Self {
            source: None,
            catalog: RwLock::new(Some(Arc::new(CatalogIndex::build(catalog)))),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Membership test against the known-ID catalog
    ///
    /// Returns false for any identifier not present, including malformed
    /// strings. An unloadable catalog also answers false, with a warning,
    /// so that membership probes never abort classification.
    pub fn is_listed_id(&self, id: &str) -> bool {
        match self.catalog() {
            Ok(catalog) => catalog.entries.contains_key(id),
            Err(err) => {
                warn!(%id, %err, "listed license membership probe against unloadable catalog");
                false
            }
        }
    }

    /// Materialize the canonical license for a listed-license URI
    ///
    /// The expression is cached on first materialization; the canonical
    /// identifier casing from the catalog entry is used, not the URI's.
    pub fn license_for_uri(&self, uri: &str) -> Result<LicenseExpression> {
        let id = uri
            .strip_prefix(LISTED_LICENSE_URL)
            .map(|rest| rest.trim_end_matches('/'))
            .ok_or_else(|| {
                ResolutionError::catalog(format!("{uri} is not a listed license URI"))
            })?;

        if let Some(expr) = self.resolved.read().unwrap().get(id) {
            return Ok(expr.clone());
        }

        let catalog = self.catalog()?;
        let entry = catalog
            .entries
            .get(id)
            .ok_or_else(|| ResolutionError::catalog(format!("no listed license for URI {uri}")))?;

        let expr = LicenseExpression::listed(entry.license_id.clone());
        self.resolved
            .write()
            .unwrap()
            .insert(id.to_string(), expr.clone());
        Ok(expr)
    }

    /// Look up a catalog entry by identifier
    ///
    /// Answers `None` both for unknown identifiers and for an unloadable
    /// catalog (the latter with a warning).
    pub fn entry(&self, id: &str) -> Option<CatalogEntry> {
        match self.catalog() {
            Ok(catalog) => catalog.entries.get(id).cloned(),
            Err(err) => {
                warn!(%id, %err, "catalog entry lookup against unloadable catalog");
                None
            }
        }
    }

    /// The catalog release version, once loaded
    pub fn license_list_version(&self) -> Option<String> {
        self.catalog().ok().and_then(|c| c.version.clone())
    }

    /// Get the loaded catalog, loading it on first access
    ///
    /// Double-checked under the lock: concurrent first callers race to
    /// the write lock, the winner loads, the rest observe the loaded
    /// state. A load failure leaves the slot empty for the next caller.
    fn catalog(&self) -> Result<Arc<CatalogIndex>> {
        if let Some(catalog) = self.catalog.read().unwrap().as_ref() {
            return Ok(catalog.clone());
        }

        let mut slot = self.catalog.write().unwrap();
        if let Some(catalog) = slot.as_ref() {
            return Ok(catalog.clone());
        }

        let source = self.source.as_deref().ok_or_else(|| {
            ResolutionError::catalog("no catalog source configured".to_string())
        })?;
        let index = Arc::new(CatalogIndex::build(source.load()?));
        debug!(
            version = index.version.as_deref().unwrap_or("unversioned"),
            licenses = index.entries.len(),
            "loaded listed license catalog"
        );
        *slot = Some(index.clone());
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TEST_CATALOG: &str = r#"{
        "licenseListVersion": "3.24",
        "licenses": [
            {
                "licenseId": "MIT",
                "name": "MIT License",
                "isOsiApproved": true,
                "seeAlso": ["https://opensource.org/license/mit/"]
            },
            {
                "licenseId": "Apache-2.0",
                "name": "Apache License 2.0",
                "isOsiApproved": true
            }
        ]
    }"#;

    /// Counts loads; fails the first `failures` calls.
    struct CountingSource {
        loads: Arc<AtomicUsize>,
        failures: usize,
    }

    impl CatalogSource for CountingSource {
        fn load(&self) -> Result<LicenseCatalog> {
            let n = self.loads.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(ResolutionError::catalog("source offline"));
            }
            LicenseCatalog::from_json(TEST_CATALOG)
        }
    }

    fn counting_registry(failures: usize) -> (ListedLicenses, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let registry = ListedLicenses::new(CountingSource {
            loads: loads.clone(),
            failures,
        });
        (registry, loads)
    }

    fn preloaded() -> ListedLicenses {
        ListedLicenses::with_catalog(LicenseCatalog::from_json(TEST_CATALOG).unwrap())
    }

    #[test]
    fn test_is_listed_id() {
        let registry = preloaded();
        assert!(registry.is_listed_id("MIT"));
        assert!(registry.is_listed_id("Apache-2.0"));
        assert!(!registry.is_listed_id("mit"));
        assert!(!registry.is_listed_id("No-Such-License"));
        assert!(!registry.is_listed_id(""));
        assert!(!registry.is_listed_id("not an identifier at all"));
    }

    #[test]
    fn test_license_for_uri() {
        let registry = preloaded();
        let expr = registry
            .license_for_uri("http://spdx.org/licenses/Apache-2.0")
            .unwrap();
        assert_eq!(expr, LicenseExpression::listed("Apache-2.0"));
    }

    #[test]
    fn test_license_for_unknown_uri() {
        let registry = preloaded();
        let err = registry
            .license_for_uri("http://spdx.org/licenses/No-Such-License")
            .unwrap_err();
        assert!(matches!(err, ResolutionError::CatalogLookupFailed(_)));
    }

    #[test]
    fn test_license_for_non_listed_uri() {
        let registry = preloaded();
        let err = registry
            .license_for_uri("http://example.org/licenses/MIT")
            .unwrap_err();
        assert!(matches!(err, ResolutionError::CatalogLookupFailed(_)));
    }

    #[test]
    fn test_single_load_across_calls() {
        let (registry, loads) = counting_registry(0);
        assert!(registry.is_listed_id("MIT"));
        assert!(registry.is_listed_id("Apache-2.0"));
        registry
            .license_for_uri("http://spdx.org/licenses/MIT")
            .unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let (registry, loads) = counting_registry(1);

        // First probe hits the failing load and answers false.
        assert!(!registry.is_listed_id("MIT"));
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        // The failure was not cached; the next probe loads successfully.
        assert!(registry.is_listed_id("MIT"));
        assert_eq!(loads.load(Ordering::SeqCst), 2);

        // Loaded state is now reused.
        assert!(registry.is_listed_id("Apache-2.0"));
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let (registry, loads) = counting_registry(0);
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.is_listed_id("MIT"))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_license_list_version() {
        let registry = preloaded();
        assert_eq!(registry.license_list_version().as_deref(), Some("3.24"));
    }

    #[test]
    fn test_entry_metadata() {
        let registry = preloaded();
        let entry = registry.entry("MIT").unwrap();
        assert_eq!(entry.name, "MIT License");
        assert!(entry.is_osi_approved);
        assert_eq!(entry.see_also.len(), 1);
        assert!(registry.entry("No-Such-License").is_none());
    }

    #[test]
    fn test_malformed_catalog_document() {
        let err = LicenseCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ResolutionError::CatalogLookupFailed(_)));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = BundledCatalog.load().unwrap();
        assert!(!catalog.licenses.is_empty());
        assert!(catalog
            .licenses
            .iter()
            .any(|entry| entry.license_id == "MIT"));
    }
}
