//! RDF Vocabulary Constants for SPDX License Metadata
//!
//! This crate provides a centralized location for the vocabulary IRIs and
//! reserved constants used when reading SPDX license information out of an
//! RDF graph.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `spdx` - SPDX terms vocabulary (http://spdx.org/rdf/terms#)
//! - `spdx_names` - Local class names under the SPDX terms namespace
//! - `licenses` - The listed-license catalog URL space

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:seeAlso IRI
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// SPDX terms vocabulary constants
pub mod spdx {
    /// The SPDX terms namespace
    ///
    /// All SPDX class and property IRIs are rooted here.
    pub const NAMESPACE: &str = "http://spdx.org/rdf/terms#";

    /// spdx:licenseId - the identifier property carried by license nodes
    pub const LICENSE_ID: &str = "http://spdx.org/rdf/terms#licenseId";

    /// spdx:extractedText - the inline license text of an extracted license
    pub const EXTRACTED_TEXT: &str = "http://spdx.org/rdf/terms#extractedText";

    /// spdx:name - the human-readable license name
    pub const NAME: &str = "http://spdx.org/rdf/terms#name";

    /// spdx:member - links a license set or operator to a member expression
    pub const MEMBER: &str = "http://spdx.org/rdf/terms#member";

    /// spdx:licenseException - links a WITH operator to its exception
    pub const LICENSE_EXCEPTION: &str = "http://spdx.org/rdf/terms#licenseException";

    /// spdx:licenseExceptionId - the identifier of a license exception
    pub const LICENSE_EXCEPTION_ID: &str = "http://spdx.org/rdf/terms#licenseExceptionId";

    /// Sentinel URI asserting that no license determination was made
    pub const LICENSE_NOASSERTION: &str = "http://spdx.org/rdf/terms#noassertion";

    /// Sentinel URI declaring that no license applies
    pub const LICENSE_NONE: &str = "http://spdx.org/rdf/terms#none";

    /// Reserved identifier prefix for extracted (non-listed) licenses
    pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";
}

/// Local class names under the SPDX terms namespace
///
/// These are the local-name portions of the SPDX class IRIs, matched after
/// stripping [`spdx::NAMESPACE`] from a node's declared type.
pub mod spdx_names {
    /// Composite set meaning "all member licenses apply"
    pub const CONJUNCTIVE_LICENSE_SET: &str = "ConjunctiveLicenseSet";

    /// Composite set meaning "one of the member licenses applies"
    pub const DISJUNCTIVE_LICENSE_SET: &str = "DisjunctiveLicenseSet";

    /// License text supplied inline in the document
    pub const EXTRACTED_LICENSING_INFO: &str = "ExtractedLicensingInfo";

    /// A license drawn from the listed-license catalog
    pub const LICENSE: &str = "License";

    /// "This version or any later version" qualifier
    pub const OR_LATER_OPERATOR: &str = "OrLaterOperator";

    /// "With named exception clause" qualifier
    pub const WITH_EXCEPTION_OPERATOR: &str = "WithExceptionOperator";
}

/// Listed-license catalog URL space
pub mod licenses {
    /// Base URL under which every listed license has a canonical URI
    ///
    /// A node whose URI is `LISTED_LICENSE_URL` followed by a listed
    /// license identifier denotes that catalog entry.
    pub const LISTED_LICENSE_URL: &str = "http://spdx.org/licenses/";
}
