//! Node resolution strategies
//!
//! Each strategy probes one angle of a graph node: its own URI, its
//! identifier property, or its declared type. A strategy answers
//! `Ok(None)` when the angle does not apply to the node at all
//! ("inconclusive"); a hard error means the angle *does* apply but the
//! data is malformed. Strategies identify what the node is - the
//! classifier materializes the expression, since only materialization
//! recurses into member nodes.

mod by_id;
mod by_type;
mod by_uri;

pub(crate) use by_id::{has_license_id, resolve_by_id, IdResolution};
pub(crate) use by_type::{resolve_type, LicenseType};
pub(crate) use by_uri::resolve_by_uri;
