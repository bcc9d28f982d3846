//! Endpoint descriptions and response handling.
//!
//! This module holds the pieces every endpoint method is built from:
//!
//! - [`Endpoint`] and [`ApiFamily`]: constant descriptions of each API call,
//!   resolving host, base path and path parameters
//! - [`QueryBuilder`]: query string assembly with repeated keys
//! - [`FieldSelection`] and [`SelectableFields`]: field selection for
//!   static-data payloads
//! - [`DataKey`] and [`rekey`]: id or key indexing of static-data dictionaries
//! - [`DeserializationError`]: the error raised when a body does not match
//!   the requested type
//!
//! The endpoint methods themselves live in [`resources`], as methods on
//! [`RiotClient`](crate::RiotClient).

mod endpoint;
mod errors;
pub mod query;
mod selection;

pub mod resources;

// Public exports
pub use endpoint::{build_path, ApiFamily, Endpoint, HostKind};
pub use errors::DeserializationError;
pub use query::{build_url, QueryBuilder};
pub use selection::{
    deserialize, deserialize_full, mask_data_entries, mask_object, rekey, DataEntry, DataKey,
    FieldSelection, SelectableField, SelectableFields,
};
