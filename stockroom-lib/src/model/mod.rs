//! Wire types for the inventory services.
//!
//! Field names follow the backend's JSON (`idCategoria`, `nombreColor`, ...);
//! the Rust side uses English names.

mod catalog;
mod money;
mod order;
mod product;

pub use catalog::*;
pub use money::*;
pub use order::*;
pub use product::*;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ResourceKind;

/// A record served by one of the CRUD services.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Create payload: the record without its identifier.
    type Draft: Serialize + Send + Sync;

    /// The service this record lives in.
    const KIND: ResourceKind;

    /// Server-assigned identifier.
    fn id(&self) -> i64;
}

/// A catalog record that is nothing more than a name.
pub trait Named: Resource {
    fn name(&self) -> &str;

    /// Builds the create payload for a new record with this name.
    fn draft(name: impl Into<String>) -> Self::Draft;
}
