//! Resource accessors
//!
//! One accessor per backend service. Each call maps to exactly one HTTP request.

mod collection;
mod orders;
mod products;
mod request;

pub use collection::*;
pub use orders::*;
pub use products::*;
