//! Inventory client library
//!
//! Typed async clients for the inventory REST services, the application's route
//! table, and the modal dialog broker that lets code await user answers.

pub mod api;
pub mod config;
pub mod dialog;
pub mod error;
pub mod model;
pub mod router;

mod client;

pub use client::*;
pub use error::Error;
