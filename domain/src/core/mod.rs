//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of a model served by the local model server
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
