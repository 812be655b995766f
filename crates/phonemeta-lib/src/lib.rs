//! Core library for phone number metadata lookup.
//!
//! This crate holds the request-handling core shared by the HTTP service:
//!
//! - [`validate()`]: syntactic validation pipeline producing a
//!   [`NormalizedNumber`]
//! - [`ResponseCache`]: bounded, concurrency-safe, access-ordered cache of
//!   resolved metadata
//! - [`Resolve`]: the capability contract for number intelligence, with
//!   [`OfflineResolver`] as the shipped implementation over static
//!   numbering-plan tables
//! - [`MetadataResult`] / [`LineType`]: the enriched metadata model
//! - [`ValidationError`] / [`ResolveError`]: closed failure taxonomies
//!
//! The HTTP layer lives in `phonemeta-service`; nothing here performs I/O.

#![deny(warnings)]

pub mod cache;
pub mod error;
pub mod metadata;
pub mod plan;
pub mod resolver;
pub mod validate;

pub use cache::ResponseCache;
pub use error::{Error, ResolveError, Result, ValidationError};
pub use metadata::{LineType, MetadataResult};
pub use resolver::{OfflineResolver, Resolve};
pub use validate::{validate, NormalizedNumber};
