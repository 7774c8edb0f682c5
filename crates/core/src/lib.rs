//! Recipe Box Core - Shared types library.
//!
//! This crate provides common types used across all Recipe Box components:
//! - `client` - Record store, filter pipeline, and remote-service client
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Entity
//! shapes here are the *client-side* representations: translation from the
//! remote service's field names happens at the service boundary in the
//! `client` crate and never leaks into these types.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, entities, and enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
