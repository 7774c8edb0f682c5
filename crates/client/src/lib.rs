//! Recipe Box client library.
//!
//! The client's job is to mirror records from the remote recipe service in
//! an in-memory store and derive list views from them. Business logic on
//! the server is plain CRUD; everything here is snapshot bookkeeping plus a
//! pure filter/paginate computation.
//!
//! # Architecture
//!
//! - [`remote`] - `RecordService` trait and the reqwest-backed HTTP
//!   implementation. Wire-format translation (the server's field spellings)
//!   lives entirely at this boundary.
//! - [`store`] - Per-entity record stores: the latest fetched snapshot plus
//!   a tri-state load status and a last-error slot per collection.
//! - [`pipeline`] - Pure filter/pagination functions over the recipe
//!   snapshot.
//! - [`session`] - Durable single-entry slot persisting the logged-in user
//!   across runs.
//! - [`config`] - Environment-variable configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipe_box_client::config::Config;
//! use recipe_box_client::pipeline::{self, RecipeFilters, LIST_PAGE_SIZE};
//! use recipe_box_client::remote::HttpRecordService;
//! use recipe_box_client::store::RecordStore;
//!
//! let config = Config::from_env()?;
//! let service = HttpRecordService::new(&config)?;
//! let mut store = RecordStore::new(&config);
//!
//! store.recipes.fetch_all(&service).await?;
//! let filters = RecipeFilters::default();
//! let page = pipeline::page(store.recipes.all(), &filters, 1, LIST_PAGE_SIZE);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod remote;
pub mod session;
pub mod store;
