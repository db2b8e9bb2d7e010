// src/lib.rs

//! Recipebox
//!
//! A small recipe catalog: recipes with ordered directions, ingredients and
//! shared categories, stored in SQLite and served as an HTML browsing UI
//! and a paginated JSON API.
//!
//! # Architecture
//!
//! - `db`: SQLite schema, migrations and entity models
//! - `serializer`: allowlist-driven JSON shaping of entities
//! - `pagination`: page requests and page envelopes
//! - `catalog`: the read operations the UI and API are built on
//! - `import`: bulk loading from TOML files
//! - `server`: axum router, handlers and templates (feature `server`)

pub mod catalog;
pub mod db;
mod error;
pub mod import;
pub mod pagination;
pub mod serializer;

#[cfg(feature = "server")]
pub mod server;

pub use error::{Error, Result};
pub use pagination::{Page, PageLimits, PageRequest};
pub use serializer::{Schema, dump, dump_many};
