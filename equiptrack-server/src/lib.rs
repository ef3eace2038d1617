//! equiptrack-server: sports equipment inventory over HTTP
//!
//! Three resources (categories, equipment conditions, sports equipment)
//! with create/get/list/update/delete, backed by PostgreSQL.
//!
//! Layering:
//! - `models` - validated domain types and sort parsing
//! - `db` - connection pool, schema migrations, repositories
//! - `service` - validation, uniqueness checks, reference resolution
//! - `http` - axum router, request/response mapping, error translation

pub mod db;
pub mod http;
pub mod models;
pub mod service;
