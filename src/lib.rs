//! Lead capture and IdeaSoft publishing API.
//!
//! A small HTTP service with a health probe, a lead-capture endpoint backed
//! by Postgres, and a proxy that forwards product documents to IdeaSoft.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Shared models and errors.
//! - `integrations`: External service integrations.
//! - `config`: Configuration management.
//! - `db`: Per-request database connections and schema.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `ideasoft_client`: IdeaSoft product API client.
//! - `lead_storage`: Lead persistence.
//! - `models`: Request and response models.
//! - `routes`: Router construction.

pub mod api;
pub mod core;
pub mod integrations;

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod ideasoft_client;
pub mod lead_storage;
pub mod models;
pub mod routes;
