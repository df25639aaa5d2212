//! # anchor-store: Local Storage for ANCHOR
//!
//! This crate persists the ANCHOR CRM. Every collection is one JSON array
//! under one key of a string key-value store, the way a browser keeps it in
//! `localStorage`; here the store is a SQLite table reached through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ANCHOR Data Flow                                 │
//! │                                                                         │
//! │  View (orders list, dashboard, seed binary)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   anchor-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories │    │    Seeder    │   │   │
//! │  │   │   (pool.rs)   │    │  Collection<T>│    │  (seed.rs)   │   │   │
//! │  │   │               │◄───│  Settings     │    │              │   │   │
//! │  │   │ SqlitePool    │    │  workflow     │    │ first run    │   │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘   │   │
//! │  │           │                                                     │   │
//! │  │   ┌───────▼───────┐    ┌───────────────┐                        │   │
//! │  │   │ LocalStorage  │    │   Reports     │ → anchor_core::stats   │   │
//! │  │   │ key → JSON    │    │ dashboard/CSV │                        │   │
//! │  │   └───────────────┘    └───────────────┘                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: local_storage(key, value, updated_at)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`storage`] - The raw key-value store
//! - [`repository`] - Collection façade, settings, cross-collection workflows
//! - [`seed`] - Sample-data seeder
//! - [`reports`] - Dashboard stats and CSV exports over stored data
//! - [`config`] - Environment configuration and tracing setup
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use anchor_store::{seed_if_empty, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("anchor.db")).await?;
//! seed_if_empty(&db).await?;
//!
//! let mut client = db.clients().get_by_id("client-1").await?.unwrap();
//! client.phone = Some("555-0199".into());
//! db.clients().save(&client).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod reports;
pub mod repository;
pub mod seed;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{init_tracing, AnchorConfig};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use storage::LocalStorage;

// Repository re-exports for convenience
pub use repository::collection::Collection;
pub use repository::settings::SettingsRepository;
pub use seed::{seed_if_empty, seed_sample_data, SampleData};
