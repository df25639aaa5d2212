//! # Repository Module
//!
//! Typed access to the JSON blobs in local storage.
//!
//! ## Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View                                                                   │
//! │       │  db.orders().save(&order)                                       │
//! │       ▼                                                                 │
//! │  Collection<Order>          SettingsRepository        workflow          │
//! │  ├── get_all()              ├── get()                 ├── convert_bid…  │
//! │  ├── get_by_id(id)          ├── save(settings)        └── adjust_stock  │
//! │  ├── save(record)           └── reset()                                 │
//! │  └── remove(id)                                                         │
//! │       │  whole-blob read / write                                        │
//! │       ▼                                                                 │
//! │  LocalStorage  (key → JSON string)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`Collection`] - generic CRUD, one per entity type
//! - [`SettingsRepository`] - the single settings object
//! - [`workflow`] - bid conversion and stock adjustment on [`crate::Database`]

pub mod collection;
pub mod settings;
pub mod workflow;

pub use collection::Collection;
pub use settings::SettingsRepository;
