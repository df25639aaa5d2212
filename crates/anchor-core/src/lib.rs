//! # anchor-core: Pure Business Logic for ANCHOR
//!
//! This crate holds the entity records of the ANCHOR CRM and every
//! calculation made over them, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ANCHOR Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Views                                │   │
//! │  │   Orders ─ Clients ─ Inventory ─ Bids ─ Tasks ─ Timesheets ...  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON records (ts-rs bindings)         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ anchor-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │  stats  │ │ export  │ │template │  │   │
//! │  │   │ Order   │ │ Money   │ │Dashboard│ │  CSV    │ │ {{var}} │  │   │
//! │  │   │ Client… │ │ TaxRate │ │ totals  │ │         │ │         │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 anchor-store (Storage Layer)                    │   │
//! │  │        key-value table, collection façade, seeder               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity records (Order, Client, InventoryItem, ...)
//! - [`record`] - The [`Record`] trait and collection keys
//! - [`money`] - Money type with integer arithmetic
//! - [`stats`] - Derived dashboard figures
//! - [`export`] - CSV export of expenses, timesheets and orders
//! - [`template`] - E-mail template placeholder rendering
//! - [`validation`] - Field validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use anchor_core::{stats, Money, Order, OrderItem, OrderPricing, TaxRate};
//!
//! let items = vec![OrderItem::new("Walnut board", 2, Money::from_cents(8500))];
//! let pricing = OrderPricing::calculate(&items, Money::zero(), TaxRate::from_bps(825), Money::zero());
//! let order = Order { items, pricing, ..Order::default() };
//!
//! assert_eq!(stats::total_revenue(&[order]).cents(), 17000 + 1403);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod money;
pub mod record;
pub mod stats;
pub mod template;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use record::{new_record_id, CollectionKey, Record, SETTINGS_KEY};
pub use stats::{ClientTotal, DashboardStats, StatsInput};
pub use types::*;
