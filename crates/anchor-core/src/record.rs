//! # Records and Collection Keys
//!
//! Every entity stored by ANCHOR implements [`Record`], which ties the type
//! to the local-storage key of its collection and to its validation rules.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  key                       value                                        │
//! │  ───────────────────────   ──────────────────────────────────────────   │
//! │  anchor_orders             [{"id":"…","orderNumber":"ORD-1001",…}, …]   │
//! │  anchor_clients            [{"id":"…","name":"Dana Whitfield",…}, …]    │
//! │  anchor_inventory          [ … ]                                        │
//! │  …                                                                      │
//! │  anchor_settings           {"businessName":"…", …}   (single object)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::types::{
    Bid, Client, EmailTemplate, Expense, InventoryItem, Note, Order, Task, TimesheetEntry, User,
};
use crate::validation::{
    validate_amount, validate_hours, validate_name, validate_optional_email, validate_quantity,
    validate_sku, ValidationResult,
};

/// JSON field holding a record's id.
pub const ID_FIELD: &str = "id";
/// JSON field stamped once when a record is first saved.
pub const CREATED_AT_FIELD: &str = "createdAt";
/// JSON field stamped on every save.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Local-storage key of the settings object.
pub const SETTINGS_KEY: &str = "anchor_settings";

/// Generates a fresh record id (UUID v4).
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Collection Key
// =============================================================================

/// The entity collections, one local-storage key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Orders,
    Clients,
    Inventory,
    Bids,
    Tasks,
    Notes,
    EmailTemplates,
    Users,
    Expenses,
    Timesheets,
}

impl CollectionKey {
    /// Every collection, in seeding order.
    pub const ALL: [CollectionKey; 10] = [
        CollectionKey::Clients,
        CollectionKey::Orders,
        CollectionKey::Inventory,
        CollectionKey::Bids,
        CollectionKey::Tasks,
        CollectionKey::Notes,
        CollectionKey::EmailTemplates,
        CollectionKey::Users,
        CollectionKey::Expenses,
        CollectionKey::Timesheets,
    ];

    /// The storage key the collection blob lives under.
    pub const fn key(&self) -> &'static str {
        match self {
            CollectionKey::Orders => "anchor_orders",
            CollectionKey::Clients => "anchor_clients",
            CollectionKey::Inventory => "anchor_inventory",
            CollectionKey::Bids => "anchor_bids",
            CollectionKey::Tasks => "anchor_tasks",
            CollectionKey::Notes => "anchor_notes",
            CollectionKey::EmailTemplates => "anchor_email_templates",
            CollectionKey::Users => "anchor_users",
            CollectionKey::Expenses => "anchor_expenses",
            CollectionKey::Timesheets => "anchor_timesheets",
        }
    }

    /// Singular entity name used in errors and logs.
    pub const fn entity_name(&self) -> &'static str {
        match self {
            CollectionKey::Orders => "Order",
            CollectionKey::Clients => "Client",
            CollectionKey::Inventory => "InventoryItem",
            CollectionKey::Bids => "Bid",
            CollectionKey::Tasks => "Task",
            CollectionKey::Notes => "Note",
            CollectionKey::EmailTemplates => "EmailTemplate",
            CollectionKey::Users => "User",
            CollectionKey::Expenses => "Expense",
            CollectionKey::Timesheets => "TimesheetEntry",
        }
    }
}

// =============================================================================
// Record Trait
// =============================================================================

/// An entity that lives in a local-storage collection.
///
/// The storage layer assigns `id`, `createdAt` and `updatedAt` at the JSON
/// level (see [`ID_FIELD`] and friends), so implementors only expose them.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The collection this record type is stored in.
    const COLLECTION: CollectionKey;

    fn id(&self) -> &str;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// Checks field rules. Called on the merged record before it is written.
    fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }
}

macro_rules! record_fields {
    () => {
        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }

        fn updated_at(&self) -> Option<DateTime<Utc>> {
            self.updated_at
        }
    };
}

impl Record for Order {
    const COLLECTION: CollectionKey = CollectionKey::Orders;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("title", &self.title)?;
        for item in &self.items {
            validate_quantity("quantity", item.quantity)?;
            validate_amount("unitPrice", item.unit_price)?;
        }
        validate_amount("discount", self.pricing.discount)?;
        validate_amount("shipping", self.pricing.shipping)
    }
}

impl Record for Client {
    const COLLECTION: CollectionKey = CollectionKey::Clients;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name)?;
        validate_optional_email(self.email.as_deref())
    }
}

impl Record for InventoryItem {
    const COLLECTION: CollectionKey = CollectionKey::Inventory;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name)?;
        if let Some(sku) = self.sku.as_deref() {
            validate_sku(sku)?;
        }
        validate_quantity("quantity", self.quantity)?;
        if let Some(level) = self.reorder_level {
            validate_quantity("reorderLevel", level)?;
        }
        validate_amount("unitCost", self.unit_cost)
    }
}

impl Record for Bid {
    const COLLECTION: CollectionKey = CollectionKey::Bids;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("title", &self.title)?;
        validate_amount("amount", self.amount)
    }
}

impl Record for Task {
    const COLLECTION: CollectionKey = CollectionKey::Tasks;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("title", &self.title)
    }
}

impl Record for Note {
    const COLLECTION: CollectionKey = CollectionKey::Notes;
    record_fields!();
}

impl Record for EmailTemplate {
    const COLLECTION: CollectionKey = CollectionKey::EmailTemplates;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name)
    }
}

impl Record for User {
    const COLLECTION: CollectionKey = CollectionKey::Users;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name)?;
        validate_optional_email(Some(&self.email))
    }
}

impl Record for Expense {
    const COLLECTION: CollectionKey = CollectionKey::Expenses;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_amount("amount", self.amount)
    }
}

impl Record for TimesheetEntry {
    const COLLECTION: CollectionKey = CollectionKey::Timesheets;
    record_fields!();

    fn validate(&self) -> ValidationResult<()> {
        validate_hours(self.hours)?;
        if let Some(rate) = self.hourly_rate {
            validate_amount("hourlyRate", rate)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
