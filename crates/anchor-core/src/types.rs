//! # Domain Types
//!
//! The entity records ANCHOR keeps in local storage.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entity Records                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Client      │◄──│      Order      │◄──│      Task       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name, email    │   │  clientId       │   │  orderId        │       │
//! │  │  company, tags  │   │  items, pricing │   │  status, due    │       │
//! │  └─────────────────┘   │  shipping       │   └─────────────────┘       │
//! │          ▲             └─────────────────┘            ▲                 │
//! │          │                     ▲                      │                 │
//! │  ┌───────┴─────────┐   ┌───────┴─────────┐   ┌────────┴────────┐       │
//! │  │       Bid       │   │     Expense     │   │ TimesheetEntry  │       │
//! │  │  amount, status │   │  amount, vendor │   │  hours, rate    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  InventoryItem   Note   EmailTemplate   User   Settings (single)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Arrows are conventions only: nothing fails when an `orderId` or
//! `clientId` points at a record that does not exist.
//!
//! ## Shape Rules
//! - JSON field names are camelCase (the browser views read them directly).
//! - Optional fields are omitted when `None`, so a partial record merges
//!   onto the stored one without clearing anything. Clearing a stored
//!   optional field is an explicit call (`Collection::unset` in
//!   anchor-store).
//! - Every struct is `#[serde(default)]` so blobs written by older views
//!   still decode.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 825 bps = 8.25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Order
// =============================================================================

/// Where an order sits in the shop's workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Priced but not yet confirmed by the client.
    Quote,
    /// Confirmed, work not started.
    #[default]
    Pending,
    InProgress,
    /// Built, waiting for pickup or shipping.
    Ready,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// An order is open until it is completed or cancelled.
    pub fn is_open(&self) -> bool {
        !matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// One line on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl OrderItem {
    pub fn new(description: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        OrderItem {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// `unit_price × quantity`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Pricing breakdown stored on every order.
///
/// ## Calculation
/// ```text
/// subtotal  = Σ line totals
/// taxable   = max(subtotal - discount, 0)
/// tax       = taxable × rate
/// total     = taxable + tax + shipping
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPricing {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

impl OrderPricing {
    /// Computes the breakdown for a set of line items.
    pub fn calculate(items: &[OrderItem], discount: Money, rate: TaxRate, shipping: Money) -> Self {
        let subtotal: Money = items.iter().map(OrderItem::line_total).sum();
        let taxable = if discount > subtotal {
            Money::zero()
        } else {
            subtotal - discount
        };
        let tax = taxable.calculate_tax(rate);

        OrderPricing {
            subtotal,
            discount,
            tax,
            shipping,
            total: taxable + tax + shipping,
        }
    }
}

/// Shipping sub-object of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingInfo {
    /// "pickup", "ups-ground", ...
    pub method: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub shipped_at: Option<NaiveDate>,
}

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: String,
    /// Human-facing number, e.g. `ORD-1004`.
    pub order_number: String,
    pub client_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub pricing: OrderPricing,
    pub shipping: ShippingInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Recomputes `pricing` from the line items, keeping discount and shipping.
    pub fn reprice(&mut self, rate: TaxRate) {
        self.pricing =
            OrderPricing::calculate(&self.items, self.pricing.discount, rate, self.pricing.shipping);
    }
}

/// Next free order number: one past the highest `ORD-n` in use, starting at 1001.
pub fn next_order_number(orders: &[Order]) -> String {
    let highest = orders
        .iter()
        .filter_map(|o| o.order_number.strip_prefix("ORD-"))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(1000);
    format!("ORD-{}", highest + 1)
}

// =============================================================================
// Client
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Inventory
// =============================================================================

/// Raw material or finished stock on the shelf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub category: String,
    pub quantity: i64,
    /// Low-stock threshold for this item. Falls back to the settings default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
    pub unit_cost: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    /// At or below its reorder level.
    pub fn is_low_stock(&self, default_threshold: i64) -> bool {
        self.quantity <= self.reorder_level.unwrap_or(default_threshold)
    }

    /// `quantity × unit_cost`.
    pub fn stock_value(&self) -> Money {
        self.unit_cost.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Bid
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
    /// Turned into an order; see `Bid::converted_order_id`.
    Converted,
}

impl BidStatus {
    /// Still waiting on a decision.
    pub fn is_open(&self) -> bool {
        matches!(self, BidStatus::Draft | BidStatus::Sent)
    }

    /// The client said yes (and it may already be an order).
    pub fn is_won(&self) -> bool {
        matches!(self, BidStatus::Accepted | BidStatus::Converted)
    }

    /// Can still become an order.
    pub fn can_convert(&self) -> bool {
        !matches!(self, BidStatus::Rejected | BidStatus::Converted)
    }
}

/// A price quote sent to a prospective client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Bid {
    pub id: String,
    pub client_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Money,
    pub status: BidStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub valid_until: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Task
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Not done and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < today)
    }
}

// =============================================================================
// Note
// =============================================================================

/// Free-form markdown note, optionally pinned to a client or order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Email Template
// =============================================================================

/// Reusable e-mail with `{{placeholder}}` slots. See [`crate::template`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub body: String,
    /// "quote", "follow-up", "shipping", ...
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Admin,
    #[default]
    Staff,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Expense
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Expense {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    /// "materials", "tools", "shipping", ...
    pub category: String,
    pub vendor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Timesheet Entry
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct TimesheetEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub description: String,
    pub hours: f64,
    /// Overrides `Settings::default_hourly_rate` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TimesheetEntry {
    /// Billable amount at the entry's own rate, or `default_rate`.
    pub fn billable_amount(&self, default_rate: Money) -> Money {
        self.hourly_rate.unwrap_or(default_rate).for_hours(self.hours)
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Business settings, stored as a single object rather than a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub currency_symbol: String,
    /// Applied when pricing new orders (825 = 8.25%).
    pub default_tax_rate_bps: u32,
    /// Used for items without their own `reorderLevel`.
    pub low_stock_threshold: i64,
    pub default_hourly_rate: Money,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            business_name: "ANCHOR Custom Goods".to_string(),
            owner_name: String::new(),
            email: String::new(),
            phone: String::new(),
            currency_symbol: "$".to_string(),
            default_tax_rate_bps: 0,
            low_stock_threshold: 5,
            default_hourly_rate: Money::from_dollars(50),
        }
    }
}

impl Settings {
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.default_tax_rate_bps)
    }

    /// Formats cents with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use anchor_core::types::Settings;
    /// use anchor_core::Money;
    ///
    /// let settings = Settings { currency_symbol: "€".to_string(), ..Settings::default() };
    /// assert_eq!(settings.format_money(Money::from_cents(-1234)), "-€12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert_eq!(TaxRate::zero().bps(), 0);
    }

    #[test]
    fn test_order_pricing() {
        let items = vec![
            OrderItem::new("Walnut cutting board", 2, Money::from_cents(8500)),
            OrderItem::new("Engraving", 1, Money::from_cents(1500)),
        ];
        let pricing = OrderPricing::calculate(
            &items,
            Money::from_cents(1000),
            TaxRate::from_bps(1000),
            Money::from_cents(1200),
        );

        assert_eq!(pricing.subtotal.cents(), 18500);
        assert_eq!(pricing.tax.cents(), 1750);
        assert_eq!(pricing.total.cents(), 17500 + 1750 + 1200);
    }

    #[test]
    fn test_discount_larger_than_subtotal_taxes_nothing() {
        let items = vec![OrderItem::new("Sample", 1, Money::from_cents(500))];
        let pricing = OrderPricing::calculate(
            &items,
            Money::from_cents(900),
            TaxRate::from_bps(825),
            Money::zero(),
        );
        assert_eq!(pricing.tax, Money::zero());
        assert_eq!(pricing.total, Money::zero());
    }

    #[test]
    fn test_next_order_number() {
        assert_eq!(next_order_number(&[]), "ORD-1001");

        let orders = vec![
            Order { order_number: "ORD-1007".to_string(), ..Order::default() },
            Order { order_number: "legacy".to_string(), ..Order::default() },
            Order { order_number: "ORD-1002".to_string(), ..Order::default() },
        ];
        assert_eq!(next_order_number(&orders), "ORD-1008");
    }

    #[test]
    fn test_status_predicates() {
        assert!(OrderStatus::Shipped.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
        assert!(BidStatus::Sent.is_open());
        assert!(BidStatus::Converted.is_won());
        assert!(!BidStatus::Rejected.can_convert());
        assert!(BidStatus::Accepted.can_convert());
    }

    #[test]
    fn test_task_overdue() {
        let today = date(2024, 6, 10);
        let mut task = Task {
            due_date: Some(date(2024, 6, 9)),
            ..Task::default()
        };
        assert!(task.is_overdue(today));

        task.status = TaskStatus::Done;
        assert!(!task.is_overdue(today));

        task.status = TaskStatus::Todo;
        task.due_date = Some(today);
        assert!(!task.is_overdue(today));

        task.due_date = None;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_low_stock_uses_item_level_then_default() {
        let mut item = InventoryItem {
            quantity: 4,
            ..InventoryItem::default()
        };
        assert!(item.is_low_stock(5));
        item.reorder_level = Some(2);
        assert!(!item.is_low_stock(5));
    }

    #[test]
    fn test_order_json_is_camel_case_and_omits_none() {
        let order = Order {
            id: "o1".to_string(),
            client_id: "c1".to_string(),
            ..Order::default()
        };
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["clientId"], "c1");
        assert_eq!(json["pricing"]["total"], 0);
        assert!(json.get("dueDate").is_none());
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_partial_blob_decodes_with_defaults() {
        let client: Client = serde_json::from_str(r#"{"id":"c9","name":"Lee"}"#).unwrap();
        assert_eq!(client.name, "Lee");
        assert!(client.tags.is_empty());
        assert!(client.email.is_none());
    }

    #[test]
    fn test_timesheet_billable_amount() {
        let entry = TimesheetEntry {
            hours: 2.5,
            ..TimesheetEntry::default()
        };
        assert_eq!(entry.billable_amount(Money::from_dollars(40)).cents(), 10000);

        let entry = TimesheetEntry {
            hours: 1.0,
            hourly_rate: Some(Money::from_dollars(75)),
            ..entry
        };
        assert_eq!(entry.billable_amount(Money::from_dollars(40)).cents(), 7500);
    }
}
