//! # Sample Data Seeder
//!
//! Fills an empty store with a small, self-consistent workshop so the views
//! have something to show on first run.
//!
//! ## Fixture Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  client-1 Dana Whitfield ◄── order-1 ORD-1001 ◄── task-1, timesheet-1   │
//! │                          ◄── bid-1 (accepted)                           │
//! │  client-2 Marcus Bell    ◄── order-2 ORD-1002 ◄── task-2, expense-2     │
//! │                          ◄── bid-2 (sent)                               │
//! │  client-3 Priya Shah     ◄── order-3 ORD-1003 (completed)               │
//! │                          ◄── bid-3 (draft)                              │
//! │                                                                         │
//! │  user-1 owner ── timesheets ── user-2 staff                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Dates are relative to the day of seeding so overdue/upcoming figures look
//! alive whenever the seeder runs.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use tracing::info;

use anchor_core::{
    Bid, BidStatus, Client, CollectionKey, EmailTemplate, Expense, InventoryItem, Money, Note,
    Order, OrderItem, OrderPricing, OrderStatus, Settings, ShippingInfo, Task, TaskPriority,
    TaskStatus, TimesheetEntry, User, UserRole, SETTINGS_KEY,
};

use crate::error::DbResult;
use crate::pool::Database;

/// Every fixture collection plus the settings they were priced with.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub settings: Settings,
    pub clients: Vec<Client>,
    pub orders: Vec<Order>,
    pub inventory: Vec<InventoryItem>,
    pub bids: Vec<Bid>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub email_templates: Vec<EmailTemplate>,
    pub users: Vec<User>,
    pub expenses: Vec<Expense>,
    pub timesheets: Vec<TimesheetEntry>,
}

impl SampleData {
    /// Builds the fixtures with dates relative to `today`.
    pub fn build(today: NaiveDate, now: DateTime<Utc>) -> Self {
        let settings = Settings {
            business_name: "ANCHOR Custom Goods".to_string(),
            owner_name: "Sam Rivera".to_string(),
            email: "hello@anchorgoods.example".to_string(),
            phone: "555-0142".to_string(),
            default_tax_rate_bps: 825,
            ..Settings::default()
        };
        let stamp = Some(now);
        let day = |offset: i64| Some(today + Duration::days(offset));

        let clients = vec![
            Client {
                id: "client-1".to_string(),
                name: "Dana Whitfield".to_string(),
                email: Some("dana@whitfield.example".to_string()),
                phone: Some("555-0101".to_string()),
                company: Some("Whitfield Interiors".to_string()),
                address: Some("12 Harbor St, Portland, ME".to_string()),
                tags: vec!["repeat".to_string(), "trade".to_string()],
                notes: Some("Prefers walnut and oil finishes.".to_string()),
                created_at: stamp,
                updated_at: stamp,
            },
            Client {
                id: "client-2".to_string(),
                name: "Marcus Bell".to_string(),
                email: Some("marcus.bell@example.com".to_string()),
                phone: Some("555-0178".to_string()),
                tags: vec!["wedding".to_string()],
                created_at: stamp,
                updated_at: stamp,
                ..Client::default()
            },
            Client {
                id: "client-3".to_string(),
                name: "Priya Shah".to_string(),
                email: Some("priya@shahstudio.example".to_string()),
                company: Some("Shah Studio".to_string()),
                created_at: stamp,
                updated_at: stamp,
                ..Client::default()
            },
        ];

        let priced = |items: Vec<OrderItem>, shipping: Money| {
            let pricing =
                OrderPricing::calculate(&items, Money::zero(), settings.tax_rate(), shipping);
            (items, pricing)
        };

        let (items_1, pricing_1) = priced(
            vec![
                OrderItem::new("Walnut serving board", 4, Money::from_cents(8_500)),
                OrderItem::new("Engraving", 4, Money::from_cents(1_500)),
            ],
            Money::from_cents(1_200),
        );
        let (items_2, pricing_2) = priced(
            vec![OrderItem::new("Custom ring box", 2, Money::from_cents(12_000))],
            Money::zero(),
        );
        let (items_3, pricing_3) = priced(
            vec![OrderItem::new("Maple display shelf", 1, Money::from_cents(32_000))],
            Money::from_cents(4_500),
        );

        let orders = vec![
            Order {
                id: "order-1".to_string(),
                order_number: "ORD-1001".to_string(),
                client_id: "client-1".to_string(),
                title: "Engraved serving boards".to_string(),
                description: Some("Set of four, initials on the handle.".to_string()),
                status: OrderStatus::InProgress,
                items: items_1,
                pricing: pricing_1,
                shipping: ShippingInfo {
                    method: "ups-ground".to_string(),
                    address: "12 Harbor St, Portland, ME".to_string(),
                    ..ShippingInfo::default()
                },
                due_date: day(7),
                created_at: stamp,
                updated_at: stamp,
                ..Order::default()
            },
            Order {
                id: "order-2".to_string(),
                order_number: "ORD-1002".to_string(),
                client_id: "client-2".to_string(),
                title: "Wedding ring boxes".to_string(),
                status: OrderStatus::Pending,
                items: items_2,
                pricing: pricing_2,
                shipping: ShippingInfo {
                    method: "pickup".to_string(),
                    ..ShippingInfo::default()
                },
                due_date: day(21),
                notes: Some("Pickup before the rehearsal dinner.".to_string()),
                created_at: stamp,
                updated_at: stamp,
                ..Order::default()
            },
            Order {
                id: "order-3".to_string(),
                order_number: "ORD-1003".to_string(),
                client_id: "client-3".to_string(),
                title: "Studio display shelf".to_string(),
                status: OrderStatus::Completed,
                items: items_3,
                pricing: pricing_3,
                shipping: ShippingInfo {
                    method: "freight".to_string(),
                    address: "80 Mill Rd, Burlington, VT".to_string(),
                    tracking_number: Some("1Z999AA10123456784".to_string()),
                    shipped_at: day(-10),
                },
                due_date: day(-12),
                created_at: stamp,
                updated_at: stamp,
                ..Order::default()
            },
        ];

        let inventory = vec![
            inventory_item("inv-1", "Walnut board blank", "WAL-BLK", "Lumber", 3, Some(6), 2_400, stamp),
            inventory_item("inv-2", "Hard maple board", "MPL-BRD", "Lumber", 18, None, 1_800, stamp),
            inventory_item("inv-3", "Brass hinge pair", "HW-HNG-BR", "Hardware", 4, None, 650, stamp),
            inventory_item("inv-4", "Food-safe finishing oil", "FIN-OIL", "Finishes", 9, Some(3), 1_299, stamp),
        ];

        let bids = vec![
            Bid {
                id: "bid-1".to_string(),
                client_id: "client-1".to_string(),
                title: "Conference table".to_string(),
                amount: Money::from_dollars(2_400),
                status: BidStatus::Accepted,
                valid_until: day(14),
                created_at: stamp,
                updated_at: stamp,
                ..Bid::default()
            },
            Bid {
                id: "bid-2".to_string(),
                client_id: "client-2".to_string(),
                title: "Guest book stand".to_string(),
                amount: Money::from_dollars(350),
                status: BidStatus::Sent,
                valid_until: day(10),
                created_at: stamp,
                updated_at: stamp,
                ..Bid::default()
            },
            Bid {
                id: "bid-3".to_string(),
                client_id: "client-3".to_string(),
                title: "Wall-mounted plant shelves".to_string(),
                description: Some("Three tiers, white oak.".to_string()),
                amount: Money::from_dollars(780),
                status: BidStatus::Draft,
                created_at: stamp,
                updated_at: stamp,
                ..Bid::default()
            },
        ];

        let tasks = vec![
            Task {
                id: "task-1".to_string(),
                title: "Glue up serving boards".to_string(),
                status: TaskStatus::InProgress,
                priority: TaskPriority::High,
                due_date: day(2),
                order_id: Some("order-1".to_string()),
                assignee: Some("user-2".to_string()),
                created_at: stamp,
                updated_at: stamp,
                ..Task::default()
            },
            Task {
                id: "task-2".to_string(),
                title: "Order velvet lining".to_string(),
                status: TaskStatus::Todo,
                due_date: day(-1),
                order_id: Some("order-2".to_string()),
                created_at: stamp,
                updated_at: stamp,
                ..Task::default()
            },
            Task {
                id: "task-3".to_string(),
                title: "Sharpen plane irons".to_string(),
                status: TaskStatus::Done,
                priority: TaskPriority::Low,
                created_at: stamp,
                updated_at: stamp,
                ..Task::default()
            },
        ];

        let notes = vec![
            Note {
                id: "note-1".to_string(),
                title: "Finish schedule".to_string(),
                content: "Oil, wait 24h, second coat, buff with wax.".to_string(),
                tags: vec!["process".to_string()],
                pinned: true,
                created_at: stamp,
                updated_at: stamp,
                ..Note::default()
            },
            Note {
                id: "note-2".to_string(),
                title: "Dana call".to_string(),
                content: "Asked about a matching cheese board for the holidays.".to_string(),
                client_id: Some("client-1".to_string()),
                created_at: stamp,
                updated_at: stamp,
                ..Note::default()
            },
        ];

        let email_templates = vec![
            EmailTemplate {
                id: "tmpl-1".to_string(),
                name: "Order ready".to_string(),
                subject: "Your order {{orderNumber}} is ready".to_string(),
                body: "Hi {{clientName}},\n\nGood news: {{orderTitle}} is finished and ready \
                       for {{shippingMethod}}.\n\nThanks,\n{{businessName}}"
                    .to_string(),
                category: "orders".to_string(),
                created_at: stamp,
                updated_at: stamp,
            },
            EmailTemplate {
                id: "tmpl-2".to_string(),
                name: "Bid follow-up".to_string(),
                subject: "Following up on {{bidTitle}}".to_string(),
                body: "Hi {{clientName}},\n\nJust checking in on the quote for {{bidTitle}} \
                       ({{bidAmount}}). It is valid until {{validUntil}}.\n\n{{ownerName}}"
                    .to_string(),
                category: "bids".to_string(),
                created_at: stamp,
                updated_at: stamp,
            },
        ];

        let users = vec![
            User {
                id: "user-1".to_string(),
                name: "Sam Rivera".to_string(),
                email: "sam@anchorgoods.example".to_string(),
                role: UserRole::Owner,
                active: true,
                created_at: stamp,
                updated_at: stamp,
            },
            User {
                id: "user-2".to_string(),
                name: "Jo Park".to_string(),
                email: "jo@anchorgoods.example".to_string(),
                role: UserRole::Staff,
                active: true,
                created_at: stamp,
                updated_at: stamp,
            },
        ];

        let expenses = vec![
            Expense {
                id: "expense-1".to_string(),
                date: day(-6),
                category: "Materials".to_string(),
                vendor: "Northwoods Lumber".to_string(),
                description: Some("Walnut and maple".to_string()),
                amount: Money::from_cents(43_250),
                created_at: stamp,
                updated_at: stamp,
                ..Expense::default()
            },
            Expense {
                id: "expense-2".to_string(),
                date: day(-3),
                category: "Supplies".to_string(),
                vendor: "Fabric Depot".to_string(),
                description: Some("Velvet lining".to_string()),
                amount: Money::from_cents(3_899),
                order_id: Some("order-2".to_string()),
                created_at: stamp,
                updated_at: stamp,
            },
            Expense {
                id: "expense-3".to_string(),
                date: day(-2),
                category: "Tools".to_string(),
                vendor: "Hardware Hut".to_string(),
                amount: Money::from_cents(8_999),
                created_at: stamp,
                updated_at: stamp,
                ..Expense::default()
            },
        ];

        let timesheets = vec![
            TimesheetEntry {
                id: "timesheet-1".to_string(),
                date: day(-1),
                user_id: "user-2".to_string(),
                order_id: Some("order-1".to_string()),
                description: "Milling and glue-up".to_string(),
                hours: 5.5,
                created_at: stamp,
                updated_at: stamp,
                ..TimesheetEntry::default()
            },
            TimesheetEntry {
                id: "timesheet-2".to_string(),
                date: day(-4),
                user_id: "user-1".to_string(),
                order_id: Some("order-3".to_string()),
                description: "Final finish and delivery".to_string(),
                hours: 3.0,
                hourly_rate: Some(Money::from_dollars(75)),
                created_at: stamp,
                updated_at: stamp,
            },
        ];

        SampleData {
            settings,
            clients,
            orders,
            inventory,
            bids,
            tasks,
            notes,
            email_templates,
            users,
            expenses,
            timesheets,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn inventory_item(
    id: &str,
    name: &str,
    sku: &str,
    category: &str,
    quantity: i64,
    reorder_level: Option<i64>,
    unit_cost_cents: i64,
    stamp: Option<DateTime<Utc>>,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        sku: Some(sku.to_string()),
        category: category.to_string(),
        quantity,
        reorder_level,
        unit_cost: Money::from_cents(unit_cost_cents),
        created_at: stamp,
        updated_at: stamp,
        ..InventoryItem::default()
    }
}

/// Overwrites every collection and the settings with the sample fixtures.
pub async fn seed_sample_data(db: &Database) -> DbResult<SampleData> {
    let data = SampleData::build(Local::now().date_naive(), Utc::now());

    db.clients().replace_all(&data.clients).await?;
    db.orders().replace_all(&data.orders).await?;
    db.inventory().replace_all(&data.inventory).await?;
    db.bids().replace_all(&data.bids).await?;
    db.tasks().replace_all(&data.tasks).await?;
    db.notes().replace_all(&data.notes).await?;
    db.email_templates().replace_all(&data.email_templates).await?;
    db.users().replace_all(&data.users).await?;
    db.expenses().replace_all(&data.expenses).await?;
    db.timesheets().replace_all(&data.timesheets).await?;
    db.settings().save(&data.settings).await?;

    info!(
        clients = data.clients.len(),
        orders = data.orders.len(),
        inventory = data.inventory.len(),
        "Seeded sample data"
    );
    Ok(data)
}

/// Seeds only on first run, when neither a collection key nor the settings
/// key exists yet.
///
/// Returns whether seeding happened. A store where the user has deleted
/// every record still has its (empty) keys and is left alone, and so is a
/// store where only settings were saved.
pub async fn seed_if_empty(db: &Database) -> DbResult<bool> {
    let storage = db.storage();
    let keys = CollectionKey::ALL
        .iter()
        .map(CollectionKey::key)
        .chain(std::iter::once(SETTINGS_KEY));

    for key in keys {
        if storage.contains_key(key).await? {
            info!(key = %key, "Store already initialized, skipping seed");
            return Ok(false);
        }
    }

    seed_sample_data(db).await?;
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use anchor_core::{stats, Record};
    use std::collections::HashSet;

    fn sample() -> SampleData {
        SampleData::build(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), Utc::now())
    }

    #[test]
    fn test_fixtures_are_valid() {
        let data = sample();
        for c in &data.clients {
            c.validate().unwrap();
        }
        for o in &data.orders {
            o.validate().unwrap();
        }
        for i in &data.inventory {
            i.validate().unwrap();
        }
        for b in &data.bids {
            b.validate().unwrap();
        }
        for u in &data.users {
            u.validate().unwrap();
        }
        for e in &data.expenses {
            e.validate().unwrap();
        }
        for t in &data.timesheets {
            t.validate().unwrap();
        }
    }

    #[test]
    fn test_cross_references_resolve() {
        let data = sample();
        let clients: HashSet<&str> = data.clients.iter().map(|c| c.id.as_str()).collect();
        let orders: HashSet<&str> = data.orders.iter().map(|o| o.id.as_str()).collect();
        let users: HashSet<&str> = data.users.iter().map(|u| u.id.as_str()).collect();

        assert!(data.orders.iter().all(|o| clients.contains(o.client_id.as_str())));
        assert!(data.bids.iter().all(|b| clients.contains(b.client_id.as_str())));
        assert!(data
            .tasks
            .iter()
            .filter_map(|t| t.order_id.as_deref())
            .all(|id| orders.contains(id)));
        assert!(data
            .timesheets
            .iter()
            .all(|t| users.contains(t.user_id.as_str())));
    }

    #[test]
    fn test_fixture_pricing_is_consistent() {
        let data = sample();
        let first = &data.orders[0];
        // 4 × 85.00 + 4 × 15.00 = 400.00, tax 8.25% = 33.00, shipping 12.00
        assert_eq!(first.pricing.subtotal, Money::from_dollars(400));
        assert_eq!(first.pricing.tax, Money::from_dollars(33));
        assert_eq!(first.pricing.total, Money::from_cents(44_500));

        let sum: Money = data.orders.iter().map(|o| o.pricing.total).sum();
        assert_eq!(stats::total_revenue(&data.orders), sum);
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(seed_if_empty(&db).await.unwrap());
        assert_eq!(db.clients().count().await.unwrap(), 3);
        assert_eq!(db.settings().get().await.unwrap().default_tax_rate_bps, 825);

        db.clients().remove("client-1").await.unwrap();
        assert!(!seed_if_empty(&db).await.unwrap());
        assert_eq!(db.clients().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_saved_settings_block_first_run_seed() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let settings = Settings {
            business_name: "Harbor Leather".to_string(),
            ..Settings::default()
        };
        db.settings().save(&settings).await.unwrap();

        assert!(!seed_if_empty(&db).await.unwrap());
        assert_eq!(db.settings().get().await.unwrap(), settings);
        assert_eq!(db.clients().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeded_store_has_every_collection() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_sample_data(&db).await.unwrap();

        let keys = db.storage().keys().await.unwrap();
        for collection in CollectionKey::ALL {
            assert!(keys.iter().any(|k| k == collection.key()));
        }
        assert!(keys.iter().any(|k| k == anchor_core::SETTINGS_KEY));
    }
}
