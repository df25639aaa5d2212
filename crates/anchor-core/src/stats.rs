//! # Derived Statistics
//!
//! Aggregates the dashboard and report views show. Nothing here is stored:
//! every figure is recomputed by scanning the collections.
//!
//! ## Dashboard Inputs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders ─────┬──► total revenue      (Σ pricing.total, ALL orders)      │
//! │              ├──► open orders / outstanding revenue                     │
//! │              └──► client totals      (joined on clientId)               │
//! │  inventory ──┬──► low-stock count    (quantity <= reorder level)        │
//! │              └──► inventory value    (Σ quantity × unitCost)            │
//! │  tasks ──────────► pending / overdue                                    │
//! │  bids ───────────► open bid value, win rate                             │
//! │  expenses ───────► expense total, by category                           │
//! │  timesheets ─────► hours, billable amount, by user                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{
    Bid, BidStatus, Client, Expense, InventoryItem, Order, Settings, Task, TaskStatus,
    TimesheetEntry,
};

/// Sum of `pricing.total` across every order, whatever its status.
pub fn total_revenue(orders: &[Order]) -> Money {
    orders.iter().map(|o| o.pricing.total).sum()
}

/// Items at or below their reorder level.
pub fn low_stock_items(items: &[InventoryItem], default_threshold: i64) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| item.is_low_stock(default_threshold))
        .collect()
}

/// Per-client order figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientTotal {
    pub client_id: String,
    pub client_name: String,
    pub order_count: usize,
    pub total_spent: Money,
}

/// Order count and spend per client, highest spend first.
///
/// Clients without orders appear with zeros. Orders whose `clientId` does
/// not match any client are ignored.
pub fn client_totals(clients: &[Client], orders: &[Order]) -> Vec<ClientTotal> {
    let mut by_client: HashMap<&str, (usize, Money)> = HashMap::new();
    for order in orders {
        let entry = by_client
            .entry(order.client_id.as_str())
            .or_insert((0, Money::zero()));
        entry.0 += 1;
        entry.1 += order.pricing.total;
    }

    let mut totals: Vec<ClientTotal> = clients
        .iter()
        .map(|client| {
            let (order_count, total_spent) = by_client
                .get(client.id.as_str())
                .copied()
                .unwrap_or((0, Money::zero()));
            ClientTotal {
                client_id: client.id.clone(),
                client_name: client.name.clone(),
                order_count,
                total_spent,
            }
        })
        .collect();

    totals.sort_by(|a, b| {
        b.total_spent
            .cmp(&a.total_spent)
            .then_with(|| a.client_name.cmp(&b.client_name))
    });
    totals
}

/// Expense totals keyed by category (sorted by name).
pub fn expenses_by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// Hours logged keyed by user id (sorted).
pub fn hours_by_user(entries: &[TimesheetEntry]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.user_id.clone()).or_insert(0.0) += entry.hours;
    }
    totals
}

/// Share of decided bids that were won, in basis points.
///
/// `None` while no bid has been accepted, converted or rejected.
pub fn bid_win_rate_bps(bids: &[Bid]) -> Option<u32> {
    let won = bids.iter().filter(|b| b.status.is_won()).count();
    let lost = bids
        .iter()
        .filter(|b| b.status == BidStatus::Rejected)
        .count();
    let decided = won + lost;

    if decided == 0 {
        return None;
    }
    Some(((won * 10_000 + decided / 2) / decided) as u32)
}

/// Borrowed view of every collection the dashboard reads.
#[derive(Debug, Clone, Copy)]
pub struct StatsInput<'a> {
    pub orders: &'a [Order],
    pub clients: &'a [Client],
    pub inventory: &'a [InventoryItem],
    pub bids: &'a [Bid],
    pub tasks: &'a [Task],
    pub expenses: &'a [Expense],
    pub timesheets: &'a [TimesheetEntry],
    pub settings: &'a Settings,
}

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: Money,
    pub order_count: usize,
    pub open_orders: usize,
    /// Σ total of orders not yet completed or cancelled.
    pub outstanding_revenue: Money,
    pub client_count: usize,
    pub low_stock_count: usize,
    pub inventory_value: Money,
    pub pending_tasks: usize,
    pub overdue_tasks: usize,
    /// Σ amount of draft and sent bids.
    pub open_bid_value: Money,
    pub bid_win_rate_bps: Option<u32>,
    pub expense_total: Money,
    pub hours_logged: f64,
    pub billable_amount: Money,
}

impl DashboardStats {
    /// Computes every figure in one pass per collection.
    pub fn compute(input: StatsInput<'_>, today: NaiveDate) -> Self {
        let open: Vec<&Order> = input.orders.iter().filter(|o| o.status.is_open()).collect();
        let default_rate = input.settings.default_hourly_rate;

        DashboardStats {
            total_revenue: total_revenue(input.orders),
            order_count: input.orders.len(),
            open_orders: open.len(),
            outstanding_revenue: open.iter().map(|o| o.pricing.total).sum(),
            client_count: input.clients.len(),
            low_stock_count: low_stock_items(input.inventory, input.settings.low_stock_threshold)
                .len(),
            inventory_value: input.inventory.iter().map(InventoryItem::stock_value).sum(),
            pending_tasks: input
                .tasks
                .iter()
                .filter(|t| t.status != TaskStatus::Done)
                .count(),
            overdue_tasks: input.tasks.iter().filter(|t| t.is_overdue(today)).count(),
            open_bid_value: input
                .bids
                .iter()
                .filter(|b| b.status.is_open())
                .map(|b| b.amount)
                .sum(),
            bid_win_rate_bps: bid_win_rate_bps(input.bids),
            expense_total: input.expenses.iter().map(|e| e.amount).sum(),
            hours_logged: input.timesheets.iter().map(|t| t.hours).sum(),
            billable_amount: input
                .timesheets
                .iter()
                .map(|t| t.billable_amount(default_rate))
                .sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
