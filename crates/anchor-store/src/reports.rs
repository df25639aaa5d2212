//! # Reports
//!
//! Loads collections from storage and hands them to the pure functions in
//! [`anchor_core::stats`] and [`anchor_core::export`].

use chrono::NaiveDate;
use tracing::debug;

use anchor_core::export::{expenses_to_csv, orders_to_csv, timesheets_to_csv};
use anchor_core::stats::{self, ClientTotal, DashboardStats, StatsInput};
use anchor_core::InventoryItem;

use crate::error::DbResult;
use crate::pool::Database;

impl Database {
    /// Dashboard figures as of `today` (used for overdue tasks).
    pub async fn dashboard_stats(&self, today: NaiveDate) -> DbResult<DashboardStats> {
        let orders = self.orders().get_all().await?;
        let clients = self.clients().get_all().await?;
        let inventory = self.inventory().get_all().await?;
        let bids = self.bids().get_all().await?;
        let tasks = self.tasks().get_all().await?;
        let expenses = self.expenses().get_all().await?;
        let timesheets = self.timesheets().get_all().await?;
        let settings = self.settings().get().await?;

        let stats = DashboardStats::compute(
            StatsInput {
                orders: &orders,
                clients: &clients,
                inventory: &inventory,
                bids: &bids,
                tasks: &tasks,
                expenses: &expenses,
                timesheets: &timesheets,
                settings: &settings,
            },
            today,
        );

        debug!(
            orders = stats.order_count,
            revenue = %stats.total_revenue,
            "Computed dashboard stats"
        );
        Ok(stats)
    }

    /// Items at or below their reorder level.
    pub async fn low_stock_items(&self) -> DbResult<Vec<InventoryItem>> {
        let inventory = self.inventory().get_all().await?;
        let threshold = self.settings().get().await?.low_stock_threshold;

        Ok(stats::low_stock_items(&inventory, threshold)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Per-client order totals, biggest spender first.
    pub async fn client_totals(&self) -> DbResult<Vec<ClientTotal>> {
        let clients = self.clients().get_all().await?;
        let orders = self.orders().get_all().await?;
        Ok(stats::client_totals(&clients, &orders))
    }

    pub async fn export_expenses_csv(&self) -> DbResult<String> {
        Ok(expenses_to_csv(&self.expenses().get_all().await?))
    }

    pub async fn export_timesheets_csv(&self) -> DbResult<String> {
        let entries = self.timesheets().get_all().await?;
        let rate = self.settings().get().await?.default_hourly_rate;
        Ok(timesheets_to_csv(&entries, rate))
    }

    pub async fn export_orders_csv(&self) -> DbResult<String> {
        let orders = self.orders().get_all().await?;
        let clients = self.clients().get_all().await?;
        Ok(orders_to_csv(&orders, &clients))
    }
}
