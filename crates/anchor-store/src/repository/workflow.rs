//! # Cross-Collection Workflows
//!
//! Operations that read one collection and write another.
//!
//! ## Bid Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  convert_bid_to_order(bid_id)                                           │
//! │                                                                         │
//! │  1. load bid ─────────────── missing ──► NotFound                       │
//! │  2. status check ─────────── converted / rejected ──► InvalidBidStatus  │
//! │  3. save Order { ORD-n, one line at bid amount, settings tax rate }     │
//! │  4. save Bid { status: converted, convertedOrderId }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps 3 and 4 are two separate blob writes. If step 4 fails the order
//! from step 3 stays in place and the bid keeps its old status.

use tracing::{info, warn};

use anchor_core::types::next_order_number;
use anchor_core::{
    BidStatus, CoreError, InventoryItem, Money, Order, OrderItem, OrderPricing, OrderStatus,
};

use crate::error::DbResult;
use crate::pool::Database;

impl Database {
    /// Turns an open or accepted bid into a pending order.
    pub async fn convert_bid_to_order(&self, bid_id: &str) -> DbResult<Order> {
        let bids = self.bids();
        let mut bid = bids.require(bid_id).await?;

        if !bid.status.can_convert() {
            warn!(bid_id = %bid_id, status = ?bid.status, "Refusing to convert bid");
            return Err(CoreError::InvalidBidStatus {
                bid_id: bid.id.clone(),
                status: bid.status,
            }
            .into());
        }

        let settings = self.settings().get().await?;
        let orders = self.orders();
        let existing = orders.get_all().await?;

        let items = vec![OrderItem::new(bid.title.clone(), 1, bid.amount)];
        let pricing =
            OrderPricing::calculate(&items, Money::zero(), settings.tax_rate(), Money::zero());

        let order = orders
            .save(&Order {
                order_number: next_order_number(&existing),
                client_id: bid.client_id.clone(),
                title: bid.title.clone(),
                description: bid.description.clone(),
                status: OrderStatus::Pending,
                items,
                pricing,
                ..Order::default()
            })
            .await?;

        bid.status = BidStatus::Converted;
        bid.converted_order_id = Some(order.id.clone());
        bids.save(&bid).await?;

        info!(
            bid_id = %bid_id,
            order_id = %order.id,
            order_number = %order.order_number,
            "Converted bid to order"
        );
        Ok(order)
    }

    /// Adds `delta` (may be negative) to an item's stock level.
    pub async fn adjust_stock(&self, item_id: &str, delta: i64) -> DbResult<InventoryItem> {
        let inventory = self.inventory();
        let mut item = inventory.require(item_id).await?;

        let new_quantity = item.quantity + delta;
        if new_quantity < 0 {
            return Err(CoreError::InsufficientStock {
                name: item.name,
                available: item.quantity,
                requested: -delta,
            }
            .into());
        }

        item.quantity = new_quantity;
        let saved = inventory.save(&item).await?;

        info!(item_id = %item_id, delta, quantity = saved.quantity, "Adjusted stock");
        Ok(saved)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use anchor_core::{Bid, BidStatus, CoreError, InventoryItem, Money, Order, Settings};

    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn db_with_bid(status: BidStatus) -> (Database, Bid) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.settings()
            .save(&Settings {
                default_tax_rate_bps: 1000,
                ..Settings::default()
            })
            .await
            .unwrap();

        let bid = db
            .bids()
            .save(&Bid {
                client_id: "client-1".to_string(),
                title: "Oak dining table".to_string(),
                amount: Money::from_dollars(1200),
                status,
                ..Bid::default()
            })
            .await
            .unwrap();
        (db, bid)
    }

    #[tokio::test]
    async fn test_convert_bid_creates_order_and_marks_bid() {
        let (db, bid) = db_with_bid(BidStatus::Accepted).await;
        db.orders()
            .save(&Order {
                order_number: "ORD-1007".to_string(),
                title: "Earlier".to_string(),
                ..Order::default()
            })
            .await
            .unwrap();

        let order = db.convert_bid_to_order(&bid.id).await.unwrap();

        assert_eq!(order.order_number, "ORD-1008");
        assert_eq!(order.client_id, "client-1");
        assert_eq!(order.pricing.subtotal, Money::from_dollars(1200));
        assert_eq!(order.pricing.tax, Money::from_dollars(120));
        assert_eq!(order.pricing.total, Money::from_dollars(1320));

        let bid = db.bids().get_by_id(&bid.id).await.unwrap().unwrap();
        assert_eq!(bid.status, BidStatus::Converted);
        assert_eq!(bid.converted_order_id, Some(order.id));
    }

    #[tokio::test]
    async fn test_convert_rejects_closed_bids() {
        for status in [BidStatus::Converted, BidStatus::Rejected] {
            let (db, bid) = db_with_bid(status).await;
            let err = db.convert_bid_to_order(&bid.id).await.unwrap_err();
            assert!(matches!(
                err,
                DbError::Domain(CoreError::InvalidBidStatus { .. })
            ));
            assert_eq!(db.orders().count().await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_convert_unknown_bid() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db.convert_bid_to_order("missing").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_adjust_stock() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let item = db
            .inventory()
            .save(&InventoryItem {
                name: "Brass hinge".to_string(),
                quantity: 10,
                ..InventoryItem::default()
            })
            .await
            .unwrap();

        let item = db.adjust_stock(&item.id, -4).await.unwrap();
        assert_eq!(item.quantity, 6);

        let err = db.adjust_stock(&item.id, -7).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::InsufficientStock {
                available: 6,
                requested: 7,
                ..
            })
        ));

        let stored = db.inventory().get_by_id(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 6);
    }
}
