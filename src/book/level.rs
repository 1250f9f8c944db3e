//! A single price level: a time-ordered FIFO queue of resting orders,
//! and the level-local matching pass (spec §4.3).

use crate::execution::TradeAggregator;
use crate::orders::{Order, OrderId, Price};
use std::collections::VecDeque;

/// An ordered, restartable sequence of resting orders at one price.
///
/// Time priority is the position in `orders`: index 0 is the head (earliest
/// arrival / highest priority). A `VecDeque` gives O(1) push-to-tail and
/// cheap `rotate_left`, which is exactly the primitive spec §4.3's rotation
/// rule needs.
#[derive(Debug)]
pub struct PriceLevel {
    price: Price,
    orders: VecDeque<Order>,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Appends a newly-resting order to the tail (spec §4.2 step 5, and the
    /// "refreshed iceberg slice is appended to the tail" rule of §4.3).
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Iterates resting orders head-to-tail (oldest first) for rendering.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Matches an aggressor against this level (spec §4.3).
    ///
    /// `remaining` is the aggressor's *total* remaining quantity, tracked as
    /// a bare scalar by the caller (see `Order::resting_with_remaining`).
    /// `aggressor_side`/`aggressor_id` identify the aggressor for trade
    /// reporting. Returns the aggregated trades produced against this level,
    /// in first-touch order, and leaves `remaining` updated and the level
    /// free of any fully-consumed orders.
    pub fn trade_at_price(
        &mut self,
        remaining: &mut u64,
        aggressor_id: OrderId,
        aggressor_side: crate::orders::Side,
    ) -> Vec<crate::execution::Trade> {
        tracing::trace!(price = ?self.price, %aggressor_id, remaining = *remaining, "matching level");
        let mut aggregator = TradeAggregator::new();

        while !self.orders.is_empty() && *remaining > 0 {
            let mut replenished = Vec::new();

            for i in 0..self.orders.len() {
                if *remaining == 0 {
                    break;
                }
                let resting = &mut self.orders[i];
                let amount = (*remaining).min(resting.visible() as u64);
                assert!(
                    amount > 0,
                    "InvariantViolation: zero-amount cross against a positive-visible resting order"
                );

                let resting_id = resting.id();
                if resting.request_trade(amount) {
                    replenished.push(resting_id);
                }
                *remaining -= amount;

                let (buy_id, sell_id) = match aggressor_side {
                    crate::orders::Side::Buy => (aggressor_id, resting_id),
                    crate::orders::Side::Sell => (resting_id, aggressor_id),
                };
                aggregator.record(resting_id, buy_id, sell_id, self.price, amount);
            }

            self.orders.retain(|o| o.total_remaining() > 0);

            // A replenished iceberg slice loses time priority to every
            // order that wasn't refreshed this pass (spec §4.3): sink it to
            // the tail the moment the replenishment happens, rather than
            // batching a single `rotate_left` at the end of the walk (which
            // is a no-op whenever every order in the level was visited).
            for id in replenished {
                if let Some(pos) = self.orders.iter().position(|o| o.id() == id) {
                    let order = self.orders.remove(pos).expect("position just found");
                    self.orders.push_back(order);
                }
            }
        }

        aggregator.into_trades()
    }
}
