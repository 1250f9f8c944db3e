//! Trade aggregation (spec §4.4, §9): merges consecutive fills against the
//! same resting counterparty at one price, within one aggressor pass, into
//! a single trade record — preserving first-touch order.

use crate::execution::trade::Trade;
use crate::orders::{OrderId, Price};
use std::collections::HashMap;

/// An insertion-ordered accumulator from resting-id to a mutable running
/// trade, scoped to a single call to `PriceLevel::trade_at_price` (one
/// aggressor, one price). Flushed into the engine's trade list in insertion
/// order once that price level has been fully walked.
///
/// Insertion order falls out of `trades` itself (new records are always
/// pushed to the tail); `index` only exists to find an existing record in
/// O(1) when the same resting id is touched again within this pass.
#[derive(Debug, Default)]
pub struct TradeAggregator {
    index: HashMap<OrderId, usize>,
    trades: Vec<Trade>,
}

impl TradeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fill of `quantity` between `buy_id` and `sell_id` at
    /// `price`, keyed by `resting_id` (one of `buy_id`/`sell_id` — whichever
    /// is the resting counterparty). A second fill against the same
    /// `resting_id` within this aggregator's scope is summed into the
    /// existing record rather than creating a new one.
    pub fn record(&mut self, resting_id: OrderId, buy_id: OrderId, sell_id: OrderId, price: Price, quantity: u64) {
        if let Some(&i) = self.index.get(&resting_id) {
            self.trades[i].quantity += quantity;
        } else {
            self.index.insert(resting_id, self.trades.len());
            self.trades.push(Trade {
                buy_id,
                sell_id,
                price,
                quantity,
            });
        }
    }

    /// Consumes the aggregator, returning its trades in first-touch order.
    pub fn into_trades(self) -> Vec<Trade> {
        self.trades
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
