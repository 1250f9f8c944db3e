//! A single reported trade.

use crate::orders::{OrderId, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed trade between a resting counterparty and an aggressor,
/// already aggregated across any repeated fills against the same resting
/// id within one aggressor pass (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Identifies the buy-side participant, regardless of which side
    /// aggressed.
    pub buy_id: OrderId,
    /// Identifies the sell-side participant, regardless of which side
    /// aggressed.
    pub sell_id: OrderId,
    /// The resting order's price — trades always clear at the resting
    /// price, never the aggressor's limit.
    pub price: Price,
    /// Total quantity traded between these two counterparties at this
    /// price within this aggressor pass.
    pub quantity: u64,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.buy_id, self.sell_id, self.price, self.quantity
        )
    }
}
