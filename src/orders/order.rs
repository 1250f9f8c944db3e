//! The order model: plain limit orders and iceberg orders, and the fill
//! protocol described in spec.md §4.1.

use crate::orders::base::{OrderId, Price, Side};
use serde::{Deserialize, Serialize};

/// A resting or incoming order.
///
/// Mirrors the shape of the teacher crate's `OrderType` (common fields
/// repeated per variant rather than factored into a wrapping struct), but
/// carries only the two kinds this spec supports and drops `timestamp`/
/// `time_in_force`: time priority here is the order's position in the
/// resting deque, not a field on the order itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// A standard limit order: `visible` is its entire remaining quantity.
    Limit {
        id: OrderId,
        price: Price,
        side: Side,
        visible: u32,
    },
    /// An iceberg order: only `visible` is displayed to the market at any
    /// time; `hidden` is disclosed in `peak`-sized slices as fills occur.
    Iceberg {
        id: OrderId,
        price: Price,
        side: Side,
        visible: u32,
        hidden: u32,
        peak: u32,
    },
}

impl Order {
    /// Construct a plain limit order.
    pub fn limit(id: OrderId, price: Price, side: Side, visible: u32) -> Self {
        Order::Limit {
            id,
            price,
            side,
            visible,
        }
    }

    /// Construct an iceberg order. `peak` must be positive and `visible`
    /// must not exceed it; both are spec invariants (§3) checked here with
    /// `debug_assert!` since violating them is a caller bug, not recoverable
    /// input.
    pub fn iceberg(id: OrderId, price: Price, side: Side, visible: u32, hidden: u32, peak: u32) -> Self {
        debug_assert!(peak > 0, "iceberg peak must be positive");
        debug_assert!(visible <= peak, "iceberg visible must not exceed peak");
        Order::Iceberg {
            id,
            price,
            side,
            visible,
            hidden,
            peak,
        }
    }

    pub fn id(&self) -> OrderId {
        match self {
            Order::Limit { id, .. } => *id,
            Order::Iceberg { id, .. } => *id,
        }
    }

    pub fn price(&self) -> Price {
        match self {
            Order::Limit { price, .. } => *price,
            Order::Iceberg { price, .. } => *price,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            Order::Limit { side, .. } => *side,
            Order::Iceberg { side, .. } => *side,
        }
    }

    pub fn visible(&self) -> u32 {
        match self {
            Order::Limit { visible, .. } => *visible,
            Order::Iceberg { visible, .. } => *visible,
        }
    }

    pub fn hidden(&self) -> u32 {
        match self {
            Order::Limit { .. } => 0,
            Order::Iceberg { hidden, .. } => *hidden,
        }
    }

    /// Total remaining quantity: `visible + hidden`. This is what §4.2's
    /// "remaining" refers to, and what determines whether an order rests.
    pub fn total_remaining(&self) -> u64 {
        self.visible() as u64 + self.hidden() as u64
    }

    pub fn is_iceberg(&self) -> bool {
        matches!(self, Order::Iceberg { .. })
    }

    /// Applies an incoming fill of `amount` to this **resting** order
    /// (spec §4.1's `requestTrade`). Precondition: `amount <= visible()`;
    /// violating it is an `InvariantViolation` and panics rather than
    /// returning a `Result`, per spec §7.
    ///
    /// Returns `true` if this fill triggered an iceberg replenishment (the
    /// visible quantity hit zero and a new slice was disclosed from the
    /// hidden reserve) — the caller uses this to rotate the price level's
    /// time priority (spec §4.3).
    pub fn request_trade(&mut self, amount: u64) -> bool {
        match self {
            Order::Limit { visible, .. } => {
                let v = *visible as u64;
                assert!(
                    amount <= v,
                    "InvariantViolation: requestTrade amount {amount} exceeds visible {v}"
                );
                *visible = (v - amount) as u32;
                false
            }
            Order::Iceberg {
                visible,
                hidden,
                peak,
                ..
            } => {
                let v = *visible as u64;
                assert!(
                    amount <= v,
                    "InvariantViolation: requestTrade amount {amount} exceeds visible {v}"
                );
                *visible = (v - amount) as u32;
                if *visible == 0 && *hidden > 0 {
                    let refresh = (*hidden).min(*peak);
                    *hidden -= refresh;
                    *visible = refresh;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Rebuilds a resting order of this same kind/id/price/side from a
    /// *total* remaining quantity, splitting it into `visible`/`hidden` per
    /// `peak` for icebergs. Used once, when an aggressor's remaining
    /// quantity (tracked as a bare scalar throughout matching, per §4.1's
    /// "cap by total remaining" rule) must rest on the book.
    pub fn resting_with_remaining(&self, remaining: u64) -> Order {
        match self {
            Order::Limit { id, price, side, .. } => Order::Limit {
                id: *id,
                price: *price,
                side: *side,
                visible: remaining as u32,
            },
            Order::Iceberg {
                id, price, side, peak, ..
            } => {
                let visible = remaining.min(*peak as u64) as u32;
                let hidden = (remaining - visible as u64) as u32;
                Order::Iceberg {
                    id: *id,
                    price: *price,
                    side: *side,
                    visible,
                    hidden,
                    peak: *peak,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> OrderId {
        OrderId(n)
    }

    #[test]
    fn limit_request_trade_reduces_visible() {
        let mut o = Order::limit(id(1), Price(100), Side::Sell, 50);
        let replenished = o.request_trade(20);
        assert!(!replenished);
        assert_eq!(o.visible(), 30);
        assert_eq!(o.total_remaining(), 30);
    }

    #[test]
    fn iceberg_replenishes_when_visible_hits_zero() {
        let mut o = Order::iceberg(id(7), Price(100), Side::Sell, 100, 650, 100);
        let replenished = o.request_trade(100);
        assert!(replenished);
        assert_eq!(o.visible(), 100);
        assert_eq!(o.hidden(), 550);
        assert_eq!(o.total_remaining(), 650);
    }

    #[test]
    fn iceberg_final_slice_does_not_replenish_when_hidden_exhausted() {
        let mut o = Order::iceberg(id(7), Price(100), Side::Sell, 50, 0, 100);
        let replenished = o.request_trade(50);
        assert!(!replenished);
        assert_eq!(o.visible(), 0);
        assert_eq!(o.hidden(), 0);
        assert_eq!(o.total_remaining(), 0);
    }

    #[test]
    fn iceberg_partial_fill_does_not_replenish() {
        let mut o = Order::iceberg(id(7), Price(100), Side::Sell, 100, 650, 100);
        let replenished = o.request_trade(40);
        assert!(!replenished);
        assert_eq!(o.visible(), 60);
        assert_eq!(o.hidden(), 650);
    }

    #[test]
    #[should_panic(expected = "InvariantViolation")]
    fn request_trade_beyond_visible_panics() {
        let mut o = Order::limit(id(1), Price(100), Side::Sell, 10);
        o.request_trade(11);
    }

    #[test]
    fn resting_with_remaining_splits_iceberg_by_peak() {
        let template = Order::iceberg(id(4), Price(100), Side::Buy, 0, 0, 100);
        let rested = template.resting_with_remaining(700);
        assert_eq!(rested.visible(), 100);
        assert_eq!(rested.hidden(), 600);
        assert_eq!(rested.total_remaining(), 700);
    }

    #[test]
    fn resting_with_remaining_limit_is_all_visible() {
        let template = Order::limit(id(4), Price(100), Side::Buy, 0);
        let rested = template.resting_with_remaining(30);
        assert_eq!(rested.visible(), 30);
        assert_eq!(rested.hidden(), 0);
    }

    #[test]
    fn iceberg_round_trips_through_serde_json() {
        let o = Order::iceberg(id(7), Price(100), Side::Sell, 100, 650, 100);
        let json = serde_json::to_string(&o).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }

    #[test]
    fn limit_round_trips_through_serde_json() {
        let o = Order::limit(id(1), Price(99), Side::Buy, 50);
        let json = serde_json::to_string(&o).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }
}
