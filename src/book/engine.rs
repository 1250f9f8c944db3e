//! The order book: both sides, and the cross-level matching walk that
//! turns an incoming order into trades and/or a resting order (spec §4.2).

use crate::book::side::BookSide;
use crate::execution::Trade;
use crate::orders::{Order, Price, Side};

/// A single-venue, single-instrument continuous limit order book.
#[derive(Debug)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
        }
    }

    pub fn bids(&self) -> &BookSide {
        &self.bids
    }

    pub fn asks(&self) -> &BookSide {
        &self.asks
    }

    fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Does the incoming order at `price` still cross the opposite side's
    /// best price? A buy crosses while the best ask is at or below its
    /// limit; a sell crosses while the best bid is at or above its limit
    /// (spec §4.2).
    fn crosses(side: Side, price: Price, opposite_best: Price) -> bool {
        match side {
            Side::Buy => opposite_best <= price,
            Side::Sell => opposite_best >= price,
        }
    }

    /// Submits an incoming order, matching it against the opposite side
    /// price-level by price-level until it is exhausted or no longer
    /// crosses, then resting any remainder on its own side.
    ///
    /// Returns the trades generated, in the order they occurred (best price
    /// first, then first-touch order within a price — spec §4.4).
    pub fn submit(&mut self, order: Order) -> Vec<Trade> {
        let id = order.id();
        let side = order.side();
        let price = order.price();
        let mut remaining = order.total_remaining();
        let mut trades = Vec::new();
        tracing::debug!(%id, ?side, ?price, remaining, "submitting order");

        while remaining > 0 {
            let opposite = side.opposite();
            let Some(best) = self.side_mut(opposite).best_price() else {
                break;
            };
            if !Self::crosses(side, price, best) {
                break;
            }

            let level = self
                .side_mut(opposite)
                .level(best)
                .expect("best_price must name an occupied level");
            let mut level_trades = level.trade_at_price(&mut remaining, id, side);
            trades.append(&mut level_trades);
            self.side_mut(opposite).prune(best);
        }

        if remaining > 0 {
            let resting = order.resting_with_remaining(remaining);
            self.side_mut(side).rest(resting);
            tracing::debug!(%id, remaining, "order rests on the book");
        }

        trades
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::OrderId;

    fn oid(n: u32) -> OrderId {
        OrderId(n)
    }

    #[test]
    fn resting_order_with_no_cross_just_rests() {
        let mut book = OrderBook::new();
        let trades = book.submit(Order::limit(oid(1), Price(99), Side::Buy, 10));
        assert!(trades.is_empty());
        assert_eq!(book.bids().best_price(), Some(Price(99)));
    }

    #[test]
    fn crossing_order_trades_against_resting_book() {
        let mut book = OrderBook::new();
        book.submit(Order::limit(oid(1), Price(99), Side::Buy, 100));
        let trades = book.submit(Order::limit(oid(2), Price(99), Side::Sell, 100));
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Price(99));
        assert_eq!(trades[0].quantity, 100);
        assert!(book.bids().is_empty());
        assert!(book.asks().is_empty());
    }

    #[test]
    fn partial_fill_rests_the_remainder() {
        let mut book = OrderBook::new();
        book.submit(Order::limit(oid(1), Price(100), Side::Sell, 50));
        let trades = book.submit(Order::limit(oid(2), Price(100), Side::Buy, 80));
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 50);
        assert!(book.asks().is_empty());
        assert_eq!(book.bids().best_price(), Some(Price(100)));
        let resting: Vec<_> = book.bids().orders_in_priority_order().collect();
        assert_eq!(resting.len(), 1);
        assert_eq!(resting[0].visible(), 30);
    }

    #[test]
    fn walks_multiple_price_levels_best_first() {
        let mut book = OrderBook::new();
        book.submit(Order::limit(oid(1), Price(101), Side::Sell, 10));
        book.submit(Order::limit(oid(2), Price(100), Side::Sell, 10));
        let trades = book.submit(Order::limit(oid(3), Price(101), Side::Buy, 20));
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, Price(100));
        assert_eq!(trades[1].price, Price(101));
        assert!(book.asks().is_empty());
        assert!(book.bids().is_empty());
    }

    #[test]
    fn resting_iceberg_only_ever_shows_visible() {
        let mut book = OrderBook::new();
        book.submit(Order::iceberg(oid(1), Price(100), Side::Sell, 100, 900, 100));
        let trades = book.submit(Order::limit(oid(2), Price(100), Side::Buy, 100));
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 100);
        let resting: Vec<_> = book.asks().orders_in_priority_order().collect();
        assert_eq!(resting[0].visible(), 100);
        assert_eq!(resting[0].hidden(), 800);
    }

    #[test]
    fn incoming_iceberg_aggressor_capped_by_total_remaining() {
        let mut book = OrderBook::new();
        book.submit(Order::limit(oid(1), Price(100), Side::Sell, 500));
        let trades = book.submit(Order::iceberg(oid(2), Price(100), Side::Buy, 50, 450, 50));
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 500);
        assert!(book.asks().is_empty());
        assert!(book.bids().is_empty());
    }
}
