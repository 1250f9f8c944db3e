//! One side of the book: every resting price level on that side, kept in
//! best-price-first order.

use crate::book::level::PriceLevel;
use crate::orders::{Order, Price, Side};
use std::collections::BTreeMap;

/// All resting price levels on one side of the book.
///
/// Bids are ordered highest-price-first, asks lowest-price-first (spec
/// §4.5). A `BTreeMap<Price, PriceLevel>` keeps levels sorted by price
/// ascending; which end is "best" depends on `side`.
#[derive(Debug)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The best (highest bid / lowest ask) occupied price, if any.
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    pub fn level(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Removes a level if it has gone empty; keeps the map free of dead
    /// entries so `best_price` never returns an exhausted level.
    pub fn prune(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    /// Rests `order` at its own price, appending to the tail of that
    /// level's queue (creating the level if this is the first order there).
    pub fn rest(&mut self, order: Order) {
        self.levels
            .entry(order.price())
            .or_insert_with(|| PriceLevel::new(order.price()))
            .push_back(order);
    }

    /// Iterates occupied levels best-price-first.
    pub fn levels_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Iterates every resting order on this side in full priority order
    /// (price priority, then time priority within a level) — what the book
    /// snapshot renders (spec §4.5/§6).
    pub fn orders_in_priority_order(&self) -> impl Iterator<Item = &Order> {
        self.levels_best_first().flat_map(PriceLevel::iter)
    }
}
