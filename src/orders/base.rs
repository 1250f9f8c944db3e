//! Base order identifiers: side, id, price.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the book an order rests on or aggresses against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side (bids).
    Buy,
    /// Sell side (asks).
    Sell,
}

impl Side {
    /// The opposite side of the book.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// Unique order identifier, assumed nonzero and unique across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Limit price in ticks. The spec constrains this to a positive value that
/// fits a signed 16-bit integer; the sign is kept (rather than using `u16`)
/// because the wire format specifies a signed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(pub i16);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_side_flips() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn order_id_displays_as_bare_number() {
        assert_eq!(OrderId(42).to_string(), "42");
    }

    #[test]
    fn price_displays_as_bare_number() {
        assert_eq!(Price(101).to_string(), "101");
    }

    #[test]
    fn price_ordering_is_numeric() {
        assert!(Price(99) < Price(101));
    }
}
