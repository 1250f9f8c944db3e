//! The fixed-width ASCII book snapshot (spec §4.5/§6).

use crate::book::OrderBook;
use crate::orders::Order;
use std::fmt::Write as _;

const BORDER: &str = "+-----------------------------------------------------------------+";
const SEPARATOR: &str = "+----------+-------------+-------+-------+-------------+----------+";

/// Renders the current book as a 67-column fixed-width table.
///
/// Bids are listed left-to-right top-down in priority order (best first);
/// asks the same on the right. Rows pair up by index; a side shorter than
/// the other leaves its columns blank for the remaining rows.
pub fn render(book: &OrderBook) -> String {
    let bids: Vec<&Order> = book.bids().orders_in_priority_order().collect();
    let asks: Vec<&Order> = book.asks().orders_in_priority_order().collect();
    let rows = bids.len().max(asks.len());

    let mut out = String::new();
    let _ = writeln!(out, "{BORDER}");
    let _ = writeln!(out, "| {:<31}| {:<31}|", "BUY", "SELL");
    let _ = writeln!(
        out,
        "|{:>10}|{:>13}|{:>7}|{:>7}|{:>13}|{:>10}|",
        "Id", "Volume", "Price", "Price", "Volume", "Id"
    );
    let _ = writeln!(out, "{SEPARATOR}");

    for i in 0..rows {
        let (bid_id, bid_vol, bid_price) = match bids.get(i) {
            Some(o) => (o.id().to_string(), thousands(o.visible() as u64), o.price().to_string()),
            None => (String::new(), String::new(), String::new()),
        };
        let (ask_price, ask_vol, ask_id) = match asks.get(i) {
            Some(o) => (o.price().to_string(), thousands(o.visible() as u64), o.id().to_string()),
            None => (String::new(), String::new(), String::new()),
        };
        let _ = writeln!(
            out,
            "|{bid_id:>10}|{bid_vol:>13}|{bid_price:>7}|{ask_price:>7}|{ask_vol:>13}|{ask_id:>10}|"
        );
    }

    let _ = writeln!(out, "{BORDER}");
    out
}

/// Formats an integer with US-locale thousands separators (e.g. `1234567`
/// becomes `1,234,567`). Used only in the snapshot table; trade lines use
/// bare decimals (spec §6).
fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
