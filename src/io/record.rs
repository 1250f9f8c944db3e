//! Parsing of input records into `(Side, Order)` pairs (spec §6/§7).

use crate::errors::EngineError;
use crate::orders::{Order, OrderId, Price, Side};

/// Parses one input line.
///
/// Returns `Ok(None)` for a line that must be silently ignored: empty, or
/// not starting with `B`/`S` (spec §7's `IgnorableInput`). Returns
/// `Ok(Some(..))` for a recognized, well-formed record. Returns
/// `Err(EngineError::ParseError)` for a recognized-but-malformed record.
pub fn parse_line(line: &str) -> Result<Option<(Side, Order)>, EngineError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(None);
    }

    let side = match line.as_bytes()[0] {
        b'B' => Side::Buy,
        b'S' => Side::Sell,
        _ => return Ok(None),
    };

    let mut fields = line.split(',');
    fields.next(); // the B/S tag, already consumed above

    let id: u32 = parse_field(line, fields.next(), "id")?;
    let price: i16 = parse_field(line, fields.next(), "price")?;
    let quantity = parse_field::<u32>(line, fields.next(), "quantity")?;
    let peak = match fields.next() {
        Some(raw) => Some(parse_raw::<u32>(line, raw, "peak")?),
        None => None,
    };
    if fields.next().is_some() {
        return Err(EngineError::ParseError {
            line: line.to_string(),
            reason: "too many fields".to_string(),
        });
    }

    if id == 0 {
        return Err(EngineError::InvalidFieldValue {
            field: "id",
            value: id.to_string(),
        });
    }
    if price <= 0 {
        return Err(EngineError::InvalidFieldValue {
            field: "price",
            value: price.to_string(),
        });
    }
    if let Some(peak) = peak {
        if peak == 0 {
            return Err(EngineError::InvalidFieldValue {
                field: "peak",
                value: peak.to_string(),
            });
        }
    }

    let order = match peak {
        Some(peak) => {
            let visible = quantity.min(peak);
            let hidden = quantity - visible;
            Order::iceberg(OrderId(id), Price(price), side, visible, hidden, peak)
        }
        None => Order::limit(OrderId(id), Price(price), side, quantity),
    };

    Ok(Some((side, order)))
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    raw: Option<&str>,
    field: &'static str,
) -> Result<T, EngineError> {
    let raw = raw.ok_or_else(|| EngineError::ParseError {
        line: line.to_string(),
        reason: format!("missing field {field}"),
    })?;
    parse_raw(line, raw, field)
}

fn parse_raw<T: std::str::FromStr>(line: &str, raw: &str, field: &'static str) -> Result<T, EngineError> {
    raw.parse().map_err(|_| EngineError::ParseError {
        line: line.to_string(),
        reason: format!("invalid {field}: {raw:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_ignored() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("\n").unwrap(), None);
    }

    #[test]
    fn line_with_unrecognized_tag_is_ignored() {
        assert_eq!(parse_line("X,1,2,3").unwrap(), None);
    }

    #[test]
    fn parses_plain_limit_order() {
        let (side, order) = parse_line("B,1,99,100").unwrap().unwrap();
        assert_eq!(side, Side::Buy);
        assert_eq!(order.id(), OrderId(1));
        assert_eq!(order.price(), Price(99));
        assert_eq!(order.visible(), 100);
        assert!(!order.is_iceberg());
    }

    #[test]
    fn parses_iceberg_order_splitting_visible_from_hidden() {
        let (side, order) = parse_line("B,4,100,1000,100").unwrap().unwrap();
        assert_eq!(side, Side::Buy);
        assert!(order.is_iceberg());
        assert_eq!(order.visible(), 100);
        assert_eq!(order.hidden(), 900);
    }

    #[test]
    fn malformed_numeric_field_is_a_parse_error() {
        let err = parse_line("B,1,abc,100").unwrap_err();
        assert!(matches!(err, EngineError::ParseError { .. }));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = parse_line("B,1,99").unwrap_err();
        assert!(matches!(err, EngineError::ParseError { .. }));
    }

    #[test]
    fn zero_id_is_an_invalid_field_value() {
        let err = parse_line("B,0,99,100").unwrap_err();
        assert!(matches!(err, EngineError::InvalidFieldValue { field: "id", .. }));
    }

    #[test]
    fn non_positive_price_is_an_invalid_field_value() {
        let err = parse_line("B,1,0,100").unwrap_err();
        assert!(matches!(err, EngineError::InvalidFieldValue { field: "price", .. }));
        let err = parse_line("B,1,-5,100").unwrap_err();
        assert!(matches!(err, EngineError::InvalidFieldValue { field: "price", .. }));
    }

    #[test]
    fn zero_peak_is_an_invalid_field_value() {
        let err = parse_line("B,1,99,100,0").unwrap_err();
        assert!(matches!(err, EngineError::InvalidFieldValue { field: "peak", .. }));
    }
}
