/// Prices above this are assumed to be stored in paise.
pub const MINOR_UNIT_THRESHOLD: f64 = 1000.0;

/// Format a stored price as whole Indian rupees, e.g. `₹1,23,456`.
///
/// Stored prices have no unit field: anything above 1000 is read as paise and
/// divided by 100, anything else is read as rupees. A genuine ₹1500 price is
/// therefore shown as ₹15.
///
/// Rounds half away from zero and groups digits the Indian way (last three,
/// then pairs).
///
/// ```
/// use storefront_ui::format_price;
///
/// assert_eq!(format_price(500.0), "₹500");
/// assert_eq!(format_price(1500.0), "₹15");
/// assert_eq!(format_price(12_345_678.0), "₹1,23,457");
/// ```
pub fn format_price(price: f64) -> String {
    let rupees = if price > MINOR_UNIT_THRESHOLD {
        price / 100.0
    } else {
        price
    };

    if rupees.is_nan() {
        return "₹NaN".to_string();
    }

    let sign = if rupees.is_sign_negative() { "-" } else { "" };
    if rupees.is_infinite() {
        return format!("{sign}₹∞");
    }

    let digits = format!("{:.0}", rupees.abs().round());
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    let lead = head.len() % 2;
    if lead == 1 {
        grouped.push_str(&head[..1]);
    }
    for pair in head.as_bytes()[lead..].chunks(2) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.extend(pair.iter().map(|&b| char::from(b)));
    }

    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_unit_prices() {
        assert_eq!(format_price(0.0), "₹0");
        assert_eq!(format_price(500.0), "₹500");
        assert_eq!(format_price(999.4), "₹999");
        assert_eq!(format_price(1000.0), "₹1,000");
    }

    #[test]
    fn test_minor_unit_heuristic() {
        assert_eq!(format_price(1500.0), "₹15");
        assert_eq!(format_price(1000.01), "₹10");
        assert_eq!(format_price(49_900.0), "₹499");
        assert_eq!(format_price(249_999.0), "₹2,500");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_price(10.5), "₹11");
        assert_eq!(format_price(-10.5), "-₹11");
        assert_eq!(format_price(1050.0), "₹11");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian("1"), "1");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
        assert_eq!(format_price(1_000_000_000.0), "₹1,00,00,000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_price(f64::NAN), "₹NaN");
        assert_eq!(format_price(f64::INFINITY), "₹∞");
        assert_eq!(format_price(-5.0), "-₹5");
    }
}
