//! Number formatting shared by every renderer

/// Group thousands with commas and keep at most three fraction digits,
/// e.g. `98750` -> `98,750` and `4.25` -> `4.25`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a JSON scalar the way tooltips show extra point fields
pub fn format_json_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(950.0), "950");
        assert_eq!(format_number(4200.0), "4,200");
        assert_eq!(format_number(98750.0), "98,750");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(-12548.0), "-12,548");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_number(4.2), "4.2");
        assert_eq!(format_number(156.5), "156.5");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_json_values() {
        assert_eq!(format_json_value(&json!(-5)), "-5");
        assert_eq!(format_json_value(&json!("up")), "up");
        assert_eq!(format_json_value(&json!(true)), "true");
    }
}
