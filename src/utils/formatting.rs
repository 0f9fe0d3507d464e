//! Formatting utilities used for CLI output.
//! Stored values are never rounded; these helpers round for display only.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Money with two decimals, e.g. `¥135.00`.
pub fn money(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Hours with two decimals, e.g. `1.50`.
pub fn hours(h: f64) -> String {
    format!("{:.2}", h)
}

/// `0.9` → `90%`; a discount of 1.0 shows as `-`.
pub fn discount(d: f64) -> String {
    if (d - 1.0).abs() < f64::EPSILON {
        "-".to_string()
    } else {
        format!("{}%", (d * 100.0).round())
    }
}

pub fn or_dash(v: Option<&str>) -> String {
    match v {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => "-".to_string(),
    }
}
