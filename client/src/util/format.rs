//! Display formatting for prices and backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Price label; `None` and zero render as free admission.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(amount) if amount > 0.0 => format!("S/ {amount:.2}"),
        _ => "Gratis".to_owned(),
    }
}

/// `YYYY-MM-DD HH:MM` from an ISO-8601 timestamp; other input is shown as-is.
#[must_use]
pub fn format_datetime(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once(['T', ' ']) else {
        return raw.to_owned();
    };
    let hhmm: String = time.chars().take(5).collect();
    if hhmm.len() == 5 && hhmm.as_bytes()[2] == b':' {
        format!("{date} {hhmm}")
    } else {
        date.to_owned()
    }
}
