use chrono::NaiveDate;

/// Format an amount with thousands separators, sign preserved:
/// -1234.5 -> "-$1,234.50".
pub fn money(val: f64) -> String {
    let cents = (val.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let digits = whole.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    let sign = if val < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Render a service-supplied date (YYYY-MM-DD, optionally with a time
/// suffix) as a short human date. Unparseable input passes through as-is.
pub fn short_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
