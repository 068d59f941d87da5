//! Number formatting for tables and headlines

/// Format with thousands separators and a fixed number of decimals
///
/// `format_amount(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + decimals + 2);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    // No "-0.00" for values that round to zero
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Currency amount with 2 decimals, sign before the symbol
pub fn format_currency(symbol: &str, value: f64) -> String {
    let amount = format_amount(value, 2);
    match amount.strip_prefix('-') {
        Some(positive) => format!("-{}{}", symbol, positive),
        None => format!("{}{}", symbol, amount),
    }
}

/// Annual rate as `12.00%`
pub fn format_rate(rate_pct: f64) -> String {
    format!("{}%", format_amount(rate_pct, 2))
}

/// Duration in years; whole years get no decimals
pub fn format_years(years: f64) -> String {
    let decimals = if years.fract() == 0.0 { 0 } else { 2 };
    let unit = if years == 1.0 { "year" } else { "years" };
    format!("{} {}", format_amount(years, decimals), unit)
}
