//! # Display Formatting
//!
//! Pure string transforms shared by the schema, the derived views and any UI client:
//!
//! - [`camel_case_to_label`]: status tokens and field ids into human labels
//! - [`format_amount`]: monetary amounts in `en-US` currency notation
//! - [`format_date`]: timestamps as locale calendar dates (`M/D/YYYY`)
//! - [`format_number`]: plain numbers the way a browser would print them
//!
//! None of these are locale aware beyond the fixed `en-US` conventions.

use chrono::{DateTime, Local, Utc};

/// Currency used when an entity carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Converts a camelCase token into a capitalized label.
///
/// A space is inserted between every lowercase letter and the uppercase letter
/// following it, then the first character is uppercased:
/// `"pendingApproval"` → `"Pending Approval"`, `"due"` → `"Due"`.
///
/// The transform is not idempotent on strings that are already labels.
pub fn camel_case_to_label(camel_case: &str) -> String {
    let mut spaced = String::with_capacity(camel_case.len() + 4);
    let mut prev: Option<char> = None;
    for c in camel_case.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) if first != '\n' => first.to_uppercase().chain(chars).collect(),
        _ => spaced,
    }
}

/// Symbol and fraction digits for the currencies we know how to print.
fn currency_notation(code: &str) -> (Option<&'static str>, usize) {
    match code {
        "USD" => (Some("$"), 2),
        "EUR" => (Some("€"), 2),
        "GBP" => (Some("£"), 2),
        "JPY" => (Some("¥"), 0),
        "INR" => (Some("₹"), 2),
        "CAD" => (Some("CA$"), 2),
        "AUD" => (Some("A$"), 2),
        "KRW" => (Some("₩"), 0),
        _ => (None, 2),
    }
}

/// Formats a monetary amount, e.g. `1234.5` in USD → `"$1,234.50"`.
///
/// Unknown ISO codes are printed as a prefix (`"CHF 12.00"`). Non-finite values
/// keep the currency prefix around `NaN` / `∞` rather than failing.
pub fn format_amount(amount: f64, currency: Option<&str>) -> String {
    let code = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_ascii_uppercase();
    let (symbol, digits) = currency_notation(&code);
    let prefix = match symbol {
        Some(s) => s.to_string(),
        None => format!("{code}\u{a0}"),
    };

    if amount.is_nan() {
        return format!("{prefix}NaN");
    }
    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    if amount.is_infinite() {
        return format!("{sign}{prefix}∞");
    }

    let fixed = format!("{:.*}", digits, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{sign}{prefix}{grouped}.{f}"),
        None => format!("{sign}{prefix}{grouped}"),
    }
}

/// Renders a timestamp as a local calendar date (`M/D/YYYY`).
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

/// Renders a number without trailing zeros, spelling out non-finite values.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let spelled = if n > 0.0 { "Infinity" } else { "-Infinity" };
        spelled.to_string()
    } else {
        n.to_string()
    }
}
