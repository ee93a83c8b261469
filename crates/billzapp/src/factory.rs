//! # Record Factory
//!
//! Turns a raw, loosely-typed record (what a form or a sample generator holds)
//! into a fully-populated [`Invoice`]. The factory never fails: every malformed
//! or missing attribute is substituted with a default.
//!
//! | Attribute | Coercion | Fallback |
//! |-----------|----------|----------|
//! | `id` | stringified | `""` |
//! | `value` | numeric coercion | `NaN` |
//! | `currency` | non-blank string | default currency |
//! | `status` | known token | first status (`draft`) |
//! | `customerName`, `notes` | stringified | `""` |
//! | `invoiceDate` | date parsing | now |
//! | `dueDate` | date parsing | now + `due_in_days` |
//!
//! ## Numeric Coercion
//!
//! Numbers pass through. Strings are trimmed and parsed; a blank string is `0`,
//! `Infinity` is accepted, `0x`/`0o`/`0b` prefixes are read as integers. Booleans are
//! `1`/`0`, `null` is `0`, anything else is `NaN`.
//!
//! ## Accepted Dates
//!
//! - RFC 3339 timestamps (`2024-05-01T10:00:00Z`)
//! - `YYYY-MM-DD`, read as UTC midnight
//! - `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`, read as local time
//! - `M/D/YYYY`, read as local midnight (the display format, so forms round-trip)
//! - numbers, read as epoch milliseconds

use chrono::{
    DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use serde_json::{Map, Value};

use crate::format::DEFAULT_CURRENCY;
use crate::invoice::{Invoice, InvoicePatch, InvoiceStatus};
use crate::model::StatusKind;

/// A flat record keyed by attribute id with raw values.
pub type RawRecord = Map<String, Value>;

const DEFAULT_DUE_IN_DAYS: i64 = 60;

/// Substitutions used when a record omits or garbles an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryDefaults {
    pub currency: String,
    pub due_in_days: i64,
}

impl Default for FactoryDefaults {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            due_in_days: DEFAULT_DUE_IN_DAYS,
        }
    }
}

/// Builds an invoice from `raw`, substituting defaults for anything unusable.
pub fn create_invoice_from_record(
    raw: &RawRecord,
    now: DateTime<Utc>,
    defaults: &FactoryDefaults,
) -> Invoice {
    let value = match raw.get("value") {
        Some(v) => coerce_number(v),
        None => f64::NAN,
    };
    if value.is_nan() {
        tracing::debug!(raw = ?raw.get("value"), "invoice value is not a number");
    }

    let currency = raw
        .get("currency")
        .map(coerce_string)
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| defaults.currency.clone());

    let status = raw
        .get("status")
        .and_then(parse_status)
        .unwrap_or_else(|| {
            tracing::debug!(raw = ?raw.get("status"), "unknown invoice status, using default");
            InvoiceStatus::first()
        });

    let invoice_date = raw.get("invoiceDate").and_then(parse_date).unwrap_or_else(|| {
        tracing::debug!(raw = ?raw.get("invoiceDate"), "unparsable invoice date, using now");
        now
    });

    let due_date = raw.get("dueDate").and_then(parse_date).unwrap_or_else(|| {
        tracing::debug!(raw = ?raw.get("dueDate"), "unparsable due date, using default term");
        date_in_n_days(now, defaults.due_in_days)
    });

    Invoice {
        id: raw.get("id").map(coerce_string).unwrap_or_default(),
        value,
        currency: Some(currency),
        status,
        customer_name: raw.get("customerName").map(coerce_string).unwrap_or_default(),
        invoice_date,
        due_date,
        notes: raw.get("notes").map(coerce_string).unwrap_or_default(),
    }
}

impl Invoice {
    /// [`create_invoice_from_record`] at the current time with built-in defaults.
    pub fn from_record(raw: &RawRecord) -> Self {
        create_invoice_from_record(raw, Utc::now(), &FactoryDefaults::default())
    }
}

/// A patch parsed from a raw record, with the keys that could not be used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPatch {
    pub patch: InvoicePatch,
    /// Keys that are unknown, not patchable (`id`) or whose value did not parse.
    pub ignored: Vec<String>,
}

impl InvoicePatch {
    /// Reads the patchable attributes present in `raw`.
    ///
    /// Unlike the factory, a patch never substitutes defaults: a value that does not
    /// coerce leaves its attribute untouched and its key lands in `ignored`.
    pub fn from_record(raw: &RawRecord) -> ParsedPatch {
        let mut parsed = ParsedPatch::default();
        for (key, raw_value) in raw {
            let accepted = match key.as_str() {
                "value" => {
                    let value = coerce_number(raw_value);
                    parsed.patch.value = (!value.is_nan()).then_some(value);
                    parsed.patch.value.is_some()
                }
                "currency" => {
                    let currency = coerce_string(raw_value);
                    let keep = !currency.trim().is_empty();
                    if keep {
                        parsed.patch.currency = Some(currency);
                    }
                    keep
                }
                "status" => {
                    parsed.patch.status = parse_status(raw_value);
                    parsed.patch.status.is_some()
                }
                "customerName" => {
                    parsed.patch.customer_name = Some(coerce_string(raw_value));
                    true
                }
                "invoiceDate" => {
                    parsed.patch.invoice_date = parse_date(raw_value);
                    parsed.patch.invoice_date.is_some()
                }
                "dueDate" => {
                    parsed.patch.due_date = parse_date(raw_value);
                    parsed.patch.due_date.is_some()
                }
                "notes" => {
                    parsed.patch.notes = Some(coerce_string(raw_value));
                    true
                }
                _ => false,
            };
            if !accepted {
                parsed.ignored.push(key.clone());
            }
        }
        parsed
    }
}

fn parse_status(raw: &Value) -> Option<InvoiceStatus> {
    raw.as_str().and_then(InvoiceStatus::from_token)
}

/// Numeric coercion of a raw value. See the module docs for the rules.
pub fn coerce_number(raw: &Value) -> f64 {
    match raw {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric_str(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric_str(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust also accepts "inf" and "nan" spellings, which are not numbers here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// String form of a raw value. `null` is empty; numbers print without a trailing `.0`.
pub fn coerce_string(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Parses a raw date. See the module docs for accepted inputs.
pub fn parse_date(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::Number(n) => {
            let millis = n.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            Utc.timestamp_millis_opt(millis as i64).single()
        }
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return local_to_utc(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return local_to_utc(date.and_time(NaiveTime::MIN));
    }
    None
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `from` shifted by `days` whole days. A shift past the representable range
/// falls back to the built-in 60-day term.
pub fn date_in_n_days(from: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    shift_days(from, days)
        .or_else(|| {
            tracing::debug!(days, "due term out of range, using default term");
            shift_days(from, DEFAULT_DUE_IN_DAYS)
        })
        .unwrap_or(from)
}

fn shift_days(from: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|d| from.checked_add_signed(d))
}
