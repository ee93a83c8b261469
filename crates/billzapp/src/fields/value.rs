//! Field value types.
//!
//! This module defines the runtime representation of an entity attribute as read
//! through [`crate::model::MonetaryEntity::get_attr`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::format::{format_date, format_number};

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text (e.g., `id`, `customerName`, `currency`)
    Text(String),

    /// Plain number (e.g., `value`), NaN included
    Number(f64),

    /// Timestamp shown as a calendar date (e.g., `invoiceDate`)
    Date(DateTime<Utc>),

    /// Enumeration token (e.g., `status` = "pendingApproval")
    Enum(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&str> {
        match self {
            FieldValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Converts to a raw record value, as a form would hold it.
    ///
    /// Dates become their display string so that a collected form feeds back into
    /// the record factory unchanged. Non-finite numbers have no JSON form and become
    /// their spelled-out string.
    pub fn to_raw(&self) -> Value {
        match self {
            FieldValue::Text(s) | FieldValue::Enum(s) => Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(format_number(*n))),
            FieldValue::Date(d) => Value::String(format_date(d)),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Enum(s) => f.write_str(s),
            FieldValue::Number(n) => f.write_str(&format_number(*n)),
            FieldValue::Date(d) => f.write_str(&format_date(d)),
        }
    }
}
