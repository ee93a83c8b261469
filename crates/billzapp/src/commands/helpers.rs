use serde_json::Value;

use crate::factory::RawRecord;

/// Builds a raw record from `key=value` arguments.
///
/// Values stay strings; the record factory coerces them. Arguments without `=`
/// or with an empty key are returned as rejected. Later keys overwrite earlier ones.
pub fn record_from_pairs<I: AsRef<str>>(pairs: &[I]) -> (RawRecord, Vec<String>) {
    let mut record = RawRecord::new();
    let mut rejected = Vec::new();
    for pair in pairs {
        let pair = pair.as_ref();
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                record.insert(key.trim().to_string(), Value::String(value.to_string()));
            }
            _ => rejected.push(pair.to_string()),
        }
    }
    (record, rejected)
}

/// `"1 invoice"`, `"3 invoices"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
