//! # Sample Data
//!
//! Pseudo-random invoices for demo mode. A generated invoice looks like what a user
//! would type: an `INV-nnnnn` id, a company as customer, a few lorem words as notes
//! and a value between 20.00 and 9999.99 held as a two-decimal string.
//!
//! ## Dates and Statuses
//!
//! Drafts and pending approvals are dated within the next 5 days; everything else
//! within the last 180 days. The due date is 45, 60 or 90 days after the invoice
//! date. Statuses other than draft, pending approval and paid are then reconciled
//! against today's date by [`reconcile_status`]. The generated record goes through
//! the record factory like any form input.
//!
//! ## Bursts
//!
//! Bulk generation is a burst of `count` creations spaced evenly in time;
//! [`burst_schedule`] yields the offsets, the caller does the waiting.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Words;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::factory::{create_invoice_from_record, FactoryDefaults, RawRecord};
use crate::invoice::{Invoice, InvoiceStatus};
use crate::model::StatusKind;

/// Invoices per burst unless configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Spacing between burst creations unless configured otherwise.
pub const DEFAULT_SAMPLE_DELAY_MS: u64 = 100;

const DUE_TERMS_DAYS: [i64; 3] = [45, 60, 90];
const RECENT_WINDOW_DAYS: i64 = 180;
const SOON_WINDOW_DAYS: i64 = 5;
const MIN_CENTS: u64 = 2_000;
const MAX_CENTS: u64 = 999_999;

pub struct SampleGenerator<R: Rng> {
    rng: R,
}

impl SampleGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A raw record, as a form loaded with sample data would hold it.
    pub fn record(&mut self, now: DateTime<Utc>) -> RawRecord {
        let id = format!("INV-{:05}", self.rng.gen_range(0..100_000u32));
        let cents = self.rng.gen_range(MIN_CENTS..=MAX_CENTS);
        let value = format!("{}.{:02}", cents / 100, cents % 100);

        let status = *InvoiceStatus::ALL
            .choose(&mut self.rng)
            .unwrap_or(&InvoiceStatus::Draft);

        let customer: String = CompanyName().fake_with_rng(&mut self.rng);
        let words: Vec<String> = Words(3..9).fake_with_rng(&mut self.rng);

        let invoice_date = match status {
            InvoiceStatus::Draft | InvoiceStatus::PendingApproval => {
                now + self.offset_within(SOON_WINDOW_DAYS)
            }
            _ => now - self.offset_within(RECENT_WINDOW_DAYS),
        };
        let term = *DUE_TERMS_DAYS.choose(&mut self.rng).unwrap_or(&60);
        let due_date = invoice_date + Duration::days(term);
        let status = reconcile_status(status, due_date, now);

        let mut record = RawRecord::new();
        record.insert("id".into(), Value::String(id));
        record.insert("currency".into(), Value::String("USD".into()));
        record.insert("value".into(), Value::String(value));
        record.insert("status".into(), Value::String(status.token().into()));
        record.insert("customerName".into(), Value::String(customer));
        record.insert("invoiceDate".into(), Value::String(invoice_date.to_rfc3339()));
        record.insert("dueDate".into(), Value::String(due_date.to_rfc3339()));
        record.insert("notes".into(), Value::String(words.join(" ")));
        record
    }

    /// A sample invoice built through the record factory.
    pub fn invoice(&mut self, now: DateTime<Utc>, defaults: &FactoryDefaults) -> Invoice {
        let record = self.record(now);
        create_invoice_from_record(&record, now, defaults)
    }

    fn offset_within(&mut self, days: i64) -> Duration {
        Duration::seconds(self.rng.gen_range(1..=days * 86_400))
    }
}

/// Derives a status from the due date, for statuses that track payment timing.
///
/// Draft, pending approval and paid pass through. Otherwise: a due date on today's
/// local calendar day is `due`, a past one is `pastDue`, a future one is
/// `awaitingPayment`.
pub fn reconcile_status(
    status: InvoiceStatus,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> InvoiceStatus {
    match status {
        InvoiceStatus::Draft | InvoiceStatus::PendingApproval | InvoiceStatus::Paid => status,
        _ => {
            let today = now.with_timezone(&Local).date_naive();
            let due_day = due_date.with_timezone(&Local).date_naive();
            if today == due_day {
                InvoiceStatus::Due
            } else if now > due_date {
                InvoiceStatus::PastDue
            } else {
                InvoiceStatus::AwaitingPayment
            }
        }
    }
}

/// Offsets at which each of `count` creations is due: the i-th at `i * spacing`.
pub fn burst_schedule(count: usize, spacing: StdDuration) -> Vec<StdDuration> {
    (0..count).map(|i| spacing * i as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::coerce_number;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_records_have_expected_shape() {
        let mut generator = SampleGenerator::seeded(7);
        for _ in 0..50 {
            let record = generator.record(now());
            let id = record["id"].as_str().unwrap();
            assert!(id.starts_with("INV-"));
            assert_eq!(id.len(), 9);
            assert!(id[4..].chars().all(|c| c.is_ascii_digit()));

            let value = coerce_number(&record["value"]);
            assert!((20.0..=9999.99).contains(&value), "value {value}");
            let text = record["value"].as_str().unwrap();
            assert_eq!(text.split('.').nth(1).map(str::len), Some(2));

            assert_eq!(record["currency"], "USD");
            assert!(!record["customerName"].as_str().unwrap().is_empty());
            let words = record["notes"].as_str().unwrap().split(' ').count();
            assert!((3..=8).contains(&words), "{words} words");
        }
    }

    #[test]
    fn test_seeded_generators_repeat() {
        let mut a = SampleGenerator::seeded(42);
        let mut b = SampleGenerator::seeded(42);
        assert_eq!(a.record(now()), b.record(now()));
    }

    #[test]
    fn test_dates_follow_status() {
        let mut generator = SampleGenerator::seeded(3);
        let defaults = FactoryDefaults::default();
        for _ in 0..100 {
            let invoice = generator.invoice(now(), &defaults);
            let term = (invoice.due_date - invoice.invoice_date).num_days();
            assert!(DUE_TERMS_DAYS.contains(&term), "term {term}");
            match invoice.status {
                InvoiceStatus::Draft | InvoiceStatus::PendingApproval => {
                    assert!(invoice.invoice_date > now());
                    assert!(invoice.invoice_date <= now() + Duration::days(5));
                }
                _ => {
                    assert!(invoice.invoice_date < now());
                    assert!(invoice.invoice_date >= now() - Duration::days(180));
                }
            }
        }
    }

    #[test]
    fn test_reconciled_statuses_agree_with_due_date() {
        let mut generator = SampleGenerator::seeded(11);
        let defaults = FactoryDefaults::default();
        for _ in 0..100 {
            let invoice = generator.invoice(now(), &defaults);
            match invoice.status {
                InvoiceStatus::PastDue => assert!(invoice.due_date < now()),
                InvoiceStatus::AwaitingPayment => assert!(invoice.due_date > now()),
                _ => {}
            }
        }
    }

    #[test]
    fn test_reconcile_passes_through_fixed_statuses() {
        let past = now() - Duration::days(10);
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::PendingApproval,
            InvoiceStatus::Paid,
        ] {
            assert_eq!(reconcile_status(status, past, now()), status);
        }
    }

    #[test]
    fn test_reconcile_uses_due_date() {
        let s = InvoiceStatus::AwaitingPayment;
        assert_eq!(
            reconcile_status(s, now() - Duration::days(3), now()),
            InvoiceStatus::PastDue
        );
        assert_eq!(
            reconcile_status(InvoiceStatus::PastDue, now() + Duration::days(3), now()),
            InvoiceStatus::AwaitingPayment
        );
        assert_eq!(reconcile_status(s, now(), now()), InvoiceStatus::Due);
    }

    #[test]
    fn test_burst_is_evenly_spaced() {
        let offsets = burst_schedule(4, StdDuration::from_millis(100));
        assert_eq!(
            offsets,
            vec![
                StdDuration::ZERO,
                StdDuration::from_millis(100),
                StdDuration::from_millis(200),
                StdDuration::from_millis(300)
            ]
        );
        assert!(burst_schedule(0, StdDuration::from_millis(100)).is_empty());
    }
}
