//! Status summary cards.
//!
//! [`summarize`] produces one [`StatusSummary`] per status, in enumeration order,
//! followed by an "All" summary over every entity. Each summary carries the count,
//! the total value and the top entries by value.

use std::cmp::Ordering;

use crate::collection::EntityCollection;
use crate::model::{MonetaryEntity, StatusKind};

/// Entries shown per card unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// Label of the unfiltered card.
pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone)]
pub struct StatusSummary<E: MonetaryEntity> {
    /// `None` for the "All" card.
    pub status: Option<E::Status>,
    pub label: String,
    pub count: usize,
    pub total: f64,
    /// Highest-value entities, ties in original order.
    pub top: Vec<E>,
    /// Whether this card matches the active filter.
    pub active: bool,
}

/// Summaries for every status plus the trailing "All" card.
pub fn summarize<E: MonetaryEntity>(
    collection: &EntityCollection<E>,
    filter: Option<E::Status>,
    top_n: usize,
) -> Vec<StatusSummary<E>> {
    let mut cards: Vec<StatusSummary<E>> = E::Status::ALL
        .iter()
        .map(|&status| {
            build(
                Some(status),
                status.label(),
                collection.get_by_status(status),
                filter == Some(status),
                top_n,
            )
        })
        .collect();

    cards.push(build(
        None,
        ALL_LABEL.to_string(),
        collection.entities().iter().collect(),
        filter.is_none(),
        top_n,
    ));
    cards
}

fn build<E: MonetaryEntity>(
    status: Option<E::Status>,
    label: String,
    members: Vec<&E>,
    active: bool,
    top_n: usize,
) -> StatusSummary<E> {
    let total = members.iter().map(|e| e.value()).sum();
    let count = members.len();
    let top = rank_by_value(members)
        .into_iter()
        .take(top_n)
        .cloned()
        .collect();
    StatusSummary {
        status,
        label,
        count,
        total,
        top,
        active,
    }
}

/// Stable ordering by value, highest first.
///
/// Incomparable values (NaN) rank as equal to their neighbours, so they stay where
/// they were relative to the elements around them. Insertion sort keeps this
/// well-defined without a total order.
pub fn rank_by_value<E: MonetaryEntity>(mut entities: Vec<&E>) -> Vec<&E> {
    for i in 1..entities.len() {
        let mut j = i;
        while j > 0 && ranks_before(entities[j], entities[j - 1]) {
            entities.swap(j, j - 1);
            j -= 1;
        }
    }
    entities
}

fn ranks_before<E: MonetaryEntity>(a: &E, b: &E) -> bool {
    a.value().partial_cmp(&b.value()) == Some(Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{invoice_collection, Invoice, InvoiceStatus};

    fn collection_of(values: &[(f64, InvoiceStatus)]) -> EntityCollection<Invoice> {
        let mut c = invoice_collection().unwrap();
        for (i, (value, status)) in values.iter().enumerate() {
            c.add(Invoice::new(format!("INV-{i}"), *value).with_status(*status));
        }
        c
    }

    fn values(entities: &[Invoice]) -> Vec<f64> {
        entities.iter().map(|e| e.value).collect()
    }

    #[test]
    fn test_top_three_of_four() {
        let c = collection_of(&[
            (10.0, InvoiceStatus::Due),
            (50.0, InvoiceStatus::Due),
            (30.0, InvoiceStatus::Due),
            (5.0, InvoiceStatus::Due),
        ]);
        let cards = summarize(&c, None, 3);
        let due = cards
            .iter()
            .find(|s| s.status == Some(InvoiceStatus::Due))
            .unwrap();
        assert_eq!(values(&due.top), vec![50.0, 30.0, 10.0]);
        assert_eq!(due.count, 4);
        assert_eq!(due.total, 95.0);
    }

    #[test]
    fn test_one_card_per_status_then_all() {
        let c = collection_of(&[
            (100.0, InvoiceStatus::Draft),
            (200.0, InvoiceStatus::Due),
            (300.0, InvoiceStatus::Paid),
        ]);
        let cards = summarize(&c, None, 3);
        let labels: Vec<_> = cards.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Draft",
                "Pending Approval",
                "Awaiting Payment",
                "Due",
                "Past Due",
                "Paid",
                "All"
            ]
        );
        let all = cards.last().unwrap();
        assert_eq!(all.status, None);
        assert_eq!(all.count, 3);
        assert_eq!(all.total, 600.0);
        assert_eq!(values(&all.top), vec![300.0, 200.0, 100.0]);

        let due = &cards[3];
        assert_eq!(due.count, 1);
        assert_eq!(due.total, 200.0);
    }

    #[test]
    fn test_empty_buckets_are_zero() {
        let c = collection_of(&[]);
        let cards = summarize(&c, None, 3);
        assert!(cards.iter().all(|s| s.count == 0 && s.total == 0.0 && s.top.is_empty()));
    }

    #[test]
    fn test_all_is_active_without_filter() {
        let c = collection_of(&[(1.0, InvoiceStatus::Paid)]);
        let cards = summarize(&c, None, 3);
        let active: Vec<_> = cards.iter().filter(|s| s.active).map(|s| s.label.as_str()).collect();
        assert_eq!(active, vec!["All"]);

        let cards = summarize(&c, Some(InvoiceStatus::Paid), 3);
        let active: Vec<_> = cards.iter().filter(|s| s.active).map(|s| s.label.as_str()).collect();
        assert_eq!(active, vec!["Paid"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let c = collection_of(&[
            (20.0, InvoiceStatus::Draft),
            (20.0, InvoiceStatus::Draft),
            (40.0, InvoiceStatus::Draft),
        ]);
        let cards = summarize(&c, None, 3);
        let ids: Vec<_> = cards[0].top.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["INV-2", "INV-0", "INV-1"]);
    }

    #[test]
    fn test_top_n_is_configurable() {
        let c = collection_of(&[
            (1.0, InvoiceStatus::Paid),
            (2.0, InvoiceStatus::Paid),
            (3.0, InvoiceStatus::Paid),
        ]);
        let cards = summarize(&c, None, 1);
        assert_eq!(values(&cards.last().unwrap().top), vec![3.0]);
        let cards = summarize(&c, None, 0);
        assert!(cards.last().unwrap().top.is_empty());
    }

    #[test]
    fn test_nan_does_not_break_ranking() {
        let c = collection_of(&[
            (f64::NAN, InvoiceStatus::Due),
            (10.0, InvoiceStatus::Due),
            (30.0, InvoiceStatus::Due),
        ]);
        let due = summarize(&c, None, 3).remove(3);
        assert_eq!(due.top.len(), 3);
        assert!(due.total.is_nan());
        // NaN blocks movement past it, so the finite values sort behind it.
        assert!(due.top[0].value.is_nan());
        assert_eq!(due.top[1].value, 30.0);
        assert_eq!(due.top[2].value, 10.0);
    }
}
