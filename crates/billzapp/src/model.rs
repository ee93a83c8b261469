//! # Domain Model: Monetary Entities
//!
//! A monetary entity is any record with an id, a monetary value, an optional
//! currency and an optional status drawn from a closed set: invoices, payments,
//! purchase orders and so on. The rest of the library (collections, stores, views)
//! is written against the traits in this module, and [`crate::invoice`] provides the
//! one concrete entity type the application ships with.
//!
//! ## The Traits
//!
//! - [`StatusKind`]: a closed, ordered status enumeration with stable string tokens.
//! - [`MonetaryEntity`]: the shared attribute surface plus raw attribute reads,
//!   used by the field schema to display any attribute generically.
//! - [`EntityPatch`]: a partial change set that can be shallow-merged into an entity.
//!
//! ## Status Tokens
//!
//! Tokens are the camelCase wire form (`pendingApproval`). Labels are derived from
//! tokens with [`camel_case_to_label`], never stored.

use std::fmt::Debug;
use std::hash::Hash;

use crate::fields::FieldValue;
use crate::format::camel_case_to_label;

/// A closed, ordered enumeration of entity statuses.
///
/// `ALL` must list every variant in declaration order and must not be empty;
/// its first element is the default status for coerced input.
pub trait StatusKind: Copy + Eq + Hash + Debug + 'static {
    const ALL: &'static [Self];

    /// The wire token (`"pendingApproval"`).
    fn token(&self) -> &'static str;

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.token() == token)
    }

    /// Human-readable label (`"Pending Approval"`).
    fn label(&self) -> String {
        camel_case_to_label(self.token())
    }

    /// The first declared status.
    fn first() -> Self {
        Self::ALL[0]
    }

    fn tokens() -> Vec<String> {
        Self::ALL.iter().map(|s| s.token().to_string()).collect()
    }
}

/// A partial change set for an entity.
pub trait EntityPatch<E>: Debug + Clone {
    /// Shallow-merges every present change into `entity`.
    fn apply_to(self, entity: &mut E);

    fn is_empty(&self) -> bool;
}

/// A record with an id, a value, an optional currency and an optional status.
pub trait MonetaryEntity: Clone + Debug {
    type Status: StatusKind;
    type Patch: EntityPatch<Self>;

    /// Type name used in diagnostics.
    const KIND: &'static str;

    /// Every attribute id this type exposes through [`MonetaryEntity::get_attr`].
    const ATTRIBUTES: &'static [&'static str];

    fn id(&self) -> &str;

    fn value(&self) -> f64;

    fn currency(&self) -> Option<&str>;

    fn status(&self) -> Option<Self::Status>;

    /// Raw read of an attribute by id.
    ///
    /// Returns `None` for unknown ids and for attributes that are currently unset.
    fn get_attr(&self, name: &str) -> Option<FieldValue>;

    fn has_attribute(name: &str) -> bool {
        Self::ATTRIBUTES.contains(&name)
    }
}
