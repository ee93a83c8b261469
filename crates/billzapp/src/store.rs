//! # Store Binding
//!
//! The store is the single writer of entity state. It wraps an
//! [`EntityCollection`] and turns its mutations into named transitions, plus one
//! piece of UI-only state: the active status filter ("table status").
//!
//! ## Transitions
//!
//! | Action | Effect |
//! |--------|--------|
//! | `Add(entity)` | append to the collection |
//! | `Remove(id)` | drop every entity with the id |
//! | `Modify { id, changes }` | shallow-merge changes into the first match |
//! | `SetTableStatus(status)` | make `status` the active filter |
//! | `ClearTableStatus` | drop the active filter |
//!
//! ## Ownership
//!
//! A [`Store`] is an ordinary owned value: callers create one, pass it where it is
//! needed and read it through selectors. There is no global instance. Every
//! dispatched action is applied synchronously and atomically by [`reduce`], and an
//! entry is appended to the applied-transition log, so tests can assert on exactly
//! what happened and in which order.
//!
//! ## Selectors
//!
//! - [`Store::entities`]: the full ordered list
//! - [`Store::table_status`]: the active filter, if any
//! - [`Store::visible_rows`]: rows after the active filter
//! - [`Store::summaries`]: per-status cards
//! - [`Store::log`]: applied transitions

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::collection::EntityCollection;
use crate::model::{EntityPatch, MonetaryEntity, StatusKind};
use crate::views::{summarize, visible_rows, StatusSummary};

/// A state transition over one collection slice.
#[derive(Debug, Clone)]
pub enum Action<E: MonetaryEntity> {
    Add(E),
    Remove(String),
    Modify { id: String, changes: E::Patch },
    SetTableStatus(E::Status),
    ClearTableStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Add,
    Remove,
    Modify,
    SetTableStatus,
    ClearTableStatus,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Remove => "remove",
            ActionKind::Modify => "modify",
            ActionKind::SetTableStatus => "setTableStatus",
            ActionKind::ClearTableStatus => "clearTableStatus",
        }
    }
}

impl<E: MonetaryEntity> Action<E> {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Add(_) => ActionKind::Add,
            Action::Remove(_) => ActionKind::Remove,
            Action::Modify { .. } => ActionKind::Modify,
            Action::SetTableStatus(_) => ActionKind::SetTableStatus,
            Action::ClearTableStatus => ActionKind::ClearTableStatus,
        }
    }

    /// The entity id or status token the action targets.
    pub fn target(&self) -> Option<String> {
        match self {
            Action::Add(entity) => Some(entity.id().to_string()),
            Action::Remove(id) | Action::Modify { id, .. } => Some(id.clone()),
            Action::SetTableStatus(status) => Some(status.token().to_string()),
            Action::ClearTableStatus => None,
        }
    }
}

/// One applied transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRecord {
    pub seq: u64,
    pub slice: String,
    pub kind: ActionKind,
    pub target: Option<String>,
    /// Whether the transition changed any state.
    pub changed: bool,
    pub applied_at: DateTime<Utc>,
}

impl TransitionRecord {
    /// Namespaced action type, e.g. `invoices/add`.
    pub fn action_type(&self) -> String {
        format!("{}/{}", self.slice, self.kind.as_str())
    }
}

/// The state held for one collection slice.
#[derive(Debug, Clone)]
pub struct SliceState<E: MonetaryEntity> {
    pub collection: EntityCollection<E>,
    pub table_status: Option<E::Status>,
}

/// Applies one action to the slice. Returns whether anything changed.
pub fn reduce<E: MonetaryEntity>(state: &mut SliceState<E>, action: Action<E>) -> bool {
    match action {
        Action::Add(entity) => {
            state.collection.add(entity);
            true
        }
        Action::Remove(id) => {
            let before = state.collection.len();
            state.collection.remove(&id);
            state.collection.len() != before
        }
        Action::Modify { id, changes } => {
            if changes.is_empty() {
                return false;
            }
            state.collection.modify(&id, changes)
        }
        Action::SetTableStatus(status) => {
            let changed = state.table_status != Some(status);
            state.table_status = Some(status);
            changed
        }
        Action::ClearTableStatus => state.table_status.take().is_some(),
    }
}

/// Owner of one slice's state and its applied-transition log.
#[derive(Debug, Clone)]
pub struct Store<E: MonetaryEntity> {
    state: SliceState<E>,
    log: Vec<TransitionRecord>,
}

impl<E: MonetaryEntity> Store<E> {
    pub fn new(collection: EntityCollection<E>) -> Self {
        Self {
            state: SliceState {
                collection,
                table_status: None,
            },
            log: Vec::new(),
        }
    }

    /// Applies `action` and returns its log entry.
    pub fn dispatch(&mut self, action: Action<E>) -> &TransitionRecord {
        let kind = action.kind();
        let target = action.target();
        let changed = reduce(&mut self.state, action);

        let record = TransitionRecord {
            seq: self.log.len() as u64 + 1,
            slice: self.state.collection.slice_name().to_string(),
            kind,
            target,
            changed,
            applied_at: Utc::now(),
        };
        tracing::debug!(
            seq = record.seq,
            action = %record.action_type(),
            target = ?record.target,
            changed,
            "applied transition"
        );
        self.log.push(record);
        &self.log[self.log.len() - 1]
    }

    pub fn collection(&self) -> &EntityCollection<E> {
        &self.state.collection
    }

    pub fn entities(&self) -> &[E] {
        self.state.collection.entities()
    }

    pub fn table_status(&self) -> Option<E::Status> {
        self.state.table_status
    }

    pub fn visible_rows(&self) -> Vec<&E> {
        visible_rows(self.entities(), self.state.table_status)
    }

    pub fn summaries(&self, top_n: usize) -> Vec<StatusSummary<E>> {
        summarize(&self.state.collection, self.state.table_status, top_n)
    }

    pub fn log(&self) -> &[TransitionRecord] {
        &self.log
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::invoice::{invoice_collection, Invoice, InvoiceStatus};

    pub struct StoreFixture {
        pub store: Store<Invoice>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: Store::new(invoice_collection().unwrap()),
            }
        }

        pub fn with_invoice(mut self, id: &str, value: f64, status: InvoiceStatus) -> Self {
            let invoice = Invoice::new(id, value)
                .with_status(status)
                .with_customer(format!("Customer {id}"));
            self.store.dispatch(Action::Add(invoice));
            self
        }

        /// Draft/due/paid invoices worth 100/200/300.
        pub fn with_scenario(self) -> Self {
            self.with_invoice("INV-00001", 100.0, InvoiceStatus::Draft)
                .with_invoice("INV-00002", 200.0, InvoiceStatus::Due)
                .with_invoice("INV-00003", 300.0, InvoiceStatus::Paid)
        }

        pub fn with_filter(mut self, status: InvoiceStatus) -> Self {
            self.store.dispatch(Action::SetTableStatus(status));
            self
        }
    }
}
