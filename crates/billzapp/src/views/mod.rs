//! # Derived Views
//!
//! Read-only projections of store state that every presentation layer shares:
//!
//! - [`rows`]: the entity list after the active status filter.
//! - [`summary`]: one summary card per status plus a trailing "All" card.
//! - [`form`]: the field-by-field model of a create or edit form.
//!
//! Views never mutate entities. A form produces a [`crate::factory::RawRecord`]
//! that the caller turns into an entity through the record factory and dispatches.

pub mod form;
pub mod rows;
pub mod summary;

pub use form::{FormEntry, FormModel};
pub use rows::visible_rows;
pub use summary::{rank_by_value, summarize, StatusSummary, ALL_LABEL, DEFAULT_TOP_N};
