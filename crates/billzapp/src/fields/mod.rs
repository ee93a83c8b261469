//! # Field Schema
//!
//! This module provides the metadata that lets a generic UI render and edit any
//! monetary entity without knowing its concrete type:
//!
//! - **Values**: [`FieldValue`], the runtime form of an attribute read
//! - **Descriptors**: [`Field`], one displayable attribute with its datatype,
//!   header, optional enum values and optional display callback
//! - **Widgets**: [`Widget`], the input a form binds to a field
//! - **Composition**: [`preset_fields`], the fixed `[id, value, status]` prefix
//!   every collection's schema starts with
//!
//! ## Datatypes
//!
//! | Datatype | Widget | Examples |
//! |----------|--------|----------|
//! | `string` | text input | `id`, `customerName`, `notes` |
//! | `number` | number input | |
//! | `moneyAmount` | currency input, 2 decimals | `value` |
//! | `date` | date input | `invoiceDate`, `dueDate` |
//! | `enum` | dropdown (text input without values) | `status` |
//!
//! ## Usage
//!
//! ```ignore
//! let fields = collection.get_all_fields();
//! for field in &fields {
//!     println!("{}: {}", field.header, field.display_string(&invoice));
//! }
//! ```

mod spec;
mod value;

pub use spec::{preset_fields, DisplayDatatype, DisplayFn, Field, FieldInfo, Headers, Widget};
pub use value::FieldValue;
