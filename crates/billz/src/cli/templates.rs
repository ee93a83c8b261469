//! # CLI Templates Module
//!
//! Terminal output goes through `outstanding`, which renders minijinja templates
//! with a `style` filter. Templates are kept as stand-alone files so they can be
//! edited and diffed apart from the code, then embedded here as string constants.
//!
//! Conventions:
//!
//! 1. Line breaks are explicit. A loop's opening tag sits on the same line as the
//!    content it repeats, and the closing tag starts the next line, so each
//!    iteration emits exactly one line.
//! 2. Templates never compute widths. Cells arrive padded from `render.rs`.
//! 3. Style choices made per row (status colors) arrive as style names in the
//!    data, so the template applies `style(cell.style)` instead of branching.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const INVOICE_TEMPLATE: &str = include_str!("templates/invoice.tmp");
pub const FIELDS_TEMPLATE: &str = include_str!("templates/fields.tmp");
pub const LOG_TEMPLATE: &str = include_str!("templates/log.tmp");
pub const KEY_VALUE_TEMPLATE: &str = include_str!("templates/key_value.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
