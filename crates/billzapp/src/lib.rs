//! # Billz Architecture
//!
//! Billz is a **UI-agnostic library for monetary records**. The terminal client is
//! one presentation of it; the same core could back a web page or a service.
//!
//! The library is a generic "monetary entity" framework (anything with an id, a
//! value, a currency and a status) instantiated once, for invoices.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (billz crate)                                    │
//! │  - Parses arguments, runs the session, renders output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns session state            │
//! │  - Normalizes inputs (key=value arguments → raw records)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns structured CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs) over an EntityCollection                  │
//! │  - Named transitions, active filter, transition log         │
//! │  - Derived views: rows, summaries, forms (views/)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Substitution, Not Rejection
//!
//! Input is coerced by the record factory ([`factory`]) and never rejected: a
//! garbled amount becomes `NaN`, an unknown status becomes `draft`, an unparsable
//! date becomes a sensible default. Errors ([`error::BillzError`]) are reserved for
//! ambient failures such as configuration I/O.
//!
//! ## No Persistence
//!
//! Entities live in memory for the lifetime of a [`api::BillzApi`] session. Only
//! configuration is persisted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: The monetary entity traits
//! - [`invoice`]: The invoice entity, its status enumeration and schema
//! - [`fields`]: Field descriptors, widgets and schema composition
//! - [`collection`]: The ordered entity container
//! - [`store`]: Actions, reducer, transition log
//! - [`views`]: Visible rows, summary cards, form model
//! - [`factory`]: Raw record coercion
//! - [`sample`]: Demo-mode sample data
//! - [`format`]: Amount, date and label formatting
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod factory;
pub mod fields;
pub mod format;
pub mod invoice;
pub mod model;
pub mod sample;
pub mod store;
pub mod views;
