//! # Command Layer
//!
//! This module contains the **business logic** of billz. Each command lives in its
//! own submodule as a plain `run` function over a [`Store`](crate::store::Store).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Build entities through the record factory and dispatch store actions
//! - Read derived views (visible rows, summaries, the transition log)
//! - Return a structured [`CmdResult`] with entities and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr or prompts
//! - **Argument parsing**: that's the CLI layer's job
//! - **Pacing**: bulk sample generation is timed by the caller
//!
//! ## Not-Found Is Not an Error
//!
//! Ids that match nothing produce an info message and leave the store untouched.
//! Malformed input is coerced by the record factory. Only ambient failures (config
//! I/O, serialization) surface as `Err`.
//!
//! ## Command Modules
//!
//! - [`create`]: Add an invoice from a raw record
//! - [`list`]: Rows after the active filter
//! - [`show`]: One invoice by id
//! - [`filter`]: Set or clear the active status filter
//! - [`summary`]: Per-status summary cards
//! - [`remove`]: Remove invoices by id
//! - [`modify`]: Patch an invoice
//! - [`sample`]: Generate sample invoices (demo mode)
//! - [`export`]: Visible rows in their serialized shape
//! - [`fields`]: The composed schema
//! - [`log`]: Applied transitions
//! - [`config`]: Manage configuration
//! - [`helpers`]: Shared utilities

use serde::Serialize;

use crate::config::BillzConfig;
use crate::fields::FieldInfo;
use crate::invoice::Invoice;
use crate::model::MonetaryEntity;
use crate::store::TransitionRecord;
use crate::views::StatusSummary;

pub mod config;
pub mod create;
pub mod export;
pub mod fields;
pub mod filter;
pub mod helpers;
pub mod list;
pub mod log;
pub mod modify;
pub mod remove;
pub mod sample;
pub mod show;
pub mod summary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured output of a command. The UI decides how to render it.
#[derive(Debug)]
pub struct CmdResult<E: MonetaryEntity = Invoice> {
    /// Entities the command added, changed or removed.
    pub affected: Vec<E>,
    /// Entities to display.
    pub listed: Vec<E>,
    pub summaries: Vec<StatusSummary<E>>,
    pub fields: Vec<FieldInfo>,
    pub transitions: Vec<TransitionRecord>,
    /// Serialized payload (JSON text) for `export`.
    pub export: Option<String>,
    pub config: Option<BillzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<E: MonetaryEntity> Default for CmdResult<E> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            summaries: Vec::new(),
            fields: Vec::new(),
            transitions: Vec::new(),
            export: None,
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<E: MonetaryEntity> CmdResult<E> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, entities: Vec<E>) -> Self {
        self.affected = entities;
        self
    }

    pub fn with_listed(mut self, entities: Vec<E>) -> Self {
        self.listed = entities;
        self
    }

    pub fn with_summaries(mut self, summaries: Vec<StatusSummary<E>>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_config(mut self, config: BillzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
