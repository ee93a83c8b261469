//! # CLI Behavior
//!
//! This is **one possible UI client** for billz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`billz`)
//!
//! Running `billz` with no arguments opens a session, same as `billz shell`.
//! Invoices live for the session only; configuration is read from `billz.toml`.
//!
//! ## Sessions
//!
//! When stdin is a terminal the session uses a line editor with history, and
//! `new` / `modify <id>` prompt field by field. When stdin is piped, every line is
//! a command (`#` starts a comment) and forms are filled from `--set key=value`.
//!
//! ## Demo Mode
//!
//! Sample data (`new --sample`, `sample`) is only available in demo mode. The
//! session starts with the configured `demo-mode` and `demo on|off` flips it.
//! Sample bursts create one invoice every `sample-delay-ms`.
//!
//! ## Module Structure
//!
//! - `commands`: Entry point, logging setup and one-shot commands
//! - `repl`: The session loop and session command dispatch
//! - `form`: Field-by-field prompts over a form model
//! - `render`: Output formatting (tables, cards, messages)
//! - `setup`: Argument parsing via clap, session help
//! - `styles`: Terminal styling constants
//! - `templates`: Output templates

mod commands;
mod form;
mod render;
mod repl;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
