//! # Billz CLI Architecture
//!
//! Billz ships with an interactive terminal board, but the binary is intentionally
//! thin: the CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/billzapp/`: core library, UI-agnostic invoice logic
//! - `crates/billz/`: this CLI tool, depends on the `billzapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/billz/src/cli/)                          │
//! │  - clap argument parsing, one-shot and session (setup.rs)   │
//! │  - Session loop and form prompts (repl.rs, form.rs)         │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/billzapp/src/api.rs)                     │
//! │  - Owns the session store, config and demo switch           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/billzapp/src/commands/*)             │
//! │  - Business logic over the invoice store                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible for
//! argument parsing, logging setup, prompting, rendering and exit codes.
//!
//! ## Rendering with Outstanding
//!
//! Templates live in `src/cli/templates/` and are embedded at compile time via
//! `include_str!()`. `render.rs` computes column widths and padding, the templates
//! pick styles from the theme in `styles.rs`.
//!
//! ## Testing Approach
//!
//! - **Library**: command, store and view logic is unit tested in `billzapp`.
//! - **CLI**: rendering is tested with canned data and color disabled; session
//!   parsing is tested in `setup.rs`; `tests/` drives the binary end to end with
//!   scripted stdin and a temporary config directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
