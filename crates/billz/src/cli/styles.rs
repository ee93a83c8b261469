//! Terminal styles for billz output.
//!
//! Templates refer to styles by name (`{{ x | style("amount") }}`); the names are
//! collected in [`names`] so Rust code that picks a style per row uses the same
//! constants. Status styles follow the invoice lifecycle: quiet for drafts, warm
//! for money that is due, red once it is late, green when paid.

use billzapp::invoice::InvoiceStatus;
use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

#[allow(dead_code)]
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const HEADER: &str = "header";
    pub const AMOUNT: &str = "amount";
    pub const ACTIVE: &str = "active";

    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";

    pub const STATUS_DRAFT: &str = "status_draft";
    pub const STATUS_PENDING: &str = "status_pending";
    pub const STATUS_AWAITING: &str = "status_awaiting";
    pub const STATUS_DUE: &str = "status_due";
    pub const STATUS_PAST_DUE: &str = "status_past_due";
    pub const STATUS_PAID: &str = "status_paid";

    pub const HELP_COMMAND: &str = "help_command";
    pub const HELP_DESC: &str = "help_desc";
}

pub static BILLZ_THEME: Lazy<Theme> = Lazy::new(|| {
    let regular = Style::new();
    let muted = Style::new().color256(rgb_to_ansi256((128, 128, 128)));
    let gold = Style::new().color256(rgb_to_ansi256((214, 160, 20)));

    Theme::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::HEADER, regular.clone().bold().underlined())
        .add(names::AMOUNT, Style::new().cyan())
        .add(names::ACTIVE, gold.clone().bold())
        .add(names::INFO, muted.clone())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::STATUS_DRAFT, muted.clone().italic())
        .add(names::STATUS_PENDING, Style::new().blue())
        .add(names::STATUS_AWAITING, Style::new().magenta())
        .add(names::STATUS_DUE, gold)
        .add(names::STATUS_PAST_DUE, Style::new().red().bold())
        .add(names::STATUS_PAID, Style::new().green())
        .add(
            names::HELP_COMMAND,
            Style::new().color256(rgb_to_ansi256((0, 160, 0))),
        )
        .add(names::HELP_DESC, muted)
});

/// Style name for a status cell or card title.
pub fn status_style(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => names::STATUS_DRAFT,
        InvoiceStatus::PendingApproval => names::STATUS_PENDING,
        InvoiceStatus::AwaitingPayment => names::STATUS_AWAITING,
        InvoiceStatus::Due => names::STATUS_DUE,
        InvoiceStatus::PastDue => names::STATUS_PAST_DUE,
        InvoiceStatus::Paid => names::STATUS_PAID,
    }
}
