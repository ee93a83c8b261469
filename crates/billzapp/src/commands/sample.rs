use chrono::{DateTime, Utc};
use rand::Rng;

use crate::commands::helpers::pluralize;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::factory::FactoryDefaults;
use crate::invoice::Invoice;
use crate::sample::SampleGenerator;
use crate::store::{Action, Store};

/// Reported when sample data is requested outside demo mode.
pub const DEMO_ONLY_MESSAGE: &str = "Sample data is only available in demo mode (try: demo on)";

/// Generates and adds `count` sample invoices. Requires demo mode.
pub fn run<R: Rng>(
    store: &mut Store<Invoice>,
    generator: &mut SampleGenerator<R>,
    count: usize,
    demo_mode: bool,
    now: DateTime<Utc>,
    defaults: &FactoryDefaults,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !demo_mode {
        result.add_message(CmdMessage::warning(DEMO_ONLY_MESSAGE));
        return Ok(result);
    }

    for _ in 0..count {
        let invoice = generator.invoice(now, defaults);
        store.dispatch(Action::Add(invoice.clone()));
        result.affected.push(invoice);
    }
    tracing::info!(count, "generated sample invoices");
    result.add_message(CmdMessage::success(format!(
        "Generated {}",
        pluralize(count, "sample invoice")
    )));
    Ok(result)
}
