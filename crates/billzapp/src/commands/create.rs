use chrono::{DateTime, Utc};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::factory::{create_invoice_from_record, FactoryDefaults, RawRecord};
use crate::invoice::Invoice;
use crate::store::{Action, Store};

pub fn run(
    store: &mut Store<Invoice>,
    record: &RawRecord,
    now: DateTime<Utc>,
    defaults: &FactoryDefaults,
) -> Result<CmdResult> {
    let invoice = create_invoice_from_record(record, now, defaults);
    let mut result = CmdResult::default();

    if invoice.id.is_empty() {
        result.add_message(CmdMessage::warning("Invoice has no id"));
    } else if store.collection().get_by_id(&invoice.id).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Another invoice already uses id {}",
            invoice.id
        )));
    }
    if invoice.value.is_nan() {
        result.add_message(CmdMessage::warning("Amount is not a number"));
    }

    store.dispatch(Action::Add(invoice.clone()));
    result.add_message(CmdMessage::success(format!(
        "Invoice created: {}",
        display_id(&invoice)
    )));
    Ok(result.with_affected(vec![invoice]))
}

fn display_id(invoice: &Invoice) -> &str {
    if invoice.id.is_empty() {
        "(no id)"
    } else {
        &invoice.id
    }
}
