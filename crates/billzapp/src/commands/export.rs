use crate::commands::helpers::pluralize;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::invoice::{Invoice, SerializedInvoice};
use crate::store::Store;

/// The visible rows in their serialized shape, as pretty-printed JSON.
pub fn run(store: &Store<Invoice>) -> Result<CmdResult> {
    let rows: Vec<SerializedInvoice> = store
        .visible_rows()
        .into_iter()
        .map(Invoice::to_json)
        .collect();
    let mut result = CmdResult::default();
    result.export = Some(serde_json::to_string_pretty(&rows)?);
    result.add_message(CmdMessage::info(format!(
        "Exported {}",
        pluralize(rows.len(), "invoice")
    )));
    Ok(result)
}
