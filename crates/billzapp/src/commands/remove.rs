use crate::commands::helpers::pluralize;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MonetaryEntity;
use crate::store::{Action, Store};

/// Removes every invoice with each of `ids`. Unknown ids are reported, not fatal.
pub fn run<E: MonetaryEntity, I: AsRef<str>>(
    store: &mut Store<E>,
    ids: &[I],
) -> Result<CmdResult<E>> {
    let mut result = CmdResult::default();
    for id in ids {
        let id = id.as_ref();
        let matching: Vec<E> = store
            .entities()
            .iter()
            .filter(|e| e.id() == id)
            .cloned()
            .collect();
        if matching.is_empty() {
            result.add_message(CmdMessage::info(format!("No invoice with id {id}")));
            continue;
        }
        store.dispatch(Action::Remove(id.to_string()));
        result.affected.extend(matching);
    }
    if !result.affected.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Removed {}",
            pluralize(result.affected.len(), "invoice")
        )));
    }
    Ok(result)
}
