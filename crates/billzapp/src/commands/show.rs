use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MonetaryEntity;
use crate::store::Store;

pub fn run<E: MonetaryEntity>(store: &Store<E>, id: &str) -> Result<CmdResult<E>> {
    let mut result = CmdResult::default();
    match store.collection().get_by_id(id) {
        Some(entity) => result.listed.push(entity.clone()),
        None => result.add_message(CmdMessage::info(format!("No invoice with id {id}"))),
    }
    Ok(result)
}
