use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MonetaryEntity;
use crate::store::Store;

/// The last `limit` applied transitions, oldest first. `None` returns all of them.
pub fn run<E: MonetaryEntity>(store: &Store<E>, limit: Option<usize>) -> Result<CmdResult<E>> {
    let log = store.log();
    let start = limit.map_or(0, |n| log.len().saturating_sub(n));
    let mut result = CmdResult::default();
    result.transitions = log[start..].to_vec();
    if result.transitions.is_empty() {
        result.add_message(CmdMessage::info("No transitions yet"));
    }
    Ok(result)
}
