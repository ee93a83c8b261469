use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::MonetaryEntity;
use crate::store::Store;

/// Per-status summary cards with `top_n` entries each.
pub fn run<E: MonetaryEntity>(store: &Store<E>, top_n: usize) -> Result<CmdResult<E>> {
    Ok(CmdResult::default().with_summaries(store.summaries(top_n)))
}
