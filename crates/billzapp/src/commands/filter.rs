use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{MonetaryEntity, StatusKind};
use crate::store::{Action, Store};

/// Sets the active filter to `token`, or clears it when `token` is `None` or `all`.
///
/// Unknown tokens leave the filter unchanged and report the valid ones.
pub fn run<E: MonetaryEntity>(store: &mut Store<E>, token: Option<&str>) -> Result<CmdResult<E>> {
    let mut result = CmdResult::default();
    match token {
        None | Some("all") => {
            store.dispatch(Action::ClearTableStatus);
            result.add_message(CmdMessage::info("Showing all invoices"));
        }
        Some(token) => match E::Status::from_token(token) {
            Some(status) => {
                store.dispatch(Action::SetTableStatus(status));
                result.add_message(CmdMessage::info(format!(
                    "Showing {} invoices",
                    status.label()
                )));
            }
            None => {
                result.add_message(CmdMessage::error(format!(
                    "Unknown status: {}. Expected one of: {}",
                    token,
                    E::Status::tokens().join(", ")
                )));
                return Ok(result);
            }
        },
    }
    let rows = store.visible_rows().into_iter().cloned().collect();
    Ok(result.with_listed(rows))
}
