use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{MonetaryEntity, StatusKind};
use crate::store::Store;

/// Rows after the active filter.
pub fn run<E: MonetaryEntity>(store: &Store<E>) -> Result<CmdResult<E>> {
    let rows: Vec<E> = store.visible_rows().into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if rows.is_empty() {
        let message = match store.table_status() {
            Some(status) => format!("No {} invoices", status.label()),
            None => "No invoices yet".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::InvoiceStatus;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn test_lists_all_without_filter() {
        let store = StoreFixture::new().with_scenario().store;
        let result = run(&store).unwrap();
        assert_eq!(result.listed.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_lists_filtered_rows() {
        let store = StoreFixture::new()
            .with_scenario()
            .with_filter(InvoiceStatus::Paid)
            .store;
        let result = run(&store).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].id, "INV-00003");
    }

    #[test]
    fn test_empty_lists_explain_why() {
        let store = StoreFixture::new().store;
        assert_eq!(run(&store).unwrap().messages[0].content, "No invoices yet");

        let store = StoreFixture::new()
            .with_scenario()
            .with_filter(InvoiceStatus::PastDue)
            .store;
        assert_eq!(run(&store).unwrap().messages[0].content, "No Past Due invoices");
    }
}
