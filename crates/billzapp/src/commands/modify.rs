use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::factory::RawRecord;
use crate::invoice::{Invoice, InvoicePatch};
use crate::model::EntityPatch;
use crate::store::{Action, Store};

/// Patches the first invoice with `id` from the attributes present in `record`.
pub fn run(store: &mut Store<Invoice>, id: &str, record: &RawRecord) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.collection().get_by_id(id).is_none() {
        result.add_message(CmdMessage::info(format!("No invoice with id {id}")));
        return Ok(result);
    }

    let parsed = InvoicePatch::from_record(record);
    for key in &parsed.ignored {
        result.add_message(CmdMessage::warning(format!("Ignored {key}")));
    }
    if parsed.patch.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to change"));
        return Ok(result);
    }

    store.dispatch(Action::Modify {
        id: id.to_string(),
        changes: parsed.patch,
    });
    if let Some(updated) = store.collection().get_by_id(id) {
        result.affected.push(updated.clone());
    }
    result.add_message(CmdMessage::success(format!("Invoice updated: {id}")));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::record_from_pairs;
    use crate::commands::MessageLevel;
    use crate::invoice::InvoiceStatus;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn test_applies_partial_changes() {
        let mut store = StoreFixture::new().with_scenario().store;
        let (record, _) = record_from_pairs(&["status=paid", "notes=settled"]);
        let result = run(&mut store, "INV-00002", &record).unwrap();

        let updated = &result.affected[0];
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.notes, "settled");
        assert_eq!(updated.value, 200.0);
        assert_eq!(result.messages.last().unwrap().level, MessageLevel::Success);
    }

    #[test]
    fn test_unusable_keys_warn_and_rest_applies() {
        let mut store = StoreFixture::new().with_scenario().store;
        let (record, _) = record_from_pairs(&["status=late", "value=250"]);
        let result = run(&mut store, "INV-00001", &record).unwrap();
        assert_eq!(result.messages[0].content, "Ignored status");
        assert_eq!(result.affected[0].value, 250.0);
        assert_eq!(result.affected[0].status, InvoiceStatus::Draft);
    }

    #[test]
    fn test_nothing_to_change() {
        let mut store = StoreFixture::new().with_scenario().store;
        let before = store.log().len();
        let (record, _) = record_from_pairs(&["id=other"]);
        let result = run(&mut store, "INV-00001", &record).unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(result.messages.last().unwrap().content, "Nothing to change");
        assert_eq!(store.log().len(), before);
        assert!(store.collection().get_by_id("INV-00001").is_some());
    }

    #[test]
    fn test_unknown_id_is_informational() {
        let mut store = StoreFixture::new().with_scenario().store;
        let (record, _) = record_from_pairs(&["value=1"]);
        let result = run(&mut store, "zzz", &record).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.affected.is_empty());
    }
}
