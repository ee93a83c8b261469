use crate::collection::EntityCollection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::fields::FieldInfo;
use crate::model::MonetaryEntity;

/// The collection's composed schema, preset fields first.
pub fn run<E: MonetaryEntity>(collection: &EntityCollection<E>) -> Result<CmdResult<E>> {
    let mut result = CmdResult::default();
    result.fields = collection
        .get_all_fields()
        .iter()
        .map(FieldInfo::from)
        .collect();
    Ok(result)
}
