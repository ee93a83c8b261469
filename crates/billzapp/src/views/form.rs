//! The model behind a generic create/edit form.
//!
//! Each entry binds one schema field to its widget and holds two values: the
//! cached value loaded from an entity (or from sample data) and the live value the
//! user typed. Collecting the form prefers live values and falls back to cached
//! ones; fields with neither are left out of the record, so the record factory
//! applies its defaults to them.

use serde::Serialize;
use serde_json::Value;

use crate::collection::EntityCollection;
use crate::factory::RawRecord;
use crate::fields::Widget;
use crate::model::MonetaryEntity;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub field_id: &'static str,
    pub header: String,
    pub widget: Widget,
    pub cached: Option<Value>,
    pub live: Option<Value>,
}

impl FormEntry {
    /// The value the form would submit for this entry.
    pub fn current(&self) -> Option<&Value> {
        self.live.as_ref().or(self.cached.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormModel {
    entries: Vec<FormEntry>,
}

impl FormModel {
    /// An empty form over the collection's full schema.
    pub fn for_collection<E: MonetaryEntity>(collection: &EntityCollection<E>) -> Self {
        let entries = collection
            .get_all_fields()
            .iter()
            .map(|field| FormEntry {
                field_id: field.id,
                header: field.header.clone(),
                widget: field.widget(),
                cached: None,
                live: None,
            })
            .collect();
        Self { entries }
    }

    /// A form pre-filled with the attributes of `entity`, for editing.
    pub fn for_entity<E: MonetaryEntity>(collection: &EntityCollection<E>, entity: &E) -> Self {
        let mut form = Self::for_collection(collection);
        form.load_entity(entity);
        form
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn entry(&self, field_id: &str) -> Option<&FormEntry> {
        self.entries.iter().find(|e| e.field_id == field_id)
    }

    /// Replaces cached values with the attributes of `entity`.
    pub fn load_entity<E: MonetaryEntity>(&mut self, entity: &E) {
        for entry in &mut self.entries {
            entry.cached = entity.get_attr(entry.field_id).map(|v| v.to_raw());
        }
    }

    /// Replaces cached values with `record`, e.g. generated sample data.
    /// Keys with no matching field are ignored.
    pub fn load_record(&mut self, record: &RawRecord) {
        for entry in &mut self.entries {
            entry.cached = record.get(entry.field_id).cloned();
        }
    }

    /// Sets the live value of one field. Returns `false` when no field has the id.
    pub fn set_live(&mut self, field_id: &str, value: Value) -> bool {
        match self.entries.iter_mut().find(|e| e.field_id == field_id) {
            Some(entry) => {
                entry.live = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn clear_live(&mut self) {
        for entry in &mut self.entries {
            entry.live = None;
        }
    }

    /// The submitted record: live values over cached ones, keyed by field id.
    pub fn collect(&self) -> RawRecord {
        self.entries
            .iter()
            .filter_map(|e| e.current().map(|v| (e.field_id.to_string(), v.clone())))
            .collect()
    }

    /// Only the live values that differ from the cached ones, for patching an
    /// existing entity.
    pub fn collect_changes(&self) -> RawRecord {
        self.entries
            .iter()
            .filter(|e| e.live.is_some() && e.live != e.cached)
            .filter_map(|e| e.live.clone().map(|v| (e.field_id.to_string(), v)))
            .collect()
    }
}
