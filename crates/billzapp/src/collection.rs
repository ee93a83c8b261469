//! # Entity Collection
//!
//! [`EntityCollection`] is the ordered container of entities of one type. It owns:
//!
//! - the entities themselves, in insertion order (which is also display order),
//! - the slice name that namespaces it inside a [`crate::store::Store`],
//! - the extension fields injected at construction, composed after the preset
//!   `[id, value, status]` fields by [`EntityCollection::get_all_fields`],
//! - header overrides and the card field used by summary cards.
//!
//! ## Semantics
//!
//! - `add` appends without a uniqueness check; ids are the caller's responsibility.
//! - `remove` drops every entity with the id; absent ids are a no-op.
//! - `modify` shallow-merges a patch into the first match; absent ids are a no-op.
//! - Totals are plain `f64` sums. Entities in different currencies are added
//!   arithmetically with no conversion.

use crate::error::{BillzError, Result};
use crate::fields::{preset_fields, Field, Headers};
use crate::model::{EntityPatch, MonetaryEntity, StatusKind};

#[derive(Debug, Clone)]
pub struct EntityCollection<E: MonetaryEntity> {
    slice_name: String,
    entities: Vec<E>,
    extension_fields: Vec<Field<E>>,
    headers: Headers,
    card_field: &'static str,
}

impl<E: MonetaryEntity> EntityCollection<E> {
    /// Creates an empty collection.
    ///
    /// Fails when an extension field names an attribute the entity type does not have.
    pub fn new(slice_name: impl Into<String>, extension_fields: Vec<Field<E>>) -> Result<Self> {
        if let Some(field) = extension_fields.iter().find(|f| !E::has_attribute(f.id)) {
            return Err(BillzError::UnknownField {
                field: field.id.to_string(),
                entity: E::KIND,
            });
        }
        Ok(Self {
            slice_name: slice_name.into(),
            entities: Vec::new(),
            extension_fields,
            headers: Headers::default(),
            card_field: "id",
        })
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the attribute shown beside top entries on summary cards.
    ///
    /// Unknown attributes are ignored and the card keeps showing ids.
    pub fn with_card_field(mut self, field: &'static str) -> Self {
        if E::has_attribute(field) {
            self.card_field = field;
        }
        self
    }

    pub fn with_entities(mut self, entities: Vec<E>) -> Self {
        self.entities = entities;
        self
    }

    pub fn slice_name(&self) -> &str {
        &self.slice_name
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn card_field(&self) -> &'static str {
        self.card_field
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The preset fields followed by the extension fields.
    pub fn get_all_fields(&self) -> Vec<Field<E>> {
        let mut fields = preset_fields::<E>(&self.headers);
        fields.extend(self.extension_fields.iter().cloned());
        fields
    }

    pub fn extension_fields(&self) -> &[Field<E>] {
        &self.extension_fields
    }

    /// Ordered status tokens, as dropdowns and summary cards list them.
    pub fn status_values(&self) -> Vec<String> {
        E::Status::tokens()
    }

    pub fn add(&mut self, entity: E) {
        self.entities.push(entity);
    }

    pub fn remove(&mut self, id: &str) {
        self.entities.retain(|e| e.id() != id);
    }

    pub fn get_by_id(&self, id: &str) -> Option<&E> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_by_status(&self, status: E::Status) -> Vec<&E> {
        self.entities
            .iter()
            .filter(|e| e.status() == Some(status))
            .collect()
    }

    /// Returns `false` when no entity has the id.
    pub fn modify(&mut self, id: &str, changes: E::Patch) -> bool {
        match self.entities.iter_mut().find(|e| e.id() == id) {
            Some(entity) => {
                changes.apply_to(entity);
                true
            }
            None => false,
        }
    }

    pub fn total_value(&self) -> f64 {
        self.entities.iter().map(|e| e.value()).sum()
    }

    pub fn total_value_by_status(&self, status: E::Status) -> f64 {
        self.entities
            .iter()
            .filter(|e| e.status() == Some(status))
            .map(|e| e.value())
            .sum()
    }

    pub fn status_label(&self, entity: &E) -> String {
        entity.status().map(|s| s.label()).unwrap_or_default()
    }

    /// Display string of the card field for `entity`.
    pub fn card_label(&self, entity: &E) -> String {
        entity
            .get_attr(self.card_field)
            .map(|v| v.to_string())
            .unwrap_or_else(|| entity.id().to_string())
    }
}
