//! Field descriptors and schema composition.
//!
//! A [`Field`] describes one displayable attribute of an entity type: which widget
//! edits it and how its display string is derived. Every collection's schema is the
//! three preset fields (`id`, `value`, `status`) followed by its extension fields.

use std::fmt;

use serde::Serialize;

use crate::format::format_amount;
use crate::model::{MonetaryEntity, StatusKind};

/// How a field's value is displayed and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayDatatype {
    String,
    Number,
    Date,
    MoneyAmount,
    Enum,
}

impl DisplayDatatype {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayDatatype::String => "string",
            DisplayDatatype::Number => "number",
            DisplayDatatype::Date => "date",
            DisplayDatatype::MoneyAmount => "moneyAmount",
            DisplayDatatype::Enum => "enum",
        }
    }
}

/// The input widget a generic form binds to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Widget {
    Text,
    Number,
    Currency { decimal_places: u8 },
    Date,
    Dropdown { options: Vec<String> },
}

/// Derives a field's display string from an entity.
pub type DisplayFn<E> = fn(&E) -> String;

/// Metadata of one entity attribute, enough to drive a generic render.
pub struct Field<E> {
    /// Attribute id; must exist on the entity type.
    pub id: &'static str,
    pub display_datatype: DisplayDatatype,
    /// Closed value set, expected when the datatype is `Enum`.
    pub enum_values: Option<Vec<String>>,
    pub header: String,
    pub display: Option<DisplayFn<E>>,
}

impl<E> Clone for Field<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            display_datatype: self.display_datatype,
            enum_values: self.enum_values.clone(),
            header: self.header.clone(),
            display: self.display,
        }
    }
}

impl<E> fmt::Debug for Field<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("display_datatype", &self.display_datatype)
            .field("enum_values", &self.enum_values)
            .field("header", &self.header)
            .field("display", &self.display.is_some())
            .finish()
    }
}

impl<E> Field<E> {
    /// Create a field with no enum values and no display callback.
    pub fn new(id: &'static str, display_datatype: DisplayDatatype, header: impl Into<String>) -> Self {
        Self {
            id,
            display_datatype,
            enum_values: None,
            header: header.into(),
            display: None,
        }
    }

    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub fn with_display(mut self, display: DisplayFn<E>) -> Self {
        self.display = Some(display);
        self
    }

    /// The widget used to edit this field.
    ///
    /// An enum field without values degrades to free-text input.
    pub fn widget(&self) -> Widget {
        match self.display_datatype {
            DisplayDatatype::String => Widget::Text,
            DisplayDatatype::Number => Widget::Number,
            DisplayDatatype::MoneyAmount => Widget::Currency { decimal_places: 2 },
            DisplayDatatype::Date => Widget::Date,
            DisplayDatatype::Enum => match &self.enum_values {
                Some(values) if !values.is_empty() => Widget::Dropdown {
                    options: values.clone(),
                },
                _ => Widget::Text,
            },
        }
    }
}

impl<E: MonetaryEntity> Field<E> {
    /// Display string for `entity`: the callback when present, else the raw attribute.
    pub fn display_string(&self, entity: &E) -> String {
        match self.display {
            Some(display) => display(entity),
            None => entity
                .get_attr(self.id)
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Headers of the three preset fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    pub id: String,
    pub amount: String,
    pub status: String,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            id: "Id".to_string(),
            amount: "Amount".to_string(),
            status: "Status".to_string(),
        }
    }
}

fn amount_display<E: MonetaryEntity>(entity: &E) -> String {
    format_amount(entity.value(), entity.currency())
}

fn status_display<E: MonetaryEntity>(entity: &E) -> String {
    entity.status().map(|s| s.label()).unwrap_or_default()
}

/// The fixed `[id, value, status]` fields every monetary entity shares.
pub fn preset_fields<E: MonetaryEntity>(headers: &Headers) -> Vec<Field<E>> {
    vec![
        Field::new("id", DisplayDatatype::String, headers.id.clone()),
        Field::new("value", DisplayDatatype::MoneyAmount, headers.amount.clone())
            .with_display(amount_display::<E>),
        Field::new("status", DisplayDatatype::Enum, headers.status.clone())
            .with_enum_values(E::Status::tokens())
            .with_display(status_display::<E>),
    ]
}

/// A field description without the display callback, for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub id: String,
    pub header: String,
    pub display_datatype: DisplayDatatype,
    pub enum_values: Option<Vec<String>>,
    pub widget: Widget,
}

impl<E> From<&Field<E>> for FieldInfo {
    fn from(field: &Field<E>) -> Self {
        Self {
            id: field.id.to_string(),
            header: field.header.clone(),
            display_datatype: field.display_datatype,
            enum_values: field.enum_values.clone(),
            widget: field.widget(),
        }
    }
}
