//! # Invoices
//!
//! The concrete monetary entity the application is built around. An [`Invoice`]
//! extends the shared id/value/currency/status surface with a customer, an invoice
//! date, a due date and free-form notes.
//!
//! ## Status Enumeration
//!
//! Ordered `draft → pendingApproval → awaitingPayment → due → pastDue → paid`.
//! The order drives dropdowns and summary cards only; any status may be set at any
//! time. See [`crate::sample`] for the one place statuses are derived from dates.
//!
//! ## Shapes
//!
//! - [`Invoice`]: the typed in-memory entity.
//! - [`InvoicePatch`]: a partial change set for `modify`.
//! - [`SerializedInvoice`]: the transport shape, dates as locale date strings.
//! - [`Invoice::to_record`]: the flat raw record a form would hold.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::EntityCollection;
use crate::error::Result;
use crate::factory::RawRecord;
use crate::fields::{DisplayDatatype, Field, FieldValue, Headers};
use crate::format::{format_date, DEFAULT_CURRENCY};
use crate::model::{EntityPatch, MonetaryEntity, StatusKind};

/// Store slice name of the invoice collection.
pub const INVOICE_SLICE: &str = "invoices";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceStatus {
    Draft,
    PendingApproval,
    AwaitingPayment,
    Due,
    PastDue,
    Paid,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl StatusKind for InvoiceStatus {
    const ALL: &'static [Self] = &[
        InvoiceStatus::Draft,
        InvoiceStatus::PendingApproval,
        InvoiceStatus::AwaitingPayment,
        InvoiceStatus::Due,
        InvoiceStatus::PastDue,
        InvoiceStatus::Paid,
    ];

    fn token(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::PendingApproval => "pendingApproval",
            InvoiceStatus::AwaitingPayment => "awaitingPayment",
            InvoiceStatus::Due => "due",
            InvoiceStatus::PastDue => "pastDue",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub value: f64,
    pub currency: Option<String>,
    pub status: InvoiceStatus,
    pub customer_name: String,
    pub invoice_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub notes: String,
}

impl Invoice {
    /// A draft invoice dated now, due in 60 days, in the default currency.
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            value,
            currency: Some(DEFAULT_CURRENCY.to_string()),
            status: InvoiceStatus::Draft,
            customer_name: String::new(),
            invoice_date: now,
            due_date: now + Duration::days(60),
            notes: String::new(),
        }
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_customer(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    /// The transport shape of this invoice.
    pub fn to_json(&self) -> SerializedInvoice {
        SerializedInvoice {
            id: self.id.clone(),
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            value: self.value,
            status: self.status.token().to_string(),
            customer_name: self.customer_name.clone(),
            invoice_date: format_date(&self.invoice_date),
            due_date: format_date(&self.due_date),
            notes: self.notes.clone(),
        }
    }

    /// The flat raw record of every attribute, keyed by attribute id.
    pub fn to_record(&self) -> RawRecord {
        Self::ATTRIBUTES
            .iter()
            .filter_map(|name| self.get_attr(name).map(|v| (name.to_string(), v.to_raw())))
            .collect()
    }
}

impl MonetaryEntity for Invoice {
    type Status = InvoiceStatus;
    type Patch = InvoicePatch;

    const KIND: &'static str = "Invoice";

    const ATTRIBUTES: &'static [&'static str] = &[
        "id",
        "value",
        "currency",
        "status",
        "customerName",
        "invoiceDate",
        "dueDate",
        "notes",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    fn status(&self) -> Option<InvoiceStatus> {
        Some(self.status)
    }

    fn get_attr(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "value" => Some(FieldValue::Number(self.value)),
            "currency" => self.currency.clone().map(FieldValue::Text),
            "status" => Some(FieldValue::Enum(self.status.token().to_string())),
            "customerName" => Some(FieldValue::Text(self.customer_name.clone())),
            "invoiceDate" => Some(FieldValue::Date(self.invoice_date)),
            "dueDate" => Some(FieldValue::Date(self.due_date)),
            "notes" => Some(FieldValue::Text(self.notes.clone())),
            _ => None,
        }
    }
}

/// Partial changes to an invoice. `None` leaves an attribute untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoicePatch {
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub customer_name: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl InvoicePatch {
    pub fn status(status: InvoiceStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }
}

impl EntityPatch<Invoice> for InvoicePatch {
    fn apply_to(self, invoice: &mut Invoice) {
        if let Some(value) = self.value {
            invoice.value = value;
        }
        if let Some(currency) = self.currency {
            invoice.currency = Some(currency);
        }
        if let Some(status) = self.status {
            invoice.status = status;
        }
        if let Some(customer_name) = self.customer_name {
            invoice.customer_name = customer_name;
        }
        if let Some(invoice_date) = self.invoice_date {
            invoice.invoice_date = invoice_date;
        }
        if let Some(due_date) = self.due_date {
            invoice.due_date = due_date;
        }
        if let Some(notes) = self.notes {
            invoice.notes = notes;
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Transport shape of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedInvoice {
    pub id: String,
    pub currency: String,
    pub value: f64,
    pub status: String,
    pub customer_name: String,
    pub invoice_date: String,
    pub due_date: String,
    pub notes: String,
}

impl SerializedInvoice {
    /// The same payload as a raw record, ready for the record factory.
    pub fn to_record(&self) -> RawRecord {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => RawRecord::new(),
        }
    }
}

fn customer_display(invoice: &Invoice) -> String {
    invoice.customer_name.clone()
}

fn invoice_date_display(invoice: &Invoice) -> String {
    format_date(&invoice.invoice_date)
}

fn due_date_display(invoice: &Invoice) -> String {
    format_date(&invoice.due_date)
}

/// Invoice-specific fields appended after the preset `[id, value, status]`.
pub fn invoice_extension_fields() -> Vec<Field<Invoice>> {
    vec![
        Field::new("customerName", DisplayDatatype::String, "Customer Name")
            .with_display(customer_display),
        Field::new("invoiceDate", DisplayDatatype::Date, "Invoice Date")
            .with_display(invoice_date_display),
        Field::new("dueDate", DisplayDatatype::Date, "Due Date").with_display(due_date_display),
        Field::new("notes", DisplayDatatype::String, "Notes"),
    ]
}

/// An empty invoice collection with the invoice schema and headers.
pub fn invoice_collection() -> Result<EntityCollection<Invoice>> {
    let headers = Headers {
        status: "Invoice Status".to_string(),
        ..Headers::default()
    };
    Ok(
        EntityCollection::new(INVOICE_SLICE, invoice_extension_fields())?
            .with_headers(headers)
            .with_card_field("customerName"),
    )
}
