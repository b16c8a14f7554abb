//! Invoice records: the persisted `Invoice`, the editable `Draft`, and
//! their line items
//!
//! Field names serialize in camelCase so that the slot contents stay
//! compatible with lists written by the browser form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single billed row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    /// Cached `quantity * unit_price`, only present once the row was edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: None,
        }
    }

    /// The blank row the form starts with: quantity 1, price 0
    pub fn empty() -> Self {
        Self::new("", 1.0, 0.0)
    }

    /// Row subtotal, computed live regardless of the cached `total`.
    ///
    /// Finite inputs can still overflow; a non-finite product is `0.0`
    /// because JSON cannot hold it.
    pub fn subtotal(&self) -> f64 {
        finite_or_zero(self.quantity * self.unit_price)
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sum of `quantity * unit_price` over `items`
///
/// A sum that overflows is `0.0`, the same as an overflowing row.
pub fn compute_grand_total(items: &[LineItem]) -> f64 {
    finite_or_zero(items.iter().map(LineItem::subtotal).sum())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// The number a fresh draft should carry: highest existing number + 1, or 1
pub fn next_invoice_number(invoices: &[Invoice]) -> i64 {
    invoices
        .iter()
        .map(|inv| inv.invoice_number)
        .max()
        .unwrap_or(0)
        + 1
}

/// A saved invoice, as held in the persisted list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: i64,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
    /// Snapshot of the item total taken when the invoice was last saved
    #[serde(default)]
    pub grand_total: f64,
}

impl Invoice {
    /// Turn a never-saved draft into a new invoice stamped now
    pub fn create(draft: Draft) -> Self {
        Self::create_at(draft, Uuid::new_v4(), Utc::now())
    }

    pub(crate) fn create_at(draft: Draft, id: Uuid, created_at: DateTime<Utc>) -> Self {
        let grand_total = draft.grand_total();
        Self {
            id,
            invoice_number: draft.invoice_number,
            client_name: draft.client_name,
            description: draft.description,
            items: draft.items,
            is_cancelled: draft.is_cancelled,
            created_at,
            grand_total,
        }
    }

    /// Overwrite the editable fields from `draft` and retake the total.
    ///
    /// `id` and `created_at` are left as they are.
    pub fn apply(&mut self, draft: &Draft) {
        self.invoice_number = draft.invoice_number;
        self.client_name = draft.client_name.clone();
        self.description = draft.description.clone();
        self.items = draft.items.clone();
        self.is_cancelled = draft.is_cancelled;
        self.grand_total = draft.grand_total();
    }
}

/// The invoice being composed or edited
///
/// A fresh draft has no `id`, `created_at` or `grand_total`; a draft opened
/// from a saved invoice carries all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub invoice_number: i64,
    pub client_name: String,
    pub description: String,
    pub items: Vec<LineItem>,
    pub is_cancelled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,
}

impl Draft {
    /// Blank draft with one empty row
    pub fn new(invoice_number: i64) -> Self {
        Self {
            id: None,
            invoice_number,
            client_name: String::new(),
            description: String::new(),
            items: vec![LineItem::empty()],
            is_cancelled: false,
            created_at: None,
            grand_total: None,
        }
    }

    /// Live total of the current rows
    pub fn grand_total(&self) -> f64 {
        compute_grand_total(&self.items)
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new(1)
    }
}

impl From<&Invoice> for Draft {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: Some(invoice.id),
            invoice_number: invoice.invoice_number,
            client_name: invoice.client_name.clone(),
            description: invoice.description.clone(),
            items: invoice.items.clone(),
            is_cancelled: invoice.is_cancelled,
            created_at: Some(invoice.created_at),
            grand_total: Some(invoice.grand_total),
        }
    }
}
