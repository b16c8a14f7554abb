//! The invoice editor: persisted list, working draft, and the operations
//! the form drives
//!
//! Every operation runs to completion synchronously. Mutations that touch
//! the persisted list update it in memory first and then write the whole
//! list back to the storage slot, so the in-memory list is always the
//! newest state even if a write fails.

use crate::config::DeskConfig;
use crate::core::display::{format_amount, history_order};
use crate::core::{
    Draft, DraftField, Invoice, ItemField, KeyValueStore, StorageError, items,
    next_invoice_number, parse_int_lenient,
};
use uuid::Uuid;

/// Holds the persisted invoices and the draft being composed or edited
///
/// # Example
///
/// ```rust,ignore
/// use invoice_desk::prelude::*;
///
/// let mut editor = InvoiceEditor::load(InMemoryKeyValueStore::new(), "invoices");
/// editor.update_draft_field(DraftField::ClientName, "Acme");
/// editor.update_item_field(0, ItemField::UnitPrice, "250");
/// let id = editor.save()?;
/// ```
#[derive(Debug)]
pub struct InvoiceEditor<S: KeyValueStore> {
    storage: S,
    key: String,
    invoices: Vec<Invoice>,
    draft: Draft,
    editing: bool,
    currency_symbol: String,
}

impl InvoiceEditor<Box<dyn KeyValueStore>> {
    /// Open the configured backend and load the configured slot
    pub fn from_config(config: &DeskConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let storage = config.storage.open()?;
        Ok(Self::load(storage, config.storage_key.as_str())
            .with_currency_symbol(config.currency_symbol.as_str()))
    }
}

impl<S: KeyValueStore> InvoiceEditor<S> {
    /// Read the persisted list from `key` and start a fresh draft.
    ///
    /// A missing slot, an unreadable backend or content that is not a valid
    /// invoice list all leave the editor with an empty list; the cause is
    /// logged and never returned.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let invoices = read_invoices(&storage, &key);
        let draft = Draft::new(next_invoice_number(&invoices));

        tracing::debug!(
            slot = %key,
            count = invoices.len(),
            next_number = draft.invoice_number,
            "Invoice list loaded"
        );

        Self {
            storage,
            key,
            invoices,
            draft,
            editing: false,
            currency_symbol: crate::core::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    // === Accessors ===

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn invoice(&self, id: &Uuid) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| &inv.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the draft was opened from a persisted invoice
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Live total of the draft's rows, for the form footer
    pub fn draft_grand_total(&self) -> f64 {
        self.draft.grand_total()
    }

    /// Persisted invoices in history-table order (highest number first)
    pub fn history(&self) -> Vec<&Invoice> {
        history_order(&self.invoices)
    }

    /// `value` in the configured display format
    pub fn format_amount(&self, value: f64) -> String {
        format_amount(value, &self.currency_symbol)
    }

    // === Draft editing ===

    /// Set a top-level draft field from raw form input.
    ///
    /// `invoiceNumber` is parsed leniently (malformed input becomes `0`) and
    /// can only be changed while editing a persisted invoice. Returns whether
    /// the draft changed.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) -> bool {
        match field {
            DraftField::InvoiceNumber => {
                if !self.editing {
                    tracing::debug!("Invoice number is only editable on saved invoices");
                    return false;
                }
                self.draft.invoice_number = parse_int_lenient(value);
            }
            DraftField::ClientName => self.draft.client_name = value.to_string(),
            DraftField::Description => self.draft.description = value.to_string(),
        }
        true
    }

    /// Set a field on row `index` of the draft and recompute its total.
    ///
    /// Returns `false` without touching the draft if there is no such row.
    pub fn update_item_field(&mut self, index: usize, field: ItemField, value: &str) -> bool {
        match items::with_updated(&self.draft.items, index, field, value) {
            Some(next) => {
                self.draft.items = next;
                true
            }
            None => {
                tracing::debug!(index, field = %field, "Item update ignored: no such row");
                false
            }
        }
    }

    /// Append a blank row (quantity 1, price 0)
    pub fn add_item(&mut self) {
        self.draft.items = items::with_added(&self.draft.items);
    }

    /// Remove row `index`; returns `false` if there is no such row
    pub fn remove_item(&mut self, index: usize) -> bool {
        match items::with_removed(&self.draft.items, index) {
            Some(next) => {
                self.draft.items = next;
                true
            }
            None => {
                tracing::debug!(index, "Item removal ignored: no such row");
                false
            }
        }
    }

    /// Replace the draft with a blank one numbered after the highest
    /// persisted invoice, and leave editing mode
    pub fn reset_draft(&mut self) {
        self.draft = Draft::new(next_invoice_number(&self.invoices));
        self.editing = false;
    }

    // === Persisted list ===

    /// Commit the draft to the persisted list and write the list out.
    ///
    /// An edited draft replaces the invoice with the same id, keeping its
    /// `id` and `createdAt`; any other draft is appended as a new invoice
    /// with a fresh id and timestamp. Either way the grand total is taken
    /// now, the draft is reset, and the saved invoice's id is returned. A
    /// failed write is returned as an error after the in-memory list and
    /// draft have already been updated.
    pub fn save(&mut self) -> Result<Uuid, StorageError> {
        let draft = std::mem::take(&mut self.draft);

        let id = match (self.editing, draft.id) {
            (true, Some(id)) => {
                match self.invoices.iter_mut().find(|inv| inv.id == id) {
                    Some(invoice) => invoice.apply(&draft),
                    None => tracing::warn!(invoice_id = %id, "Edited invoice no longer exists"),
                }
                id
            }
            _ => {
                let invoice = Invoice::create(draft);
                let id = invoice.id;
                self.invoices.push(invoice);
                id
            }
        };

        tracing::debug!(invoice_id = %id, "Invoice saved");

        let written = self.persist();
        self.reset_draft();
        written.map(|()| id)
    }

    /// Load a persisted invoice into the draft for editing.
    ///
    /// Returns `false` and leaves the draft alone if `id` is unknown.
    pub fn edit_invoice(&mut self, id: &Uuid) -> bool {
        let Some(invoice) = self.invoice(id) else {
            tracing::warn!(invoice_id = %id, "Cannot edit unknown invoice");
            return false;
        };

        let draft = Draft::from(invoice);
        self.draft = draft;
        self.editing = true;
        true
    }

    /// Flip the cancelled flag of a persisted invoice and write the list.
    ///
    /// The draft is not touched. An unknown `id` changes nothing and writes
    /// nothing.
    pub fn toggle_cancel(&mut self, id: &Uuid) -> Result<bool, StorageError> {
        let Some(invoice) = self.invoices.iter_mut().find(|inv| &inv.id == id) else {
            tracing::warn!(invoice_id = %id, "Cannot toggle unknown invoice");
            return Ok(false);
        };

        invoice.is_cancelled = !invoice.is_cancelled;
        tracing::debug!(
            invoice_id = %id,
            cancelled = invoice.is_cancelled,
            "Invoice cancellation toggled"
        );

        self.persist().map(|()| true)
    }

    /// Remove a persisted invoice, write the list and reset the draft.
    ///
    /// The draft is reset even when `id` is unknown; the list is only
    /// written when something was removed.
    pub fn delete_invoice(&mut self, id: &Uuid) -> Result<bool, StorageError> {
        let before = self.invoices.len();
        self.invoices.retain(|inv| &inv.id != id);
        let removed = self.invoices.len() != before;

        self.reset_draft();

        if !removed {
            tracing::warn!(invoice_id = %id, "Cannot delete unknown invoice");
            return Ok(false);
        }

        tracing::debug!(invoice_id = %id, "Invoice deleted");
        self.persist().map(|()| true)
    }

    /// Write the whole list to the slot
    fn persist(&self) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(&self.invoices).map_err(|source| StorageError::Serialization {
                key: self.key.clone(),
                source,
            })?;

        self.storage.set(&self.key, &encoded).inspect_err(|e| {
            tracing::error!(slot = %self.key, error = %e, "Failed to write invoice list");
        })
    }
}

fn read_invoices<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Invoice> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(slot = %key, "No stored invoices");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(slot = %key, error = %e, "Failed to read invoices from storage");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(slot = %key, error = %e, "Stored invoices are not a valid list");
        Vec::new()
    })
}
