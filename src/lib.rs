//! # Invoice Desk
//!
//! The data model and editing lifecycle behind a single-page invoice form,
//! persisted to a local key-value store.
//!
//! ## Features
//!
//! - **Draft/Invoice Model**: a working draft that becomes a persisted invoice
//!   on save, with the grand total snapshotted at save time
//! - **Edit in Place**: editing keeps an invoice's id and creation timestamp
//! - **Cancel Without Deleting**: cancellation is a toggle, deletion removes
//! - **Lenient Form Input**: malformed numbers become `0`, never errors
//! - **Pluggable Storage**: in-memory, file-per-slot, or LMDB (`lmdb` feature)
//! - **Browser-Compatible Format**: the slot holds the same camelCase JSON
//!   list the browser form wrote to local storage
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoice_desk::prelude::*;
//!
//! let mut editor = InvoiceEditor::load(InMemoryKeyValueStore::new(), "invoices");
//!
//! editor.update_draft_field(DraftField::ClientName, "Acme Ltd");
//! editor.update_item_field(0, ItemField::Description, "Consulting");
//! editor.update_item_field(0, ItemField::Quantity, "3");
//! editor.update_item_field(0, ItemField::UnitPrice, "450");
//!
//! let id = editor.save()?;
//! assert_eq!(editor.invoice(&id).unwrap().grand_total, 1350.0);
//!
//! editor.toggle_cancel(&id)?; // marked cancelled, still listed
//! editor.delete_invoice(&id)?; // gone
//! ```

pub mod config;
pub mod core;
pub mod editor;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Model ===
    pub use crate::core::{
        Draft, Invoice, LineItem, compute_grand_total, next_invoice_number,
    };

    // === Field Binding ===
    pub use crate::core::{DraftField, ItemField, parse_float_lenient, parse_int_lenient};

    // === Display ===
    pub use crate::core::{DEFAULT_CURRENCY_SYMBOL, format_amount, format_date, format_local_date};

    // === Errors ===
    pub use crate::core::{FieldError, StorageError};

    // === Storage ===
    pub use crate::core::KeyValueStore;
    pub use crate::storage::{FileKeyValueStore, InMemoryKeyValueStore};
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbKeyValueStore;

    // === Config ===
    pub use crate::config::{DEFAULT_STORAGE_KEY, DeskConfig, StorageConfig};

    // === Editor ===
    pub use crate::editor::InvoiceEditor;

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
