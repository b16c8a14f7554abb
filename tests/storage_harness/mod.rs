//! Shared test harness for storage backend testing
//!
//! Provides the `key_value_store_tests!` conformance macro, a list fixture
//! in the browser form's format, and helpers for filling in and saving
//! drafts.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod key_value_store_tests;

use invoice_desk::prelude::*;

pub const SLOT: &str = "invoices";

/// A list as the browser form wrote it: camelCase keys, integer numbers,
/// millisecond timestamps, Hebrew text, and one row that was never touched
/// (so it has no `total`).
pub const BROWSER_LIST_JSON: &str = r#"[
  {
    "id": "6f1c1a52-2f0e-4c1b-9a53-0f3a3c2b1d10",
    "invoiceNumber": 1,
    "clientName": "יוסי לוי",
    "description": "שיעורים פרטיים - חודש מאי",
    "items": [
      { "description": "שיעור פרטי", "quantity": 4, "unitPrice": 150, "total": 600 },
      { "description": "", "quantity": 1, "unitPrice": 0 }
    ],
    "isCancelled": false,
    "createdAt": "2024-05-31T09:12:45.123Z",
    "grandTotal": 600
  },
  {
    "id": "0b7d2c44-8e55-4d2a-b1f3-5a6e7c8d9e01",
    "invoiceNumber": 2,
    "clientName": "Acme Ltd",
    "description": "Workshop",
    "items": [
      { "description": "Workshop day", "quantity": 1.5, "unitPrice": 1200.5, "total": 1800.75 }
    ],
    "isCancelled": true,
    "createdAt": "2024-06-02T14:00:00.000Z",
    "grandTotal": 1800.75
  }
]"#;

/// Fill the current draft with `client` and `(description, quantity, price)`
/// rows, the way a user would type them, and save it.
pub fn save_invoice<S: KeyValueStore>(
    editor: &mut InvoiceEditor<S>,
    client: &str,
    rows: &[(&str, &str, &str)],
) -> Uuid {
    editor.update_draft_field(DraftField::ClientName, client);
    for (index, (description, quantity, price)) in rows.iter().enumerate() {
        if index >= editor.draft().items.len() {
            editor.add_item();
        }
        editor.update_item_field(index, ItemField::Description, description);
        editor.update_item_field(index, ItemField::Quantity, quantity);
        editor.update_item_field(index, ItemField::UnitPrice, price);
    }
    editor.save().expect("save should persist")
}

/// Assert that a list contains exactly `n` items.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Assert two totals agree up to float noise.
pub fn assert_total(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected total {}, got {}",
        expected,
        actual
    );
}
