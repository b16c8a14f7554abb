//! Macro-generated test suite for `KeyValueStore` contract validation.
//!
//! The `key_value_store_tests!` macro generates a test module that validates
//! any `KeyValueStore` implementation against the slot contract, then drives
//! an `InvoiceEditor` over it to check that a saved list survives a reload.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use invoice_desk::storage::InMemoryKeyValueStore;
//!
//! key_value_store_tests!(InMemoryKeyValueStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Slots
//! - `test_get_missing_slot` — never-written key reads as None
//! - `test_set_then_get` — value comes back verbatim
//! - `test_set_replaces_whole_value` — a shorter write leaves no tail
//! - `test_remove_slot` — removed key reads as None
//! - `test_remove_missing_slot` — removing an absent key is Ok
//! - `test_keys_are_independent` — writes to one key leave others alone
//! - `test_unicode_round_trip` — right-to-left text and emoji survive
//!
//! ## Editor over the backend
//! - `test_editor_reload_round_trip` — saved, toggled list reloads equal
//! - `test_editor_delete_persists` — a reload no longer sees the deleted id

/// Generate a full `KeyValueStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to a fresh, empty store.
/// It is re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! key_value_store_tests {
    ($factory:expr) => {
        mod key_value_store_contract_tests {
            use super::*;
            use invoice_desk::prelude::*;

            // ==================================================================
            // Slots
            // ==================================================================

            #[test]
            fn test_get_missing_slot() {
                let store = $factory;
                assert!(store.get("invoices").unwrap().is_none());
            }

            #[test]
            fn test_set_then_get() {
                let store = $factory;
                store.set("invoices", "[]").unwrap();
                assert_eq!(store.get("invoices").unwrap().as_deref(), Some("[]"));
            }

            #[test]
            fn test_set_replaces_whole_value() {
                let store = $factory;
                store.set("invoices", "[1,2,3,4,5,6,7,8,9]").unwrap();
                store.set("invoices", "[1]").unwrap();
                assert_eq!(store.get("invoices").unwrap().as_deref(), Some("[1]"));
            }

            #[test]
            fn test_remove_slot() {
                let store = $factory;
                store.set("invoices", "[]").unwrap();
                store.remove("invoices").unwrap();
                assert!(store.get("invoices").unwrap().is_none());
            }

            #[test]
            fn test_remove_missing_slot() {
                let store = $factory;
                assert!(store.remove("never-written").is_ok());
            }

            #[test]
            fn test_keys_are_independent() {
                let store = $factory;
                store.set("invoices", "a").unwrap();
                store.set("invoices-archive", "b").unwrap();
                store.remove("invoices").unwrap();

                assert!(store.get("invoices").unwrap().is_none());
                assert_eq!(store.get("invoices-archive").unwrap().as_deref(), Some("b"));
            }

            #[test]
            fn test_unicode_round_trip() {
                let store = $factory;
                let value = "חשבונית מס' 12 — לקוח: שרה 🧾";
                store.set("invoices", value).unwrap();
                assert_eq!(store.get("invoices").unwrap().as_deref(), Some(value));
            }

            // ==================================================================
            // Editor over the backend
            // ==================================================================

            #[test]
            fn test_editor_reload_round_trip() {
                let store = $factory;

                let mut editor = InvoiceEditor::load(&store, SLOT);
                let first = save_invoice(&mut editor, "מיכל אברהם", &[("ייעוץ", "2", "350")]);
                save_invoice(&mut editor, "Acme", &[("Audit", "1", "999.99"), ("Travel", "3", "40")]);
                editor.toggle_cancel(&first).unwrap();
                let saved = editor.invoices().to_vec();

                let reloaded = InvoiceEditor::load(&store, SLOT);
                assert_eq!(reloaded.invoices(), saved.as_slice());
                assert_eq!(reloaded.draft().invoice_number, 3);
            }

            #[test]
            fn test_editor_delete_persists() {
                let store = $factory;

                let mut editor = InvoiceEditor::load(&store, SLOT);
                let doomed = save_invoice(&mut editor, "A", &[("x", "1", "1")]);
                let kept = save_invoice(&mut editor, "B", &[("y", "1", "2")]);
                editor.delete_invoice(&doomed).unwrap();

                let reloaded = InvoiceEditor::load(&store, SLOT);
                assert_count(reloaded.invoices(), 1);
                assert!(reloaded.invoice(&doomed).is_none());
                assert!(reloaded.invoice(&kept).is_some());
            }
        }
    };
}
