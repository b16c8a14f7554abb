//! Core module containing the invoice model, field binding and storage trait

pub mod display;
pub mod error;
pub mod field;
pub mod invoice;
pub mod items;
pub mod store;

pub use display::{DEFAULT_CURRENCY_SYMBOL, format_amount, format_date, format_local_date, history_order};
pub use error::{FieldError, StorageError};
pub use field::{DraftField, ItemField, parse_float_lenient, parse_int_lenient};
pub use invoice::{Draft, Invoice, LineItem, compute_grand_total, next_invoice_number};
pub use store::KeyValueStore;
