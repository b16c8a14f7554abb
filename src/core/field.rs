//! Form field names and lenient numeric coercion

use crate::core::error::FieldError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Top-level draft fields editable from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    InvoiceNumber,
    ClientName,
    Description,
}

impl DraftField {
    /// The form / persistence name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::InvoiceNumber => "invoiceNumber",
            DraftField::ClientName => "clientName",
            DraftField::Description => "description",
        }
    }
}

impl FromStr for DraftField {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "invoiceNumber" => Ok(DraftField::InvoiceNumber),
            "clientName" => Ok(DraftField::ClientName),
            "description" => Ok(DraftField::Description),
            other => Err(FieldError::UnknownField {
                scope: "draft",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line item fields editable from an item row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Description,
    Quantity,
    UnitPrice,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Description => "description",
            ItemField::Quantity => "quantity",
            ItemField::UnitPrice => "unitPrice",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, ItemField::Description)
    }
}

impl FromStr for ItemField {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "description" => Ok(ItemField::Description),
            "quantity" => Ok(ItemField::Quantity),
            "unitPrice" => Ok(ItemField::UnitPrice),
            other => Err(FieldError::UnknownField {
                scope: "item",
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the leading integer of `input`, falling back to `0`.
///
/// Leading whitespace is skipped and everything after the digits is ignored,
/// so `"12abc"` is `12` and `"3.9"` is `3`. Input without a numeric prefix,
/// or one that overflows `i64`, yields `0`.
pub fn parse_int_lenient(input: &str) -> i64 {
    static INT_PREFIX: OnceLock<Regex> = OnceLock::new();
    let regex = INT_PREFIX.get_or_init(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

    regex
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Parse the leading decimal number of `input`, falling back to `0.0`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent (`"2.5kg"` is `2.5`, `".5"` is `0.5`, `"1e3x"` is
/// `1000`). Non-finite results and negative zero also collapse to `0.0`.
pub fn parse_float_lenient(input: &str) -> f64 {
    static FLOAT_PREFIX: OnceLock<Regex> = OnceLock::new();
    let regex = FLOAT_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").unwrap()
    });

    let value = regex
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}
