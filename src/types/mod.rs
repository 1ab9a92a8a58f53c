//! Data types for orders and the Google Sheets v4 resources built from them.
//!
//! Every Sheets type serializes to the exact camelCase wire shape the REST API
//! expects, with absent optional fields omitted.

mod cell;
mod chart;
mod order;
mod pivot;
mod request;
mod spreadsheet;
mod validation;

pub use cell::*;
pub use chart::*;
pub use order::*;
pub use pivot::*;
pub use request::*;
pub use spreadsheet::*;
pub use validation::*;

/// Numeric identifier of a single sheet (tab) inside a spreadsheet.
pub type SheetId = u32;

/// Helper function for serde skip_serializing_if
pub(crate) fn is_false(b: &bool) -> bool {
    !b
}
