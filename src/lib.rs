//! order-sheets - keep a Google Sheets spreadsheet in sync with customer orders
//!
//! Builds Google Sheets v4 request bodies from order records and sends them
//! through a pluggable RPC client:
//! - A "Data" sheet with a frozen, bold header row and one row per order
//! - Typed cells: unit counts as `#,##0`, prices as `$#,##0.00`, status as a
//!   strict dropdown of PENDING / SHIPPED / DELIVERED
//! - A "Pivot" sheet summing units and revenue per product, with a bar chart
//!
//! # Usage
//!
//! ```no_run
//! use order_sheets::{Config, HttpSheetsClient, Order, OrderStatus, SheetsHelper};
//!
//! # fn main() -> order_sheets::error::Result<()> {
//! let client = HttpSheetsClient::new(&Config::new("ya29.access-token"))?;
//! let helper = SheetsHelper::new(client);
//!
//! let reference = helper.create_spreadsheet("Orders")?;
//! let orders = vec![Order::new(1, "Acme", "X1", 3, 9.5, OrderStatus::Pending)];
//! helper.sync(&reference, &orders)?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cell_ref;
pub mod client;
pub mod columns;
pub mod config;
pub mod data_validation;
pub mod error;
pub mod numfmt;
pub mod types;

pub use builder::{
    build_chart_request, build_create_request, build_format_pivot_request, build_header_request,
    build_pivot_request, build_setup_request, build_sync_request,
};
pub use client::{HttpSheetsClient, SheetsHelper, SheetsRpc};
pub use config::Config;
pub use error::SheetSyncError;

pub use types::*;
