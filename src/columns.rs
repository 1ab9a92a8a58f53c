//! Column layout of the "Data" sheet.
//!
//! The table is fixed: its order defines the header row, the cell order of
//! every synced row, and the column offsets used by the pivot table.

/// How a column's cells are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Plain string value
    Text,
    /// Integer count, `#,##0`
    Number,
    /// Money amount, `$#,##0.00`
    Currency,
    /// String constrained to a fixed list of values
    Enumerated,
}

/// One column of the orders sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Order field name (camelCase, as stored)
    pub field: &'static str,
    /// Header text written in row 0
    pub header: &'static str,
    /// Position in the sheet (0-indexed)
    pub index: u32,
    pub kind: ColumnKind,
}

pub const COLUMN_COUNT: u32 = 6;

pub const ID: Column = Column {
    field: "id",
    header: "ID",
    index: 0,
    kind: ColumnKind::Text,
};

pub const CUSTOMER_NAME: Column = Column {
    field: "customerName",
    header: "Customer Name",
    index: 1,
    kind: ColumnKind::Text,
};

pub const PRODUCT_CODE: Column = Column {
    field: "productCode",
    header: "Product Code",
    index: 2,
    kind: ColumnKind::Text,
};

pub const UNITS_ORDERED: Column = Column {
    field: "unitsOrdered",
    header: "Units Ordered",
    index: 3,
    kind: ColumnKind::Number,
};

pub const UNIT_PRICE: Column = Column {
    field: "unitPrice",
    header: "Unit Price",
    index: 4,
    kind: ColumnKind::Currency,
};

pub const STATUS: Column = Column {
    field: "status",
    header: "Status",
    index: 5,
    kind: ColumnKind::Enumerated,
};

/// All columns in sheet order.
pub static COLUMNS: [Column; COLUMN_COUNT as usize] = [
    ID,
    CUSTOMER_NAME,
    PRODUCT_CODE,
    UNITS_ORDERED,
    UNIT_PRICE,
    STATUS,
];

/// Look up a column by its order field name.
pub fn column_for_field(field: &str) -> Option<&'static Column> {
    COLUMNS.iter().find(|c| c.field == field)
}
