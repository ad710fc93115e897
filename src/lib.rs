//! Sheet Export - spreadsheet summary and JSON export
//!
//! Reads the first worksheet of a spreadsheet, writes a human-readable report
//! (column names, one JSON line per row, inferred column types) and a
//! pretty-printed JSON array with one object per row.
//!
//! # Example
//!
//! ```no_run
//! use sheet_export::excel::load;
//! use sheet_export::writer::{write_json_export, write_report};
//!
//! let table = load("transaksi-2025-06-16.xlsx")?;
//!
//! println!("Columns: {}", table.column_count());
//! println!("Rows: {}", table.row_count());
//!
//! write_report(&table, "excel_analysis.txt")?;
//! write_json_export(&table, "excel_data.json")?;
//! # Ok::<(), sheet_export::error::ExportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod record;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use record::{normalize, Record, Scalar};
pub use types::{Cell, ColumnType, Table};
