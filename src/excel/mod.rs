//! Spreadsheet import
//!
//! Reads the first worksheet of any workbook format calamine detects
//! (xlsx, xlsm, xlsb, xls, ods) into a [`Table`](crate::types::Table).

mod importer;

pub use importer::{load, SheetImporter};
