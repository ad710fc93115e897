//! Input and output locations

use std::path::PathBuf;

/// Spreadsheet read when no input is given
pub const DEFAULT_INPUT: &str = "transaksi-2025-06-16.xlsx";

/// Text report written when no report path is given
pub const DEFAULT_REPORT: &str = "excel_analysis.txt";

/// JSON export written when no JSON path is given
pub const DEFAULT_JSON: &str = "excel_data.json";

/// Paths for one export run. Relative paths resolve against the working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub report: PathBuf,
    pub json: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            report: PathBuf::from(DEFAULT_REPORT),
            json: PathBuf::from(DEFAULT_JSON),
        }
    }
}
