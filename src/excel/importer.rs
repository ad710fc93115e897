//! Spreadsheet importer - first worksheet → Table

use crate::error::{ExportError, ExportResult};
use crate::record::{format_datetime, format_duration, format_time};
use crate::types::{Cell, Table};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text cells read as missing values in data rows
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load the first worksheet of a spreadsheet file
pub fn load<P: AsRef<Path>>(path: P) -> ExportResult<Table> {
    SheetImporter::new(path).import()
}

/// Reads the first worksheet of an xlsx/xlsm/xlsb/xls/ods file into a [`Table`]
pub struct SheetImporter {
    path: PathBuf,
}

impl SheetImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the workbook and convert its first worksheet
    pub fn import(&self) -> ExportResult<Table> {
        if !self.path.exists() {
            return Err(ExportError::FileNotFound(self.path.clone()));
        }

        let mut workbook = open_workbook_auto(&self.path).map_err(|source| ExportError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let sheet_name = workbook.sheet_names().first().cloned();
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExportError::NoWorksheet(self.path.clone()))?
            .map_err(|source| ExportError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            sheet = sheet_name.as_deref().unwrap_or_default(),
            size = ?range.get_size(),
            "read first worksheet"
        );

        Ok(Self::table_from_range(&range))
    }

    /// Convert a worksheet range: first non-blank row is the header, blank
    /// rows are skipped, leading blank columns become unnamed null columns
    pub fn table_from_range(range: &Range<Data>) -> Table {
        if range.is_empty() {
            return Table::new(Vec::new(), Vec::new());
        }

        let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let mut rows = range
            .rows()
            .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)));

        let header = match rows.next() {
            Some(header) => Self::pad_row(leading, header.iter().map(Self::convert_cell)),
            None => return Table::new(Vec::new(), Vec::new()),
        };

        let names = header
            .iter()
            .enumerate()
            .map(|(idx, cell)| Self::header_name(cell, idx))
            .collect();

        let data = rows
            .map(|row| Self::pad_row(leading, row.iter().map(Self::convert_data_cell)))
            .collect();

        Table::new(Self::dedupe_names(names), data)
    }

    fn pad_row(leading: usize, cells: impl Iterator<Item = Cell>) -> Vec<Cell> {
        let mut row = vec![Cell::Null; leading];
        row.extend(cells);
        row
    }

    /// Convert a data (non-header) cell: formula errors and missing-value
    /// markers are nulls
    fn convert_data_cell(data: &Data) -> Cell {
        match data {
            Data::Error(_) => Cell::Null,
            Data::String(s) if MISSING_MARKERS.contains(&s.as_str()) => Cell::Null,
            other => Self::convert_cell(other),
        }
    }

    /// Convert one calamine cell
    fn convert_cell(data: &Data) -> Cell {
        match data {
            Data::Empty => Cell::Null,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Self::convert_number(*f),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    dt.as_duration()
                        .map(Cell::Duration)
                        .unwrap_or_else(|| Self::convert_number(dt.as_f64()))
                } else {
                    match dt.as_datetime() {
                        Some(value) if dt.as_f64() < 1.0 => Cell::Time(value.time()),
                        Some(value) => Cell::DateTime(value),
                        None => Self::convert_number(dt.as_f64()),
                    }
                }
            }
            Data::DateTimeIso(s) => Self::parse_iso_datetime(s)
                .map(Cell::DateTime)
                .unwrap_or_else(|| Cell::Text(s.clone())),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }

    /// Whole numbers that fit in i64 are integers, everything else is a float
    fn convert_number(f: f64) -> Cell {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            Cell::Int(f as i64)
        } else {
            Cell::Float(f)
        }
    }

    fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    /// Column name for a header cell at absolute column index `idx`
    fn header_name(cell: &Cell, idx: usize) -> String {
        match cell {
            Cell::Null => format!("Unnamed: {}", idx),
            Cell::Text(s) if s.is_empty() => format!("Unnamed: {}", idx),
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::DateTime(dt) => format_datetime(dt),
            Cell::Time(t) => format_time(t),
            Cell::Duration(d) => format_duration(d),
            Cell::NaT => "NaT".to_string(),
        }
    }

    /// Make names unique: later duplicates of `x` become `x.1`, `x.2`, ...
    fn dedupe_names(names: Vec<String>) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();

        names
            .into_iter()
            .map(|mut name| {
                let mut count = counts.get(&name).copied().unwrap_or(0);
                while count > 0 {
                    counts.insert(name.clone(), count + 1);
                    name = format!("{}.{}", name, count);
                    count = counts.get(&name).copied().unwrap_or(0);
                }
                counts.insert(name.clone(), 1);
                name
            })
            .collect()
    }
}
