use chrono::{Duration, NaiveDateTime, NaiveTime};
use std::fmt;

//==============================================================================
// Cells
//==============================================================================

/// A single worksheet value after loading
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Empty cell
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Date-formatted numeric cell
    DateTime(NaiveDateTime),
    /// Date-formatted cell with a serial value below one day
    Time(NaiveTime),
    /// Duration-formatted cell
    Duration(Duration),
    /// Missing value in a date-time column ("not a time")
    NaT,
}

//==============================================================================
// Column Types
//==============================================================================

/// Storage type inferred for a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    Bool,
    DateTime,
    Object,
}

impl ColumnType {
    /// Infer the storage type of a column from its loaded cells.
    ///
    /// Integers only promote to `Int64` when no cell is missing; a missing
    /// value forces numbers to `Float64` and booleans to `Object`. A column
    /// with no values at all is `Float64`, and a column with no rows is
    /// `Object`.
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut total = 0usize;
        let mut nulls = 0usize;
        let mut ints = 0usize;
        let mut floats = 0usize;
        let mut bools = 0usize;
        let mut datetimes = 0usize;
        let mut other = 0usize;

        for cell in cells {
            total += 1;
            match cell {
                Cell::Null => nulls += 1,
                Cell::Int(_) => ints += 1,
                Cell::Float(_) => floats += 1,
                Cell::Bool(_) => bools += 1,
                Cell::DateTime(_) => datetimes += 1,
                _ => other += 1,
            }
        }

        if total == 0 {
            return ColumnType::Object;
        }
        let present = total - nulls;
        if present == 0 {
            return ColumnType::Float64;
        }
        if other > 0 {
            return ColumnType::Object;
        }

        if datetimes == present {
            ColumnType::DateTime
        } else if bools == present && nulls == 0 {
            ColumnType::Bool
        } else if ints + floats == present {
            if floats == 0 && nulls == 0 {
                ColumnType::Int64
            } else {
                ColumnType::Float64
            }
        } else {
            ColumnType::Object
        }
    }

    /// Cast a loaded cell to this column's storage type
    pub fn cast(self, cell: Cell) -> Cell {
        match (self, cell) {
            (ColumnType::Float64, Cell::Int(i)) => Cell::Float(i as f64),
            (ColumnType::DateTime, Cell::Null) => Cell::NaT,
            (_, cell) => cell,
        }
    }

    /// Display name used in the report's type section
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::DateTime => "datetime64[ns]",
            ColumnType::Object => "object",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Table
//==============================================================================

/// In-memory copy of a worksheet: named columns, one type per column, and
/// rows of cells aligned with the columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    types: Vec<ColumnType>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, inferring each column's type and casting its cells.
    ///
    /// Short rows are padded with nulls and long rows truncated so every row
    /// has exactly one cell per column.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, Cell::Null);
        }

        let types: Vec<ColumnType> = (0..width)
            .map(|col| ColumnType::infer(rows.iter().map(|row| &row[col])))
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&types)
                    .map(|(cell, ty)| ty.cast(cell))
                    .collect()
            })
            .collect();

        Self {
            columns,
            types,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.types
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names paired with their inferred types, in column order
    pub fn typed_columns(&self) -> impl Iterator<Item = (&str, ColumnType)> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().copied())
    }
}
