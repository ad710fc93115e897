//! Output writers: the text report and the JSON export

mod formatter;

pub use formatter::SpacedFormatter;

use crate::error::{ExportError, ExportResult};
use crate::record::records;
use crate::types::Table;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write the three-section text report, replacing any existing file
pub fn write_report<P: AsRef<Path>>(table: &Table, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    write_file(path, |writer| write_report_to(table, writer))?;
    debug!(path = %path.display(), rows = table.row_count(), "wrote report");
    Ok(())
}

/// Write the pretty-printed JSON array of records, replacing any existing file
pub fn write_json_export<P: AsRef<Path>>(table: &Table, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    write_file(path, |writer| write_json_export_to(table, writer))?;
    debug!(path = %path.display(), rows = table.row_count(), "wrote JSON export");
    Ok(())
}

/// Report text exactly as [`write_report`] puts it on disk
pub fn render_report(table: &Table) -> io::Result<String> {
    render(|buf| write_report_to(table, buf))
}

/// JSON text exactly as [`write_json_export`] puts it on disk
pub fn render_json_export(table: &Table) -> io::Result<String> {
    render(|buf| write_json_export_to(table, buf))
}

pub fn write_report_to<W: Write>(table: &Table, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Column names:")?;
    write_spaced(writer, table.columns())?;
    writeln!(writer)?;
    writeln!(writer)?;

    writeln!(writer, "Sample data (all rows):")?;
    for record in records(table) {
        write_spaced(writer, &record)?;
        writeln!(writer)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Data types:")?;
    for (name, column_type) in table.typed_columns() {
        writeln!(writer, "{}: {}", name, column_type)?;
    }

    Ok(())
}

pub fn write_json_export_to<W: Write>(table: &Table, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &records(table))?;
    Ok(())
}

fn write_spaced<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> io::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(writer, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Create `path`, run `body` against a buffered writer, then flush. The file
/// handle is dropped on every return path.
fn write_file<F>(path: &Path, body: F) -> ExportResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let to_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(())
}

fn render<F>(body: F) -> io::Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    body(&mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
