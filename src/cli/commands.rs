use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::excel::load;
use crate::writer::{write_json_export, write_report};
use colored::Colorize;
use tracing::info;

/// Execute the export: load the first worksheet, write the text report, then
/// write the JSON export. Stops at the first failure.
pub fn export(config: &ExportConfig, verbose: bool) -> ExportResult<()> {
    if verbose {
        println!("{}", "📊 Sheet Export".bold().green());
        println!("   Input:  {}", config.input.display());
        println!("   Report: {}", config.report.display());
        println!("   JSON:   {}\n", config.json.display());
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }

    let table = load(&config.input)?;

    info!(
        input = %config.input.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded worksheet"
    );

    if verbose {
        println!(
            "   {} columns, {} rows",
            table.column_count(),
            table.row_count()
        );
        for (name, column_type) in table.typed_columns() {
            println!("      {} ({})", name.bright_blue(), column_type);
        }
        println!();
    }

    write_report(&table, &config.report)?;
    println!("Analysis written to {}", config.report.display());

    write_json_export(&table, &config.json)?;
    println!("Excel data saved to {}", config.json.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use tempfile::TempDir;

    #[test]
    fn test_export_missing_input_creates_no_outputs() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            input: dir.path().join("missing.xlsx"),
            report: dir.path().join("report.txt"),
            json: dir.path().join("data.json"),
        };

        let result = export(&config, false);

        assert!(matches!(result, Err(ExportError::FileNotFound(_))));
        assert!(!config.report.exists());
        assert!(!config.json.exists());
    }

    #[test]
    fn test_export_unreadable_input_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.xlsx");
        std::fs::write(&input, "this is not a zip archive").unwrap();
        let config = ExportConfig {
            input,
            report: dir.path().join("report.txt"),
            json: dir.path().join("data.json"),
        };

        let result = export(&config, false);

        assert!(matches!(result, Err(ExportError::Parse { .. })));
        assert!(!config.report.exists());
    }
}
