//! Row normalization: turns a table row into a record of JSON scalars

use crate::types::{Cell, Table};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A JSON-primitive value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    /// Non-finite floats serialize as `null`
    Float(f64),
    Text(String),
}

/// One row keyed by column name, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Coerce one row into a record. Primitive cells pass through; date-times,
/// times, durations and NaT become their text form.
pub fn normalize(columns: &[String], row: &[Cell]) -> Record {
    let fields = columns
        .iter()
        .zip(row)
        .map(|(name, cell)| (name.clone(), to_scalar(cell)))
        .collect();
    Record { fields }
}

/// Records for every row of the table, in row order
pub fn records(table: &Table) -> Vec<Record> {
    table
        .rows()
        .iter()
        .map(|row| normalize(table.columns(), row))
        .collect()
}

fn to_scalar(cell: &Cell) -> Scalar {
    match cell {
        Cell::Null => Scalar::Null,
        Cell::Bool(b) => Scalar::Bool(*b),
        Cell::Int(i) => Scalar::Int(*i),
        Cell::Float(f) => Scalar::Float(*f),
        Cell::Text(s) => Scalar::Text(s.clone()),
        Cell::DateTime(dt) => Scalar::Text(format_datetime(dt)),
        Cell::Time(t) => Scalar::Text(format_time(t)),
        Cell::Duration(d) => Scalar::Text(format_duration(d)),
        Cell::NaT => Scalar::Text("NaT".to_string()),
    }
}

/// `YYYY-MM-DD HH:MM:SS`, plus `.ffffff` when there are microseconds
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    format!(
        "{} {}",
        dt.format("%Y-%m-%d"),
        format_time(&dt.time())
    )
}

/// `HH:MM:SS`, plus `.ffffff` when there are microseconds
pub fn format_time(t: &NaiveTime) -> String {
    let micros = t.nanosecond() / 1_000;
    if micros == 0 {
        t.format("%H:%M:%S").to_string()
    } else {
        format!("{}.{:06}", t.format("%H:%M:%S"), micros % 1_000_000)
    }
}

/// `H:MM:SS` with an optional `N day(s), ` prefix. Days take the sign and the
/// clock part is always positive, so minus thirty minutes is
/// `-1 day, 23:30:00`.
pub fn format_duration(d: &Duration) -> String {
    let mut secs = d.num_seconds();
    let mut micros = (*d - Duration::seconds(secs))
        .num_microseconds()
        .unwrap_or(0);
    if micros < 0 {
        secs -= 1;
        micros += 1_000_000;
    }

    let days = secs.div_euclid(86_400);
    let secs = secs.rem_euclid(86_400);

    let mut clock = format!("{}:{:02}:{:02}", secs / 3_600, (secs / 60) % 60, secs % 60);
    if micros != 0 {
        clock.push_str(&format!(".{:06}", micros));
    }

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        n => format!("{} days, {}", n, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_keeps_column_order() {
        let cols = columns(&["id", "amount", "note"]);
        let row = vec![
            Cell::Int(1),
            Cell::Float(10.5),
            Cell::Text("café".to_string()),
        ];

        let record = normalize(&cols, &row);

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "amount", "note"]);
        assert_eq!(record.get("id"), Some(&Scalar::Int(1)));
        assert_eq!(record.get("amount"), Some(&Scalar::Float(10.5)));
        assert_eq!(record.get("note"), Some(&Scalar::Text("café".to_string())));
    }

    #[test]
    fn test_normalize_coerces_dates_to_text() {
        let dt = NaiveDate::from_ymd_opt(2025, 6, 16)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let record = normalize(&columns(&["date", "missing"]), &[Cell::DateTime(dt), Cell::NaT]);

        assert_eq!(
            record.get("date"),
            Some(&Scalar::Text("2025-06-16 00:00:00".to_string()))
        );
        assert_eq!(record.get("missing"), Some(&Scalar::Text("NaT".to_string())));
    }

    #[test]
    fn test_format_datetime_with_micros() {
        let dt = NaiveDate::from_ymd_opt(2025, 6, 16)
            .unwrap()
            .and_hms_micro_opt(12, 30, 5, 250_000)
            .unwrap();
        assert_eq!(format_datetime(&dt), "2025-06-16 12:30:05.250000");
    }

    #[test]
    fn test_format_time() {
        let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_time(&t), "09:05:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::minutes(90)), "1:30:00");
        assert_eq!(format_duration(&Duration::hours(25)), "1 day, 1:00:00");
        assert_eq!(
            format_duration(&(Duration::days(3) + Duration::seconds(5))),
            "3 days, 0:00:05"
        );
        assert_eq!(format_duration(&Duration::minutes(-30)), "-1 day, 23:30:00");
        assert_eq!(
            format_duration(&(Duration::days(-2) - Duration::seconds(1))),
            "-3 days, 23:59:59"
        );
        assert_eq!(
            format_duration(&Duration::milliseconds(-500)),
            "-1 day, 23:59:59.500000"
        );
    }

    #[test]
    fn test_scalar_serialization() {
        let record = normalize(
            &columns(&["a", "b", "c", "d"]),
            &[Cell::Null, Cell::Bool(true), Cell::Float(f64::NAN), Cell::Float(1.0)],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"a":null,"b":true,"c":null,"d":1.0}"#);
    }
}
