use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Single-line JSON with `", "` between items and `": "` after keys, the
/// layout the report uses for its column list and row lines
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    fn spaced<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        value.serialize(&mut ser).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_spaced_array() {
        assert_eq!(spaced(&["id", "amount", "date"]), r#"["id", "amount", "date"]"#);
        assert_eq!(spaced(&Vec::<String>::new()), "[]");
    }

    #[test]
    fn test_spaced_object() {
        let value = json!({"id": 1, "amount": 10.5});
        assert_eq!(spaced(&value), r#"{"id": 1, "amount": 10.5}"#);
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        assert_eq!(spaced(&["Keterangan ñ 日本"]), r#"["Keterangan ñ 日本"]"#);
    }
}
