use std::io;

use serde::Serialize;
use serde_json::{
    Value,
    ser::{Formatter, PrettyFormatter, Serializer},
};

use crate::EncodeError;

/// How a record is rendered by [`Entity::as_text`](crate::Entity::as_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Remove absent fields and `null` entries before encoding.
    pub drop_empty: bool,
    /// Order object keys alphabetically instead of by declaration.
    pub sort_keys: bool,
    /// Pretty-print with this many spaces per level; compact when `None`.
    pub indent: Option<usize>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            drop_empty: true,
            sort_keys: true,
            indent: None,
        }
    }
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drop_empty(mut self, drop_empty: bool) -> Self {
        self.drop_empty = drop_empty;
        self
    }

    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}

/// Compact output with a space after `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encode a plain value as UTF-8 JSON text.
pub fn encode(value: &Value, indent: Option<usize>) -> Result<String, EncodeError> {
    let mut buf = Vec::with_capacity(128);
    match indent {
        None => {
            let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
            value.serialize(&mut ser)?;
        }
        Some(width) => {
            let pad = vec![b' '; width];
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&pad));
            value.serialize(&mut ser)?;
        }
    }
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_uses_spaced_separators() {
        let text = encode(&json!({"cmd": ["echo", "hi"], "n": 1}), None).unwrap();
        assert_eq!(text, r#"{"cmd": ["echo", "hi"], "n": 1}"#);
    }

    #[test]
    fn compact_empty_containers() {
        assert_eq!(encode(&json!({"tasks": []}), None).unwrap(), r#"{"tasks": []}"#);
        assert_eq!(encode(&json!({}), None).unwrap(), "{}");
    }

    #[test]
    fn indent_pretty_prints() {
        let text = encode(&json!({"a": [1, 2], "b": {}}), Some(2)).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}");
    }

    #[test]
    fn zero_indent_keeps_newlines() {
        let text = encode(&json!({"a": 1, "b": 2}), Some(0)).unwrap();
        assert_eq!(text, "{\n\"a\": 1,\n\"b\": 2\n}");
    }

    #[test]
    fn non_ascii_is_written_as_utf8() {
        let text = encode(&json!({"name": "tâche"}), None).unwrap();
        assert_eq!(text, r#"{"name": "tâche"}"#);
    }

    #[test]
    fn options_builder() {
        let opts = TextOptions::new()
            .with_drop_empty(false)
            .with_sort_keys(false)
            .with_indent(4);
        assert!(!opts.drop_empty);
        assert!(!opts.sort_keys);
        assert_eq!(opts.indent, Some(4));
        assert_eq!(TextOptions::default().indent, None);
    }
}
