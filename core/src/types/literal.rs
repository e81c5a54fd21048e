use std::fmt::{Display, Write};

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::types::{SemanticType, SqlValue};

pub const NULL: &str = "null";
pub const EMPTY_TEXT: &str = "''";

/// Appends the literal for one field to `out`.
///
/// `value` is `None` when the field could not be resolved on the record;
/// that always renders as `null`. A present-but-null value renders as `''`
/// for text and `null` for every other kind.
pub fn write_literal(out: &mut String, semantic_type: SemanticType, value: Option<&SqlValue<'_>>) {
    let value = match value {
        None => return out.push_str(NULL),
        Some(value) => value,
    };

    match value {
        SqlValue::Null if semantic_type == SemanticType::Text => out.push_str(EMPTY_TEXT),
        SqlValue::Null => out.push_str(NULL),
        SqlValue::Text(text) | SqlValue::Other(text) => write_quoted(out, text),
        SqlValue::Uuid(uuid) => write_display(out, format_args!("'{}'", uuid.hyphenated())),
        SqlValue::DateTime(at) => write_datetime(out, at),
        SqlValue::Int16(n) => write_display(out, n),
        SqlValue::Int32(n) => write_display(out, n),
        SqlValue::Int64(n) => write_display(out, n),
        SqlValue::UInt64(n) => write_display(out, n),
        SqlValue::Int128(n) => write_display(out, n),
        SqlValue::UInt128(n) => write_display(out, n),
        SqlValue::Decimal(d) => write_display(out, d),
        SqlValue::Single(f) => write_float(out, f64::from(*f), *f),
        SqlValue::Double(f) => write_float(out, *f, *f),
    }
}

/// Renders one field as a standalone literal.
pub fn render_literal(semantic_type: SemanticType, value: Option<&SqlValue<'_>>) -> String {
    let mut out = String::new();
    write_literal(&mut out, semantic_type, value);
    out
}

/// Wraps `text` in single quotes, doubling any embedded single quote.
///
/// Only quotes are escaped. Backslashes and control characters pass through.
pub fn quote_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    write_quoted(&mut out, text);
    out
}

fn write_quoted(out: &mut String, text: &str) {
    out.reserve(text.len() + 2);
    out.push('\'');
    for (i, part) in text.split('\'').enumerate() {
        if i > 0 {
            out.push_str("''");
        }
        out.push_str(part);
    }
    out.push('\'');
}

// Writing into a `String` cannot fail.
fn write_display(out: &mut String, value: impl Display) {
    let _ = write!(out, "{}", value);
}

// `yyyy-MM-dd HH:mm:ss`. Years 0 through 9999 always take exactly four
// digits. Later years print all their digits and earlier ones a leading `-`;
// neither gets the `+` chrono's `%Y` adds outside that range.
fn write_datetime(out: &mut String, at: &NaiveDateTime) {
    write_display(
        out,
        format_args!(
            "'{:04}-{:02}-{:02} {:02}:{:02}:{:02}'",
            at.year(),
            at.month(),
            at.day(),
            at.hour(),
            at.minute(),
            at.second(),
        ),
    );
}

// `probe` is only checked for finiteness; `value` is what gets printed so
// f32 keeps its own shortest representation.
fn write_float<F: Display>(out: &mut String, probe: f64, value: F) {
    if probe.is_nan() {
        out.push_str("'NaN'");
    } else if probe.is_infinite() && probe > 0.0 {
        out.push_str("'Infinity'");
    } else if probe.is_infinite() {
        out.push_str("'-Infinity'");
    } else {
        write_display(out, value);
    }
}
