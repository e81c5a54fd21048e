use std::borrow::Cow;

use chrono::NaiveDateTime;
use derive_more::IsVariant;
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single field value, read off a record instance and ready to be
/// rendered as a literal.
///
/// Text and fallback values borrow from the record when they can.
#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum SqlValue<'a> {
    Null,
    Text(Cow<'a, str>),
    Uuid(Uuid),
    DateTime(NaiveDateTime),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt64(u64),
    Int128(i128),
    UInt128(u128),
    Decimal(Decimal),
    Single(f32),
    Double(f64),
    /// Anything outside the closed set, already in its textual form.
    Other(Cow<'a, str>),
}

impl<'a> SqlValue<'a> {
    pub fn text(value: impl Into<Cow<'a, str>>) -> Self {
        SqlValue::Text(value.into())
    }

    pub fn other(value: impl Into<Cow<'a, str>>) -> Self {
        SqlValue::Other(value.into())
    }
}
