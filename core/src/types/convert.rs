use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::types::{SemanticType, SqlValue};

/// Conversion from a Rust field type into an insertable value.
///
/// `SEMANTIC_TYPE` and `NULLABLE` are consts so the derive can place them
/// in a `static` descriptor table.
pub trait ToSqlValue {
    const SEMANTIC_TYPE: SemanticType;
    const NULLABLE: bool = false;

    fn to_sql_value(&self) -> SqlValue<'_>;
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    const SEMANTIC_TYPE: SemanticType = T::SEMANTIC_TYPE;
    const NULLABLE: bool = T::NULLABLE;

    fn to_sql_value(&self) -> SqlValue<'_> {
        T::to_sql_value(*self)
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    const SEMANTIC_TYPE: SemanticType = T::SEMANTIC_TYPE;
    const NULLABLE: bool = true;

    fn to_sql_value(&self) -> SqlValue<'_> {
        match self {
            None => SqlValue::Null,
            Some(inner) => inner.to_sql_value(),
        }
    }
}

impl ToSqlValue for str {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Text(Cow::Borrowed(self))
    }
}

impl ToSqlValue for String {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Text(Cow::Borrowed(self.as_str()))
    }
}

impl<'c> ToSqlValue for Cow<'c, str> {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Text(Cow::Borrowed(self.as_ref()))
    }
}

macro_rules! impl_integer {
    { $( $rust:ty => $kind:ident / $variant:ident, )* } => {
        $(
            impl ToSqlValue for $rust {
                const SEMANTIC_TYPE: SemanticType = SemanticType::$kind;

                fn to_sql_value(&self) -> SqlValue<'_> {
                    SqlValue::$variant((*self).into())
                }
            }
        )*
    };
}

impl_integer! {
    i8 => Int16 / Int16,
    u8 => Int16 / Int16,
    i16 => Int16 / Int16,
    u16 => Int32 / Int32,
    i32 => Int32 / Int32,
    u32 => Int64 / Int64,
    i64 => Int64 / Int64,
    u64 => Int64 / UInt64,
    i128 => Int128 / Int128,
    u128 => Int128 / UInt128,
}

// pointer-sized integers are at most 64 bits on every supported target
impl ToSqlValue for isize {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Int64;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Int64(*self as i64)
    }
}

impl ToSqlValue for usize {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Int64;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::UInt64(*self as u64)
    }
}

impl ToSqlValue for f32 {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Float;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Single(*self)
    }
}

impl ToSqlValue for f64 {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Float;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Double(*self)
    }
}

impl ToSqlValue for Decimal {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Decimal;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Decimal(*self)
    }
}

impl ToSqlValue for Uuid {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Uuid;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Uuid(*self)
    }
}

impl ToSqlValue for NaiveDateTime {
    const SEMANTIC_TYPE: SemanticType = SemanticType::DateTime;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::DateTime(*self)
    }
}

// Rendered as wall-clock time in the value's own offset; the offset itself
// is dropped.
impl<Tz: TimeZone> ToSqlValue for DateTime<Tz> {
    const SEMANTIC_TYPE: SemanticType = SemanticType::DateTime;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::DateTime(self.naive_local())
    }
}

impl ToSqlValue for bool {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Other;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Other(Cow::Borrowed(if *self { "true" } else { "false" }))
    }
}

impl ToSqlValue for char {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Other;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Other(Cow::Owned(self.to_string()))
    }
}

impl ToSqlValue for NaiveDate {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Other;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Other(Cow::Owned(self.format("%Y-%m-%d").to_string()))
    }
}

impl ToSqlValue for NaiveTime {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Other;

    fn to_sql_value(&self) -> SqlValue<'_> {
        SqlValue::Other(Cow::Owned(self.format("%H:%M:%S").to_string()))
    }
}
