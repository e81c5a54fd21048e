use derive_more::Display;

/// The closed set of value kinds a column can be rendered as.
///
/// Every Rust type that can appear in a record maps onto exactly one of
/// these through [`ToSqlValue::SEMANTIC_TYPE`](crate::ToSqlValue::SEMANTIC_TYPE).
/// `Other` is the fallback: its values are rendered as escaped text.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    #[display(fmt = "text")]
    Text,
    #[display(fmt = "uuid")]
    Uuid,
    #[display(fmt = "datetime")]
    DateTime,
    #[display(fmt = "int16")]
    Int16,
    #[display(fmt = "int32")]
    Int32,
    #[display(fmt = "int64")]
    Int64,
    #[display(fmt = "int128")]
    Int128,
    #[display(fmt = "decimal")]
    Decimal,
    #[display(fmt = "float")]
    Float,
    #[display(fmt = "other")]
    Other,
}
