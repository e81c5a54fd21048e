use super::{SemanticType, SqlValue};

/// Metadata for one field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub column: &'static str,
    pub semantic_type: SemanticType,
    pub nullable: bool,
    /// `false` for columns the store fills in itself, such as identity keys.
    pub editable: bool,
}

impl FieldDescriptor {
    pub const fn new(
        column: &'static str,
        semantic_type: SemanticType,
        nullable: bool,
        editable: bool,
    ) -> Self {
        FieldDescriptor { column, semantic_type, nullable, editable }
    }
}

/// The field table of a record type, in declaration order.
///
/// Built once per type, normally as a `static` emitted by
/// `#[derive(Record)]`.
#[derive(Debug)]
pub struct RecordDescriptor {
    name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl RecordDescriptor {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        RecordDescriptor { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Editable fields, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|field| field.editable)
    }

    pub fn field(&self, column: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.column == column)
    }
}

/// A type whose instances can be rendered as rows of an INSERT.
pub trait Record {
    fn descriptor() -> &'static RecordDescriptor;

    /// Reads the value stored under `column`.
    ///
    /// Returns `None` when this instance has no such field; the column is
    /// then rendered as `null`.
    fn field_value(&self, column: &str) -> Option<SqlValue<'_>>;
}

/// Names of the insertable columns of `R`, in declaration order.
pub fn select_columns<R: Record>() -> Vec<&'static str> {
    R::descriptor().columns().map(|field| field.column).collect()
}
