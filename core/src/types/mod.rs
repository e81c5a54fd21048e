mod column;
pub use column::{select_columns, FieldDescriptor, Record, RecordDescriptor};

pub mod sql;
pub use sql::SemanticType;

mod value;
pub use value::SqlValue;

mod convert;
pub use convert::ToSqlValue;

pub mod literal;
pub use literal::{quote_literal, render_literal, write_literal};
