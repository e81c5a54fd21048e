//! Bulk INSERT generation.
//!
//! Turns a batch of records of one type into a single multi-row `insert`
//! statement with every value inlined as a literal:
//!
//! ```
//! use sqlbulk::{generate_insert, Record};
//!
//! #[derive(Record)]
//! struct Person {
//!     #[insert(editable = false)]
//!     id: i64,
//!     #[insert(rename = "Name")]
//!     name: String,
//!     #[insert(rename = "Age")]
//!     age: Option<i32>,
//! }
//!
//! let people = vec![
//!     Person { id: 0, name: "Ann".into(), age: Some(30) },
//!     Person { id: 0, name: "O'Brien".into(), age: None },
//! ];
//!
//! let sql = generate_insert(&people, "\"T\"")?;
//! assert_eq!(sql, "insert into \"T\" (Name,Age)\nvalues\n('Ann',30),\n('O''Brien',null)");
//! # Ok::<(), sqlbulk::Error>(())
//! ```
//!
//! Nothing here talks to a database. The text is meant to be handed to an
//! [`Execute`] implementation.

pub mod types;

mod error;
mod execute;
mod insert;

pub use error::Error;
pub use execute::Execute;
pub use insert::{generate_insert, ColumnStyle, Insert};
pub use sqlbulk_macros::Record;
pub use types::{
    select_columns, FieldDescriptor, Record, RecordDescriptor, SemanticType, SqlValue, ToSqlValue,
};
