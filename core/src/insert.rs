use std::fmt::Write;

use crate::execute::Execute;
use crate::types::{write_literal, FieldDescriptor, Record};
use crate::Error;

/// How column names are written in the column clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnStyle {
    /// `Name,Age`
    #[default]
    Bare,
    /// `"Name","Age"`, with embedded double quotes doubled.
    Quoted,
}

impl ColumnStyle {
    fn write(self, out: &mut String, column: &str) {
        match self {
            ColumnStyle::Bare => out.push_str(column),
            ColumnStyle::Quoted => {
                out.push('"');
                out.push_str(&column.replace('"', "\"\""));
                out.push('"');
            }
        }
    }
}

/// A multi-row INSERT over a batch of records of one type.
///
/// The table name is used verbatim. It must already carry any schema
/// qualification and identifier quoting the target store needs.
pub struct Insert<'a, R> {
    table: &'a str,
    records: &'a [R],
    column_style: ColumnStyle,
}

impl<'a, R> Clone for Insert<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R> Copy for Insert<'a, R> {}

impl<'a, R: Record> Insert<'a, R> {
    /// Fails with [`Error::InvalidArgument`] if `table` is empty or only
    /// whitespace. This is checked before the batch, so an empty batch with
    /// a blank table name is still an error.
    pub fn new(table: &'a str, records: &'a [R]) -> Result<Self, Error> {
        if table.trim().is_empty() {
            return Err(Error::InvalidArgument { parameter: "table_name" });
        }

        Ok(Insert { table, records, column_style: ColumnStyle::default() })
    }

    pub fn column_style(self, column_style: ColumnStyle) -> Self {
        Insert { column_style, ..self }
    }

    pub fn table(&self) -> &'a str {
        self.table
    }

    pub fn records(&self) -> &'a [R] {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> Vec<&'static FieldDescriptor> {
        R::descriptor().columns().collect()
    }

    /// Renders the statement. An empty batch renders as an empty string.
    pub fn to_sql(&self) -> String {
        if self.records.is_empty() {
            return String::new();
        }

        let descriptor = R::descriptor();
        let columns = self.columns();

        let mut sql = String::with_capacity(64 + self.records.len() * (columns.len() * 8 + 4));

        let _ = write!(sql, "insert into {} (", self.table);
        for (i, field) in columns.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            self.column_style.write(&mut sql, field.column);
        }
        sql.push_str(")\nvalues\n");

        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                sql.push_str(",\n");
            }
            sql.push('(');
            for (j, field) in columns.iter().enumerate() {
                if j > 0 {
                    sql.push(',');
                }
                let value = record.field_value(field.column);
                if value.is_none() {
                    log::trace!(
                        "{}: row {} has no field `{}` ({}), writing null",
                        descriptor.name(),
                        i,
                        field.column,
                        field.semantic_type,
                    );
                }
                write_literal(&mut sql, field.semantic_type, value.as_ref());
            }
            sql.push(')');
        }

        log::debug!(
            "generated insert into {}: {} rows x {} columns, {} bytes",
            self.table,
            self.records.len(),
            columns.len(),
            sql.len(),
        );

        sql
    }

    /// Hands the statement to `executor`. Empty batches are not sent and
    /// report zero affected rows.
    pub fn execute<E: Execute + ?Sized>(&self, executor: &mut E) -> Result<usize, E::Error> {
        if self.is_empty() {
            return Ok(0);
        }

        executor.execute_raw(&self.to_sql())
    }
}

/// Renders `records` as a single INSERT into `table_name`.
///
/// Returns an empty string for an empty batch; see [`Insert::new`] for the
/// table name check.
pub fn generate_insert<R: Record>(records: &[R], table_name: &str) -> Result<String, Error> {
    Ok(Insert::new(table_name, records)?.to_sql())
}
