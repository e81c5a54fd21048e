//! A SQLite executor for `sqlbulk` statements.
//!
//! [`Database`] owns a `rusqlite` connection, runs the text produced by
//! [`sqlbulk::Insert`] and maps result rows back through closures.

mod columns;

use std::path::Path;

use rusqlite::{Connection, Row};
use sqlbulk::{Execute, Insert, Record};
use thiserror::Error;

pub use columns::TableColumn;

pub type SqlError = rusqlite::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("opening database: {0}")]
    Open(rusqlite::Error),
    #[error("executing schema sql: {0}")]
    Sql(rusqlite::Error),
    #[error("loading schema file: {0}")]
    Io(std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("generating insert: {0}")]
    Generate(#[from] sqlbulk::Error),
    #[error("executing sql: {0}")]
    Sql(#[from] rusqlite::Error),
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let conn = Connection::open(path)
            .map_err(LoadError::Open)?;

        Ok(Database { conn })
    }

    pub fn open_in_memory() -> Result<Self, LoadError> {
        let conn = Connection::open_in_memory()
            .map_err(LoadError::Open)?;

        Ok(Database { conn })
    }

    /// An in-memory database with `sql` (usually DDL) already applied.
    pub fn from_sql(sql: &str) -> Result<Self, LoadError> {
        let db = Self::open_in_memory()?;

        db.conn.execute_batch(sql)
            .map_err(LoadError::Sql)?;

        Ok(db)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let sql = std::fs::read_to_string(path)
            .map_err(LoadError::Io)?;

        Self::from_sql(&sql)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Runs a single statement and returns the number of affected rows.
    pub fn execute_raw(&self, sql: &str) -> Result<usize, SqlError> {
        log::debug!("executing {} bytes of sql", sql.len());
        self.conn.execute(sql, [])
    }

    /// Inserts every record with one multi-row statement.
    pub fn bulk_insert<R: Record>(&self, table: &str, records: &[R]) -> Result<usize, ExecuteError> {
        let insert = Insert::new(table, records)?;
        if insert.is_empty() {
            return Ok(0);
        }

        Ok(self.execute_raw(&insert.to_sql())?)
    }

    /// Inserts `records` with one statement per `rows_per_statement` rows,
    /// all inside a single transaction.
    pub fn bulk_insert_chunked<R: Record>(
        &mut self,
        table: &str,
        records: &[R],
        rows_per_statement: usize,
    ) -> Result<usize, ExecuteError> {
        if rows_per_statement == 0 {
            return Err(sqlbulk::Error::InvalidArgument { parameter: "rows_per_statement" }.into());
        }

        // validate the table name even when there is nothing to insert
        Insert::new(table, records)?;
        if records.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        let mut statements = 0;
        for chunk in records.chunks(rows_per_statement) {
            let sql = Insert::new(table, chunk)?.to_sql();
            inserted += tx.execute(&sql, [])?;
            statements += 1;
        }
        tx.commit()?;

        log::info!("inserted {} rows into {} in {} statements", inserted, table, statements);

        Ok(inserted)
    }

    /// Inserts records one statement at a time, inside a transaction.
    pub fn insert_each<R: Record>(&mut self, table: &str, records: &[R]) -> Result<usize, ExecuteError> {
        self.bulk_insert_chunked(table, records, 1)
    }

    /// Runs a query and maps every row through `map`.
    pub fn query_all<T, F>(&self, sql: &str, mut map: F) -> Result<Vec<T>, SqlError>
        where F: FnMut(&Row<'_>) -> Result<T, SqlError>
    {
        self.conn.prepare(sql)?
            .query_map([], |row| map(row))?
            .collect::<Result<Vec<_>, _>>()
    }

    /// Column metadata for `table`, in table order.
    pub fn columns(&self, table: &str) -> Result<Vec<TableColumn>, SqlError> {
        columns::table_info(&self.conn, table)
    }
}

impl Execute for Database {
    type Error = SqlError;

    fn execute_raw(&mut self, sql: &str) -> Result<usize, SqlError> {
        Database::execute_raw(self, sql)
    }
}
