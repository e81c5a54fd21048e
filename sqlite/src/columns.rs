use std::num::NonZeroUsize;

use rusqlite::types::Type;
use rusqlite::Connection;

pub struct TableColumn {
    pub name: String,
    pub type_: String,
    pub not_null: bool,
    pub has_default: bool,
    pub primary_key_part: Option<NonZeroUsize>,
}

pub(crate) fn table_info(conn: &Connection, table: &str) -> Result<Vec<TableColumn>, rusqlite::Error> {
    conn.prepare(&format!("PRAGMA table_info({})", table))?
        .query_map([], |row| {
            Ok(TableColumn {
                name: row.get(1)?,
                type_: row.get(2)?,
                not_null: row.get(3)?,
                has_default: row.get_ref(4)?.data_type() != Type::Null,
                primary_key_part: NonZeroUsize::new(row.get(5)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()
}
