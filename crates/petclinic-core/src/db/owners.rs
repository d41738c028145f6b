//! Owner database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::Owner;

impl Database {
    /// Insert a new owner and record the assigned ID on it.
    pub fn insert_owner(&self, owner: &mut Owner) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO owners (first_name, last_name, address, city, telephone)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                owner.first_name,
                owner.last_name,
                owner.address,
                owner.city,
                owner.telephone,
            ],
        )?;
        owner.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// Get an owner by ID.
    pub fn get_owner(&self, id: i64) -> DbResult<Option<Owner>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, address, city, telephone
                FROM owners
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(Owner {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        address: row.get(3)?,
                        city: row.get(4)?,
                        telephone: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }
}
