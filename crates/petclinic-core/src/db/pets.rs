//! Pet database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Pet;
use crate::repository::PetRepository;

impl Database {
    /// Insert a new pet and record the assigned ID on it.
    ///
    /// The in-memory visit history is not stored.
    pub fn insert_pet(&self, pet: &mut Pet) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO pets (name, birth_date, type_name, owner_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![pet.name, pet.birth_date, pet.type_name, pet.owner_id],
        )?;
        pet.id = self.conn.last_insert_rowid();
        Ok(())
    }

    /// Insert an owner together with one pet. Returns the pet.
    #[cfg(test)]
    pub(crate) fn insert_owner_with_pet(
        &self,
        owner: &mut crate::models::Owner,
        pet_name: &str,
        type_name: &str,
    ) -> DbResult<Pet> {
        self.insert_owner(owner)?;
        let mut pet = Pet::new(pet_name.into(), type_name.into(), owner.id);
        self.insert_pet(&mut pet)?;
        Ok(pet)
    }
}

impl PetRepository for Database {
    fn find_pet(&self, id: i64) -> DbResult<Option<Pet>> {
        self.conn
            .query_row(
                r#"
                SELECT id, name, birth_date, type_name, owner_id
                FROM pets
                WHERE id = ?
                "#,
                [id],
                pet_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    fn find_pets_by_owner(&self, owner_id: i64) -> DbResult<Vec<Pet>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, name, birth_date, type_name, owner_id
            FROM pets
            WHERE owner_id = ?
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([owner_id], pet_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn pet_from_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_date: row.get(2)?,
        type_name: row.get(3)?,
        owner_id: row.get(4)?,
        visits: Vec::new(),
    })
}
