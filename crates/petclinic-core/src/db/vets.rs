//! Veterinarian database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::Vet;
use crate::repository::VetRepository;

impl Database {
    /// Insert a new vet and record the assigned ID on it.
    pub fn insert_vet(&self, vet: &mut Vet) -> DbResult<()> {
        let specialties_json = serde_json::to_string(&vet.specialties)?;

        self.conn.execute(
            r#"
            INSERT INTO vets (first_name, last_name, specialties)
            VALUES (?1, ?2, ?3)
            "#,
            params![vet.first_name, vet.last_name, specialties_json],
        )?;
        vet.id = self.conn.last_insert_rowid();
        Ok(())
    }
}

impl VetRepository for Database {
    fn find_vet(&self, id: i64) -> DbResult<Option<Vet>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, specialties
                FROM vets
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(VetRow {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        specialties: row.get(3)?,
                    })
                },
            )
            .optional()?;

        result.map(|row| row.try_into()).transpose()
    }

    fn find_all_vets(&self) -> DbResult<Vec<Vet>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, specialties
            FROM vets
            ORDER BY last_name, first_name
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(VetRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                specialties: row.get(3)?,
            })
        })?;

        let mut vets = Vec::new();
        for row in rows {
            vets.push(row?.try_into()?);
        }
        Ok(vets)
    }
}

/// Intermediate row struct for database mapping.
pub(super) struct VetRow {
    pub(super) id: i64,
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) specialties: String,
}

impl TryFrom<VetRow> for Vet {
    type Error = DbError;

    fn try_from(row: VetRow) -> Result<Self, Self::Error> {
        Ok(Vet {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            specialties: serde_json::from_str(&row.specialties)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_find() {
        let db = Database::open_in_memory().unwrap();

        let mut vet = Vet::new("Linda".into(), "Douglas".into());
        vet.specialties = vec!["surgery".into(), "dentistry".into()];
        db.insert_vet(&mut vet).unwrap();

        let retrieved = db.find_vet(vet.id).unwrap().unwrap();
        assert_eq!(retrieved, vet);
    }

    #[test]
    fn test_find_missing_vet() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.find_vet(2).unwrap().is_none());
    }

    #[test]
    fn test_find_all_sorted_by_last_name() {
        let db = Database::open_in_memory().unwrap();
        for (first, last) in [("James", "Carter"), ("Helen", "Leary"), ("Linda", "Douglas")] {
            let mut vet = Vet::new(first.into(), last.into());
            db.insert_vet(&mut vet).unwrap();
        }

        let vets = db.find_all_vets().unwrap();
        let last_names: Vec<_> = vets.iter().map(|v| v.last_name.as_str()).collect();
        assert_eq!(last_names, vec!["Carter", "Douglas", "Leary"]);
    }

    #[test]
    fn test_corrupt_specialties_is_json_error() {
        let db = Database::open_in_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO vets (first_name, last_name, specialties) VALUES ('A', 'B', 'not json')",
                [],
            )
            .unwrap();

        let id = db.conn().last_insert_rowid();
        assert!(matches!(db.find_vet(id), Err(DbError::Json(_))));
    }
}
