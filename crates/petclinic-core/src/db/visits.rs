//! Visit database operations.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::vets::VetRow;
use super::{Database, DbError, DbResult};
use crate::models::{Vet, Visit};
use crate::repository::VisitRepository;

const SELECT_VISIT: &str = r#"
    SELECT v.id, v.pet_id, v.visit_date, v.description, v.canceled,
           v.vet_id, t.first_name, t.last_name, t.specialties
    FROM visits v
    LEFT JOIN vets t ON t.id = v.vet_id
"#;

impl VisitRepository for Database {
    fn find_visit(&self, id: i64) -> DbResult<Option<Visit>> {
        let sql = format!("{SELECT_VISIT} WHERE v.id = ?");
        let result = self
            .conn
            .query_row(&sql, [id], visit_row)
            .optional()?;

        result.map(|row| row.try_into()).transpose()
    }

    fn find_visits_by_pet(&self, pet_id: i64) -> DbResult<Vec<Visit>> {
        let sql = format!("{SELECT_VISIT} WHERE v.pet_id = ? ORDER BY v.visit_date, v.id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([pet_id], visit_row)?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(row?.try_into()?);
        }
        Ok(visits)
    }

    fn save_visit(&self, visit: &mut Visit) -> DbResult<()> {
        match visit.id() {
            None => {
                self.conn.execute(
                    r#"
                    INSERT INTO visits (pet_id, vet_id, visit_date, description, canceled)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                    params![
                        visit.pet_id,
                        visit.vet_id(),
                        visit.date,
                        visit.description,
                        visit.canceled,
                    ],
                )?;
                visit.assign_id(self.conn.last_insert_rowid());
            }
            Some(id) => {
                let rows_affected = self.conn.execute(
                    r#"
                    UPDATE visits SET
                        pet_id = ?2,
                        vet_id = ?3,
                        visit_date = ?4,
                        description = ?5,
                        canceled = ?6
                    WHERE id = ?1
                    "#,
                    params![
                        id,
                        visit.pet_id,
                        visit.vet_id(),
                        visit.date,
                        visit.description,
                        visit.canceled,
                    ],
                )?;
                if rows_affected == 0 {
                    return Err(DbError::NotFound(format!("visit {id}")));
                }
            }
        }
        Ok(())
    }

    fn delete_visit(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM visits WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

fn visit_row(row: &Row<'_>) -> rusqlite::Result<VisitRow> {
    Ok(VisitRow {
        id: row.get(0)?,
        pet_id: row.get(1)?,
        date: row.get(2)?,
        description: row.get(3)?,
        canceled: row.get(4)?,
        vet_id: row.get(5)?,
        vet_first_name: row.get(6)?,
        vet_last_name: row.get(7)?,
        vet_specialties: row.get(8)?,
    })
}

/// Intermediate row struct for database mapping.
struct VisitRow {
    id: i64,
    pet_id: i64,
    date: NaiveDate,
    description: String,
    canceled: bool,
    vet_id: Option<i64>,
    vet_first_name: Option<String>,
    vet_last_name: Option<String>,
    vet_specialties: Option<String>,
}

impl TryFrom<VisitRow> for Visit {
    type Error = DbError;

    fn try_from(row: VisitRow) -> Result<Self, Self::Error> {
        let vet = match (row.vet_id, row.vet_first_name, row.vet_last_name) {
            (Some(id), Some(first_name), Some(last_name)) => Some(Vet::try_from(VetRow {
                id,
                first_name,
                last_name,
                specialties: row.vet_specialties.unwrap_or_else(|| "[]".into()),
            })?),
            _ => None,
        };

        let mut visit = Visit::on(row.date);
        visit.description = row.description;
        visit.pet_id = row.pet_id;
        visit.vet = vet;
        visit.canceled = row.canceled;
        visit.assign_id(row.id);
        Ok(visit)
    }
}
