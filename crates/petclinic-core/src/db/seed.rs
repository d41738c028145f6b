//! Sample data for demos and manual testing.

use chrono::NaiveDate;

use super::{Database, DbResult};
use crate::models::{Owner, Pet, Vet, Visit};
use crate::repository::VisitRepository;

const VETS: &[(&str, &str, &[&str])] = &[
    ("James", "Carter", &[]),
    ("Helen", "Leary", &["radiology"]),
    ("Linda", "Douglas", &["surgery", "dentistry"]),
    ("Rafael", "Ortega", &["surgery"]),
    ("Henry", "Stevens", &["radiology"]),
    ("Sharon", "Jenkins", &[]),
];

const OWNERS: &[(&str, &str, &str, &str, &str)] = &[
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

/// (name, birth date, type, owner index into OWNERS)
const PETS: &[(&str, (i32, u32, u32), &str, usize)] = &[
    ("Leo", (2010, 9, 7), "cat", 0),
    ("Basil", (2012, 8, 6), "hamster", 1),
    ("Rosy", (2011, 4, 17), "dog", 2),
    ("Jewel", (2010, 3, 7), "dog", 2),
    ("Iggy", (2010, 11, 30), "lizard", 3),
    ("George", (2010, 1, 20), "snake", 4),
    ("Samantha", (2012, 9, 4), "cat", 5),
    ("Max", (2012, 9, 4), "cat", 5),
    ("Lucky", (2011, 8, 6), "bird", 6),
    ("Mulligan", (2007, 2, 24), "dog", 7),
    ("Freddy", (2010, 3, 9), "bird", 8),
    ("Lucky", (2010, 6, 24), "dog", 9),
    ("Sly", (2012, 6, 8), "cat", 9),
];

/// (pet index into PETS, date, description)
const VISITS: &[(usize, (i32, u32, u32), &str)] = &[
    (6, (2013, 1, 1), "rabies shot"),
    (7, (2013, 1, 2), "rabies shot"),
    (7, (2013, 1, 3), "neutered"),
    (6, (2013, 1, 4), "spayed"),
];

fn ymd((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

impl Database {
    /// Load the sample vets, owners, pets and visits.
    ///
    /// Does nothing if the store already holds vets, so it is safe to call on
    /// every startup.
    pub fn seed_sample_data(&self) -> DbResult<()> {
        let existing: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM vets", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(());
        }

        let tx = self.conn.unchecked_transaction()?;

        for (first, last, specialties) in VETS {
            let mut vet = Vet::new((*first).into(), (*last).into());
            vet.specialties = specialties.iter().map(|s| (*s).to_string()).collect();
            self.insert_vet(&mut vet)?;
        }

        let mut owner_ids = Vec::with_capacity(OWNERS.len());
        for (first, last, address, city, telephone) in OWNERS {
            let mut owner = Owner {
                id: 0,
                first_name: (*first).into(),
                last_name: (*last).into(),
                address: (*address).into(),
                city: (*city).into(),
                telephone: (*telephone).into(),
            };
            self.insert_owner(&mut owner)?;
            owner_ids.push(owner.id);
        }

        let mut pet_ids = Vec::with_capacity(PETS.len());
        for (name, birth_date, type_name, owner) in PETS {
            let mut pet = Pet::new((*name).into(), (*type_name).into(), owner_ids[*owner]);
            pet.birth_date = ymd(*birth_date);
            self.insert_pet(&mut pet)?;
            pet_ids.push(pet.id);
        }

        for (pet, date, description) in VISITS {
            let Some(date) = ymd(*date) else { continue };
            let mut visit = Visit::on(date);
            visit.pet_id = pet_ids[*pet];
            visit.description = (*description).into();
            self.save_visit(&mut visit)?;
        }

        tx.commit()?;
        Ok(())
    }
}
