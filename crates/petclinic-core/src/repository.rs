//! Repository facades the visit workflow depends on.
//!
//! Lookups return `Ok(None)` for a missing record; deciding whether that is
//! fatal is up to the caller. [`crate::db::Database`] implements all three.

use crate::db::DbResult;
use crate::models::{Pet, Vet, Visit};

/// Find, save and delete visits.
pub trait VisitRepository {
    /// Get a visit by ID, with its vet attached.
    fn find_visit(&self, id: i64) -> DbResult<Option<Visit>>;

    /// All visits of a pet, oldest first.
    fn find_visits_by_pet(&self, pet_id: i64) -> DbResult<Vec<Visit>>;

    /// Insert a new visit (assigning its ID) or update a stored one in place.
    fn save_visit(&self, visit: &mut Visit) -> DbResult<()>;

    /// Delete a visit. Returns false if nothing was deleted.
    fn delete_visit(&self, id: i64) -> DbResult<bool>;
}

/// Pet lookups.
pub trait PetRepository {
    /// Get a pet by ID. The visit history is left empty.
    fn find_pet(&self, id: i64) -> DbResult<Option<Pet>>;

    /// All pets belonging to an owner, ordered by name.
    fn find_pets_by_owner(&self, owner_id: i64) -> DbResult<Vec<Pet>>;
}

/// Veterinarian lookups.
pub trait VetRepository {
    fn find_vet(&self, id: i64) -> DbResult<Option<Vet>>;

    /// All vets, ordered by last name.
    fn find_all_vets(&self) -> DbResult<Vec<Vet>>;
}

/// Everything the visit workflow needs from the store.
pub trait ClinicStore: VisitRepository + PetRepository + VetRepository {}

impl<T> ClinicStore for T where T: VisitRepository + PetRepository + VetRepository + ?Sized {}
