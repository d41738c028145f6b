//! Pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::visit::Visit;

/// An animal record owned by a clinic customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Store ID
    pub id: i64,
    /// Pet name
    pub name: String,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Pet type (e.g., "cat", "dog", "lizard")
    pub type_name: String,
    /// Owning customer ID
    pub owner_id: i64,
    /// Visit history, loaded for display only
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Create a pet that has not been stored yet.
    pub fn new(name: String, type_name: String, owner_id: i64) -> Self {
        Self {
            id: 0,
            name,
            birth_date: None,
            type_name,
            owner_id,
            visits: Vec::new(),
        }
    }

    /// Associate a visit with this pet and list it in the visit history.
    ///
    /// The history is display state; nothing here is persisted.
    pub fn add_visit(&mut self, visit: &mut Visit) {
        visit.pet_id = self.id;
        self.visits.push(visit.clone());
    }
}
