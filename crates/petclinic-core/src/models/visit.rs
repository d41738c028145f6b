//! Visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::vet::Vet;

/// A single recorded or scheduled appointment for a pet.
///
/// The identifier is assigned by the store on first save and cannot be set
/// by callers; it is also never read back from serialized input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Store-assigned ID - None until first save
    #[serde(skip_deserializing)]
    id: Option<i64>,
    /// Date of the visit
    pub date: NaiveDate,
    /// Free-text description (e.g., "rabies shot")
    pub description: String,
    /// Owning pet ID - 0 until associated with a pet
    pub pet_id: i64,
    /// Assigned veterinarian
    pub vet: Option<Vet>,
    /// Whether the visit has been canceled
    pub canceled: bool,
}

impl Visit {
    /// Create a fresh, unsaved visit dated today.
    pub fn new() -> Self {
        Self::on(chrono::Local::now().date_naive())
    }

    /// Create a fresh, unsaved visit on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            description: String::new(),
            pet_id: 0,
            vet: None,
            canceled: false,
        }
    }

    /// Store-assigned ID, if saved.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Check if this visit has not been saved yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn vet_id(&self) -> Option<i64> {
        self.vet.as_ref().map(|v| v.id)
    }

    /// Flip the canceled flag.
    pub fn toggle_canceled(&mut self) {
        self.canceled = !self.canceled;
    }

    /// Record the ID handed out by the store. Only the db layer calls this.
    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}
