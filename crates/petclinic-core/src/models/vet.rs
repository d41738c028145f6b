//! Veterinarian models.

use serde::{Deserialize, Serialize};

/// A veterinarian who can be assigned to visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    /// Store ID
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Specialty names (e.g., ["radiology", "surgery"])
    pub specialties: Vec<String>,
}

impl Vet {
    /// Create a vet with no specialties.
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: 0,
            first_name,
            last_name,
            specialties: Vec::new(),
        }
    }

    /// Display name, e.g. "Helen Leary".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let vet = Vet::new("Helen".into(), "Leary".into());
        assert_eq!(vet.full_name(), "Helen Leary");
        assert!(vet.specialties.is_empty());
    }
}
