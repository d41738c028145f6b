//! Owner models.

use serde::{Deserialize, Serialize};

/// A clinic customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: 0,
            first_name,
            last_name,
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
        }
    }
}
