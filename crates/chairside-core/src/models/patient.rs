//! Patient records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient in the clinic registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique id, assigned by the store at creation
    pub id: String,
    pub name: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Contact string (phone number in the seed data)
    pub contact: String,
    /// Free-text health notes
    pub health_info: String,
}

/// Creation payload: a patient without an id. The store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub dob: NaiveDate,
    pub contact: String,
    pub health_info: String,
}

impl Patient {
    pub(crate) fn from_new(id: String, data: NewPatient) -> Self {
        Self {
            id,
            name: data.name,
            dob: data.dob,
            contact: data.contact,
            health_info: data.health_info,
        }
    }

    /// Whole years of age on the given day.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.dob).unwrap_or(0)
    }
}
