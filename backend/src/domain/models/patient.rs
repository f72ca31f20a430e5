//! Domain model for a patient.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::PatientId;

/// A registered patient. Never modified after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub contact: String,
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patient[id={}, name={}, contact={}]", self.id, self.name, self.contact)
    }
}
