//! Domain model for a doctor and the slots they can be booked in.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::DoctorId;

/// Opaque label for a bookable time window, e.g. "9AM-10AM".
///
/// The label is never parsed or normalised; two slots are the same slot only
/// if their labels are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Slot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Slot {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialization: String,
    /// Slots that are free to book. A booked slot is absent from this set.
    pub available_slots: BTreeSet<Slot>,
}

impl Doctor {
    pub fn is_slot_available(&self, slot: &Slot) -> bool {
        self.available_slots.contains(slot)
    }

    /// Remove `slot` from the free set. Returns false if it was not free.
    pub fn book_slot(&mut self, slot: &Slot) -> bool {
        self.available_slots.remove(slot)
    }

    /// Put `slot` back into the free set. Freeing a free slot is a no-op.
    pub fn free_slot(&mut self, slot: Slot) {
        self.available_slots.insert(slot);
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor[id={}, name={}, specialization={}]",
            self.id, self.name, self.specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor_with_slots(slots: &[&str]) -> Doctor {
        Doctor {
            id: DoctorId(1),
            name: "Dr. Smith".to_string(),
            specialization: "Cardiology".to_string(),
            available_slots: slots.iter().map(|s| Slot::from(*s)).collect(),
        }
    }

    #[test]
    fn test_book_slot_removes_it_once() {
        let mut doctor = doctor_with_slots(&["9AM-10AM", "10AM-11AM"]);
        let slot = Slot::from("9AM-10AM");

        assert!(doctor.is_slot_available(&slot));
        assert!(doctor.book_slot(&slot));
        assert!(!doctor.is_slot_available(&slot));
        assert!(!doctor.book_slot(&slot));
        assert!(doctor.is_slot_available(&Slot::from("10AM-11AM")));
    }

    #[test]
    fn test_free_slot_is_idempotent() {
        let mut doctor = doctor_with_slots(&["9AM-10AM"]);
        let slot = Slot::from("9AM-10AM");

        doctor.book_slot(&slot);
        doctor.free_slot(slot.clone());
        doctor.free_slot(slot.clone());

        assert!(doctor.is_slot_available(&slot));
        assert_eq!(doctor.available_slots.len(), 1);
    }

    #[test]
    fn test_slot_labels_are_not_normalised() {
        let doctor = doctor_with_slots(&["9AM-10AM"]);
        assert!(!doctor.is_slot_available(&Slot::from(" 9AM-10AM")));
        assert!(!doctor.is_slot_available(&Slot::from("9am-10am")));
    }
}
