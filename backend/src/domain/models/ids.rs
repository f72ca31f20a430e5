//! Typed entity identifiers.
//!
//! Every entity kind gets its own id type so a `PatientId` can never be passed
//! where an `InvoiceId` is expected. Values are issued by the storage layer's
//! `IdAllocator` and start at 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of entity the clinic tracks, one id sequence each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Patient,
    Doctor,
    Appointment,
    Consultation,
    Invoice,
    Payment,
}

impl EntityKind {
    pub const COUNT: usize = 6;

    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Patient,
        EntityKind::Doctor,
        EntityKind::Appointment,
        EntityKind::Consultation,
        EntityKind::Invoice,
        EntityKind::Payment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Patient => "Patient",
            EntityKind::Doctor => "Doctor",
            EntityKind::Appointment => "Appointment",
            EntityKind::Consultation => "Consultation",
            EntityKind::Invoice => "Invoice",
            EntityKind::Payment => "Payment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const KIND: EntityKind = $kind;

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(PatientId, EntityKind::Patient);
entity_id!(DoctorId, EntityKind::Doctor);
entity_id!(AppointmentId, EntityKind::Appointment);
entity_id!(ConsultationId, EntityKind::Consultation);
entity_id!(InvoiceId, EntityKind::Invoice);
entity_id!(PaymentId, EntityKind::Payment);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_as_plain_numbers() {
        assert_eq!(PatientId(7).to_string(), "7");
        assert_eq!(InvoiceId::from(12).value(), 12);
    }

    #[test]
    fn test_ids_know_their_entity_kind() {
        assert_eq!(DoctorId::KIND, EntityKind::Doctor);
        assert_eq!(PaymentId::KIND.to_string(), "Payment");
    }
}
