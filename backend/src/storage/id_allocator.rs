//! Monotonic identifier allocation, one sequence per entity kind.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::models::{
    AppointmentId, ConsultationId, DoctorId, EntityKind, InvoiceId, PatientId, PaymentId,
};

/// Issues ids starting at 1 for each entity kind. Ids are never reused.
///
/// Each storage connection owns its own allocator, so a fresh connection
/// starts every sequence over.
#[derive(Debug)]
pub struct IdAllocator {
    counters: [AtomicU64; EntityKind::COUNT],
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            counters: std::array::from_fn(|_| AtomicU64::new(1)),
        }
    }

    /// Take the next id for `kind`
    pub fn next(&self, kind: EntityKind) -> u64 {
        self.counters[Self::slot(kind)].fetch_add(1, Ordering::Relaxed)
    }

    /// The id the next call to `next(kind)` will return
    pub fn peek(&self, kind: EntityKind) -> u64 {
        self.counters[Self::slot(kind)].load(Ordering::Relaxed)
    }

    pub fn next_patient_id(&self) -> PatientId {
        PatientId(self.next(EntityKind::Patient))
    }

    pub fn next_doctor_id(&self) -> DoctorId {
        DoctorId(self.next(EntityKind::Doctor))
    }

    pub fn next_appointment_id(&self) -> AppointmentId {
        AppointmentId(self.next(EntityKind::Appointment))
    }

    pub fn next_consultation_id(&self) -> ConsultationId {
        ConsultationId(self.next(EntityKind::Consultation))
    }

    pub fn next_invoice_id(&self) -> InvoiceId {
        InvoiceId(self.next(EntityKind::Invoice))
    }

    pub fn next_payment_id(&self) -> PaymentId {
        PaymentId(self.next(EntityKind::Payment))
    }

    fn slot(kind: EntityKind) -> usize {
        match kind {
            EntityKind::Patient => 0,
            EntityKind::Doctor => 1,
            EntityKind::Appointment => 2,
            EntityKind::Consultation => 3,
            EntityKind::Invoice => 4,
            EntityKind::Payment => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequences_start_at_one_and_are_independent() {
        let ids = IdAllocator::new();

        assert_eq!(ids.next_patient_id(), PatientId(1));
        assert_eq!(ids.next_patient_id(), PatientId(2));
        assert_eq!(ids.next_doctor_id(), DoctorId(1));
        assert_eq!(ids.next_invoice_id(), InvoiceId(1));
        assert_eq!(ids.peek(EntityKind::Patient), 3);
        assert_eq!(ids.peek(EntityKind::Payment), 1);
    }

    #[test]
    fn test_fresh_allocator_starts_over() {
        let first = IdAllocator::new();
        first.next(EntityKind::Appointment);
        first.next(EntityKind::Appointment);

        let second = IdAllocator::new();
        assert_eq!(second.next_appointment_id(), AppointmentId(1));
    }

    #[test]
    fn test_concurrent_allocation_never_repeats() {
        let ids = Arc::new(IdAllocator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..500).map(|_| ids.next(EntityKind::Payment)).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {} issued twice", id);
            }
        }
        assert_eq!(seen.len(), 4000);
        assert_eq!(ids.peek(EntityKind::Payment), 4001);
    }
}
