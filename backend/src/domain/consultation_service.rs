//! Consultation recording.
//!
//! Recording a consultation completes its appointment. Prescription items are
//! validated one by one; a bad item is reported and skipped, the rest of the
//! consultation is still recorded.

use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::consultations::{
    PrescriptionItemInput, RecordConsultationCommand, RecordConsultationResult, RejectedItem,
};
use crate::domain::models::{Consultation, ConsultationId, EntityKind, Prescription, PrescriptionItem};
use crate::domain::ClinicError;
use crate::storage::{AppointmentStorage, Connection, ConsultationStorage, IdAllocator, InvoiceStorage};

/// Service for recording consultations and their prescriptions
#[derive(Clone)]
pub struct ConsultationService<C: Connection> {
    appointment_repository: C::AppointmentRepository,
    consultation_repository: C::ConsultationRepository,
    invoice_repository: C::InvoiceRepository,
    ids: Arc<IdAllocator>,
}

impl<C: Connection> ConsultationService<C> {
    pub fn new(conn: &C) -> Self {
        Self {
            appointment_repository: conn.create_appointment_repository(),
            consultation_repository: conn.create_consultation_repository(),
            invoice_repository: conn.create_invoice_repository(),
            ids: conn.id_allocator(),
        }
    }

    /// Record the consultation for a scheduled appointment and complete it
    pub async fn record_consultation(
        &self,
        command: RecordConsultationCommand,
    ) -> Result<RecordConsultationResult, ClinicError> {
        info!(
            "Recording consultation: appointment={}, fee={}, items={}",
            command.appointment_id,
            command.consultation_fee,
            command.items.len()
        );

        let appointment = self
            .appointment_repository
            .get_appointment(command.appointment_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Appointment, command.appointment_id))?;

        if appointment.completed {
            warn!("Consultation already recorded for appointment {}", appointment.id);
            return Err(ClinicError::AlreadyCompleted {
                appointment_id: appointment.id,
            });
        }

        if !command.consultation_fee.is_finite() || command.consultation_fee < 0.0 {
            return Err(ClinicError::InvalidFee(command.consultation_fee));
        }

        // Another recorder may have completed it since the read above
        if !self.appointment_repository.mark_completed(appointment.id).await? {
            warn!("Appointment {} was completed concurrently", appointment.id);
            return Err(ClinicError::AlreadyCompleted {
                appointment_id: appointment.id,
            });
        }

        let (prescription, rejected_items) = Self::build_prescription(command.items);

        let consultation = Consultation {
            id: self.ids.next_consultation_id(),
            appointment_id: appointment.id,
            prescription,
            consultation_fee: command.consultation_fee,
        };

        self.consultation_repository.store_consultation(&consultation).await?;

        info!(
            "Consultation recorded: {} ({} items accepted, {} rejected)",
            consultation,
            consultation.prescription.items().len(),
            rejected_items.len()
        );

        Ok(RecordConsultationResult {
            consultation,
            rejected_items,
        })
    }

    /// Add one more item to a consultation's prescription.
    ///
    /// Only allowed until an invoice has been issued for the consultation.
    pub async fn add_prescription_item(
        &self,
        consultation_id: ConsultationId,
        input: PrescriptionItemInput,
    ) -> Result<Consultation, ClinicError> {
        info!("Adding prescription item to consultation {}: {}", consultation_id, input.describe());

        self.require_consultation(consultation_id).await?;

        if let Some(invoice) = self
            .invoice_repository
            .find_invoice_for_consultation(consultation_id)
            .await?
        {
            return Err(ClinicError::PrescriptionLocked {
                consultation_id,
                invoice_id: invoice.id,
            });
        }

        let item = Self::parse_item(&input)?;
        if !self
            .consultation_repository
            .append_prescription_item(consultation_id, &item)
            .await?
        {
            return Err(ClinicError::not_found(EntityKind::Consultation, consultation_id));
        }

        self.require_consultation(consultation_id).await
    }

    pub async fn get_consultation(&self, consultation_id: ConsultationId) -> Result<Option<Consultation>, ClinicError> {
        Ok(self.consultation_repository.get_consultation(consultation_id).await?)
    }

    /// Get a consultation by ID, failing with `NotFound` if it does not exist
    pub async fn require_consultation(&self, consultation_id: ConsultationId) -> Result<Consultation, ClinicError> {
        self.get_consultation(consultation_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Consultation, consultation_id))
    }

    fn build_prescription(inputs: Vec<PrescriptionItemInput>) -> (Prescription, Vec<RejectedItem>) {
        let mut prescription = Prescription::new();
        let mut rejected = Vec::new();

        for input in inputs {
            match Self::parse_item(&input) {
                Ok(item) => prescription.add_item(item),
                Err(error) => {
                    warn!("Skipping prescription item {:?}: {}", input.describe(), error);
                    rejected.push(RejectedItem {
                        input: input.describe(),
                        error,
                    });
                }
            }
        }

        (prescription, rejected)
    }

    fn parse_item(input: &PrescriptionItemInput) -> Result<PrescriptionItem, ClinicError> {
        match input {
            PrescriptionItemInput::Structured { name, price } => PrescriptionItem::new(name.as_str(), *price),
            PrescriptionItemInput::Line(line) => PrescriptionItem::from_str(line),
        }
    }
}
