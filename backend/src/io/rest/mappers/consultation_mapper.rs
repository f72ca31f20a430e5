use crate::domain::commands::consultations::{
    PrescriptionItemInput, RecordConsultationCommand, RecordConsultationResult, RejectedItem as DomainRejectedItem,
};
use crate::domain::models::{AppointmentId, Consultation as DomainConsultation};
use shared::{
    AddPrescriptionItemRequest, Consultation as SharedConsultation, ConsultationResponse, PrescriptionItem as SharedPrescriptionItem,
    RecordConsultationRequest, RejectedItem as SharedRejectedItem,
};

/// Mapper between shared Consultation DTOs and domain consultations.
pub struct ConsultationMapper;

impl ConsultationMapper {
    pub fn to_dto(domain: DomainConsultation) -> SharedConsultation {
        let items_cost = domain.prescription.total_price();
        SharedConsultation {
            id: domain.id.value(),
            appointment_id: domain.appointment_id.value(),
            consultation_fee: domain.consultation_fee,
            items: domain
                .prescription
                .items()
                .iter()
                .map(|item| SharedPrescriptionItem {
                    name: item.name.clone(),
                    price: item.price,
                })
                .collect(),
            items_cost,
        }
    }

    /// Structured items are kept ahead of text lines
    pub fn to_record_command(request: RecordConsultationRequest) -> RecordConsultationCommand {
        let structured = request
            .items
            .into_iter()
            .map(|item| PrescriptionItemInput::Structured {
                name: item.name,
                price: item.price,
            });
        let lines = request.item_lines.into_iter().map(PrescriptionItemInput::Line);

        RecordConsultationCommand {
            appointment_id: AppointmentId(request.appointment_id),
            consultation_fee: request.consultation_fee,
            items: structured.chain(lines).collect(),
        }
    }

    pub fn to_item_input(request: AddPrescriptionItemRequest) -> PrescriptionItemInput {
        PrescriptionItemInput::Structured {
            name: request.name,
            price: request.price,
        }
    }

    pub fn to_rejected_item_dto(domain: DomainRejectedItem) -> SharedRejectedItem {
        SharedRejectedItem {
            input: domain.input,
            reason: domain.error.to_string(),
        }
    }

    pub fn to_consultation_response_dto(result: RecordConsultationResult, message: &str) -> ConsultationResponse {
        ConsultationResponse {
            consultation: Self::to_dto(result.consultation),
            rejected_items: result
                .rejected_items
                .into_iter()
                .map(Self::to_rejected_item_dto)
                .collect(),
            success_message: message.to_string(),
        }
    }
}
