use crate::domain::commands::patients::CreatePatientCommand;
use crate::domain::models::Patient as DomainPatient;
use shared::{CreatePatientRequest, Patient as SharedPatient, PatientListResponse, PatientResponse};

/// Mapper between shared Patient DTOs and domain Patient models.
pub struct PatientMapper;

impl PatientMapper {
    pub fn to_dto(domain: DomainPatient) -> SharedPatient {
        SharedPatient {
            id: domain.id.value(),
            name: domain.name,
            contact: domain.contact,
        }
    }

    pub fn to_create_command(request: CreatePatientRequest) -> CreatePatientCommand {
        CreatePatientCommand {
            name: request.name,
            contact: request.contact,
        }
    }

    pub fn to_patient_response_dto(domain: DomainPatient, message: &str) -> PatientResponse {
        PatientResponse {
            patient: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_patient_list_dto(domain_patients: Vec<DomainPatient>) -> PatientListResponse {
        PatientListResponse {
            patients: domain_patients.into_iter().map(Self::to_dto).collect(),
        }
    }
}
