use crate::domain::commands::doctors::CreateDoctorCommand;
use crate::domain::models::Doctor as DomainDoctor;
use shared::{CreateDoctorRequest, Doctor as SharedDoctor, DoctorListResponse, DoctorResponse};

/// Mapper between shared Doctor DTOs and domain Doctor models.
pub struct DoctorMapper;

impl DoctorMapper {
    /// Slots come out sorted, as stored in the domain set
    pub fn to_dto(domain: DomainDoctor) -> SharedDoctor {
        SharedDoctor {
            id: domain.id.value(),
            name: domain.name,
            specialization: domain.specialization,
            available_slots: domain
                .available_slots
                .into_iter()
                .map(|slot| slot.as_str().to_string())
                .collect(),
        }
    }

    pub fn to_create_command(request: CreateDoctorRequest) -> CreateDoctorCommand {
        CreateDoctorCommand {
            name: request.name,
            specialization: request.specialization,
            slots: request.slots,
        }
    }

    pub fn to_doctor_response_dto(domain: DomainDoctor, message: &str) -> DoctorResponse {
        DoctorResponse {
            doctor: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_doctor_list_dto(domain_doctors: Vec<DomainDoctor>) -> DoctorListResponse {
        DoctorListResponse {
            doctors: domain_doctors.into_iter().map(Self::to_dto).collect(),
        }
    }
}
