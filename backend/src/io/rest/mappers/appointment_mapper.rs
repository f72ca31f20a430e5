use crate::domain::commands::appointments::ScheduleAppointmentCommand;
use crate::domain::models::{AppointmentDetails, DoctorId, PatientId, Slot};
use shared::{
    Appointment as SharedAppointment, AppointmentListResponse, AppointmentResponse, ScheduleAppointmentRequest,
};

/// Mapper between shared Appointment DTOs and domain appointments.
///
/// The DTO carries patient and doctor names, so it is built from
/// `AppointmentDetails` rather than the bare `Appointment`.
pub struct AppointmentMapper;

impl AppointmentMapper {
    pub fn to_dto(domain: AppointmentDetails) -> SharedAppointment {
        let AppointmentDetails {
            appointment,
            patient_name,
            doctor_name,
        } = domain;

        SharedAppointment {
            id: appointment.id.value(),
            patient_id: appointment.patient_id.value(),
            patient_name,
            doctor_id: appointment.doctor_id.value(),
            doctor_name,
            slot: appointment.slot.as_str().to_string(),
            completed: appointment.completed,
        }
    }

    pub fn to_schedule_command(request: ScheduleAppointmentRequest) -> ScheduleAppointmentCommand {
        ScheduleAppointmentCommand {
            patient_id: PatientId(request.patient_id),
            doctor_id: DoctorId(request.doctor_id),
            slot: Slot::new(request.slot),
        }
    }

    pub fn to_appointment_response_dto(domain: AppointmentDetails, message: &str) -> AppointmentResponse {
        AppointmentResponse {
            appointment: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_appointment_list_dto(domain_appointments: Vec<AppointmentDetails>) -> AppointmentListResponse {
        AppointmentListResponse {
            appointments: domain_appointments.into_iter().map(Self::to_dto).collect(),
        }
    }
}
