use mockall::mock;
use slotbook_core::models::appointment::Appointment;

use crate::repository::AppointmentRepository;

// Mock repository for testing
mock! {
    pub AppointmentRepo {}

    impl AppointmentRepository for AppointmentRepo {
        fn append(&mut self, appointment: Appointment);
        fn list(&self) -> Vec<Appointment>;
    }
}
