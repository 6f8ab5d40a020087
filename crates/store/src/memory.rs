use slotbook_core::models::appointment::Appointment;

use crate::repository::AppointmentRepository;

/// Process-lifetime store; starts empty on every launch.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAppointmentStore {
    appointments: Vec<Appointment>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl AppointmentRepository for InMemoryAppointmentStore {
    fn append(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    fn list(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }
}
