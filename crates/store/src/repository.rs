use slotbook_core::models::appointment::Appointment;

/// Ordered, append-only collection of confirmed appointments.
///
/// `append` is the only mutator; there is no update or removal.
pub trait AppointmentRepository {
    fn append(&mut self, appointment: Appointment);

    /// Every appointment in insertion order.
    fn list(&self) -> Vec<Appointment>;
}
