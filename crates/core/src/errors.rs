use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot already taken: {0}")]
    SlotTaken(String),

    #[error("No slot selected")]
    NoSelection,

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
