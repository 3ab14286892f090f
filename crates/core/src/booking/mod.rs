//! Appointment booking
//!
//! The [`BookingWizard`] walks a client through choosing a practitioner, a service, a slot and
//! their contact details. Slot availability lives in [`slots`].

mod details;
pub mod slots;
mod wizard;

pub use details::ContactDetails;
pub use slots::{BOOKING_WINDOW_DAYS, TimeSlot, UnknownTimeSlot, is_slot_available};
pub use wizard::{
    BookingSelection, BookingStep, BookingSummary, BookingWizard, SelectionError, StepRejection,
};
