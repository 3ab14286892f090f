//! Booking Models

use herbarium::booking::{TimeSlot, is_slot_available};
use jiff::civil::Date;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SlotResponse {
    /// Start time, e.g. `9:00`
    pub time: String,

    pub available: bool,
}

/// Every appointment slot of one day.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AvailabilityResponse {
    /// `YYYY-MM-DD`
    pub date: String,

    /// All six slots in day order
    pub slots: Vec<SlotResponse>,
}

impl AvailabilityResponse {
    pub(crate) fn for_date(date: Date) -> Self {
        AvailabilityResponse {
            date: date.to_string(),
            slots: TimeSlot::ALL
                .into_iter()
                .map(|slot| SlotResponse {
                    time: slot.to_string(),
                    available: is_slot_available(date, slot),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingDateResponse {
    /// `YYYY-MM-DD`
    pub date: String,

    /// Number of free slots that day
    pub available_slots: usize,
}

/// Dates open for booking.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingDatesResponse {
    pub dates: Vec<BookingDateResponse>,
}
