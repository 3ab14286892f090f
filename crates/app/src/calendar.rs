//! Calendar export links
//!
//! Builds Google Calendar "create event" URLs for a confirmed booking. Nothing is sent anywhere:
//! the client follows the link.

use herbarium::{booking::BookingSummary, catalog::Practice, prices::format_amount};
use jiff::Timestamp;
use reqwest::Url;
use thiserror::Error;

/// Google Calendar event template endpoint.
pub const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/event";

/// Failures while building calendar links.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The wall-clock time does not exist in the practice time zone
    #[error("appointment time cannot be placed in the practice time zone: {0}")]
    Time(#[from] jiff::Error),

    /// The link could not be assembled
    #[error("invalid calendar url: {0}")]
    Url(String),
}

/// A calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Event title
    pub title: String,

    /// Event body; may span several lines
    pub description: String,

    /// Practice address
    pub location: String,

    /// Appointment start
    pub start: Timestamp,

    /// Appointment end
    pub end: Timestamp,
}

/// Link that opens Google Calendar with `event` pre-filled.
///
/// # Errors
///
/// Returns an error if the URL cannot be built.
pub fn google_calendar_url(event: &CalendarEvent) -> Result<Url, CalendarError> {
    let dates = format!(
        "{}/{}",
        calendar_timestamp(event.start),
        calendar_timestamp(event.end)
    );

    Url::parse_with_params(
        GOOGLE_CALENDAR_BASE,
        [
            ("action", "TEMPLATE"),
            ("text", event.title.as_str()),
            ("dates", dates.as_str()),
            ("details", event.description.as_str()),
            ("location", event.location.as_str()),
        ],
    )
    .map_err(|err| CalendarError::Url(err.to_string()))
}

/// `YYYYMMDDTHHMMSSZ` in UTC.
fn calendar_timestamp(timestamp: Timestamp) -> String {
    timestamp.strftime("%Y%m%dT%H%M%SZ").to_string()
}

/// Calendar entries for both sides of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCalendarEvents {
    /// Entry for the client's calendar
    pub client: CalendarEvent,

    /// Entry for the practitioner's calendar
    pub practitioner: CalendarEvent,
}

impl BookingCalendarEvents {
    /// Build both entries, reading wall-clock times in the practice time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the appointment times do not exist in the practice time zone.
    pub fn for_booking(
        summary: &BookingSummary,
        practice: &Practice,
    ) -> Result<Self, CalendarError> {
        let start = summary
            .start
            .to_zoned(practice.time_zone.clone())?
            .timestamp();
        let end = summary.end.to_zoned(practice.time_zone.clone())?.timestamp();

        let duration = summary.duration_label();
        let price = format_amount(*summary.price.amount());

        let client = CalendarEvent {
            title: format!("{} — {}", summary.service, practice.name),
            description: format!(
                "{} with {} at {}.\n\nDuration: {duration}\nPrice: {price}\n\nPlease arrive 5 minutes early. If you need to reschedule, contact us at least 24 hours in advance.",
                summary.service, summary.practitioner_name, practice.name,
            ),
            location: practice.location.clone(),
            start,
            end,
        };

        let contact = &summary.contact;

        let practitioner = CalendarEvent {
            title: format!("{} — {}", contact.name.trim(), summary.service),
            description: format!(
                "Client: {}\nEmail: {}\nPhone: {}\n\nService: {} ({duration})\n\nNotes: {}",
                contact.name.trim(),
                contact.email.trim(),
                contact.phone.trim(),
                summary.service,
                contact.notes().unwrap_or("None provided"),
            ),
            location: practice.location.clone(),
            start,
            end,
        };

        Ok(Self {
            client,
            practitioner,
        })
    }
}

/// Google Calendar links for both sides of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCalendarLinks {
    /// Link for the client's calendar
    pub client: Url,

    /// Link for the practitioner's calendar
    pub practitioner: Url,
}

impl BookingCalendarLinks {
    /// Build both links for a confirmed booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the times cannot be resolved or a URL cannot be built.
    pub fn for_booking(
        summary: &BookingSummary,
        practice: &Practice,
    ) -> Result<Self, CalendarError> {
        let events = BookingCalendarEvents::for_booking(summary, practice)?;

        Ok(Self {
            client: google_calendar_url(&events.client)?,
            practitioner: google_calendar_url(&events.practitioner)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use herbarium::{
        booking::{BookingWizard, ContactDetails, TimeSlot},
        catalog::Catalog,
    };
    use jiff::civil::{Date, date};
    use testresult::TestResult;

    use super::*;

    fn summary(
        catalog: &Catalog,
        today: Date,
        day: Date,
        notes: &str,
    ) -> TestResult<BookingSummary> {
        let mut wizard = BookingWizard::new(catalog, today);

        wizard.select_practitioner("hector")?;
        wizard.select_service("Initial Consultation")?;
        wizard.select_date(day)?;
        wizard.select_time(TimeSlot::Nine)?;
        wizard.set_contact(ContactDetails {
            name: "Jo Bloggs".to_string(),
            email: "jo@example.com".to_string(),
            phone: "07700 900123".to_string(),
            notes: notes.to_string(),
        })?;

        Ok(wizard.summary().ok_or("incomplete booking")?)
    }

    fn query(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    #[test]
    fn url_carries_event_fields() -> TestResult {
        let event = CalendarEvent {
            title: "Initial Consultation — Hector's Herbs".to_string(),
            description: "Line one\nLine two".to_string(),
            location: "12 Warrington Crescent, London, W9 1EL".to_string(),
            start: "2025-03-10T09:00:00Z".parse()?,
            end: "2025-03-10T10:00:00Z".parse()?,
        };

        let url = google_calendar_url(&event)?;

        assert_eq!(url.host_str(), Some("calendar.google.com"));
        assert_eq!(url.path(), "/calendar/event");
        assert_eq!(query(&url, "action").as_deref(), Some("TEMPLATE"));
        assert_eq!(
            query(&url, "dates").as_deref(),
            Some("20250310T090000Z/20250310T100000Z")
        );
        assert_eq!(query(&url, "text"), Some(event.title.clone()));
        assert_eq!(query(&url, "details"), Some(event.description.clone()));
        assert_eq!(query(&url, "location"), Some(event.location.clone()));

        Ok(())
    }

    #[test]
    fn winter_booking_is_utc_wall_clock() -> TestResult {
        let catalog = Catalog::bundled()?;
        let summary = summary(&catalog, date(2025, 3, 7), date(2025, 3, 10), "")?;

        let events = BookingCalendarEvents::for_booking(&summary, catalog.practice())?;

        assert_eq!(calendar_timestamp(events.client.start), "20250310T090000Z");
        assert_eq!(calendar_timestamp(events.client.end), "20250310T100000Z");
        assert_eq!(events.client.title, "Initial Consultation — Hector's Herbs");
        assert_eq!(events.practitioner.title, "Jo Bloggs — Initial Consultation");
        assert!(events.practitioner.description.ends_with("Notes: None provided"));
        assert!(events.client.description.contains("Price: £95.00"));

        Ok(())
    }

    #[test]
    fn summer_booking_shifts_for_british_summer_time() -> TestResult {
        let catalog = Catalog::bundled()?;

        // Tuesday 2025-07-08 is free at 9:00.
        let summary = summary(&catalog, date(2025, 7, 4), date(2025, 7, 8), "Pollen allergy")?;

        let links = BookingCalendarLinks::for_booking(&summary, catalog.practice())?;

        assert_eq!(
            query(&links.client, "dates").as_deref(),
            Some("20250708T080000Z/20250708T090000Z")
        );
        assert!(
            query(&links.practitioner, "details")
                .is_some_and(|details| details.ends_with("Notes: Pollen allergy"))
        );

        Ok(())
    }
}
