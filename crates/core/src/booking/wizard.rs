//! Booking wizard
//!
//! Five strictly ordered steps. [`BookingStep::advance`] is the transition function: it checks the
//! current step's requirements against the selection and returns the next step or the reason it
//! cannot move on. Going back needs no checks.

use std::fmt;

use jiff::{
    ToSpan,
    civil::{Date, DateTime},
};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    booking::{
        details::ContactDetails,
        slots::{TimeSlot, available_slots, is_slot_available, offered_dates},
    },
    catalog::Catalog,
};

/// A step of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    /// Choose who to see
    Practitioner,
    /// Choose one of their services
    Service,
    /// Choose a date and a time slot
    DateTime,
    /// Enter contact details
    Details,
    /// Review; terminal
    Confirmation,
}

impl BookingStep {
    /// 1-based position in the flow.
    pub fn number(self) -> u8 {
        match self {
            BookingStep::Practitioner => 1,
            BookingStep::Service => 2,
            BookingStep::DateTime => 3,
            BookingStep::Details => 4,
            BookingStep::Confirmation => 5,
        }
    }

    /// Progress bar label.
    pub fn label(self) -> &'static str {
        match self {
            BookingStep::Practitioner => "Practitioner",
            BookingStep::Service => "Service",
            BookingStep::DateTime => "Date & Time",
            BookingStep::Details => "Your Details",
            BookingStep::Confirmation => "Confirm",
        }
    }

    /// Move forward if the selection satisfies this step.
    ///
    /// # Errors
    ///
    /// Returns the first unmet requirement of the current step, or
    /// [`StepRejection::AlreadyConfirmed`] on the final step. Leaving the details step also
    /// rechecks every earlier step.
    pub fn advance(
        self,
        selection: &BookingSelection,
        catalog: &Catalog,
    ) -> Result<BookingStep, StepRejection> {
        match self {
            BookingStep::Practitioner => {
                let slug = selection
                    .practitioner()
                    .ok_or(StepRejection::NoPractitioner)?;

                if catalog.practitioner(slug).is_none() {
                    return Err(StepRejection::UnknownPractitioner(slug.to_string()));
                }

                Ok(BookingStep::Service)
            }
            BookingStep::Service => {
                let service = selection.service().ok_or(StepRejection::NoService)?;
                let practitioner = selection
                    .practitioner()
                    .ok_or(StepRejection::NoPractitioner)?;

                if catalog.service(practitioner, service).is_none() {
                    return Err(StepRejection::ServiceNotOffered {
                        practitioner: practitioner.to_string(),
                        service: service.to_string(),
                    });
                }

                Ok(BookingStep::DateTime)
            }
            BookingStep::DateTime => {
                let date = selection.date().ok_or(StepRejection::NoDate)?;
                let time = selection.time().ok_or(StepRejection::NoTime)?;

                if !is_slot_available(date, time) {
                    return Err(StepRejection::SlotUnavailable { date, time });
                }

                Ok(BookingStep::Details)
            }
            BookingStep::Details => {
                BookingStep::Practitioner.advance(selection, catalog)?;
                BookingStep::Service.advance(selection, catalog)?;
                BookingStep::DateTime.advance(selection, catalog)?;

                let missing = selection.contact().missing_fields();

                if !missing.is_empty() {
                    return Err(StepRejection::MissingDetails(missing));
                }

                Ok(BookingStep::Confirmation)
            }
            BookingStep::Confirmation => Err(StepRejection::AlreadyConfirmed),
        }
    }

    /// Move back one step.
    ///
    /// # Errors
    ///
    /// Returns an error on the first step, and on the confirmation step where the booking is
    /// final.
    pub fn retreat(self) -> Result<BookingStep, StepRejection> {
        match self {
            BookingStep::Practitioner => Err(StepRejection::AtFirstStep),
            BookingStep::Service => Ok(BookingStep::Practitioner),
            BookingStep::DateTime => Ok(BookingStep::Service),
            BookingStep::Details => Ok(BookingStep::DateTime),
            BookingStep::Confirmation => Err(StepRejection::AlreadyConfirmed),
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Why the wizard cannot move.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepRejection {
    /// Step 1 without a practitioner
    #[error("please choose a practitioner")]
    NoPractitioner,

    /// The chosen practitioner is not in the catalog
    #[error("unknown practitioner: {0}")]
    UnknownPractitioner(String),

    /// Step 2 without a service
    #[error("please choose a service")]
    NoService,

    /// The chosen service is not one the practitioner offers
    #[error("{practitioner} does not offer {service}")]
    ServiceNotOffered {
        /// Practitioner slug
        practitioner: String,

        /// Service name
        service: String,
    },

    /// Step 3 without a date
    #[error("please choose a date")]
    NoDate,

    /// Step 3 without a time
    #[error("please choose a time")]
    NoTime,

    /// The chosen slot is taken
    #[error("{time} on {date} is not available")]
    SlotUnavailable {
        /// Chosen date
        date: Date,

        /// Chosen time
        time: TimeSlot,
    },

    /// Step 4 with blank required fields
    #[error("please fill in your {}", .0.join(", "))]
    MissingDetails(Vec<&'static str>),

    /// Back from step 1
    #[error("already at the first step")]
    AtFirstStep,

    /// Any move from the confirmation step
    #[error("the booking is already confirmed")]
    AlreadyConfirmed,
}

/// Rejected selection changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Practitioner slug not in the catalog
    #[error("unknown practitioner: {0}")]
    UnknownPractitioner(String),

    /// A service was chosen before a practitioner
    #[error("choose a practitioner before choosing a service")]
    NoPractitioner,

    /// Service not offered by the chosen practitioner
    #[error("{practitioner} does not offer {service}")]
    ServiceNotOffered {
        /// Practitioner slug
        practitioner: String,

        /// Service name
        service: String,
    },

    /// Date outside the booking window
    #[error("{0} is not an offered date")]
    DateNotOffered(Date),

    /// A time was chosen before a date
    #[error("choose a date before choosing a time")]
    NoDate,

    /// Slot taken on the chosen date
    #[error("{time} on {date} is not available")]
    SlotUnavailable {
        /// Chosen date
        date: Date,

        /// Chosen time
        time: TimeSlot,
    },

    /// Any change on the confirmation step
    #[error("the booking is already confirmed")]
    AlreadyConfirmed,
}

/// What the client has picked so far. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    practitioner: Option<String>,
    service: Option<String>,
    date: Option<Date>,
    time: Option<TimeSlot>,
    contact: ContactDetails,
}

impl BookingSelection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen practitioner slug.
    pub fn practitioner(&self) -> Option<&str> {
        self.practitioner.as_deref()
    }

    /// Chosen service name.
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Chosen date.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Chosen time slot.
    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    /// Contact details entered so far.
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Choose a practitioner. A different practitioner clears the chosen service.
    pub fn set_practitioner(&mut self, slug: impl Into<String>) {
        let slug = slug.into();

        if self.practitioner.as_deref() != Some(slug.as_str()) {
            self.service = None;
        }

        self.practitioner = Some(slug);
    }

    /// Choose a service.
    pub fn set_service(&mut self, name: impl Into<String>) {
        self.service = Some(name.into());
    }

    /// Choose a date. A different date clears the chosen time.
    pub fn set_date(&mut self, date: Date) {
        if self.date != Some(date) {
            self.time = None;
        }

        self.date = Some(date);
    }

    /// Choose a time slot.
    pub fn set_time(&mut self, time: TimeSlot) {
        self.time = Some(time);
    }

    /// Replace the contact details.
    pub fn set_contact(&mut self, contact: ContactDetails) {
        self.contact = contact;
    }

    /// Edit the contact details in place.
    pub fn contact_mut(&mut self) -> &mut ContactDetails {
        &mut self.contact
    }
}

/// Everything shown on the confirmation step.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    /// Practitioner slug
    pub practitioner_slug: String,

    /// Practitioner display name
    pub practitioner_name: String,

    /// Service name
    pub service: String,

    /// Appointment length in minutes
    pub duration_minutes: u32,

    /// Appointment price
    pub price: Money<'static, Currency>,

    /// Appointment date
    pub date: Date,

    /// Appointment time slot
    pub time: TimeSlot,

    /// Wall-clock start, in the practice time zone
    pub start: DateTime,

    /// Wall-clock end: start plus the service duration
    pub end: DateTime,

    /// Client contact details
    pub contact: ContactDetails,
}

impl BookingSummary {
    /// Human readable duration, e.g. `60 minutes`.
    pub fn duration_label(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }
}

/// The booking flow: current step, selection and offered dates.
#[derive(Debug, Clone)]
pub struct BookingWizard<'a> {
    catalog: &'a Catalog,
    step: BookingStep,
    selection: BookingSelection,
    offered_dates: Vec<Date>,
}

impl<'a> BookingWizard<'a> {
    /// Start an empty flow offering dates after `today`.
    pub fn new(catalog: &'a Catalog, today: Date) -> Self {
        Self::with_seed(catalog, today, None, None)
    }

    /// Start a flow pre-filled from deep-link values.
    ///
    /// The values are stored as given; unknown ones are caught when advancing.
    pub fn with_seed(
        catalog: &'a Catalog,
        today: Date,
        practitioner: Option<&str>,
        service: Option<&str>,
    ) -> Self {
        let mut selection = BookingSelection::new();

        if let Some(practitioner) = practitioner {
            selection.set_practitioner(practitioner);
        }

        if let Some(service) = service {
            selection.set_service(service);
        }

        BookingWizard {
            catalog,
            step: BookingStep::Practitioner,
            selection,
            offered_dates: offered_dates(today),
        }
    }

    /// Current step.
    pub fn step(&self) -> BookingStep {
        self.step
    }

    /// Current selection.
    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    /// Dates that can be chosen.
    pub fn offered_dates(&self) -> &[Date] {
        &self.offered_dates
    }

    /// Free slots on the chosen date; empty until a date is chosen.
    pub fn available_slots(&self) -> Vec<TimeSlot> {
        self.selection
            .date()
            .map(available_slots)
            .unwrap_or_default()
    }

    /// Whether [`Self::next`] would succeed.
    pub fn can_continue(&self) -> bool {
        self.step.advance(&self.selection, self.catalog).is_ok()
    }

    /// Advance one step.
    ///
    /// # Errors
    ///
    /// Returns the rejection and leaves the step unchanged when the current step is incomplete.
    pub fn next(&mut self) -> Result<BookingStep, StepRejection> {
        let next = self.step.advance(&self.selection, self.catalog)?;

        debug!(from = %self.step, to = %next, "booking step advanced");

        self.step = next;

        Ok(next)
    }

    /// Go back one step.
    ///
    /// # Errors
    ///
    /// Returns an error on the first and the confirmation steps.
    pub fn back(&mut self) -> Result<BookingStep, StepRejection> {
        let previous = self.step.retreat()?;

        self.step = previous;

        Ok(previous)
    }

    fn ensure_open(&self) -> Result<(), SelectionError> {
        if self.step == BookingStep::Confirmation {
            return Err(SelectionError::AlreadyConfirmed);
        }

        Ok(())
    }

    /// Step back to `step` if the flow is already past it.
    fn rewind_to(&mut self, step: BookingStep) {
        if self.step > step {
            debug!(from = %self.step, to = %step, "booking step rewound");

            self.step = step;
        }
    }

    /// Choose a practitioner from the catalog.
    ///
    /// A different practitioner clears the service and sends the flow back to the service step.
    ///
    /// # Errors
    ///
    /// Returns an error if the slug is unknown or the booking is confirmed.
    pub fn select_practitioner(&mut self, slug: &str) -> Result<(), SelectionError> {
        self.ensure_open()?;

        if self.catalog.practitioner(slug).is_none() {
            return Err(SelectionError::UnknownPractitioner(slug.to_string()));
        }

        let changed = self.selection.practitioner() != Some(slug);

        self.selection.set_practitioner(slug);

        if changed {
            self.rewind_to(BookingStep::Service);
        }

        Ok(())
    }

    /// Choose one of the current practitioner's services.
    ///
    /// # Errors
    ///
    /// Returns an error if no practitioner is chosen, they do not offer the service, or the
    /// booking is confirmed.
    pub fn select_service(&mut self, name: &str) -> Result<(), SelectionError> {
        self.ensure_open()?;

        let practitioner = self
            .selection
            .practitioner()
            .ok_or(SelectionError::NoPractitioner)?;

        if self.catalog.service(practitioner, name).is_none() {
            return Err(SelectionError::ServiceNotOffered {
                practitioner: practitioner.to_string(),
                service: name.to_string(),
            });
        }

        self.selection.set_service(name);

        Ok(())
    }

    /// Choose one of the offered dates.
    ///
    /// A different date clears the time and sends the flow back to the date step.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is outside the booking window or the booking is confirmed.
    pub fn select_date(&mut self, date: Date) -> Result<(), SelectionError> {
        self.ensure_open()?;

        if !self.offered_dates.contains(&date) {
            return Err(SelectionError::DateNotOffered(date));
        }

        let changed = self.selection.date() != Some(date);

        self.selection.set_date(date);

        if changed {
            self.rewind_to(BookingStep::DateTime);
        }

        Ok(())
    }

    /// Choose a free slot on the chosen date.
    ///
    /// # Errors
    ///
    /// Returns an error if no date is chosen, the slot is taken, or the booking is confirmed.
    pub fn select_time(&mut self, time: TimeSlot) -> Result<(), SelectionError> {
        self.ensure_open()?;

        let date = self.selection.date().ok_or(SelectionError::NoDate)?;

        if !is_slot_available(date, time) {
            return Err(SelectionError::SlotUnavailable { date, time });
        }

        self.selection.set_time(time);

        Ok(())
    }

    /// Replace the contact details.
    ///
    /// # Errors
    ///
    /// Returns an error once the booking is confirmed.
    pub fn set_contact(&mut self, contact: ContactDetails) -> Result<(), SelectionError> {
        self.ensure_open()?;

        self.selection.set_contact(contact);

        Ok(())
    }

    /// Summary of a complete selection; `None` while anything is missing or invalid.
    pub fn summary(&self) -> Option<BookingSummary> {
        let practitioner = self.catalog.practitioner(self.selection.practitioner()?)?;
        let service = practitioner.service(self.selection.service()?)?;
        let date = self.selection.date()?;
        let time = self.selection.time()?;

        if !self.selection.contact().is_complete() {
            return None;
        }

        let start = date.to_datetime(time.start_time());
        let end = start
            .checked_add(i64::from(service.duration_minutes).minutes())
            .ok()?;

        Some(BookingSummary {
            practitioner_slug: practitioner.slug.clone(),
            practitioner_name: practitioner.name.clone(),
            service: service.name.clone(),
            duration_minutes: service.duration_minutes,
            price: service.price.clone(),
            date,
            time,
            start,
            end,
            contact: self.selection.contact().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    // Friday, so the first offered date is Monday 2025-03-10.
    const TODAY: Date = date(2025, 3, 7);

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "Jo Bloggs".to_string(),
            email: "jo@example.com".to_string(),
            phone: "07700 900123".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn next_without_practitioner_stays_on_step_one() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        assert!(!wizard.can_continue());
        assert_eq!(wizard.next(), Err(StepRejection::NoPractitioner));
        assert_eq!(wizard.step(), BookingStep::Practitioner);

        wizard.select_practitioner("hector")?;

        assert!(wizard.can_continue());
        assert_eq!(wizard.next()?, BookingStep::Service);
        assert_eq!(wizard.step().number(), 2);

        Ok(())
    }

    #[test]
    fn changing_practitioner_clears_service() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        wizard.select_practitioner("hector")?;
        wizard.select_service("Herbal Review")?;
        wizard.select_practitioner("amara-osei")?;

        assert_eq!(wizard.selection().service(), None);

        Ok(())
    }

    #[test]
    fn reselecting_same_practitioner_keeps_service() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        wizard.select_practitioner("hector")?;
        wizard.select_service("Herbal Review")?;
        wizard.select_practitioner("hector")?;

        assert_eq!(wizard.selection().service(), Some("Herbal Review"));

        Ok(())
    }

    #[test]
    fn service_must_belong_to_practitioner() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        assert_eq!(
            wizard.select_service("Initial Consultation"),
            Err(SelectionError::NoPractitioner)
        );

        wizard.select_practitioner("hector")?;

        assert!(matches!(
            wizard.select_service("Fertility Support Package"),
            Err(SelectionError::ServiceNotOffered { .. })
        ));

        Ok(())
    }

    #[test]
    fn changing_date_clears_time() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        wizard.select_date(date(2025, 3, 10))?;
        wizard.select_time(TimeSlot::Nine)?;
        wizard.select_date(date(2025, 3, 10))?;

        assert_eq!(wizard.selection().time(), Some(TimeSlot::Nine));

        wizard.select_date(date(2025, 3, 11))?;

        assert_eq!(wizard.selection().time(), None);

        Ok(())
    }

    #[test]
    fn dates_and_times_are_checked() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        assert_eq!(wizard.select_time(TimeSlot::Nine), Err(SelectionError::NoDate));

        // Saturday
        assert!(matches!(
            wizard.select_date(date(2025, 3, 8)),
            Err(SelectionError::DateNotOffered(_))
        ));

        wizard.select_date(date(2025, 3, 10))?;

        assert!(matches!(
            wizard.select_time(TimeSlot::Ten),
            Err(SelectionError::SlotUnavailable { .. })
        ));
        assert_eq!(
            wizard.available_slots(),
            [
                TimeSlot::Nine,
                TimeSlot::Eleven,
                TimeSlot::Two,
                TimeSlot::Three
            ]
        );

        Ok(())
    }

    #[test]
    fn seeded_values_are_validated_on_advance() -> TestResult {
        let catalog = Catalog::bundled()?;

        let mut unknown = BookingWizard::with_seed(&catalog, TODAY, Some("nobody"), None);

        assert_eq!(
            unknown.next(),
            Err(StepRejection::UnknownPractitioner("nobody".to_string()))
        );

        let mut mismatched = BookingWizard::with_seed(
            &catalog,
            TODAY,
            Some("hector"),
            Some("Fertility Support Package"),
        );

        assert_eq!(mismatched.next()?, BookingStep::Service);
        assert!(matches!(
            mismatched.next(),
            Err(StepRejection::ServiceNotOffered { .. })
        ));

        let mut seeded = BookingWizard::with_seed(
            &catalog,
            TODAY,
            Some("amara-osei"),
            Some("Fertility Support Package"),
        );

        assert_eq!(seeded.next()?, BookingStep::Service);
        assert_eq!(seeded.next()?, BookingStep::DateTime);

        Ok(())
    }

    #[test]
    fn back_is_unchecked_but_bounded() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        assert_eq!(wizard.back(), Err(StepRejection::AtFirstStep));

        wizard.select_practitioner("hector")?;
        wizard.next()?;

        assert_eq!(wizard.back()?, BookingStep::Practitioner);

        Ok(())
    }

    #[test]
    fn details_step_requires_contact_fields() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut selection = BookingSelection::new();

        selection.set_practitioner("hector");
        selection.set_service("Herbal Review");
        selection.set_date(date(2025, 3, 10));
        selection.set_time(TimeSlot::Nine);
        selection.contact_mut().name = "Jo".to_string();

        assert_eq!(
            BookingStep::Details.advance(&selection, &catalog),
            Err(StepRejection::MissingDetails(vec!["email", "phone"]))
        );

        selection.set_contact(contact());

        assert_eq!(
            BookingStep::Details.advance(&selection, &catalog)?,
            BookingStep::Confirmation
        );

        Ok(())
    }

    /// Walk a wizard to the details step with Hector's Herbal Review at 9:00 on 2025-03-10.
    fn at_details(catalog: &Catalog) -> TestResult<BookingWizard<'_>> {
        let mut wizard = BookingWizard::new(catalog, TODAY);

        wizard.select_practitioner("hector")?;
        wizard.next()?;
        wizard.select_service("Herbal Review")?;
        wizard.next()?;
        wizard.select_date(date(2025, 3, 10))?;
        wizard.select_time(TimeSlot::Nine)?;
        wizard.next()?;

        Ok(wizard)
    }

    #[test]
    fn changing_practitioner_after_service_step_rewinds() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = at_details(&catalog)?;

        assert_eq!(wizard.step(), BookingStep::Details);

        wizard.select_practitioner("amara-osei")?;
        wizard.set_contact(contact())?;

        assert_eq!(wizard.step(), BookingStep::Service);
        assert_eq!(wizard.selection().service(), None);
        assert_eq!(wizard.next(), Err(StepRejection::NoService));
        assert!(wizard.summary().is_none());

        wizard.select_service("Fertility Support Package")?;

        assert_eq!(wizard.next()?, BookingStep::DateTime);
        assert_eq!(wizard.next()?, BookingStep::Details);
        assert_eq!(wizard.next()?, BookingStep::Confirmation);

        let summary = wizard.summary().ok_or("summary missing")?;

        assert_eq!(summary.practitioner_slug, "amara-osei");
        assert_eq!(summary.service, "Fertility Support Package");

        Ok(())
    }

    #[test]
    fn changing_date_after_time_step_rewinds() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = at_details(&catalog)?;

        wizard.set_contact(contact())?;
        wizard.select_date(date(2025, 3, 11))?;

        assert_eq!(wizard.step(), BookingStep::DateTime);
        assert_eq!(wizard.selection().time(), None);
        assert_eq!(wizard.next(), Err(StepRejection::NoTime));
        assert!(wizard.summary().is_none());

        let slot = *wizard
            .available_slots()
            .first()
            .ok_or("no free slot on 2025-03-11")?;

        wizard.select_time(slot)?;

        assert_eq!(wizard.next()?, BookingStep::Details);
        assert_eq!(wizard.next()?, BookingStep::Confirmation);
        assert_eq!(
            wizard.summary().map(|summary| summary.date),
            Some(date(2025, 3, 11))
        );

        Ok(())
    }

    #[test]
    fn unchanged_reselection_keeps_step() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = at_details(&catalog)?;

        wizard.select_practitioner("hector")?;
        wizard.select_date(date(2025, 3, 10))?;
        wizard.select_service("Initial Consultation")?;

        assert_eq!(wizard.step(), BookingStep::Details);
        assert_eq!(wizard.selection().time(), Some(TimeSlot::Nine));

        Ok(())
    }

    #[test]
    fn confirmed_selection_is_frozen() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = at_details(&catalog)?;

        wizard.set_contact(contact())?;
        wizard.next()?;

        assert_eq!(
            wizard.select_practitioner("amara-osei"),
            Err(SelectionError::AlreadyConfirmed)
        );
        assert_eq!(
            wizard.select_date(date(2025, 3, 11)),
            Err(SelectionError::AlreadyConfirmed)
        );
        assert_eq!(
            wizard.set_contact(ContactDetails::default()),
            Err(SelectionError::AlreadyConfirmed)
        );
        assert_eq!(wizard.step(), BookingStep::Confirmation);
        assert!(wizard.summary().is_some());

        Ok(())
    }

    #[test]
    fn details_step_rechecks_earlier_steps() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut selection = BookingSelection::new();

        selection.set_practitioner("hector");
        selection.set_date(date(2025, 3, 10));
        selection.set_time(TimeSlot::Nine);
        selection.set_contact(contact());

        assert_eq!(
            BookingStep::Details.advance(&selection, &catalog),
            Err(StepRejection::NoService)
        );

        Ok(())
    }

    #[test]
    fn confirmation_is_terminal() -> TestResult {
        let catalog = Catalog::bundled()?;
        let selection = BookingSelection::new();

        assert_eq!(
            BookingStep::Confirmation.advance(&selection, &catalog),
            Err(StepRejection::AlreadyConfirmed)
        );
        assert_eq!(
            BookingStep::Confirmation.retreat(),
            Err(StepRejection::AlreadyConfirmed)
        );

        Ok(())
    }

    #[test]
    fn summary_ends_after_service_duration() -> TestResult {
        let catalog = Catalog::bundled()?;
        let mut wizard = BookingWizard::new(&catalog, TODAY);

        wizard.select_practitioner("amara-osei")?;
        wizard.select_service("Fertility Support Package")?;
        wizard.select_date(date(2025, 3, 10))?;
        wizard.select_time(TimeSlot::Two)?;

        assert!(wizard.summary().is_none());

        wizard.set_contact(contact())?;

        let summary = wizard.summary().ok_or("summary missing")?;

        assert_eq!(summary.practitioner_name, "Amara Osei");
        assert_eq!(summary.duration_minutes, 90);
        assert_eq!(summary.start, date(2025, 3, 10).at(14, 0, 0, 0));
        assert_eq!(summary.end, date(2025, 3, 10).at(15, 30, 0, 0));

        Ok(())
    }
}
