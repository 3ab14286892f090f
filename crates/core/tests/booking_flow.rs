//! Full booking flow against the bundled catalog

use herbarium::{
    booking::{BookingStep, BookingWizard, ContactDetails, StepRejection, TimeSlot},
    catalog::Catalog,
};
use jiff::civil::date;
use testresult::TestResult;

#[test]
fn books_an_appointment_end_to_end() -> TestResult {
    let catalog = Catalog::bundled()?;

    // Sunday
    let mut wizard = BookingWizard::with_seed(&catalog, date(2025, 3, 9), Some("hector"), None);

    assert_eq!(wizard.offered_dates().first(), Some(&date(2025, 3, 10)));
    assert_eq!(wizard.next()?, BookingStep::Service);
    assert_eq!(wizard.next(), Err(StepRejection::NoService));

    wizard.select_service("Follow-Up Consultation")?;

    assert_eq!(wizard.next()?, BookingStep::DateTime);
    assert_eq!(wizard.next(), Err(StepRejection::NoDate));

    wizard.select_date(date(2025, 3, 10))?;

    assert_eq!(wizard.next(), Err(StepRejection::NoTime));

    wizard.select_time(TimeSlot::Eleven)?;

    assert_eq!(wizard.next()?, BookingStep::Details);
    assert!(!wizard.can_continue());

    wizard.set_contact(ContactDetails {
        name: "Jo Bloggs".to_string(),
        email: "jo@example.com".to_string(),
        phone: "07700 900123".to_string(),
        notes: "First visit".to_string(),
    })?;

    assert_eq!(wizard.next()?, BookingStep::Confirmation);
    assert!(!wizard.can_continue());
    assert_eq!(wizard.back(), Err(StepRejection::AlreadyConfirmed));

    let summary = wizard.summary().ok_or("summary missing")?;

    assert_eq!(summary.service, "Follow-Up Consultation");
    assert_eq!(summary.duration_label(), "30 minutes");
    assert_eq!(summary.start, date(2025, 3, 10).at(11, 0, 0, 0));
    assert_eq!(summary.end, date(2025, 3, 10).at(11, 30, 0, 0));

    Ok(())
}

#[test]
fn going_back_and_switching_practitioner_forces_new_service() -> TestResult {
    let catalog = Catalog::bundled()?;
    let mut wizard = BookingWizard::new(&catalog, date(2025, 3, 9));

    wizard.select_practitioner("priya-sharma")?;
    wizard.next()?;
    wizard.select_service("Stress Reset Session")?;
    wizard.next()?;

    assert_eq!(wizard.back()?, BookingStep::Service);
    assert_eq!(wizard.back()?, BookingStep::Practitioner);

    wizard.select_practitioner("elena-vasquez")?;
    wizard.next()?;

    assert_eq!(wizard.selection().service(), None);
    assert_eq!(wizard.next(), Err(StepRejection::NoService));
    assert_eq!(wizard.step(), BookingStep::Service);

    Ok(())
}
