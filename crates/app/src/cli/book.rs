use clap::Args;
use herbarium::{
    booking::{BookingStep, BookingWizard, ContactDetails, StepRejection, TimeSlot},
    prices::format_amount,
};
use herbarium_app::calendar::BookingCalendarLinks;
use jiff::civil::Date;

use crate::cli::load_catalog;

#[derive(Debug, Args)]
pub(crate) struct BookArgs {
    /// Practitioner slug, e.g. `hector`
    #[arg(long)]
    practitioner: Option<String>,

    /// Service name, e.g. `Initial Consultation`
    #[arg(long)]
    service: Option<String>,

    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<Date>,

    /// Appointment time, e.g. `14:00`
    #[arg(long)]
    time: Option<TimeSlot>,

    /// Your name
    #[arg(long)]
    name: Option<String>,

    /// Your email address
    #[arg(long)]
    email: Option<String>,

    /// Your phone number
    #[arg(long)]
    phone: Option<String>,

    /// Anything the practitioner should know
    #[arg(long, default_value = "")]
    notes: String,

    /// Count the booking window from this date instead of today
    #[arg(long, hide = true)]
    today: Option<Date>,
}

pub(crate) fn run(args: BookArgs) -> Result<(), String> {
    let catalog = load_catalog()?;
    let today = args.today.unwrap_or_else(|| catalog.practice().today());

    let mut wizard = BookingWizard::with_seed(
        &catalog,
        today,
        args.practitioner.as_deref(),
        args.service.as_deref(),
    );

    advance(&mut wizard)?;
    advance(&mut wizard)?;

    if let Some(date) = args.date {
        wizard.select_date(date).map_err(|error| error.to_string())?;
    }

    if let Some(time) = args.time {
        wizard.select_time(time).map_err(|error| error.to_string())?;
    }

    advance(&mut wizard)?;

    wizard.set_contact(ContactDetails {
        name: args.name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        notes: args.notes,
    })
    .map_err(|error| error.to_string())?;

    advance(&mut wizard)?;

    let summary = wizard
        .summary()
        .ok_or_else(|| "booking is incomplete".to_string())?;

    let links = BookingCalendarLinks::for_booking(&summary, catalog.practice())
        .map_err(|error| format!("failed to build calendar links: {error}"))?;

    println!("booking confirmed");
    println!("practitioner: {}", summary.practitioner_name);
    println!("service: {}", summary.service);
    println!("duration: {}", summary.duration_label());
    println!("price: {}", format_amount(*summary.price.amount()));
    println!("date: {}", summary.date.strftime("%A %-d %B %Y"));
    println!("time: {}", summary.time);
    println!("name: {}", summary.contact.name);
    println!("email: {}", summary.contact.email);
    println!("phone: {}", summary.contact.phone);
    println!("notes: {}", summary.contact.notes().unwrap_or("none"));
    println!();
    println!("add to your calendar: {}", links.client);
    println!("practitioner calendar: {}", links.practitioner);

    Ok(())
}

fn advance(wizard: &mut BookingWizard<'_>) -> Result<BookingStep, String> {
    let step = wizard.step();

    wizard.next().map_err(|rejection| describe(step, &rejection))
}

fn describe(step: BookingStep, rejection: &StepRejection) -> String {
    format!("cannot continue from step {step}: {rejection}")
}
