use clap::Args;
use herbarium::booking::{
    TimeSlot, is_slot_available,
    slots::{available_slots, offered_dates},
};
use jiff::civil::Date;
use tabled::{builder::Builder, settings::Style};

use crate::cli::load_catalog;

#[derive(Debug, Args)]
pub(crate) struct SlotsArgs {
    /// Show the slots for this date (YYYY-MM-DD); lists the offered dates when omitted
    #[arg(long)]
    date: Option<Date>,

    /// Count the booking window from this date instead of today
    #[arg(long, hide = true)]
    today: Option<Date>,
}

pub(crate) fn run(args: &SlotsArgs) -> Result<(), String> {
    let mut builder = Builder::default();

    if let Some(date) = args.date {
        builder.push_record(["Time", "Available"]);

        for slot in TimeSlot::ALL {
            let available = if is_slot_available(date, slot) { "yes" } else { "no" };

            builder.push_record([slot.as_str(), available]);
        }
    } else {
        let today = match args.today {
            Some(today) => today,
            None => load_catalog()?.practice().today(),
        };

        builder.push_record(["Date", "Free slots"]);

        for date in offered_dates(today) {
            let free: Vec<&str> = available_slots(date)
                .into_iter()
                .map(TimeSlot::as_str)
                .collect();

            builder.push_record([date.strftime("%a %-d %b %Y").to_string(), free.join(" ")]);
        }
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    println!("{table}");

    Ok(())
}
