//! Practitioners

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// Practitioner Key
    pub struct PractitionerKey;
}

/// Duration assumed when a service description carries no number.
pub const DEFAULT_SERVICE_MINUTES: u32 = 60;

/// A herbalist who can be booked.
#[derive(Debug, Clone)]
pub struct Practitioner {
    /// URL-friendly identifier, also used as the booking deep-link value
    pub slug: String,

    /// Display name
    pub name: String,

    /// Professional title
    pub title: String,

    /// Profile photo URL
    pub photo: String,

    /// Areas of speciality
    pub specialities: SmallVec<[String; 4]>,

    /// One-line summary shown on cards
    pub tagline: String,

    /// Services offered, in display order
    pub services: Vec<Service>,
}

impl Practitioner {
    /// Find one of this practitioner's services by name.
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.name == name)
    }

    /// Whether this practitioner offers a service with the given name.
    pub fn offers(&self, name: &str) -> bool {
        self.service(name).is_some()
    }

    /// First word of the practitioner's name, as used in conversational copy.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A bookable consultation type.
#[derive(Debug, Clone)]
pub struct Service {
    /// Service name; unique per practitioner
    pub name: String,

    /// Length of the appointment in minutes
    pub duration_minutes: u32,

    /// Price of the appointment
    pub price: Money<'static, Currency>,

    /// Longer description
    pub description: String,
}

impl Service {
    /// Human readable duration, e.g. `60 minutes`.
    pub fn duration_label(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }
}

/// Parse a duration description such as `"60 minutes"` into minutes.
///
/// The first run of digits wins; descriptions without one fall back to
/// [`DEFAULT_SERVICE_MINUTES`].
pub fn parse_duration(description: &str) -> u32 {
    description
        .split(|c: char| !c.is_ascii_digit())
        .find(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(DEFAULT_SERVICE_MINUTES)
}
