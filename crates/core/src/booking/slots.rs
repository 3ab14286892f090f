//! Appointment slots
//!
//! Offered dates are the next business days from tomorrow. Each date carries a fixed set of time
//! slots, and whether a slot is free is a deterministic function of the date and time strings.
//! There is no real calendar behind it.

use std::{fmt, str::FromStr};

use jiff::{
    ToSpan,
    civil::{Date, Time, Weekday},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of business days offered for booking.
pub const BOOKING_WINDOW_DAYS: usize = 10;

/// Raised when parsing an unknown time slot.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time slot: {0}")]
pub struct UnknownTimeSlot(pub String);

/// One of the fixed daily appointment times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    /// 9:00
    Nine,
    /// 10:00
    Ten,
    /// 11:00
    Eleven,
    /// 14:00
    Two,
    /// 15:00
    Three,
    /// 16:00
    Four,
}

impl TimeSlot {
    /// Every slot, in day order.
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Nine,
        TimeSlot::Ten,
        TimeSlot::Eleven,
        TimeSlot::Two,
        TimeSlot::Three,
        TimeSlot::Four,
    ];

    /// Label in `H:MM` form, without a leading zero.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::Nine => "9:00",
            TimeSlot::Ten => "10:00",
            TimeSlot::Eleven => "11:00",
            TimeSlot::Two => "14:00",
            TimeSlot::Three => "15:00",
            TimeSlot::Four => "16:00",
        }
    }

    /// Start time of the slot.
    pub fn start_time(self) -> Time {
        let hour = match self {
            TimeSlot::Nine => 9,
            TimeSlot::Ten => 10,
            TimeSlot::Eleven => 11,
            TimeSlot::Two => 14,
            TimeSlot::Three => 15,
            TimeSlot::Four => 16,
        };

        Time::constant(hour, 0, 0, 0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalised = trimmed.strip_prefix('0').unwrap_or(trimmed);

        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == normalised)
            .ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = UnknownTimeSlot;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.as_str().to_string()
    }
}

/// Whether `slot` is bookable on `date`.
///
/// Sums the character codes of `"{YYYY-MM-DD}{H:MM}"`; the slot is free unless the sum is a
/// multiple of three.
pub fn is_slot_available(date: Date, slot: TimeSlot) -> bool {
    let key = format!("{}{}", date.strftime("%Y-%m-%d"), slot.as_str());

    let sum: u32 = key.chars().map(u32::from).sum();

    sum % 3 != 0
}

/// Slots free on `date`, in day order.
pub fn available_slots(date: Date) -> Vec<TimeSlot> {
    TimeSlot::ALL
        .into_iter()
        .filter(|slot| is_slot_available(date, *slot))
        .collect()
}

/// The next `count` weekdays after `today`.
pub fn upcoming_weekdays(today: Date, count: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(count);
    let mut day = today;

    while dates.len() < count {
        let Ok(next) = day.checked_add(1.day()) else {
            break;
        };

        day = next;

        if !matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday) {
            dates.push(day);
        }
    }

    dates
}

/// The dates offered for booking as of `today`.
pub fn offered_dates(today: Date) -> Vec<Date> {
    upcoming_weekdays(today, BOOKING_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn availability_matches_known_dates() {
        let monday = date(2025, 3, 10);

        let flags: Vec<bool> = TimeSlot::ALL
            .into_iter()
            .map(|slot| is_slot_available(monday, slot))
            .collect();

        assert_eq!(flags, [true, false, true, true, true, false]);

        let tuesday = date(2025, 3, 11);

        assert_eq!(
            available_slots(tuesday),
            [
                TimeSlot::Ten,
                TimeSlot::Eleven,
                TimeSlot::Two,
                TimeSlot::Four
            ]
        );
    }

    #[test]
    fn availability_is_deterministic() {
        let day = date(2025, 3, 10);

        let first = is_slot_available(day, TimeSlot::Nine);

        for _ in 0..100 {
            assert_eq!(is_slot_available(day, TimeSlot::Nine), first);
        }
    }

    #[test]
    fn weekdays_skip_weekends_and_start_tomorrow() {
        // Friday
        let today = date(2025, 3, 7);

        let dates = upcoming_weekdays(today, 3);

        assert_eq!(dates, [date(2025, 3, 10), date(2025, 3, 11), date(2025, 3, 12)]);
    }

    #[test]
    fn offered_dates_span_two_working_weeks() {
        // Monday
        let dates = offered_dates(date(2025, 3, 10));

        assert_eq!(dates.len(), BOOKING_WINDOW_DAYS);
        assert_eq!(dates.first(), Some(&date(2025, 3, 11)));
        assert_eq!(dates.last(), Some(&date(2025, 3, 24)));
        assert!(
            dates
                .iter()
                .all(|d| !matches!(d.weekday(), Weekday::Saturday | Weekday::Sunday))
        );
    }

    #[test]
    fn parses_slot_labels() -> TestResult {
        assert_eq!("9:00".parse::<TimeSlot>()?, TimeSlot::Nine);
        assert_eq!("09:00".parse::<TimeSlot>()?, TimeSlot::Nine);
        assert_eq!(" 14:00 ".parse::<TimeSlot>()?, TimeSlot::Two);
        assert!("12:00".parse::<TimeSlot>().is_err());

        Ok(())
    }

    #[test]
    fn slot_serializes_as_label() -> TestResult {
        assert_eq!(serde_json::to_string(&TimeSlot::Three)?, r#""15:00""#);
        assert_eq!(serde_json::from_str::<TimeSlot>(r#""16:00""#)?, TimeSlot::Four);

        Ok(())
    }
}
