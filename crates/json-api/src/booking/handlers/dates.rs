//! Booking Dates Handler

use herbarium::booking::slots::{available_slots, offered_dates};
use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    booking::{BookingDateResponse, BookingDatesResponse, handlers::parse_date},
    extensions::*,
};

/// Booking Dates Handler
///
/// Returns the next ten weekdays after today at the practice, or after `from` when given, with
/// the number of free slots on each.
#[endpoint(tags("booking"), summary = "Bookable Dates")]
pub(crate) async fn handler(
    from: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<BookingDatesResponse>, StatusError> {
    let today = match parse_date(from, "from")? {
        Some(date) => date,
        None => depot.state_or_500()?.catalog().practice().today(),
    };

    Ok(Json(BookingDatesResponse {
        dates: offered_dates(today)
            .into_iter()
            .map(|date| BookingDateResponse {
                date: date.to_string(),
                available_slots: available_slots(date).len(),
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use herbarium::booking::BOOKING_WINDOW_DAYS;
    use jiff::civil::{Date, Weekday};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;
    use crate::test_helpers::{bundled_service, strict_checkout_mock};

    async fn fetch(url: &str) -> TestResult<BookingDatesResponse> {
        let service = bundled_service(
            strict_checkout_mock(),
            Router::with_path("booking/dates").get(handler),
        )?;

        Ok(TestClient::get(url).send(&service).await.take_json().await?)
    }

    #[tokio::test]
    async fn test_dates_skip_weekends_from_given_day() -> TestResult {
        // Friday
        let response = fetch("http://example.com/booking/dates?from=2025-03-07").await?;

        let first = response.dates.first().ok_or("no dates")?;
        let last = response.dates.last().ok_or("no dates")?;

        assert_eq!(response.dates.len(), BOOKING_WINDOW_DAYS);
        assert_eq!(first.date, "2025-03-10");
        assert_eq!(first.available_slots, 4);
        assert_eq!(last.date, "2025-03-21");

        Ok(())
    }

    #[tokio::test]
    async fn test_dates_default_to_practice_today() -> TestResult {
        let response = fetch("http://example.com/booking/dates").await?;

        assert_eq!(response.dates.len(), BOOKING_WINDOW_DAYS);

        for entry in &response.dates {
            let date: Date = entry.date.parse()?;

            assert!(!matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday));
        }

        Ok(())
    }
}
