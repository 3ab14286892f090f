//! Slot Availability Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::booking::{AvailabilityResponse, handlers::parse_date};

/// Slot Availability Handler
///
/// Returns the six appointment slots of `date` and whether each can be booked.
#[endpoint(tags("booking"), summary = "Slot Availability")]
pub(crate) async fn handler(
    date: QueryParam<String, false>,
) -> Result<Json<AvailabilityResponse>, StatusError> {
    let Some(date) = parse_date(date, "date")? else {
        return Err(StatusError::bad_request().brief("\"date\" query parameter is required"));
    };

    Ok(Json(AvailabilityResponse::for_date(date)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::with_path("availability").get(handler))
    }

    #[tokio::test]
    async fn test_availability_flags_each_slot() -> TestResult {
        let response: AvailabilityResponse =
            TestClient::get("http://example.com/availability?date=2025-03-10")
                .send(&make_service())
                .await
                .take_json()
                .await?;

        let slots: Vec<(&str, bool)> = response
            .slots
            .iter()
            .map(|slot| (slot.time.as_str(), slot.available))
            .collect();

        assert_eq!(response.date, "2025-03-10");
        assert_eq!(
            slots,
            [
                ("9:00", true),
                ("10:00", false),
                ("11:00", true),
                ("14:00", true),
                ("15:00", true),
                ("16:00", false),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_availability_rejects_bad_or_missing_date() {
        for url in [
            "http://example.com/availability?date=10/03/2025",
            "http://example.com/availability?date=2025-02-30",
            "http://example.com/availability",
        ] {
            let res = TestClient::get(url).send(&make_service()).await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{url}");
        }
    }
}
