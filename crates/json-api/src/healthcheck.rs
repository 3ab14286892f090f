//! Herbarium JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Number of bookable practitioners loaded
    pub practitioners: usize,

    /// Number of shop products loaded
    pub products: usize,
}

/// Healthcheck handler
///
/// Reports that the service is up along with the size of the loaded catalog.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let catalog = depot.state_or_500()?.catalog();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        practitioners: catalog.practitioners().count(),
        products: catalog.products().count(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;
    use crate::test_helpers::{bundled_service, strict_checkout_mock};

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let service = bundled_service(
            strict_checkout_mock(),
            Router::with_path("healthcheck").get(handler),
        )?;

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert!(response.practitioners > 0);
        assert!(response.products > 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_without_state_returns_500() {
        let service = Service::new(Router::with_path("healthcheck").get(handler));

        let res = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
