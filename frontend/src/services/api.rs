use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{ApiError, AppConfig, Reservation, ReservationApi, ReserveRequest};

/// API client for communicating with the reservation service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    /// Create a client for the service named in `config`
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

/// Turn a non-2xx response into an error carrying the body text
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ApiError::Status { status, body }
}

#[async_trait(?Send)]
impl ReservationApi for ApiClient {
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        let url = self.config.reservations_url();

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(error_from_response(response).await);
                }
                response
                    .json::<Vec<Reservation>>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    async fn reserve(&self, request: &ReserveRequest) -> Result<(), ApiError> {
        let url = self.config.reserve_url();

        match Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
        {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(error_from_response(response).await),
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_urls_come_from_config() {
        let config = AppConfig::from_values(Some("http://localhost:3000/"), None, None).unwrap();
        let client = ApiClient::new(config.clone());
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.config.reservations_url(), "http://localhost:3000/reservations");
        assert_eq!(client.config.reserve_url(), "http://localhost:3000/reservations/reserve");
    }
}
