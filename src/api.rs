//! HTTP client for the external events service.
//!
//! A thin wrapper over reqwest: every operation is a single
//! request/response round trip with no retries, caching or batching.
//! Non-2xx responses become typed errors; the service reports failures as a
//! JSON body of the form `{"error": "..."}`, which is surfaced when present.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Event, EventPayload, User};
use reqwest::{Client, Response, StatusCode};
use url::Url;

pub struct CalendarApi {
    client: Client,
    base_url: Url,
}

impl CalendarApi {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            client: config.http.build_client()?,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let response = self.client.get(self.endpoint("users")?).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    pub async fn list_events(&self) -> AppResult<Vec<Event>> {
        let response = self.client.get(self.endpoint("events")?).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    pub async fn create_event(&self, payload: &EventPayload) -> AppResult<Event> {
        let response = self
            .client
            .post(self.endpoint("events")?)
            .json(payload)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    pub async fn update_event(&self, id: i64, payload: &EventPayload) -> AppResult<Event> {
        let response = self
            .client
            .put(self.endpoint(&format!("events/{}", id))?)
            .json(payload)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    pub async fn delete_event(&self, id: i64) -> AppResult<()> {
        let response = self
            .client
            .delete(self.endpoint(&format!("events/{}", id))?)
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }
}

/// Map a non-success response to a typed error, pulling the service's
/// `{"error": "..."}` message out of the body when it is there.
async fn checked(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = service_error_message(&body).unwrap_or(body);

    if status == StatusCode::NOT_FOUND {
        Err(AppError::not_found(message))
    } else {
        Err(AppError::Api { status, message })
    }
}

fn service_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_base_url;
    use crate::http_config::HttpConfig;

    fn api() -> CalendarApi {
        let config = AppConfig {
            base_url: parse_base_url("https://example.com/api").unwrap(),
            http: HttpConfig::default(),
        };
        CalendarApi::new(&config).unwrap()
    }

    #[test]
    fn test_endpoints_keep_base_path() {
        let api = api();
        assert_eq!(
            api.endpoint("users").unwrap().as_str(),
            "https://example.com/api/users"
        );
        assert_eq!(
            api.endpoint("events").unwrap().as_str(),
            "https://example.com/api/events"
        );
        assert_eq!(
            api.endpoint("events/42").unwrap().as_str(),
            "https://example.com/api/events/42"
        );
    }

    #[test]
    fn test_service_error_message_extraction() {
        assert_eq!(
            service_error_message(r#"{"error": "User not found"}"#),
            Some("User not found".to_string())
        );
        assert_eq!(service_error_message("<html>oops</html>"), None);
        assert_eq!(service_error_message(r#"{"detail": "other"}"#), None);
    }
}
