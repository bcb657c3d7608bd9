//! HTTP backend for the events API.

use async_trait::async_trait;
use uuid::Uuid;

use m2calendar_core::backend::{BackendError, EventBackend, Result};
use m2calendar_core::calendar::{Event, NewEvent};

/// Create payload: the validated event plus the owning user.
#[derive(Debug, serde::Serialize)]
struct CreateEventRequest<'a> {
    #[serde(flatten)]
    event: &'a NewEvent,
    user_id: &'a str,
}

/// REST client for `GET/POST /events` and `PUT/DELETE /events/{id}`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    /// Create a new backend client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.as_u16() == 404 {
            Err(BackendError::NotFound(response.url().path().to_string()))
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(BackendError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn json<T: serde::de::DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl EventBackend for HttpBackend {
    async fn list_events(&self, user_id: &str) -> Result<Vec<Event>> {
        let request = self
            .client
            .get(self.url("/events"))
            .query(&[("user_id", user_id)]);
        let response = self.send(request).await?;
        self.json(response).await
    }

    async fn create_event(&self, user_id: &str, event: &NewEvent) -> Result<Event> {
        let request = self
            .client
            .post(self.url("/events"))
            .json(&CreateEventRequest { event, user_id });
        let response = self.send(request).await?;
        self.json(response).await
    }

    async fn update_event(&self, event: &Event) -> Result<Event> {
        let request = self
            .client
            .put(self.url(&format!("/events/{}", event.id)))
            .json(event);
        let response = self.send(request).await?;
        self.json(response).await
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/events/{}", id)));
        self.send(request).await?;
        Ok(())
    }
}
