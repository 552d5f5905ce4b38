// ============================================================================
// API CLIENT - All HTTP traffic to the booking backend (stateless)
// ============================================================================
// One method per endpoint, no business logic. Every request goes out under
// the configured prefix with cookies attached and a 15s abort timeout, and
// every failure funnels through the same error normalization so pages show
// consistent messages.
// ============================================================================

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, RequestCredentials};

use crate::config::CONFIG;
use crate::models::{
    BookSeatsRequest, Booking, LoginRequest, LoginResponse, NewRouteRequest, RegisterRequest,
    Route, Statistics,
};

/// Normalized transport/backend failure. `status` is None when no response
/// was received at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    fn transport(detail: String) -> Self {
        let message = if detail.trim().is_empty() {
            "Network error".to_string()
        } else {
            detail
        };
        Self {
            status: None,
            message,
        }
    }

    fn from_response(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            message: normalize_error_body(status, body),
        }
    }
}

/// Message precedence for an error response: a plain string body wins, then
/// a JSON `message` field, then a JSON `error` field, else a synthesized
/// "Request failed (<status>)".
pub fn normalize_error_body(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(value) => {
                if let Some(s) = value.as_str() {
                    if !s.is_empty() {
                        return s.to_string();
                    }
                } else if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                    return msg.to_string();
                } else if let Some(err) = value.get("error").and_then(|e| e.as_str()) {
                    return err.to_string();
                }
            }
            // Not JSON at all: the backend sent plain text.
            Err(_) => return trimmed.to_string(),
        }
    }
    format!("Request failed ({status})")
}

/// A 2xx body that may be a plain string or a JSON string ("Cancelled",
/// "Route added", ...). Anything else falls back to the given message.
fn string_body_or(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    if let Ok(serde_json::Value::String(s)) = serde_json::from_str(trimmed) {
        return s;
    }
    if serde_json::from_str::<serde_json::Value>(trimmed).is_err() {
        return trimmed.to_string();
    }
    fallback.to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    prefix: String,
}

/// Optional filters for GET /admin/bookings.
#[derive(Debug, Clone, Default)]
pub struct AdminBookingFilters {
    pub booking_id: Option<String>,
    pub date: Option<String>,
    pub passenger_id: Option<i64>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            prefix: CONFIG.api_prefix.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }

    fn with_defaults(builder: RequestBuilder, signal: &AbortController) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(&signal.signal()))
    }

    /// Await a response, aborting after the configured timeout. The timer is
    /// dropped (and therefore cancelled) as soon as the response lands.
    async fn checked(
        fut: impl std::future::Future<Output = Result<Response, gloo_net::Error>>,
        controller: AbortController,
    ) -> Result<Response, ApiError> {
        let timer = Timeout::new(CONFIG.request_timeout_ms, move || controller.abort());
        let response = fut.await.map_err(|e| ApiError::transport(e.to_string()))?;
        drop(timer);

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body))
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::transport("AbortController unavailable".to_string()))?;
        let builder = Self::with_defaults(Request::get(&self.url(path)), &controller)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let response = Self::checked(builder.send(), controller).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("Invalid response: {e}")))
    }

    async fn post(
        &self,
        path: &str,
        body: Option<&impl serde::Serialize>,
    ) -> Result<Response, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::transport("AbortController unavailable".to_string()))?;
        let builder = Self::with_defaults(Request::post(&self.url(path)), &controller);
        match body {
            Some(payload) => {
                let request = builder
                    .json(payload)
                    .map_err(|e| ApiError::transport(format!("Serialization error: {e}")))?;
                Self::checked(request.send(), controller).await
            }
            None => Self::checked(builder.send(), controller).await,
        }
    }

    // ---- auth -----------------------------------------------------------

    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post("/auth/login", Some(payload)).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::transport(format!("Invalid response: {e}")))
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post("/auth/logout", None::<&()>).await.map(|_| ())
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ApiError> {
        self.post("/passengers/register", Some(payload))
            .await
            .map(|_| ())
    }

    // ---- routes ---------------------------------------------------------

    /// Public search, available without a session.
    pub async fn search_routes_public(
        &self,
        source: &str,
        destination: &str,
        date: &str,
    ) -> Result<Vec<Route>, ApiError> {
        self.get_json(
            "/routes/search",
            &[
                ("source", source.to_string()),
                ("destination", destination.to_string()),
                ("date", date.to_string()),
            ],
        )
        .await
    }

    /// Same search through the passenger-scoped path.
    pub async fn search_routes(
        &self,
        source: &str,
        destination: &str,
        date: &str,
    ) -> Result<Vec<Route>, ApiError> {
        self.get_json(
            "/passengers/routes/search",
            &[
                ("source", source.to_string()),
                ("destination", destination.to_string()),
                ("date", date.to_string()),
            ],
        )
        .await
    }

    pub async fn add_route(&self, payload: &NewRouteRequest) -> Result<String, ApiError> {
        let response = self.post("/routes", Some(payload)).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(string_body_or(&body, "Route added"))
    }

    // ---- bookings -------------------------------------------------------

    pub async fn book_route(
        &self,
        route_id: i64,
        payload: &BookSeatsRequest,
    ) -> Result<Booking, ApiError> {
        let response = self
            .post(&format!("/passengers/routes/{route_id}/book"), Some(payload))
            .await?;
        response
            .json::<Booking>()
            .await
            .map_err(|e| ApiError::transport(format!("Invalid response: {e}")))
    }

    pub async fn my_bookings(&self, booking_id: Option<&str>) -> Result<Vec<Booking>, ApiError> {
        let mut query = Vec::new();
        if let Some(id) = booking_id {
            query.push(("bookingId", id.to_string()));
        }
        self.get_json("/passengers/bookings", &query).await
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> Result<String, ApiError> {
        let response = self
            .post(
                &format!("/passengers/bookings/{booking_id}/cancel"),
                None::<&()>,
            )
            .await?;
        let body = response.text().await.unwrap_or_default();
        Ok(string_body_or(&body, "Cancelled"))
    }

    // ---- admin ----------------------------------------------------------

    pub async fn admin_bookings(
        &self,
        filters: &AdminBookingFilters,
    ) -> Result<Vec<Booking>, ApiError> {
        let mut query = Vec::new();
        if let Some(ref id) = filters.booking_id {
            query.push(("bookingId", id.clone()));
        }
        if let Some(ref date) = filters.date {
            query.push(("date", date.clone()));
        }
        if let Some(pid) = filters.passenger_id {
            query.push(("passengerId", pid.to_string()));
        }
        self.get_json("/admin/bookings", &query).await
    }

    pub async fn admin_statistics(&self) -> Result<Statistics, ApiError> {
        self.get_json("/admin/statistics", &[]).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_body_wins() {
        assert_eq!(normalize_error_body(400, "Seats not available"), "Seats not available");
    }

    #[test]
    fn json_string_body_wins() {
        assert_eq!(normalize_error_body(400, "\"Seats not available\""), "Seats not available");
    }

    #[test]
    fn message_field_beats_error_field() {
        let body = r#"{"message":"Route not found","error":"Bad Request"}"#;
        assert_eq!(normalize_error_body(404, body), "Route not found");
    }

    #[test]
    fn error_field_used_when_no_message() {
        let body = r#"{"error":"Unauthorized"}"#;
        assert_eq!(normalize_error_body(401, body), "Unauthorized");
    }

    #[test]
    fn empty_or_opaque_body_synthesizes_status_message() {
        assert_eq!(normalize_error_body(500, ""), "Request failed (500)");
        assert_eq!(normalize_error_body(502, "   "), "Request failed (502)");
        assert_eq!(normalize_error_body(500, r#"{"code":7}"#), "Request failed (500)");
    }

    #[test]
    fn success_string_bodies_pass_through() {
        assert_eq!(string_body_or("Cancelled booking b-1", "Cancelled"), "Cancelled booking b-1");
        assert_eq!(string_body_or("\"Route added\"", "ok"), "Route added");
        assert_eq!(string_body_or("", "Cancelled"), "Cancelled");
        assert_eq!(string_body_or(r#"{"ok":true}"#, "Cancelled"), "Cancelled");
    }

    #[test]
    fn transport_error_falls_back_to_generic_message() {
        assert_eq!(ApiError::transport(String::new()).message, "Network error");
        assert_eq!(ApiError::transport("  ".to_string()).message, "Network error");
        let e = ApiError::transport("failed to fetch".to_string());
        assert_eq!(e.message, "failed to fetch");
        assert_eq!(e.status, None);
    }
}
