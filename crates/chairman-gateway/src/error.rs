//! Error types for the gateway.
//!
//! [`GatewayError`] unifies all request failure modes into a single enum
//! that converts into a plain-text HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use chairman_store::SeatError;

use crate::handlers::TEXT_CONTENT_TYPE;

/// Methods accepted on the seat listing route.
const ALLOWED_METHODS: &str = "GET";

/// Errors that can occur while answering a request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The seat service failed to produce a listing.
    #[error("list seats: {0}")]
    Store(#[from] SeatError),

    /// The listing could not be encoded as JSON.
    #[error("encode response: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The route exists but does not accept this method.
    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(Method),
}

impl GatewayError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(SeatError::SeatNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(SeatError::InvalidSeat { .. }) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// The short message sent to the client.
    ///
    /// Encoder internals stay in the log.
    fn public_message(&self) -> String {
        match self {
            Self::Store(SeatError::SeatNotFound(id)) => format!("seat not found: {id}"),
            Self::Serialization(_) => String::from("encode response"),
            Self::Store(_) | Self::MethodNotAllowed(_) => self.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let mut response = (
            status,
            [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
            self.public_message(),
        )
            .into_response();

        if matches!(self, Self::MethodNotAllowed(_)) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }

        response
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chairman_store::InvalidSeatReason;
    use chairman_types::SeatId;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn method_not_allowed_names_the_method() {
        let response = GatewayError::MethodNotAllowed(Method::DELETE).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET");
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_CONTENT_TYPE);
        assert_eq!(body_text(response).await, "Method Not Allowed: DELETE");
    }

    #[tokio::test]
    async fn store_failure_is_internal_error() {
        let err = GatewayError::from(SeatError::InvalidSeat {
            id: SeatId::new(1),
            reason: InvalidSeatReason::DuplicateId,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "list seats: invalid seat 1: duplicate seat id"
        );
    }

    #[tokio::test]
    async fn encoder_details_are_not_exposed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = GatewayError::from(json_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "encode response");
    }

    #[test]
    fn seat_not_found_maps_to_404() {
        let err = GatewayError::from(SeatError::SeatNotFound(SeatId::new(3)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
