//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sakura_core::{CartError, ProductError, StorageError, StoreError};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request targeted an item that is not in the cart.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The cart could not be persisted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The submitted product card is invalid.
    #[error("Invalid product: {0}")]
    Product(#[from] ProductError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Cart(e) => Self::Cart(e),
            StoreError::Storage(e) => Self::Storage(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Storage(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status = match &self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Cart(CartError::UnknownItem(_)) => StatusCode::NOT_FOUND,
            Self::Cart(CartError::InvalidIndex { .. }) | Self::Product(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Storage(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Cart(CartError::UnknownItem("Кола".to_string()));
        assert_eq!(err.to_string(), "Cart error: no cart item named \"Кола\"");

        let err = AppError::Product(ProductError::EmptyName);
        assert!(err.to_string().starts_with("Invalid product: "));
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::Cart(CartError::UnknownItem("x".to_string()))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Cart(CartError::InvalidIndex { index: 1, len: 0 })),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Product(ProductError::EmptyName)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Storage(StorageError::Backend("disk".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_is_split() {
        let err: AppError = StoreError::Cart(CartError::UnknownItem("x".to_string())).into();
        assert!(matches!(err, AppError::Cart(_)));
    }
}
