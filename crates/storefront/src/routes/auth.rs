//! Auth button placeholder.
//!
//! There are no accounts; the button only explains what a login form would
//! contain.

use axum::extract::State;
use axum::response::IntoResponse;
use sakura_core::messages;

use super::NoticeView;
use super::cart::NoticesTemplate;
use crate::state::AppState;

/// Show the auth placeholder as an alert (HTMX).
pub async fn placeholder(State(state): State<AppState>) -> impl IntoResponse {
    NoticesTemplate {
        notices: vec![NoticeView {
            message: messages::AUTH_PLACEHOLDER.to_owned(),
            is_alert: true,
        }],
        notice_ms: state.config().notification_ms,
    }
}
