//! User prompt for HTTP requests.
//!
//! A browser cannot block a request on a dialog, so confirmation happens
//! client-side (`hx-confirm`) before the request is sent and arrives as a form
//! field. Alerts and notifications are collected and rendered into the
//! response fragment.

use sakura_core::{Notice, UserPrompt};

/// Answers confirmations with the decision the browser already made.
#[derive(Debug, Default)]
pub struct FormPrompt {
    confirmed: bool,
    notices: Vec<Notice>,
}

impl FormPrompt {
    /// Create a prompt that answers every confirmation with `confirmed`.
    #[must_use]
    pub const fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            notices: Vec::new(),
        }
    }

    /// Alerts and notifications to show, in order.
    #[must_use]
    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

impl UserPrompt for FormPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!(
            question = message,
            confirmed = self.confirmed,
            "Confirmation answered by form"
        );
        self.confirmed
    }

    fn alert(&mut self, message: &str) {
        self.notices.push(Notice::Alert(message.to_owned()));
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(Notice::Notification(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_uses_form_decision() {
        assert!(FormPrompt::new(true).confirm("?"));
        assert!(!FormPrompt::new(false).confirm("?"));
    }

    #[test]
    fn test_notices_exclude_confirmations() {
        let mut prompt = FormPrompt::new(true);
        prompt.confirm("Очистить?");
        prompt.notify("Корзина очищена!");
        prompt.alert("Корзина пуста!");

        assert_eq!(
            prompt.into_notices(),
            [
                Notice::Notification("Корзина очищена!".to_owned()),
                Notice::Alert("Корзина пуста!".to_owned()),
            ]
        );
    }
}
