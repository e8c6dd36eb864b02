//! User prompt capability.
//!
//! Cart flows never talk to a UI directly. They ask a [`UserPrompt`] to
//! confirm, alert or notify, so the same flow runs behind an HTML page, a
//! terminal or a test.

use std::collections::VecDeque;

/// Blocking dialogs and transient notifications.
pub trait UserPrompt {
    /// Ask a yes/no question. Blocks until the user answers.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&mut self, message: &str);

    /// Show a transient notification that disappears on its own.
    fn notify(&mut self, message: &str);
}

/// A message delivered through a [`UserPrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A question and the answer that was given.
    Confirm { message: String, answer: bool },
    Alert(String),
    Notification(String),
}

/// Prompt with pre-recorded answers that keeps a log of everything shown.
///
/// Unanswered confirmations are declined.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    log: Vec<Notice>,
}

impl ScriptedPrompt {
    /// Create a prompt that answers confirmations in order.
    #[must_use]
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            log: Vec::new(),
        }
    }

    /// Everything shown so far, in order.
    #[must_use]
    pub fn log(&self) -> &[Notice] {
        &self.log
    }

    /// Alerts shown so far.
    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.log.iter().filter_map(|notice| match notice {
            Notice::Alert(message) => Some(message.as_str()),
            _ => None,
        })
    }

    /// Notifications shown so far.
    pub fn notifications(&self) -> impl Iterator<Item = &str> {
        self.log.iter().filter_map(|notice| match notice {
            Notice::Notification(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let answer = self.answers.pop_front().unwrap_or(false);
        self.log.push(Notice::Confirm {
            message: message.to_owned(),
            answer,
        });
        answer
    }

    fn alert(&mut self, message: &str) {
        self.log.push(Notice::Alert(message.to_owned()));
    }

    fn notify(&mut self, message: &str) {
        self.log.push(Notice::Notification(message.to_owned()));
    }
}
