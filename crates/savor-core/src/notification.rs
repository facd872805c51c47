//! # Notification Module
//!
//! [`Notification`] - a one-shot, simulated message dispatch record.
//!
//! Sending performs no delivery: it stamps the send time and returns a
//! [`Dispatch`] receipt for the caller to render. That keeps the domain
//! pure; a real delivery channel would consume the receipt outside this
//! crate.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationResult;
use crate::validation::{validate_email, validate_required_text};

// =============================================================================
// Notification
// =============================================================================

/// A message to a recipient, with an optional sent timestamp.
///
/// The type label is free text ("Email", "SMS", ...) and deliberately
/// unconstrained - even an empty label is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    message: String,
    recipient_email: String,
    notification_type: String,
    sent_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Creates a validated, unsent notification.
    ///
    /// ## Validation
    /// - message non-empty
    /// - recipient email contains '@'
    pub fn new(
        message: impl Into<String>,
        recipient_email: impl Into<String>,
        notification_type: impl Into<String>,
    ) -> ValidationResult<Self> {
        let message = message.into();
        let recipient_email = recipient_email.into();

        validate_required_text("notification message", &message)?;
        validate_email("recipient email", &recipient_email)?;

        Ok(Notification {
            message,
            recipient_email,
            notification_type: notification_type.into(),
            sent_at: None,
        })
    }

    /// Convenience constructor with the default "Email" type.
    pub fn email(
        message: impl Into<String>,
        recipient_email: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::new(message, recipient_email, "Email")
    }

    /// The message content.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The recipient's email address.
    #[inline]
    pub fn recipient_email(&self) -> &str {
        &self.recipient_email
    }

    /// The type label ("Email", "SMS", ...).
    #[inline]
    pub fn notification_type(&self) -> &str {
        &self.notification_type
    }

    /// When the notification was sent, or `None` if it never was.
    #[inline]
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }

    /// Simulates dispatch: stamps the current time (overwriting any prior
    /// send) and returns a receipt. No external delivery happens.
    pub fn send(&mut self) -> Dispatch {
        let sent_at = Utc::now();
        self.sent_at = Some(sent_at);
        debug!(
            recipient = %self.recipient_email,
            kind = %self.notification_type,
            "Notification dispatched"
        );
        Dispatch {
            notification_type: self.notification_type.clone(),
            recipient_email: self.recipient_email.clone(),
            message: self.message.clone(),
            sent_at,
        }
    }
}

// =============================================================================
// Dispatch Receipt
// =============================================================================

/// Receipt returned by [`Notification::send`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    pub notification_type: String,
    pub recipient_email: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Fixed-format dispatch confirmation.
impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sending {} Notification\n\
             To: {}\n\
             Message: {}\n\
             Sent at: {}",
            self.notification_type,
            self.recipient_email,
            self.message,
            self.sent_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
