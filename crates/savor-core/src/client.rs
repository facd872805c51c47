//! # Client Module
//!
//! [`Client`] - a customer's contact record. Immutable after construction.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationResult;
use crate::validation::{validate_email, validate_required_text};

// =============================================================================
// Client
// =============================================================================

/// A customer's contact record.
///
/// All four text fields are required; the email must contain `'@'` but is
/// otherwise unparsed, and the phone is free text (digits are not checked).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier (UUID v4), generated at construction.
    id: Uuid,
    name: String,
    surname: String,
    email: String,
    phone: String,
}

impl Client {
    /// Creates a validated client record.
    ///
    /// ## Example
    /// ```rust
    /// use savor_core::client::Client;
    ///
    /// let client = Client::new("Jane", "Doe", "jane@example.com", "+1 555 0100").unwrap();
    /// assert_eq!(client.full_name(), "Jane Doe");
    /// ```
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let surname = surname.into();
        let email = email.into();
        let phone = phone.into();

        validate_required_text("client name", &name)?;
        validate_required_text("client surname", &surname)?;
        validate_email("client email", &email)?;
        validate_required_text("client phone", &phone)?;

        Ok(Client {
            id: Uuid::new_v4(),
            name,
            surname,
            email,
            phone,
        })
    }

    /// The generated unique id of this client.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// First name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surname.
    #[inline]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Email address.
    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number (free text).
    #[inline]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// First name and surname joined by a single space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }
}

/// Contact card: full name, email, phone.
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client: {}\nEmail: {}\nPhone: {}",
            self.full_name(),
            self.email,
            self.phone
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
