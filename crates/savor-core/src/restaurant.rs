//! # Restaurant Module
//!
//! [`Restaurant`] - an establishment with descriptive fields, opening
//! hours, and at most one assigned [`Menu`].
//!
//! ## Menu assignment
//! ```text
//! Restaurant::new ──► menu unset ("No menu set")
//!        │
//!        ▼
//! set_menu(menu) ──► replaces unconditionally, returns MenuAssigned
//! ```
//!
//! Mutations return a typed, `Display`able event instead of printing, so
//! the domain stays testable without output capture; callers print the
//! event when console parity is wanted.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::menu::Menu;
use crate::validation::{validate_rating, validate_required_text};

// =============================================================================
// Opening Hours
// =============================================================================

/// Ordered mapping from a day/period label to a textual time range,
/// e.g. `("Monday", "9:00-22:00")` or `("Weekend", "10:00-23:00")`.
///
/// Labels keep the order they were supplied in; the ranges are free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours(Vec<(String, String)>);

impl OpeningHours {
    /// Wraps label/range pairs; must be non-empty.
    pub fn new(entries: Vec<(String, String)>) -> ValidationResult<Self> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyCollection {
                field: "opening hours",
            });
        }
        Ok(OpeningHours(entries))
    }

    /// The range for a label, if present.
    pub fn range(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, range)| range.as_str())
    }

    /// All entries, in insertion order.
    #[inline]
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }
}

/// `Label: range` pairs joined by `, `.
impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, range) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{label}: {range}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Menu Assignment Event
// =============================================================================

/// Confirmation returned by [`Restaurant::set_menu`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuAssigned {
    pub menu_name: String,
    pub restaurant_name: String,
    /// Name of the menu that was replaced, if one was already assigned.
    pub replaced: Option<String>,
}

impl fmt::Display for MenuAssigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Menu '{}' has been set for {}.",
            self.menu_name, self.restaurant_name
        )
    }
}

// =============================================================================
// Restaurant
// =============================================================================

/// An establishment entity, optionally linked to one menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique identifier (UUID v4), generated at construction.
    id: Uuid,
    name: String,
    address: String,
    phone: u64,
    opening_hours: OpeningHours,
    cuisine_type: String,
    rating: f64,
    menu: Option<Menu>,
}

impl Restaurant {
    /// Creates a validated restaurant with no menu assigned.
    ///
    /// ## Validation
    /// - name, address, cuisine type non-empty
    /// - phone a positive integer
    /// - opening hours non-empty
    /// - rating in `[0.0, 5.0]`, inclusive on both ends
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: u64,
        opening_hours: OpeningHours,
        cuisine_type: impl Into<String>,
        rating: f64,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let address = address.into();
        let cuisine_type = cuisine_type.into();

        validate_required_text("restaurant name", &name)?;
        validate_required_text("restaurant address", &address)?;
        if phone == 0 {
            return Err(ValidationError::MustBePositive {
                field: "restaurant phone",
            });
        }
        validate_required_text("cuisine type", &cuisine_type)?;
        validate_rating(rating)?;

        Ok(Restaurant {
            id: Uuid::new_v4(),
            name,
            address,
            phone,
            opening_hours,
            cuisine_type,
            rating,
            menu: None,
        })
    }

    /// The generated unique id of this restaurant.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Establishment name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical address.
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Contact phone number.
    #[inline]
    pub fn phone(&self) -> u64 {
        self.phone
    }

    /// Opening hours.
    #[inline]
    pub fn opening_hours(&self) -> &OpeningHours {
        &self.opening_hours
    }

    /// Cuisine type ("Italian", "Japanese", ...).
    #[inline]
    pub fn cuisine_type(&self) -> &str {
        &self.cuisine_type
    }

    /// Average customer rating, 0 to 5.
    #[inline]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// The assigned menu, if any.
    #[inline]
    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// Mutable access to the assigned menu, if any.
    #[inline]
    pub fn menu_mut(&mut self) -> Option<&mut Menu> {
        self.menu.as_mut()
    }

    /// Assigns a menu, replacing any existing one unconditionally.
    ///
    /// Returns a [`MenuAssigned`] confirmation naming both the menu and
    /// the restaurant (and the menu it replaced, if any).
    pub fn set_menu(&mut self, menu: Menu) -> MenuAssigned {
        debug!(restaurant = %self.name, menu = %menu.name(), "Assigning menu");
        let replaced = self.menu.take().map(|old| old.name().to_string());
        let event = MenuAssigned {
            menu_name: menu.name().to_string(),
            restaurant_name: self.name.clone(),
            replaced,
        };
        self.menu = Some(menu);
        event
    }
}

/// All descriptive fields plus the current menu's name or an explicit
/// "No menu set" indicator.
impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let menu_status = self
            .menu
            .as_ref()
            .map(|m| m.name())
            .unwrap_or("No menu set");
        write!(
            f,
            "Restaurant Name: {}\n\
             Address: {}\n\
             Phone: {}\n\
             Cuisine: {}\n\
             Opening hours: {}\n\
             Rating: {}/5 stars\n\
             Current menu: {}",
            self.name,
            self.address,
            self.phone,
            self.cuisine_type,
            self.opening_hours,
            self.rating,
            menu_status,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
