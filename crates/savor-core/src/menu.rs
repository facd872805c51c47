//! # Menu Module
//!
//! [`MenuItem`] - a single dish with price/nutrition/allergen metadata -
//! and [`Menu`], a named, ordered collection of them.
//!
//! ## Dual-Key Identity Pattern
//! Every menu item has:
//! - `id`: UUID v4 - immutable, generated at construction, used by orders
//!   to key their quantity lines
//! - `name`: human-readable business key - NOT unique; a menu may hold
//!   several items sharing a name, and name-based removal removes them all
//!
//! ## Lifecycle
//! ```text
//! MenuItem::new ──validates──► immutable value object
//!        │
//!        ▼
//! Menu::add_item ──► ordered sequence, name lookups, name removal
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{
    validate_non_empty, validate_positive, validate_positive_decimal, validate_price,
    validate_required_text,
};

// =============================================================================
// Menu Item
// =============================================================================

/// A single dish offering.
///
/// Immutable after construction apart from the availability toggle (see
/// [`MenuItem::set_available`]). All other fields are exposed through
/// read-only accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier (UUID v4), generated at construction.
    id: Uuid,
    name: String,
    description: String,
    price: Money,
    calories: u32,
    weight_grams: f64,
    allergens: Vec<String>,
    is_available: bool,
    preparation_time_minutes: u32,
}

impl MenuItem {
    /// Creates a validated menu item.
    ///
    /// ## Validation
    /// - description non-empty
    /// - price > 0
    /// - calories > 0
    /// - weight > 0.0 grams
    /// - allergens non-empty
    /// - `is_available` must be `true` - constructing an unavailable item
    ///   is rejected (documented contract; toggle afterwards with
    ///   [`MenuItem::set_available`])
    /// - preparation time > 0 minutes
    ///
    /// The name is intentionally NOT checked for emptiness; only the
    /// description carries that constraint.
    ///
    /// ## Example
    /// ```rust
    /// use savor_core::menu::MenuItem;
    /// use savor_core::money::Money;
    ///
    /// let item = MenuItem::new(
    ///     "Margherita",
    ///     "Tomato, mozzarella, basil",
    ///     Money::from_cents(999),
    ///     850,
    ///     420.0,
    ///     vec!["gluten".into(), "dairy".into()],
    ///     true,
    ///     15,
    /// )
    /// .unwrap();
    /// assert_eq!(item.name(), "Margherita");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        calories: u32,
        weight_grams: f64,
        allergens: Vec<String>,
        is_available: bool,
        preparation_time_minutes: u32,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let description = description.into();

        validate_required_text("description", &description)?;
        validate_price(price)?;
        validate_positive("calories", i64::from(calories))?;
        validate_positive_decimal("weight", weight_grams)?;
        validate_non_empty("allergens", &allergens)?;
        if !is_available {
            return Err(ValidationError::InvalidFormat {
                field: "is_available",
                reason: "item must be available at creation",
            });
        }
        validate_positive("preparation time", i64::from(preparation_time_minutes))?;

        Ok(MenuItem {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            calories,
            weight_grams,
            allergens,
            is_available,
            preparation_time_minutes,
        })
    }

    /// The generated unique id of this item.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The dish name (business key, not unique).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dish description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The dish price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Caloric content in kcal.
    #[inline]
    pub fn calories(&self) -> u32 {
        self.calories
    }

    /// Weight in grams.
    #[inline]
    pub fn weight_grams(&self) -> f64 {
        self.weight_grams
    }

    /// Allergen labels, in the order supplied at construction.
    #[inline]
    pub fn allergens(&self) -> &[String] {
        &self.allergens
    }

    /// Current availability.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Estimated preparation time in minutes.
    #[inline]
    pub fn preparation_time_minutes(&self) -> u32 {
        self.preparation_time_minutes
    }

    /// Toggles availability after construction.
    ///
    /// Construction always starts available; this is the only way an item
    /// becomes unavailable.
    pub fn set_available(&mut self, available: bool) {
        self.is_available = available;
    }
}

/// Fixed-format display block for a single dish.
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let availability = if self.is_available {
            "Available"
        } else {
            "Not Available"
        };
        write!(
            f,
            "Dish Name: {}\n\
             Description: {}\n\
             Price: {}\n\
             Calories: {} kcal\n\
             Weight: {:.2} grams\n\
             Allergens: {}\n\
             Availability: {}\n\
             Preparation time: {} minutes",
            self.name,
            self.description,
            self.price,
            self.calories,
            self.weight_grams,
            self.allergens.join(", "),
            availability,
            self.preparation_time_minutes,
        )
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A named, ordered collection of menu items.
///
/// ## Invariants
/// - Items keep insertion order
/// - Names are NOT unique; [`Menu::remove_item`] removes every item with
///   the given name, [`Menu::item`] returns the first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    name: String,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Creates an empty menu with a non-empty name.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        validate_required_text("menu name", &name)?;
        Ok(Menu {
            name,
            items: Vec::new(),
        })
    }

    /// The menu name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an item. No duplicate-name check.
    pub fn add_item(&mut self, item: MenuItem) {
        debug!(menu = %self.name, item = %item.name(), "Adding item to menu");
        self.items.push(item);
    }

    /// Removes every item whose name equals `item_name`, preserving the
    /// relative order of the remainder.
    ///
    /// Returns the number of items removed; 0 means the name was absent,
    /// which is a no-op, not an error.
    pub fn remove_item(&mut self, item_name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name() != item_name);
        let removed = before - self.items.len();
        debug!(menu = %self.name, item = %item_name, removed, "Removed items from menu");
        removed
    }

    /// Returns the first item (in sequence order) with the given name.
    pub fn item(&self, item_name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name() == item_name)
    }

    /// All items, in insertion order.
    #[inline]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items on the menu.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the menu has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Menu name followed by each item's display block, or an explicit empty
/// message.
impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Menu", self.name)?;
        if self.items.is_empty() {
            return write!(f, "No items in this menu yet.");
        }
        let mut first = true;
        for item in &self.items {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> MenuItem {
        MenuItem::new(
            "Margherita",
            "Tomato, mozzarella, basil",
            Money::from_cents(999),
            850,
            420.0,
            vec!["gluten".into(), "dairy".into()],
            true,
            15,
        )
        .unwrap()
    }

    #[test]
    fn test_item_round_trip() {
        let item = margherita();
        assert_eq!(item.name(), "Margherita");
        assert_eq!(item.description(), "Tomato, mozzarella, basil");
        assert_eq!(item.price(), Money::from_cents(999));
        assert_eq!(item.calories(), 850);
        assert!((item.weight_grams() - 420.0).abs() < f64::EPSILON);
        assert_eq!(item.allergens(), ["gluten", "dairy"]);
        assert!(item.is_available());
        assert_eq!(item.preparation_time_minutes(), 15);
    }

    #[test]
    fn test_item_rejects_bad_fields() {
        let base = |price, calories, weight, allergens: Vec<String>, available, prep| {
            MenuItem::new(
                "X",
                "desc",
                price,
                calories,
                weight,
                allergens,
                available,
                prep,
            )
        };

        assert!(base(Money::zero(), 1, 1.0, vec!["a".into()], true, 1).is_err());
        assert!(base(Money::from_cents(100), 0, 1.0, vec!["a".into()], true, 1).is_err());
        assert!(base(Money::from_cents(100), 1, 0.0, vec!["a".into()], true, 1).is_err());
        assert!(base(Money::from_cents(100), 1, 1.0, vec![], true, 1).is_err());
        assert!(base(Money::from_cents(100), 1, 1.0, vec!["a".into()], false, 1).is_err());
        assert!(base(Money::from_cents(100), 1, 1.0, vec!["a".into()], true, 0).is_err());
    }

    #[test]
    fn test_item_empty_description_rejected_but_empty_name_allowed() {
        let no_desc = MenuItem::new(
            "X",
            "",
            Money::from_cents(100),
            1,
            1.0,
            vec!["a".into()],
            true,
            1,
        );
        assert!(no_desc.is_err());

        // Name emptiness is deliberately unchecked.
        let no_name = MenuItem::new(
            "",
            "desc",
            Money::from_cents(100),
            1,
            1.0,
            vec!["a".into()],
            true,
            1,
        );
        assert!(no_name.is_ok());
    }

    #[test]
    fn test_item_display_block() {
        let rendered = margherita().to_string();
        assert_eq!(
            rendered,
            "Dish Name: Margherita\n\
             Description: Tomato, mozzarella, basil\n\
             Price: $9.99\n\
             Calories: 850 kcal\n\
             Weight: 420.00 grams\n\
             Allergens: gluten, dairy\n\
             Availability: Available\n\
             Preparation time: 15 minutes"
        );
    }

    #[test]
    fn test_set_available() {
        let mut item = margherita();
        item.set_available(false);
        assert!(!item.is_available());
        assert!(item.to_string().contains("Availability: Not Available"));
    }

    #[test]
    fn test_menu_requires_name() {
        assert!(Menu::new("Lunch").is_ok());
        assert!(Menu::new("").is_err());
    }

    #[test]
    fn test_menu_add_and_lookup_first_match() {
        let mut menu = Menu::new("Lunch").unwrap();
        let first = margherita();
        let first_id = first.id();
        menu.add_item(first);
        menu.add_item(margherita()); // duplicate name is allowed

        assert_eq!(menu.len(), 2);
        let found = menu.item("Margherita").unwrap();
        assert_eq!(found.id(), first_id); // first in sequence order
        assert!(menu.item("Carbonara").is_none());
    }

    #[test]
    fn test_menu_remove_all_by_name() {
        let mut menu = Menu::new("Lunch").unwrap();
        menu.add_item(margherita());
        menu.add_item(margherita());
        let other = MenuItem::new(
            "Tiramisu",
            "Classic dessert",
            Money::from_cents(650),
            450,
            180.0,
            vec!["dairy".into(), "eggs".into()],
            true,
            5,
        )
        .unwrap();
        menu.add_item(other);

        assert_eq!(menu.remove_item("Margherita"), 2);
        assert!(menu.item("Margherita").is_none());
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.items()[0].name(), "Tiramisu");

        // Absent name is a no-op.
        assert_eq!(menu.remove_item("Margherita"), 0);
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_menu_display_empty_and_populated() {
        let mut menu = Menu::new("Lunch").unwrap();
        assert_eq!(menu.to_string(), "Lunch Menu\nNo items in this menu yet.");

        menu.add_item(margherita());
        let rendered = menu.to_string();
        assert!(rendered.starts_with("Lunch Menu\nDish Name: Margherita"));
    }
}
