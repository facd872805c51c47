//! # savor-core: Pure Domain Logic for Savor
//!
//! This crate is the **heart** of Savor, a restaurant-ordering system. It
//! contains the whole domain model - menus, restaurants, clients, orders,
//! notifications - as pure, synchronous, in-memory logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Savor Architecture                      │
//! │                                                             │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │       Hosting application (CLI, service, ...)       │   │
//! │  │   wires entities, prints events, owns delivery      │   │
//! │  └──────────────────────────┬──────────────────────────┘   │
//! │                             │                               │
//! │  ┌──────────────────────────▼──────────────────────────┐   │
//! │  │             ★ savor-core (THIS CRATE) ★             │   │
//! │  │                                                     │   │
//! │  │  ┌────────┐ ┌──────────┐ ┌────────┐ ┌────────────┐ │   │
//! │  │  │  menu  │ │restaurant│ │ order  │ │notification│ │   │
//! │  │  │MenuItem│ │ Opening  │ │ Status │ │  Dispatch  │ │   │
//! │  │  │  Menu  │ │  Hours   │ │ Lines  │ │            │ │   │
//! │  │  └────────┘ └──────────┘ └────────┘ └────────────┘ │   │
//! │  │  ┌────────┐ ┌──────────┐ ┌─────────────────────┐   │   │
//! │  │  │ client │ │  money   │ │ error / validation  │   │   │
//! │  │  └────────┘ └──────────┘ └─────────────────────┘   │   │
//! │  │                                                     │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE LOGIC     │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Validate at the door**: every constructor checks its inputs; an
//!    entity that exists is an entity that is valid
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Events over printing**: mutations return `Display`-able
//!    confirmation values; the caller decides whether to print them
//! 5. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use savor_core::{Client, Menu, MenuItem, Money, OpeningHours, Order, OrderSequence,
//!                  OrderStatus, Restaurant};
//!
//! let mut restaurant = Restaurant::new(
//!     "Trattoria Roma",
//!     "1 Via Appia",
//!     15550100,
//!     OpeningHours::new(vec![("Daily".into(), "9:00-22:00".into())]).unwrap(),
//!     "Italian",
//!     4.5,
//! )
//! .unwrap();
//!
//! let pizza = MenuItem::new(
//!     "Margherita",
//!     "Tomato, mozzarella, basil",
//!     Money::from_cents(999),
//!     850,
//!     420.0,
//!     vec!["gluten".into(), "dairy".into()],
//!     true,
//!     15,
//! )
//! .unwrap();
//!
//! let mut menu = Menu::new("Lunch").unwrap();
//! menu.add_item(pizza.clone());
//! println!("{}", restaurant.set_menu(menu));
//!
//! let client = Client::new("Jane", "Doe", "jane@example.com", "+1 555 0100").unwrap();
//! let sequence = OrderSequence::new();
//! let mut order = Order::new(&client, &restaurant, &sequence);
//! order.add_item(&pizza, 2).unwrap();
//! order.update_status(OrderStatus::Confirmed);
//!
//! assert_eq!(order.total(), Money::from_cents(1998));
//! println!("{order}");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod menu;
pub mod money;
pub mod notification;
pub mod order;
pub mod restaurant;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use savor_core::Order` instead of
// `use savor_core::order::Order`.

pub use client::Client;
pub use error::{DomainError, DomainResult, ValidationError, ValidationResult};
pub use menu::{Menu, MenuItem};
pub use money::Money;
pub use notification::{Dispatch, Notification};
pub use order::{
    ItemAdded, ItemRemoval, Order, OrderLine, OrderSequence, OrderStatus, StatusChanged,
    STATUS_LABELS,
};
pub use restaurant::{MenuAssigned, OpeningHours, Restaurant};
