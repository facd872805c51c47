//! # Order Module
//!
//! [`Order`] - a transaction linking one client, one restaurant, and a
//! quantity-mapping of menu items, with a status drawn from a closed set.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Order Operations                        │
//! │                                                             │
//! │  Caller Action            Order Change         Event        │
//! │  ─────────────            ────────────         ─────        │
//! │  Order::new ────────────► number drawn,        -            │
//! │                           Pending, no lines                 │
//! │  add_item(item, qty) ───► line += qty | push   ItemAdded    │
//! │  remove_item(item) ─────► line deleted         ItemRemoval  │
//! │  update_status(s) ──────► status = s           StatusChanged│
//! │  total() ───────────────► (read only, never cached)         │
//! │                                                             │
//! │  Events are Display-able confirmations; printing them is    │
//! │  the caller's choice, not the domain's.                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line identity
//! Lines are keyed by the menu item's generated UUID, with the name and
//! unit price frozen at add time (snapshot pattern). Two equal-looking
//! but distinct `MenuItem`s therefore stay distinct lines, and later
//! menu edits never change what an order charges.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::client::Client;
use crate::error::{DomainResult, ValidationError};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::restaurant::Restaurant;
use crate::validation::validate_quantity;

// =============================================================================
// Order Sequence
// =============================================================================

/// Issues unique, monotonically increasing order numbers, starting at 0.
///
/// ## Why injectable?
/// The counter is the one piece of process-wide state in the domain.
/// Keeping it in a handle the caller constructs (instead of a global
/// static) lets tests isolate their numbering and lets a multi-threaded
/// host share one clone per thread; `next` is a single atomic
/// read-modify-write, so uniqueness holds under concurrency.
#[derive(Debug, Clone, Default)]
pub struct OrderSequence(Arc<AtomicU64>);

impl OrderSequence {
    /// A fresh sequence starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next order number. Every call returns a new value.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// Transitions are unrestricted among the six members - any state may go
/// to any other, including `Cancelled` back to `Pending`. The only
/// validation is membership in the set, which the type system enforces;
/// free-text labels go through [`OrderStatus::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, not yet confirmed by the restaurant.
    #[default]
    Pending,
    /// Restaurant accepted the order.
    Confirmed,
    /// Kitchen is working on it.
    Preparing,
    /// Courier is on the way.
    OutForDelivery,
    /// Handed to the client.
    Delivered,
    /// Order was cancelled.
    Cancelled,
}

/// Human-readable labels, in declaration order. These are the exact
/// strings [`OrderStatus::from_str`] accepts.
pub const STATUS_LABELS: [&str; 6] = [
    "Pending",
    "Confirmed",
    "Preparing",
    "Out for Delivery",
    "Delivered",
    "Cancelled",
];

impl OrderStatus {
    /// All statuses, in declaration order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// The human-readable label for this status.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses one of the fixed labels ("Pending", ..., "Out for Delivery").
///
/// Anything outside the set fails with [`ValidationError::NotAllowed`],
/// which is how a free-text status update gets rejected without touching
/// the order.
impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .find(|status| status.label() == s)
            .copied()
            .ok_or(ValidationError::NotAllowed {
                field: "status",
                allowed: &STATUS_LABELS,
            })
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// A line in an order: one menu item and its quantity.
///
/// ## Snapshot pattern
/// `name` and `unit_price` are frozen at add time. If the menu item is
/// later removed or repriced, the order keeps charging what the client
/// saw when they ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Id of the menu item (line key).
    pub item_id: Uuid,

    /// Dish name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity ordered, always >= 1.
    pub quantity: i64,
}

impl OrderLine {
    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Mutation Events
// =============================================================================

/// Confirmation returned by [`Order::add_item`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAdded {
    pub order_number: u64,
    pub item_name: String,
    pub quantity: i64,
    /// Stored quantity on the line after this add.
    pub new_line_quantity: i64,
}

impl fmt::Display for ItemAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added {} x {} to order {}.",
            self.quantity, self.item_name, self.order_number
        )
    }
}

/// Outcome of [`Order::remove_item`]. Neither case is an error: removing
/// an absent item is reported, not raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ItemRemoval {
    /// The line existed and was deleted entirely.
    Removed { order_number: u64, item_name: String },
    /// The item was not on the order; nothing changed.
    NotInOrder { order_number: u64, item_name: String },
}

impl ItemRemoval {
    /// True when a line was actually deleted.
    pub fn was_removed(&self) -> bool {
        matches!(self, ItemRemoval::Removed { .. })
    }
}

impl fmt::Display for ItemRemoval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRemoval::Removed {
                order_number,
                item_name,
            } => write!(f, "Removed {item_name} from order {order_number}."),
            ItemRemoval::NotInOrder {
                order_number,
                item_name,
            } => write!(f, "{item_name} not found in order {order_number}."),
        }
    }
}

/// Confirmation returned by [`Order::update_status`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChanged {
    pub order_number: u64,
    pub status: OrderStatus,
    pub previous: OrderStatus,
}

impl fmt::Display for StatusChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {} status updated to: {}",
            self.order_number, self.status
        )
    }
}

// =============================================================================
// Order
// =============================================================================

/// A client's order at a restaurant.
///
/// Holds a clone of the (immutable) client and a snapshot of the
/// restaurant's id and name - the restaurant may mutate independently
/// after the order is placed, and the order only ever reports its name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    number: u64,
    client: Client,
    restaurant_id: Uuid,
    restaurant_name: String,
    lines: Vec<OrderLine>,
    placed_at: DateTime<Utc>,
    status: OrderStatus,
}

impl Order {
    /// Opens a new, empty, `Pending` order, drawing the next number from
    /// the sequence and stamping the current time.
    pub fn new(client: &Client, restaurant: &Restaurant, sequence: &OrderSequence) -> Self {
        let number = sequence.next();
        debug!(order = number, restaurant = %restaurant.name(), "Opening order");
        Order {
            number,
            client: client.clone(),
            restaurant_id: restaurant.id(),
            restaurant_name: restaurant.name().to_string(),
            lines: Vec::new(),
            placed_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    /// The sequential order number.
    #[inline]
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The client who placed the order.
    #[inline]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Id of the restaurant serving the order.
    #[inline]
    pub fn restaurant_id(&self) -> Uuid {
        self.restaurant_id
    }

    /// Name of the restaurant serving the order (frozen at creation).
    #[inline]
    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    /// When the order was created.
    #[inline]
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Lines, in insertion order.
    #[inline]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Checks whether the order has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` of a menu item to the order.
    ///
    /// ## Behavior
    /// - quantity <= 0 is a validation error, raised before any change
    /// - if the item (by id) is already on the order, its stored quantity
    ///   is incremented by `quantity`
    /// - otherwise a new line is appended with the item's name and price
    ///   frozen
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> DomainResult<ItemAdded> {
        validate_quantity(quantity)?;

        let new_line_quantity =
            if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id()) {
                line.quantity += quantity;
                line.quantity
            } else {
                self.lines.push(OrderLine {
                    item_id: item.id(),
                    name: item.name().to_string(),
                    unit_price: item.price(),
                    quantity,
                });
                quantity
            };

        debug!(order = self.number, item = %item.name(), quantity, "Added item to order");
        Ok(ItemAdded {
            order_number: self.number,
            item_name: item.name().to_string(),
            quantity,
            new_line_quantity,
        })
    }

    /// Removes a menu item's line entirely.
    ///
    /// An absent item is a [`ItemRemoval::NotInOrder`] outcome, not an
    /// error; the order is left unchanged.
    pub fn remove_item(&mut self, item: &MenuItem) -> ItemRemoval {
        let before = self.lines.len();
        self.lines.retain(|l| l.item_id != item.id());

        if self.lines.len() < before {
            debug!(order = self.number, item = %item.name(), "Removed item from order");
            ItemRemoval::Removed {
                order_number: self.number,
                item_name: item.name().to_string(),
            }
        } else {
            ItemRemoval::NotInOrder {
                order_number: self.number,
                item_name: item.name().to_string(),
            }
        }
    }

    /// Moves the order to a new status. Transitions are unrestricted
    /// among the members of [`OrderStatus`].
    pub fn update_status(&mut self, status: OrderStatus) -> StatusChanged {
        let previous = self.status;
        self.status = status;
        debug!(order = self.number, status = %status, "Order status updated");
        StatusChanged {
            order_number: self.number,
            status,
            previous,
        }
    }

    /// Total price of the order: sum of unit price × quantity over all
    /// lines. Zero for an empty order. Computed on demand, never cached.
    pub fn total(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// The fixed-format multi-line order report.
    pub fn details(&self) -> String {
        self.to_string()
    }
}

/// Order report: number, client name, restaurant name, time, status,
/// per-line `name x qty ($P.PP each)` entries (or an explicit "no items"
/// line), and the total to two decimals.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Details (Order #{})", self.number)?;
        writeln!(f, "Client: {}", self.client.name())?;
        writeln!(f, "Restaurant: {}", self.restaurant_name)?;
        writeln!(
            f,
            "Order Time: {}",
            self.placed_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Items:")?;
        if self.lines.is_empty() {
            writeln!(f, "No items in this order.")?;
        }
        for line in &self.lines {
            writeln!(
                f,
                "{} x {} ({} each)",
                line.name, line.quantity, line.unit_price
            )?;
        }
        write!(f, "Total: {}", self.total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::OpeningHours;

    fn test_client() -> Client {
        Client::new("Jane", "Doe", "jane@example.com", "+1 555 0100").unwrap()
    }

    fn test_restaurant() -> Restaurant {
        let hours = OpeningHours::new(vec![("Daily".into(), "9:00-22:00".into())]).unwrap();
        Restaurant::new("Trattoria Roma", "1 Via Appia", 15550100, hours, "Italian", 4.5).unwrap()
    }

    fn test_item(name: &str, cents: i64) -> MenuItem {
        MenuItem::new(
            name,
            format!("{name} description"),
            Money::from_cents(cents),
            500,
            300.0,
            vec!["gluten".into()],
            true,
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_sequence_is_monotonic_from_zero() {
        let seq = OrderSequence::new();
        let numbers: Vec<u64> = (0..5).map(|_| seq.next()).collect();
        assert_eq!(numbers, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sequence_unique_across_threads() {
        let seq = OrderSequence::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = seq.clone();
                std::thread::spawn(move || (0..100).map(|_| seq.next()).collect::<Vec<u64>>())
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
    }

    #[test]
    fn test_new_order_is_pending_and_empty() {
        let seq = OrderSequence::new();
        let order = Order::new(&test_client(), &test_restaurant(), &seq);

        assert_eq!(order.number(), 0);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.is_empty());
        assert!(order.total().is_zero());
        assert_eq!(order.client().full_name(), "Jane Doe");
        assert_eq!(order.restaurant_name(), "Trattoria Roma");
    }

    #[test]
    fn test_add_same_item_accumulates_quantity() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);
        let pizza = test_item("Margherita", 999);

        let event = order.add_item(&pizza, 2).unwrap();
        assert_eq!(event.to_string(), "Added 2 x Margherita to order 0.");
        let event = order.add_item(&pizza, 3).unwrap();
        assert_eq!(event.new_line_quantity, 5);

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity, 5);
    }

    #[test]
    fn test_distinct_items_with_same_name_stay_distinct() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);

        order.add_item(&test_item("Margherita", 999), 1).unwrap();
        order.add_item(&test_item("Margherita", 999), 1).unwrap();

        // Different ids, so two lines even though they look identical.
        assert_eq!(order.lines().len(), 2);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);
        let pizza = test_item("Margherita", 999);

        assert!(order.add_item(&pizza, 0).is_err());
        assert!(order.add_item(&pizza, -2).is_err());
        assert!(order.is_empty()); // nothing changed
    }

    #[test]
    fn test_remove_item_and_remove_absent() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);
        let pizza = test_item("Margherita", 999);
        let salad = test_item("Caprese", 750);

        order.add_item(&pizza, 2).unwrap();

        let outcome = order.remove_item(&pizza);
        assert!(outcome.was_removed());
        assert_eq!(outcome.to_string(), "Removed Margherita from order 0.");
        assert!(order.is_empty());

        // Absent item: informational outcome, no error, no change.
        let outcome = order.remove_item(&salad);
        assert!(!outcome.was_removed());
        assert_eq!(outcome.to_string(), "Caprese not found in order 0.");
    }

    #[test]
    fn test_total_price() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);

        order.add_item(&test_item("Margherita", 999), 2).unwrap();
        order.add_item(&test_item("Caprese", 500), 1).unwrap();

        assert_eq!(order.total(), Money::from_cents(2498)); // $24.98
    }

    #[test]
    fn test_status_labels_round_trip() {
        for (status, label) in OrderStatus::ALL.iter().zip(STATUS_LABELS) {
            assert_eq!(status.to_string(), label);
            assert_eq!(label.parse::<OrderStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_unknown_status_label_rejected_and_status_unchanged() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);

        let parsed = "Shipped".parse::<OrderStatus>();
        assert!(matches!(parsed, Err(ValidationError::NotAllowed { .. })));
        assert_eq!(order.status(), OrderStatus::Pending);

        // A valid label drives an update.
        let status = "Out for Delivery".parse::<OrderStatus>().unwrap();
        let event = order.update_status(status);
        assert_eq!(event.to_string(), "Order 0 status updated to: Out for Delivery");
        assert_eq!(order.status(), OrderStatus::OutForDelivery);
    }

    #[test]
    fn test_transitions_are_unrestricted() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);

        order.update_status(OrderStatus::Cancelled);
        let event = order.update_status(OrderStatus::Pending); // even backwards
        assert_eq!(event.previous, OrderStatus::Cancelled);
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_details_report() {
        let seq = OrderSequence::new();
        let mut order = Order::new(&test_client(), &test_restaurant(), &seq);

        let empty = order.details();
        assert!(empty.contains("Order Details (Order #0)"));
        assert!(empty.contains("Client: Jane"));
        assert!(empty.contains("Restaurant: Trattoria Roma"));
        assert!(empty.contains("Status: Pending"));
        assert!(empty.contains("No items in this order."));
        assert!(empty.ends_with("Total: $0.00"));

        order.add_item(&test_item("Margherita", 999), 2).unwrap();
        order.add_item(&test_item("Caprese", 500), 1).unwrap();
        let report = order.details();
        assert!(report.contains("Margherita x 2 ($9.99 each)"));
        assert!(report.contains("Caprese x 1 ($5.00 each)"));
        assert!(report.ends_with("Total: $24.98"));

        // Timestamp is formatted YYYY-MM-DD HH:MM:SS.
        let time_line = report
            .lines()
            .find(|l| l.starts_with("Order Time: "))
            .unwrap();
        assert_eq!(time_line.len(), "Order Time: ".len() + 19);
    }
}
