use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an order.
///
/// The legal progression is Pending → InPreparation → OutForDelivery →
/// Delivered. Cancelled is reachable from any non-terminal state. Delivered
/// and Cancelled are terminal: reaching either moves the order into history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InPreparation,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Stable code used in snapshots
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InPreparation => "in-preparation",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InPreparation => "In preparation",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses in lifecycle order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::InPreparation,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    /// Parse from a snapshot code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "in-preparation" => Some(OrderStatus::InPreparation),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Terminal statuses close the order and move it into history
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether the state machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        match (*self, next) {
            (OrderStatus::Pending, OrderStatus::InPreparation) => true,
            (OrderStatus::InPreparation, OrderStatus::OutForDelivery) => true,
            (OrderStatus::OutForDelivery, OrderStatus::Delivered) => true,
            (from, OrderStatus::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
