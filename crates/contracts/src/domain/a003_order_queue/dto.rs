use crate::domain::a002_order::{Customer, Order};
use crate::domain::a003_order_queue::OrderLocation;
use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Input for creating a new order. Validation happens in the queue
/// service against the current catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer: Customer,
    pub flavor: String,
    pub size: String,
    /// Requested add-ons; duplicates are collapsed to set semantics.
    #[serde(rename = "addOns", default)]
    pub add_ons: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// One in-place edit of a pending order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrderChange {
    Flavor(String),
    Size(String),
    AddOnAdd(String),
    AddOnRemove(String),
    AddOnReplace(Vec<String>),
    Notes(String),
    Status(OrderStatus),
}

/// Result of a lookup by order number: the record plus the collection it
/// currently lives in, so callers know whether it is still editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLookup {
    pub order: Order,
    pub location: OrderLocation,
}

/// One row of the queue view: the pending order annotated with how long
/// it has been waiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEntryView {
    pub order: Order,
    #[serde(rename = "waitingMinutes")]
    pub waiting_minutes: i64,
}

/// Detail view of a single order: the record plus whatever the current
/// catalog can still say about it. `ingredients` and `value` are None when
/// the flavor has been removed from the menu since the order was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order: Order,
    pub location: OrderLocation,
    pub ingredients: Option<Vec<String>>,
    pub value: Option<f64>,
    #[serde(rename = "waitingMinutes")]
    pub waiting_minutes: i64,
}
