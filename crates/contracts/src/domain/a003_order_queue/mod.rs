pub mod aggregate;
pub mod dto;

pub use aggregate::{OrderLocation, OrderQueue};
pub use dto::{OrderChange, OrderDetails, OrderDraft, OrderLookup, QueueEntryView};
