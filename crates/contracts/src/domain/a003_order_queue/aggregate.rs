use crate::domain::a002_order::Order;
use serde::{Deserialize, Serialize};

/// Which collection an order was found in. Pending orders are still
/// editable; history records are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderLocation {
    Pending,
    History,
}

/// The pending order queue plus the append-only history of closed orders.
///
/// Storage is private on purpose: callers go through the operations below,
/// never through raw indexable collections. The pending side is
/// insertion-ordered (FIFO by default), the history side is ordered by the
/// moment each order was closed. An assigned order number lives in exactly
/// one of the two collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQueue {
    pending: Vec<Order>,
    history: Vec<Order>,
    #[serde(rename = "nextNumber")]
    next_number: u64,
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            history: Vec::new(),
            next_number: 1,
        }
    }
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next created order will receive
    pub fn next_number(&self) -> u64 {
        self.next_number
    }

    /// Claim the next order number, advancing the counter. Numbers are
    /// strictly increasing and never reused.
    pub fn take_next_number(&mut self) -> u64 {
        let number = self.next_number;
        self.next_number += 1;
        number
    }

    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    pub fn history(&self) -> &[Order] {
        &self.history
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_pending_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Append a freshly created order to the back of the queue
    pub fn push_pending(&mut self, order: Order) {
        self.pending.push(order);
    }

    /// Remove and return the pending order at `position`, or None when the
    /// position is out of range. Position 0 is the queue head.
    pub fn remove_pending_at(&mut self, position: usize) -> Option<Order> {
        if position < self.pending.len() {
            Some(self.pending.remove(position))
        } else {
            None
        }
    }

    /// Append a closed order to history. History is append-only; records
    /// are never edited or removed.
    pub fn push_history(&mut self, order: Order) {
        self.history.push(order);
    }

    /// Find an order by number, searching pending first, then history.
    pub fn find(&self, number: u64) -> Option<(&Order, OrderLocation)> {
        if let Some(order) = self.pending.iter().find(|o| o.number == number) {
            return Some((order, OrderLocation::Pending));
        }
        self.history
            .iter()
            .find(|o| o.number == number)
            .map(|order| (order, OrderLocation::History))
    }

    /// Mutable access to a pending order. History records stay immutable.
    pub fn find_pending_mut(&mut self, number: u64) -> Option<&mut Order> {
        self.pending.iter_mut().find(|o| o.number == number)
    }

    /// Queue position of a pending order
    pub fn pending_position(&self, number: u64) -> Option<usize> {
        self.pending.iter().position(|o| o.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::{AddOnSet, Customer, Order};
    use chrono::Utc;

    fn order(number: u64) -> Order {
        Order::new(
            number,
            Customer {
                name: "Carla".into(),
                phone: "555-0103".into(),
            },
            "Margherita".into(),
            "medium".into(),
            AddOnSet::new(),
            String::new(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_numbers_strictly_increase() {
        let mut queue = OrderQueue::new();
        assert_eq!(queue.take_next_number(), 1);
        assert_eq!(queue.take_next_number(), 2);
        assert_eq!(queue.take_next_number(), 3);
        assert_eq!(queue.next_number(), 4);
    }

    #[test]
    fn test_remove_at_position() {
        let mut queue = OrderQueue::new();
        queue.push_pending(order(1));
        queue.push_pending(order(2));
        queue.push_pending(order(3));

        let removed = queue.remove_pending_at(1).unwrap();
        assert_eq!(removed.number, 2);
        assert_eq!(queue.pending_len(), 2);
        assert!(queue.remove_pending_at(2).is_none());
    }

    #[test]
    fn test_find_prefers_pending() {
        let mut queue = OrderQueue::new();
        queue.push_pending(order(1));
        queue.push_history(order(2));

        assert_eq!(queue.find(1).unwrap().1, OrderLocation::Pending);
        assert_eq!(queue.find(2).unwrap().1, OrderLocation::History);
        assert!(queue.find(3).is_none());
    }

    #[test]
    fn test_history_keeps_closing_order() {
        let mut queue = OrderQueue::new();
        queue.push_history(order(5));
        queue.push_history(order(2));
        let numbers: Vec<u64> = queue.history().iter().map(|o| o.number).collect();
        assert_eq!(numbers, [5, 2]);
    }
}
