use crate::shared::error::{DomainError, DomainResult};
use crate::shared::state::AppState;
use chrono::{DateTime, Utc};
use contracts::domain::a002_order::{compute_prep_minutes, AddOnSet, Order};
use contracts::domain::a003_order_queue::{
    OrderChange, OrderDetails, OrderDraft, OrderLocation, OrderLookup, QueueEntryView,
};
use contracts::enums::OrderStatus;

/// Take a new order into the queue.
///
/// Validates the draft against the current catalog, assigns the next order
/// number, derives the preparation estimate, and persists the snapshot
/// before returning the created order.
pub fn enqueue(state: &mut AppState, draft: OrderDraft) -> DomainResult<Order> {
    if draft.customer.name.trim().is_empty() {
        return Err(DomainError::Validation("customer name must not be empty".into()));
    }
    if !state.catalog.has_flavor(&draft.flavor) {
        return Err(DomainError::Validation(format!(
            "flavor '{}' is not on the menu",
            draft.flavor
        )));
    }
    if !state.catalog.has_size(&draft.size) {
        return Err(DomainError::Validation(format!(
            "'{}' is not a recognized size",
            draft.size
        )));
    }
    // A flavor without a price for the chosen size is not orderable.
    state
        .catalog
        .lookup_price(&draft.flavor, &draft.size)
        .map_err(DomainError::Validation)?;
    for add_on in &draft.add_ons {
        if !state.catalog.has_add_on(add_on) {
            return Err(DomainError::Validation(format!(
                "add-on '{add_on}' is not on the menu"
            )));
        }
    }
    // Validate the prep estimate before a number is claimed, so a rejected
    // draft never burns one.
    compute_prep_minutes(&draft.size, draft.add_ons.len()).map_err(DomainError::Validation)?;

    let number = state.queue.take_next_number();
    let order = Order::new(
        number,
        draft.customer,
        draft.flavor,
        draft.size,
        AddOnSet::from_names(draft.add_ons),
        draft.notes,
        Utc::now(),
    )
    .map_err(DomainError::Validation)?;

    state.queue.push_pending(order.clone());
    state.persist_orders()?;
    Ok(order)
}

/// Read-only view of the pending queue, each order annotated with how
/// long it has been waiting as of `now`.
pub fn peek_all(state: &AppState, now: DateTime<Utc>) -> Vec<QueueEntryView> {
    state
        .queue
        .pending()
        .iter()
        .map(|order| QueueEntryView {
            order: order.clone(),
            waiting_minutes: order.waiting_minutes(now),
        })
        .collect()
}

/// Deliver the pending order at `position` (default: the queue head).
///
/// Any pending order may be delivered out of turn. The order leaves the
/// queue, is marked Delivered, and becomes an immutable history record.
pub fn deliver(state: &mut AppState, position: Option<usize>) -> DomainResult<Order> {
    if state.queue.is_pending_empty() {
        return Err(DomainError::EmptyQueue);
    }
    let position = position.unwrap_or(0);
    let len = state.queue.pending_len();
    let mut order = state
        .queue
        .remove_pending_at(position)
        .ok_or(DomainError::PositionOutOfRange { position, len })?;
    order.status = OrderStatus::Delivered;
    state.queue.push_history(order.clone());
    state.persist_orders()?;
    Ok(order)
}

/// Cancel a pending order: a terminal transition that moves it into
/// history, marked distinctly from Delivered so reporting can skip it.
pub fn cancel(state: &mut AppState, number: u64) -> DomainResult<Order> {
    mutate(state, number, OrderChange::Status(OrderStatus::Cancelled))
}

/// Look an order up by number, searching the queue first, then history.
pub fn find_by_number(state: &AppState, number: u64) -> DomainResult<OrderLookup> {
    state
        .queue
        .find(number)
        .map(|(order, location)| OrderLookup {
            order: order.clone(),
            location,
        })
        .ok_or_else(|| DomainError::NotFound(format!("order #{number}")))
}

/// Detail view of one order: the record plus whatever the current catalog
/// can still derive for it (ingredients, value).
pub fn order_details(state: &AppState, number: u64, now: DateTime<Utc>) -> DomainResult<OrderDetails> {
    let lookup = find_by_number(state, number)?;
    let ingredients = state
        .catalog
        .flavors
        .get(&lookup.order.flavor)
        .map(|flavor| flavor.ingredients.clone());
    let value = state.catalog.order_value(&lookup.order).ok();
    let waiting_minutes = lookup.order.waiting_minutes(now);
    Ok(OrderDetails {
        order: lookup.order,
        location: lookup.location,
        ingredients,
        value,
        waiting_minutes,
    })
}

/// Apply one in-place change to a pending order.
///
/// History records are immutable; a terminal status change transfers the
/// order to history. `prep_minutes` is re-derived whenever the size or the
/// add-on set changes, and the snapshot is persisted after every
/// successful mutation.
pub fn mutate(state: &mut AppState, number: u64, change: OrderChange) -> DomainResult<Order> {
    // Locate first so immutable history records are reported as such.
    match state.queue.find(number) {
        Some((_, OrderLocation::History)) => return Err(DomainError::ImmutableRecord(number)),
        Some((_, OrderLocation::Pending)) => {}
        None => return Err(DomainError::NotFound(format!("order #{number}"))),
    }

    if let OrderChange::Status(next) = change {
        return change_status(state, number, next);
    }

    let catalog = &state.catalog;
    let order = state
        .queue
        .find_pending_mut(number)
        .ok_or_else(|| DomainError::NotFound(format!("order #{number}")))?;

    match change {
        OrderChange::Flavor(flavor) => {
            if !catalog.has_flavor(&flavor) {
                return Err(DomainError::Validation(format!(
                    "flavor '{flavor}' is not on the menu"
                )));
            }
            catalog
                .lookup_price(&flavor, &order.size)
                .map_err(DomainError::Validation)?;
            order.flavor = flavor;
        }
        OrderChange::Size(size) => {
            if !catalog.has_size(&size) {
                return Err(DomainError::Validation(format!(
                    "'{size}' is not a recognized size"
                )));
            }
            catalog
                .lookup_price(&order.flavor, &size)
                .map_err(DomainError::Validation)?;
            compute_prep_minutes(&size, order.add_ons.len()).map_err(DomainError::Validation)?;
            order.size = size;
            order.recompute_prep_minutes().map_err(DomainError::Validation)?;
        }
        OrderChange::AddOnAdd(name) => {
            if !catalog.has_add_on(&name) {
                return Err(DomainError::Validation(format!(
                    "add-on '{name}' is not on the menu"
                )));
            }
            if !order.add_ons.insert(&name) {
                return Err(DomainError::Validation(format!(
                    "add-on '{name}' is already on the order"
                )));
            }
            order.recompute_prep_minutes().map_err(DomainError::Validation)?;
        }
        OrderChange::AddOnRemove(name) => {
            if !order.add_ons.remove(&name) {
                return Err(DomainError::Validation(format!(
                    "add-on '{name}' is not on the order"
                )));
            }
            order.recompute_prep_minutes().map_err(DomainError::Validation)?;
        }
        OrderChange::AddOnReplace(names) => {
            for name in &names {
                if !catalog.has_add_on(name) {
                    return Err(DomainError::Validation(format!(
                        "add-on '{name}' is not on the menu"
                    )));
                }
            }
            order.add_ons = AddOnSet::from_names(names);
            order.recompute_prep_minutes().map_err(DomainError::Validation)?;
        }
        OrderChange::Notes(notes) => {
            order.notes = notes;
        }
        OrderChange::Status(_) => unreachable!("handled above"),
    }

    let updated = order.clone();
    state.persist_orders()?;
    Ok(updated)
}

/// Move a pending order through the status state machine. Terminal
/// statuses transfer the order into history.
fn change_status(state: &mut AppState, number: u64, next: OrderStatus) -> DomainResult<Order> {
    let current = state
        .queue
        .find(number)
        .map(|(order, _)| order.status)
        .ok_or_else(|| DomainError::NotFound(format!("order #{number}")))?;
    if !current.can_transition_to(next) {
        return Err(DomainError::InvalidStatus {
            from: current,
            to: next,
        });
    }

    if next.is_terminal() {
        let position = state
            .queue
            .pending_position(number)
            .ok_or_else(|| DomainError::NotFound(format!("order #{number}")))?;
        let mut order = state
            .queue
            .remove_pending_at(position)
            .ok_or_else(|| DomainError::NotFound(format!("order #{number}")))?;
        order.status = next;
        state.queue.push_history(order.clone());
        state.persist_orders()?;
        return Ok(order);
    }

    let order = state
        .queue
        .find_pending_mut(number)
        .ok_or_else(|| DomainError::NotFound(format!("order #{number}")))?;
    order.status = next;
    let updated = order.clone();
    state.persist_orders()?;
    Ok(updated)
}
