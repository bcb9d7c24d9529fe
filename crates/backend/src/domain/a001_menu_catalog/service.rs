use crate::shared::error::{DomainError, DomainResult};
use crate::shared::state::AppState;
use contracts::domain::a001_menu_catalog::{Flavor, MenuCatalog};
use std::collections::BTreeMap;

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::Validation(format!(
            "price must be a non-negative amount, got {price}"
        )));
    }
    Ok(())
}

/// Add a new flavor to the menu.
///
/// The flavor must carry a price for every recognized size label, so it is
/// immediately orderable. Persists the catalog snapshot.
pub fn add_flavor(
    state: &mut AppState,
    name: &str,
    ingredients: Vec<String>,
    prices_by_size: BTreeMap<String, f64>,
) -> DomainResult<()> {
    validate_name(name)?;
    if state.catalog.has_flavor(name) {
        return Err(DomainError::DuplicateName(format!("flavor '{name}'")));
    }
    for size in &state.catalog.sizes {
        match prices_by_size.get(size) {
            Some(price) => validate_price(*price)?,
            None => {
                return Err(DomainError::Validation(format!(
                    "missing price for size '{size}'"
                )))
            }
        }
    }
    for size in prices_by_size.keys() {
        if !state.catalog.has_size(size) {
            return Err(DomainError::Validation(format!(
                "'{size}' is not a recognized size"
            )));
        }
    }

    state.catalog.flavors.insert(
        name.to_string(),
        Flavor {
            ingredients,
            prices_by_size,
        },
    );
    state.persist_catalog()
}

/// Add a new priced add-on. Persists the catalog snapshot.
pub fn add_add_on(state: &mut AppState, name: &str, price: f64) -> DomainResult<()> {
    validate_name(name)?;
    if state.catalog.has_add_on(name) {
        return Err(DomainError::DuplicateName(format!("add-on '{name}'")));
    }
    validate_price(price)?;

    state.catalog.add_ons.insert(name.to_string(), price);
    state.persist_catalog()
}

/// Remove a flavor from the menu.
///
/// Does not cascade: orders already taken keep the flavor name as a plain
/// string reference and become orphaned for pricing purposes.
pub fn remove_flavor(state: &mut AppState, name: &str) -> DomainResult<()> {
    if state.catalog.flavors.remove(name).is_none() {
        return Err(DomainError::NotFound(format!("flavor '{name}'")));
    }
    state.persist_catalog()
}

/// Remove an add-on from the menu. No cascade, same as flavors.
pub fn remove_add_on(state: &mut AppState, name: &str) -> DomainResult<()> {
    if state.catalog.add_ons.remove(name).is_none() {
        return Err(DomainError::NotFound(format!("add-on '{name}'")));
    }
    state.persist_catalog()
}

/// Change the price of one flavor/size pair. Persists the catalog snapshot.
pub fn reprice_flavor(
    state: &mut AppState,
    name: &str,
    size: &str,
    new_price: f64,
) -> DomainResult<()> {
    validate_price(new_price)?;
    if !state.catalog.has_size(size) {
        return Err(DomainError::NotFound(format!("size '{size}'")));
    }
    let flavor = state
        .catalog
        .flavors
        .get_mut(name)
        .ok_or_else(|| DomainError::NotFound(format!("flavor '{name}'")))?;
    flavor.prices_by_size.insert(size.to_string(), new_price);
    state.persist_catalog()
}

/// Change the price of an add-on. Persists the catalog snapshot.
pub fn reprice_add_on(state: &mut AppState, name: &str, new_price: f64) -> DomainResult<()> {
    validate_price(new_price)?;
    let price = state
        .catalog
        .add_ons
        .get_mut(name)
        .ok_or_else(|| DomainError::NotFound(format!("add-on '{name}'")))?;
    *price = new_price;
    state.persist_catalog()
}

/// Strict price lookup for a flavor/size pair
pub fn lookup_price(state: &AppState, flavor: &str, size: &str) -> DomainResult<f64> {
    state
        .catalog
        .lookup_price(flavor, size)
        .map_err(DomainError::NotFound)
}

/// Read-only copy of the whole catalog, as plain data
pub fn catalog_view(state: &AppState) -> MenuCatalog {
    state.catalog.clone()
}
