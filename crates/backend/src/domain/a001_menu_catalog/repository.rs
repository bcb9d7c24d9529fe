use crate::shared::error::{DomainError, DomainResult};
use contracts::domain::a001_menu_catalog::{Flavor, MenuCatalog};
use std::collections::BTreeMap;
use std::path::Path;

/// Load the catalog snapshot.
///
/// `Ok(None)` means no snapshot exists yet (a normal first run); a file
/// that exists but cannot be read or parsed is an error for the caller to
/// degrade on.
pub fn load(path: &Path) -> DomainResult<Option<MenuCatalog>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Persistence(format!("read {}: {e}", path.display())))?;
    let catalog = serde_json::from_str(&contents)
        .map_err(|e| DomainError::Persistence(format!("parse {}: {e}", path.display())))?;
    Ok(Some(catalog))
}

/// Write the catalog snapshot, creating parent directories as needed
pub fn save(path: &Path, catalog: &MenuCatalog) -> DomainResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DomainError::Persistence(format!("create {}: {e}", parent.display())))?;
    }
    let contents = serde_json::to_string_pretty(catalog)
        .map_err(|e| DomainError::Persistence(format!("encode catalog: {e}")))?;
    std::fs::write(path, contents)
        .map_err(|e| DomainError::Persistence(format!("write {}: {e}", path.display())))?;
    Ok(())
}

fn flavor(ingredients: &[&str], prices: [f64; 4]) -> Flavor {
    Flavor {
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        prices_by_size: BTreeMap::from([
            ("small".to_string(), prices[0]),
            ("medium".to_string(), prices[1]),
            ("large".to_string(), prices[2]),
            ("family".to_string(), prices[3]),
        ]),
    }
}

/// The base menu used when no catalog snapshot exists yet
pub fn seed_catalog() -> MenuCatalog {
    let mut flavors = BTreeMap::new();
    flavors.insert(
        "Margherita".to_string(),
        flavor(&["Tomato sauce", "Mozzarella", "Basil"], [30.0, 40.0, 52.0, 60.0]),
    );
    flavors.insert(
        "Calabresa".to_string(),
        flavor(
            &["Tomato sauce", "Mozzarella", "Calabresa sausage", "Onion"],
            [32.0, 42.0, 50.0, 62.0],
        ),
    );
    flavors.insert(
        "Chicken & Catupiry".to_string(),
        flavor(
            &["Tomato sauce", "Mozzarella", "Chicken", "Catupiry"],
            [35.0, 45.0, 58.0, 65.0],
        ),
    );
    flavors.insert(
        "Portuguesa".to_string(),
        flavor(
            &["Tomato sauce", "Mozzarella", "Ham", "Eggs", "Onion", "Peas"],
            [38.0, 48.0, 55.0, 68.0],
        ),
    );
    flavors.insert(
        "Four Cheese".to_string(),
        flavor(
            &["Tomato sauce", "Mozzarella", "Parmesan", "Provolone", "Gorgonzola"],
            [40.0, 50.0, 60.0, 70.0],
        ),
    );
    flavors.insert(
        "Ham".to_string(),
        flavor(
            &["Tomato sauce", "Ham", "Mozzarella", "Tomato slices"],
            [30.0, 35.0, 45.0, 50.0],
        ),
    );
    flavors.insert(
        "Bacon".to_string(),
        flavor(
            &["Tomato sauce", "Mozzarella", "Bacon", "Tomato slices"],
            [35.0, 45.0, 55.0, 65.0],
        ),
    );
    flavors.insert(
        "Napolitana".to_string(),
        flavor(
            &["Tomato sauce", "Mozzarella", "Tomato slices", "Grated parmesan"],
            [40.0, 50.0, 60.0, 70.0],
        ),
    );

    let add_ons = BTreeMap::from([
        ("Stuffed crust".to_string(), 8.0),
        ("Extra catupiry".to_string(), 5.0),
        ("Extra cheddar".to_string(), 5.0),
        ("Bacon".to_string(), 6.0),
        ("Olives".to_string(), 3.0),
        ("Heart of palm".to_string(), 7.0),
    ]);

    MenuCatalog {
        flavors,
        add_ons,
        sizes: vec![
            "small".to_string(),
            "medium".to_string(),
            "large".to_string(),
            "family".to_string(),
        ],
    }
}
