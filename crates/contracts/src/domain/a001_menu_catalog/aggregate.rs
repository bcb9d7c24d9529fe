use crate::domain::a002_order::Order;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Flavor
// ============================================================================

/// A named pizza recipe: its ingredients and one price per size label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    pub ingredients: Vec<String>,

    /// Price per size label. A flavor is orderable only when every catalog
    /// size has an entry here.
    #[serde(rename = "pricesBySize")]
    pub prices_by_size: BTreeMap<String, f64>,
}

// ============================================================================
// Menu catalog
// ============================================================================

/// The pizzeria's menu: flavors, priced add-ons, and the recognized size
/// labels. Orders reference catalog entries by name, so removing an entry
/// does not cascade to orders already taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub flavors: BTreeMap<String, Flavor>,

    #[serde(rename = "addOns")]
    pub add_ons: BTreeMap<String, f64>,

    /// Recognized size labels, in menu order. Extensible only through an
    /// explicit catalog edit.
    pub sizes: Vec<String>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_flavor(&self, name: &str) -> bool {
        self.flavors.contains_key(name)
    }

    pub fn has_add_on(&self, name: &str) -> bool {
        self.add_ons.contains_key(name)
    }

    pub fn has_size(&self, label: &str) -> bool {
        self.sizes.iter().any(|s| s == label)
    }

    /// Configured price for a flavor/size pair.
    ///
    /// Strict by contract: a missing flavor, or a missing size entry for an
    /// existing flavor, is an error, never a silent default.
    pub fn lookup_price(&self, flavor: &str, size: &str) -> Result<f64, String> {
        let entry = self
            .flavors
            .get(flavor)
            .ok_or_else(|| format!("flavor '{flavor}' is not on the menu"))?;
        entry
            .prices_by_size
            .get(size)
            .copied()
            .ok_or_else(|| format!("flavor '{flavor}' has no price for size '{size}'"))
    }

    /// Monetary value of an order at current catalog prices.
    ///
    /// The flavor/size lookup is strict (a broken order fails loud), while
    /// add-on lookups are tolerant: an add-on that has since left the
    /// catalog contributes zero instead of blocking delivery or reporting.
    pub fn order_value(&self, order: &Order) -> Result<f64, String> {
        let base = self.lookup_price(&order.flavor, &order.size)?;
        let extras: f64 = order
            .add_ons
            .iter()
            .filter_map(|name| self.add_ons.get(name))
            .sum();
        Ok(base + extras)
    }

    /// Whether a flavor carries a price for every recognized size.
    pub fn flavor_covers_all_sizes(&self, name: &str) -> bool {
        match self.flavors.get(name) {
            Some(flavor) => self
                .sizes
                .iter()
                .all(|size| flavor.prices_by_size.contains_key(size)),
            None => false,
        }
    }
}
