use crate::enums::OrderStatus;
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Extra preparation minutes charged per add-on
const MINUTES_PER_ADD_ON: u32 = 2;

/// Base preparation minutes for a size label.
///
/// Size labels are catalog-defined, but these four are the canonical set;
/// an unrecognized label is an error, never a silent "medium" fallback.
pub fn compute_prep_minutes(size: &str, add_on_count: usize) -> Result<u32, String> {
    let base = match size {
        "small" => 15,
        "medium" => 20,
        "large" => 25,
        "family" => 30,
        other => return Err(format!("no preparation time is defined for size '{other}'")),
    };
    Ok(base + MINUTES_PER_ADD_ON * add_on_count as u32)
}

// ============================================================================
// Customer
// ============================================================================

/// Who placed the order and how to reach them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

// ============================================================================
// Add-on set
// ============================================================================

/// Order-preserving set of add-on names.
///
/// Keeps the sequence in which add-ons were chosen while rejecting
/// duplicates in O(1) through a hash index. Serializes as a plain sequence;
/// the index is rebuilt on deserialization.
#[derive(Debug, Clone, Default)]
pub struct AddOnSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl AddOnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a name sequence, keeping the first occurrence of each name.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(&name);
        }
        set
    }

    /// Insert a name. Returns false (and changes nothing) when it is
    /// already present: a duplicate is a no-op with an explicit signal.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains(name) {
            return false;
        }
        self.index.insert(name.to_string());
        self.items.push(name.to_string());
        true
    }

    /// Remove a name. Returns false when it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.index.remove(name) {
            return false;
        }
        self.items.retain(|item| item != name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// The names in insertion order
    pub fn names(&self) -> &[String] {
        &self.items
    }
}

impl PartialEq for AddOnSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Serialize for AddOnSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddOnSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        let unique = items.iter().collect::<HashSet<_>>().len();
        if unique != items.len() {
            return Err(D::Error::custom("add-on list contains duplicates"));
        }
        Ok(Self::from_names(items))
    }
}

// ============================================================================
// Order
// ============================================================================

/// A customer's order.
///
/// `number` is assigned once at creation and never reused. `prep_minutes`
/// is derived from size and add-on count and must be recomputed whenever
/// either changes; monetary value is derived on demand against the current
/// catalog and is intentionally not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: u64,

    pub customer: Customer,

    /// Catalog flavor, referenced by name. Catalog edits after creation do
    /// not retroactively invalidate the order.
    pub flavor: String,

    pub size: String,

    #[serde(rename = "addOns")]
    pub add_ons: AddOnSet,

    pub notes: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    pub status: OrderStatus,

    #[serde(rename = "prepMinutes")]
    pub prep_minutes: u32,
}

impl Order {
    pub fn new(
        number: u64,
        customer: Customer,
        flavor: String,
        size: String,
        add_ons: AddOnSet,
        notes: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        let prep_minutes = compute_prep_minutes(&size, add_ons.len())?;
        Ok(Self {
            number,
            customer,
            flavor,
            size,
            add_ons,
            notes,
            created_at,
            status: OrderStatus::Pending,
            prep_minutes,
        })
    }

    /// Re-derive `prep_minutes` after a size or add-on change.
    pub fn recompute_prep_minutes(&mut self) -> Result<(), String> {
        self.prep_minutes = compute_prep_minutes(&self.size, self.add_ons.len())?;
        Ok(())
    }

    /// Whole minutes the order has been waiting since it was taken.
    pub fn waiting_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_minutes()
    }
}
