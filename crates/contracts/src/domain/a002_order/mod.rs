pub mod aggregate;

pub use aggregate::{compute_prep_minutes, AddOnSet, Customer, Order};
