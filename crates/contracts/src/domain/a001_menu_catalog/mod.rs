pub mod aggregate;

pub use aggregate::{Flavor, MenuCatalog};
