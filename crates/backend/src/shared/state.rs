use crate::domain::{a001_menu_catalog, a003_order_queue};
use crate::shared::config::{resolve_storage_path, Config};
use crate::shared::error::DomainResult;
use contracts::domain::a001_menu_catalog::MenuCatalog;
use contracts::domain::a003_order_queue::OrderQueue;
use std::path::PathBuf;

/// Resolved snapshot file locations
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub orders: PathBuf,
    pub catalog: PathBuf,
}

impl StoragePaths {
    pub fn from_config(config: &Config) -> Self {
        Self {
            orders: resolve_storage_path(&config.storage.orders_path),
            catalog: resolve_storage_path(&config.storage.catalog_path),
        }
    }
}

/// The single process context: one catalog, one queue/history pair, and
/// the snapshot store they persist to. There is no hidden global state:
/// the context is constructed at startup and passed by reference into
/// every operation.
#[derive(Debug)]
pub struct AppState {
    pub catalog: MenuCatalog,
    pub queue: OrderQueue,
    pub paths: StoragePaths,
}

impl AppState {
    /// Load both snapshots, degrading to default state on failure.
    ///
    /// A missing snapshot is a normal first run. A corrupt snapshot is
    /// reported and replaced by the default: startup never aborts over a
    /// bad file.
    pub fn bootstrap(config: &Config) -> Self {
        let paths = StoragePaths::from_config(config);

        let queue = match a003_order_queue::repository::load(&paths.orders) {
            Ok(Some(queue)) => queue,
            Ok(None) => OrderQueue::new(),
            Err(err) => {
                tracing::warn!("orders snapshot unreadable, starting empty: {err}");
                OrderQueue::new()
            }
        };

        let catalog = match a001_menu_catalog::repository::load(&paths.catalog) {
            Ok(Some(catalog)) => catalog,
            Ok(None) => a001_menu_catalog::repository::seed_catalog(),
            Err(err) => {
                tracing::warn!("catalog snapshot unreadable, using seed catalog: {err}");
                a001_menu_catalog::repository::seed_catalog()
            }
        };

        Self {
            catalog,
            queue,
            paths,
        }
    }

    /// Persist the orders snapshot (queue, history, counter)
    pub fn persist_orders(&self) -> DomainResult<()> {
        a003_order_queue::repository::save(&self.paths.orders, &self.queue)
    }

    /// Persist the catalog snapshot
    pub fn persist_catalog(&self) -> DomainResult<()> {
        a001_menu_catalog::repository::save(&self.paths.catalog, &self.catalog)
    }
}
