use crate::shared::error::{DomainError, DomainResult};
use contracts::domain::a003_order_queue::OrderQueue;
use std::path::Path;

/// Load the orders snapshot (queue, history, counter).
///
/// `Ok(None)` means no snapshot exists yet; a present but unreadable or
/// corrupt file is an error, and the caller decides whether to degrade to
/// an empty queue.
pub fn load(path: &Path) -> DomainResult<Option<OrderQueue>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Persistence(format!("read {}: {e}", path.display())))?;
    let queue = serde_json::from_str(&contents)
        .map_err(|e| DomainError::Persistence(format!("parse {}: {e}", path.display())))?;
    Ok(Some(queue))
}

/// Write the orders snapshot, creating parent directories as needed
pub fn save(path: &Path, queue: &OrderQueue) -> DomainResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DomainError::Persistence(format!("create {}: {e}", parent.display())))?;
    }
    let contents = serde_json::to_string_pretty(queue)
        .map_err(|e| DomainError::Persistence(format!("encode orders: {e}")))?;
    std::fs::write(path, contents)
        .map_err(|e| DomainError::Persistence(format!("write {}: {e}", path.display())))?;
    Ok(())
}
