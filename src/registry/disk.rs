use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use super::{CarSecret, RegistryError};

/// Read the registry document. A missing file is an empty registry, not an
/// error.
pub(crate) fn load(path: &Path) -> Result<BTreeMap<String, CarSecret>, RegistryError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| RegistryError::Serialization(e.to_string()))
}

/// Write the full mapping back as pretty-printed JSON.
pub(crate) fn save(
    path: &Path,
    entries: &BTreeMap<String, CarSecret>,
) -> Result<(), RegistryError> {
    let text = serde_json::to_string_pretty(entries)
        .map_err(|e| RegistryError::Serialization(e.to_string()))?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Advisory lock guarding the registry load-modify-save cycle. The registry
/// file is shared mutable state across invocations; writers must hold this.
pub fn lock_file(secrets_dir: &Path) -> std::io::Result<fd_lock::RwLock<File>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(secrets_dir.join(crate::config::REGISTRY_LOCK_FILE))?;
    Ok(fd_lock::RwLock::new(file))
}
