use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{disk, CarSecret, RegistryError};

/// In-memory view of the car secrets registry, keyed by the decimal string
/// form of the car id.
#[derive(Debug)]
pub struct SecretRegistry {
    path: PathBuf,
    entries: BTreeMap<String, CarSecret>,
}

impl SecretRegistry {
    /// Load the registry from `path`, or start empty if no file exists yet.
    pub fn load(path: PathBuf) -> Result<Self, RegistryError> {
        let entries = disk::load(&path)?;
        Ok(Self { path, entries })
    }

    pub fn get(&self, car_id: u32) -> Result<&CarSecret, RegistryError> {
        self.entries
            .get(&car_id.to_string())
            .ok_or(RegistryError::MissingEntry(car_id))
    }

    /// Insert or overwrite unconditionally.
    pub fn put(&mut self, car_id: u32, secret: CarSecret) {
        self.entries.insert(car_id.to_string(), secret);
    }

    /// Insert, refusing to overwrite an existing registration.
    pub fn put_strict(&mut self, car_id: u32, secret: CarSecret) -> Result<(), RegistryError> {
        if self.entries.contains_key(&car_id.to_string()) {
            return Err(RegistryError::AlreadyRegistered(car_id));
        }
        self.entries.insert(car_id.to_string(), secret);
        Ok(())
    }

    /// Serialize the full mapping back to the path it was loaded from.
    pub fn save(&self) -> Result<(), RegistryError> {
        disk::save(&self.path, &self.entries)
    }

    pub fn car_count(&self) -> usize {
        self.entries.len()
    }
}
