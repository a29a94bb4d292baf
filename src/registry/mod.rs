pub mod disk;
pub mod entry;
pub mod store;

pub use entry::CarSecret;
pub use store::SecretRegistry;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize: {0}")]
    Serialization(String),
    #[error("no registered car with id {0}")]
    MissingEntry(u32),
    #[error("car id {0} is already registered")]
    AlreadyRegistered(u32),
}
