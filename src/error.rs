#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Key: {0}")]
    Key(#[from] crate::keys::KeyError),
    #[error("Registry: {0}")]
    Registry(#[from] crate::registry::RegistryError),
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("pair pin {0:?} is not valid hex")]
    MalformedPin(String),
    #[error("a paired fob requires --pair-pin")]
    MissingPin,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
