use std::path::Path;

use crate::config::{HOST_PRIVKEY_FILE, HOST_PUBKEY_FILE};
use crate::error::Result;
use crate::keys::KeyPair;

/// Generate the deployment host keypair and persist both PEM files.
/// Re-running overwrites the previous pair.
pub fn provision_host(secrets_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(secrets_dir)?;

    let pair = KeyPair::generate();
    std::fs::write(secrets_dir.join(HOST_PRIVKEY_FILE), pair.private_pem()?)?;
    std::fs::write(secrets_dir.join(HOST_PUBKEY_FILE), pair.public_pem()?)?;

    tracing::info!(dir = %secrets_dir.display(), "host keypair written");
    Ok(())
}
