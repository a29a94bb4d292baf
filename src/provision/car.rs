use std::path::Path;

use crate::config::{car_image_name, HOST_PUBKEY_FILE, REGISTRY_FILE};
use crate::error::Result;
use crate::image::build_car_image;
use crate::keys::{self, KeyPair};
use crate::registry::{disk, CarSecret, SecretRegistry};

/// Generate and register a car's key material, then build its EEPROM image.
///
/// The registry is saved before the host public key is read: a run that
/// fails on a missing host key leaves the new registration durable with no
/// image on disk, and is fixed by re-running.
pub fn provision_car(secrets_dir: &Path, car_id: u32, strict: bool) -> Result<()> {
    std::fs::create_dir_all(secrets_dir)?;

    // The registry file is shared across invocations; hold the advisory
    // lock for the whole load-modify-save cycle.
    let mut lock = disk::lock_file(secrets_dir)?;
    let _guard = lock.write()?;

    let mut registry = SecretRegistry::load(secrets_dir.join(REGISTRY_FILE))?;

    let pair = KeyPair::generate();
    let secret = CarSecret {
        privkey_pem: pair.private_pem()?,
        pubkey_pem: pair.public_pem()?,
    };
    if strict {
        registry.put_strict(car_id, secret)?;
    } else {
        registry.put(car_id, secret);
    }
    registry.save()?;
    tracing::info!(car_id, cars = registry.car_count(), "registry updated");

    let host_pubkey = keys::read_public_pem(&secrets_dir.join(HOST_PUBKEY_FILE))?;
    let image = build_car_image(
        &keys::public_key_bytes(&host_pubkey),
        &keys::public_key_bytes(&pair.public_key()),
    );
    let image_path = secrets_dir.join(car_image_name(car_id));
    std::fs::write(&image_path, image)?;
    tracing::info!(path = %image_path.display(), "car image written");

    Ok(())
}
