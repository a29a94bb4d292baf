use std::path::{Path, PathBuf};

use rand::RngCore;

use crate::config::{fob_image_name, REGISTRY_FILE};
use crate::error::{Error, Result};
use crate::header::{emit_fob_header, ENTROPY_LEN};
use crate::image::{build_fob_image, FobPairing};
use crate::keys;
use crate::registry::SecretRegistry;

pub struct FobRequest {
    pub car_id: u32,
    pub paired: bool,
    pub pair_pin: Option<String>,
    pub header_file: PathBuf,
}

/// Build a fob EEPROM image plus its firmware secrets header.
///
/// Everything that can fail (registry lookup, key import, pin parse) runs
/// before the first write, so a rejected request leaves no output behind.
pub fn provision_fob(secrets_dir: &Path, request: FobRequest) -> Result<()> {
    let pairing = if request.paired {
        let registry = SecretRegistry::load(secrets_dir.join(REGISTRY_FILE))?;
        let secret = registry.get(request.car_id)?;
        let car_key = keys::import_private_pem(&secret.privkey_pem)?;
        let pin_text = request.pair_pin.as_deref().ok_or(Error::MissingPin)?;
        FobPairing::Paired {
            pin: parse_pin(pin_text)?,
            car_privkey: keys::scalar_bytes(&car_key),
        }
    } else {
        // An unpaired fob carries no car material; any supplied pin is ignored.
        FobPairing::Unpaired
    };

    std::fs::create_dir_all(secrets_dir)?;
    let image_path = secrets_dir.join(fob_image_name(request.car_id));
    std::fs::write(&image_path, build_fob_image(&pairing))?;
    tracing::info!(
        car_id = request.car_id,
        paired = request.paired,
        path = %image_path.display(),
        "fob image written"
    );

    let mut entropy = [0u8; ENTROPY_LEN];
    rand::thread_rng().fill_bytes(&mut entropy);
    std::fs::write(
        &request.header_file,
        emit_fob_header(request.paired, Some(&entropy)),
    )?;
    tracing::info!(path = %request.header_file.display(), "secrets header written");

    Ok(())
}

fn parse_pin(text: &str) -> Result<u32> {
    u32::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|_| Error::MalformedPin(text.to_string()))
}
