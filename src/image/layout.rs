//! Byte layout of the car and fob EEPROM images.
//!
//! Firmware reads these images at fixed offsets with no length prefix or
//! version tag, so every offset and width below is part of the wire
//! contract. Builders and tests both index through these names.

use crate::keys::{PRIV_KEY_LEN, PUB_KEY_LEN};

// Car image: two public keys back to back.
pub const CAR_HOST_PUBKEY_OFFSET: usize = 0;
pub const CAR_CAR_PUBKEY_OFFSET: usize = PUB_KEY_LEN;
pub const CAR_IMAGE_LEN: usize = 2 * PUB_KEY_LEN;

pub const SIGNATURE_LEN: usize = 64;
pub const PACKAGE_SLOTS: usize = 3;
pub const PACKAGE_LEN: usize = PACKAGE_SLOTS * SIGNATURE_LEN;

// Fob image: two little-endian u32 fields, the car private scalar, then
// three signature-sized package slots reserved for later provisioning.
pub const FOB_PAIRED_OFFSET: usize = 0;
pub const FOB_PIN_OFFSET: usize = 4;
pub const FOB_CAR_PRIVKEY_OFFSET: usize = 8;
pub const FOB_PACKAGE_OFFSET: usize = FOB_CAR_PRIVKEY_OFFSET + PRIV_KEY_LEN;
pub const FOB_IMAGE_LEN: usize = FOB_PACKAGE_OFFSET + PACKAGE_LEN;

/// Paired-flag magic (four ASCII spaces).
pub const PAIRED_MAGIC: u32 = 0x2020_2020;
/// Sentinel for the unpaired flag and pin fields, and the fill value for
/// every unprovisioned byte (erased-flash convention).
pub const UNPAIRED_SENTINEL: u32 = 0xFFFF_FFFF;
