use super::layout::{
    FOB_CAR_PRIVKEY_OFFSET, FOB_IMAGE_LEN, FOB_PAIRED_OFFSET, FOB_PIN_OFFSET, PAIRED_MAGIC,
};
use crate::keys::PRIV_KEY_LEN;

/// Pairing state baked into a fob image.
pub enum FobPairing {
    Unpaired,
    Paired {
        pin: u32,
        car_privkey: [u8; PRIV_KEY_LEN],
    },
}

/// Fob EEPROM image. The buffer starts out as erased flash (all `0xFF`),
/// which already encodes the unpaired flag, the pin sentinel, and the
/// package placeholder slots; a paired fob overwrites the first three
/// fields.
pub fn build_fob_image(pairing: &FobPairing) -> [u8; FOB_IMAGE_LEN] {
    let mut image = [0xFFu8; FOB_IMAGE_LEN];
    if let FobPairing::Paired { pin, car_privkey } = pairing {
        image[FOB_PAIRED_OFFSET..FOB_PAIRED_OFFSET + 4]
            .copy_from_slice(&PAIRED_MAGIC.to_le_bytes());
        image[FOB_PIN_OFFSET..FOB_PIN_OFFSET + 4].copy_from_slice(&pin.to_le_bytes());
        image[FOB_CAR_PRIVKEY_OFFSET..FOB_CAR_PRIVKEY_OFFSET + PRIV_KEY_LEN]
            .copy_from_slice(car_privkey);
    }
    image
}
