use super::layout::{CAR_CAR_PUBKEY_OFFSET, CAR_HOST_PUBKEY_OFFSET, CAR_IMAGE_LEN};
use crate::keys::PUB_KEY_LEN;

/// Car EEPROM image: host public key, then this car's public key.
pub fn build_car_image(
    host_pubkey: &[u8; PUB_KEY_LEN],
    car_pubkey: &[u8; PUB_KEY_LEN],
) -> [u8; CAR_IMAGE_LEN] {
    let mut image = [0u8; CAR_IMAGE_LEN];
    image[CAR_HOST_PUBKEY_OFFSET..CAR_HOST_PUBKEY_OFFSET + PUB_KEY_LEN]
        .copy_from_slice(host_pubkey);
    image[CAR_CAR_PUBKEY_OFFSET..CAR_CAR_PUBKEY_OFFSET + PUB_KEY_LEN].copy_from_slice(car_pubkey);
    image
}
