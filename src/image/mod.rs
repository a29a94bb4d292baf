pub mod car;
pub mod fob;
pub mod layout;

pub use car::build_car_image;
pub use fob::{build_fob_image, FobPairing};
