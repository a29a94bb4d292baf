pub mod car;
pub mod fob;
pub mod host;

pub use car::provision_car;
pub use fob::{provision_fob, FobRequest};
pub use host::provision_host;
