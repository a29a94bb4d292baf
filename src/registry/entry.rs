use serde::{Deserialize, Serialize};

/// One car's key material as stored in `car_secrets.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSecret {
    pub privkey_pem: String,
    pub pubkey_pem: String,
}
