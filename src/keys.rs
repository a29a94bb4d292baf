use std::path::{Path, PathBuf};

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use p256::{PublicKey, SecretKey};
use rand::rngs::OsRng;

/// Private scalar width: 32-byte big-endian integer.
pub const PRIV_KEY_LEN: usize = 32;
/// Public key width: two 32-byte big-endian coordinates, x then y.
pub const PUB_KEY_LEN: usize = 2 * PRIV_KEY_LEN;

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("PEM: {0}")]
    Pem(String),
    #[error("key file not found: {0}")]
    MissingKeyFile(PathBuf),
}

/// A freshly generated secp256r1 keypair.
pub struct KeyPair {
    secret: SecretKey,
}

impl KeyPair {
    pub fn generate() -> Self {
        Self {
            secret: SecretKey::random(&mut OsRng),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        self.secret.public_key()
    }

    /// PKCS#8 `PRIVATE KEY` PEM.
    pub fn private_pem(&self) -> Result<String, KeyError> {
        let pem = self
            .secret
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| KeyError::Pem(e.to_string()))?;
        Ok(pem.to_string())
    }

    /// SPKI `PUBLIC KEY` PEM.
    pub fn public_pem(&self) -> Result<String, KeyError> {
        self.public_key()
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| KeyError::Pem(e.to_string()))
    }

    pub fn private_scalar(&self) -> [u8; PRIV_KEY_LEN] {
        scalar_bytes(&self.secret)
    }
}

/// Private scalar as a 32-byte big-endian integer.
pub fn scalar_bytes(secret: &SecretKey) -> [u8; PRIV_KEY_LEN] {
    secret.to_bytes().into()
}

/// Public key as x‖y coordinate bytes, the encoding firmware expects.
pub fn public_key_bytes(public: &PublicKey) -> [u8; PUB_KEY_LEN] {
    let point = public.to_encoded_point(false);
    let x = point.x().expect("a public key is never the identity point");
    let y = point.y().expect("a public key is never the identity point");
    let mut out = [0u8; PUB_KEY_LEN];
    out[..PRIV_KEY_LEN].copy_from_slice(x.as_slice());
    out[PRIV_KEY_LEN..].copy_from_slice(y.as_slice());
    out
}

pub fn import_private_pem(pem: &str) -> Result<SecretKey, KeyError> {
    SecretKey::from_pkcs8_pem(pem).map_err(|e| KeyError::Pem(e.to_string()))
}

/// Read a public key PEM file; a missing file is reported as such rather
/// than as a bare I/O error.
pub fn read_public_pem(path: &Path) -> Result<PublicKey, KeyError> {
    if !path.exists() {
        return Err(KeyError::MissingKeyFile(path.to_path_buf()));
    }
    let pem = std::fs::read_to_string(path)?;
    PublicKey::from_public_key_pem(&pem).map_err(|e| KeyError::Pem(e.to_string()))
}
