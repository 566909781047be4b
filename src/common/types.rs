use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// RSA modulus size in bits
pub const KEY_BITS: usize = 2048;

/// Default file name of the private key
pub const PRIVATE_KEY_FILE: &str = "id_rsa";

/// Default file name of the public key
pub const PUBLIC_KEY_FILE: &str = "id_rsa.pub";

/// Destination pair for one generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPairPaths {
    pub private_key: PathBuf,
    pub public_key: PathBuf,
}

impl KeyPairPaths {
    pub fn new(private_key: impl Into<PathBuf>, public_key: impl Into<PathBuf>) -> Self {
        Self {
            private_key: private_key.into(),
            public_key: public_key.into(),
        }
    }

    /// `id_rsa` and `id_rsa.pub` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(PRIVATE_KEY_FILE), dir.join(PUBLIC_KEY_FILE))
    }
}

/// Both encodings of a single key pair.
///
/// Only built by `encode::encode_key_pair`, which takes one private key, so
/// the two halves can never come from different generations.
pub struct EncodedKeyPair {
    pub(crate) private_pem: Zeroizing<String>,
    pub(crate) authorized_key: String,
}

impl EncodedKeyPair {
    /// PKCS#1 PEM text of the private key
    pub fn private_pem(&self) -> &str {
        &self.private_pem
    }

    /// `ssh-rsa <base64>` line, newline-terminated
    pub fn authorized_key(&self) -> &str {
        &self.authorized_key
    }
}

/// Outcome of a successful generation
#[derive(Clone, Debug)]
pub struct GeneratedKeyPair {
    pub paths: KeyPairPaths,
    /// `SHA256:<base64>` fingerprint of the public key
    pub fingerprint: String,
}
