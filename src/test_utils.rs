use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::common::types::KEY_BITS;

/// A single key shared by tests that only need some valid key material
pub fn shared_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut OsRng, KEY_BITS).expect("test key generation"))
}

/// Loads a PKCS#1 PEM private key file
pub fn read_private_key(path: &Path) -> Result<RsaPrivateKey, Box<dyn std::error::Error>> {
    let pem = fs::read_to_string(path)?;
    Ok(RsaPrivateKey::from_pkcs1_pem(&pem)?)
}

/// Parses an `ssh-rsa` authorized-keys line back into an RSA public key
pub fn parse_authorized_key(line: &str) -> Result<RsaPublicKey, Box<dyn std::error::Error>> {
    let key = ssh_key::PublicKey::from_openssh(line.trim_end())?;
    let rsa = key.key_data().rsa().ok_or("not an RSA key")?;
    Ok(RsaPublicKey::try_from(rsa)?)
}

/// Checks `^ssh-rsa [A-Za-z0-9+/=]+$`
pub fn is_authorized_key_line(line: &str) -> bool {
    match line.strip_prefix("ssh-rsa ") {
        Some(body) => {
            !body.is_empty()
                && body
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        }
        None => false,
    }
}

/// Permission bits of `path`
#[cfg(unix)]
pub fn mode_of(path: &Path) -> std::io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::metadata(path)?.permissions().mode() & 0o777)
}
