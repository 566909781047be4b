use base64::{
    engine::general_purpose::{STANDARD as BASE64, STANDARD_NO_PAD},
    Engine,
};
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use ssh_key::public::KeyData;
use zeroize::Zeroizing;

use super::error::{KeygenError, Result};
use super::types::EncodedKeyPair;

/// Wraps the RSA public key for SSH encoding
pub fn ssh_public_key(public_key: &RsaPublicKey) -> Result<ssh_key::PublicKey> {
    let rsa = ssh_key::public::RsaPublicKey::try_from(public_key).map_err(KeygenError::key_format)?;
    Ok(ssh_key::PublicKey::new(KeyData::Rsa(rsa), ""))
}

/// PKCS#1 PEM (`RSA PRIVATE KEY`), unencrypted, LF line endings
pub fn encode_private_key_pem(private_key: &RsaPrivateKey) -> Result<Zeroizing<String>> {
    private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(KeygenError::key_format)
}

/// Single authorized-keys line without a comment field
pub fn encode_authorized_key(public_key: &ssh_key::PublicKey) -> Result<String> {
    let mut line = public_key.to_openssh().map_err(KeygenError::key_format)?;
    line.push('\n');
    Ok(line)
}

/// Encodes both halves of `private_key`
pub fn encode_key_pair(private_key: &RsaPrivateKey) -> Result<EncodedKeyPair> {
    let public_key = ssh_public_key(&private_key.to_public_key())?;
    let private_pem = encode_private_key_pem(private_key)?;
    let authorized_key = encode_authorized_key(&public_key)?;

    Ok(EncodedKeyPair {
        private_pem,
        authorized_key,
    })
}

/// `SHA256:` fingerprint of an authorized-keys line, as printed by ssh-keygen
pub fn fingerprint(authorized_key: &str) -> Result<String> {
    let body = authorized_key
        .split_whitespace()
        .nth(1)
        .ok_or(base64::DecodeError::InvalidLength)
        .map_err(KeygenError::key_format)?;
    let blob = BASE64.decode(body).map_err(KeygenError::key_format)?;

    let mut hasher = Sha256::new();
    hasher.update(&blob);
    let hash = hasher.finalize();

    Ok(format!("SHA256:{}", STANDARD_NO_PAD.encode(hash)))
}
