use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::RsaPrivateKey;
use std::path::Path;
use tracing::{debug, info};

use super::encode::{encode_key_pair, fingerprint};
use super::error::{KeygenError, Result};
use super::types::{EncodedKeyPair, GeneratedKeyPair, KeyPairPaths, KEY_BITS};
use super::writer::write_owner_only;

/// Generates a fresh 2048-bit RSA key pair and writes it to the two paths.
///
/// The private key is written as PKCS#1 PEM with owner-only permissions, then
/// the public key as an `ssh-rsa` authorized-keys line. A failed private key
/// write leaves the public key file untouched. A failed public key write does
/// not remove the private key that was already written.
///
/// Nothing is retried. Calls are independent, but two concurrent calls with
/// the same destination paths may interleave their writes; callers must run
/// at most one generation per path pair at a time.
pub fn generate_key_pair(
    private_key_path: impl AsRef<Path>,
    public_key_path: impl AsRef<Path>,
) -> Result<GeneratedKeyPair> {
    generate_key_pair_with_rng(&mut OsRng, private_key_path, public_key_path)
}

/// Same as [`generate_key_pair`] but draws from the given random source.
pub fn generate_key_pair_with_rng<R>(
    rng: &mut R,
    private_key_path: impl AsRef<Path>,
    public_key_path: impl AsRef<Path>,
) -> Result<GeneratedKeyPair>
where
    R: RngCore + CryptoRng,
{
    let paths = KeyPairPaths::new(private_key_path.as_ref(), public_key_path.as_ref());

    let private_key = generate_private_key(rng)?;
    let encoded = encode_key_pair(&private_key)?;
    drop(private_key);

    let fingerprint = fingerprint(encoded.authorized_key())?;
    write_key_pair(&encoded, &paths)?;

    info!(
        private_key = %paths.private_key.display(),
        public_key = %paths.public_key.display(),
        %fingerprint,
        "generated key pair"
    );
    Ok(GeneratedKeyPair { paths, fingerprint })
}

/// Draws a new RSA private key of [`KEY_BITS`] bits
pub fn generate_private_key<R>(rng: &mut R) -> Result<RsaPrivateKey>
where
    R: RngCore + CryptoRng,
{
    // rsa consumes the source infallibly, so surface a broken source up front
    let mut probe = [0u8; 32];
    rng.try_fill_bytes(&mut probe)
        .map_err(KeygenError::RandomSource)?;

    debug!(bits = KEY_BITS, "searching for RSA primes");
    RsaPrivateKey::new(rng, KEY_BITS).map_err(KeygenError::KeyGeneration)
}

/// Writes the private key, then the public key. Stops at the first failure.
pub fn write_key_pair(encoded: &EncodedKeyPair, paths: &KeyPairPaths) -> Result<()> {
    write_owner_only(&paths.private_key, encoded.private_pem().as_bytes())?;
    write_owner_only(&paths.public_key, encoded.authorized_key().as_bytes())
}
