//! Generates an RSA key pair and writes it in SSH-compatible formats.
//!
//! The private key is written as an unencrypted PKCS#1 PEM file readable only
//! by its owner; the public key as a single `ssh-rsa` authorized-keys line.
//!
//! ```no_run
//! let generated = sallykey::generate_key_pair("id_rsa", "id_rsa.pub")?;
//! println!("{}", generated.fingerprint);
//! # Ok::<(), sallykey::KeygenError>(())
//! ```

pub mod common;

#[cfg(test)]
pub(crate) mod test_utils;

pub use common::config::{resolve_paths, OutputLocation};
pub use common::error::{KeygenError, Result};
pub use common::generator::{generate_key_pair, generate_key_pair_with_rng};
pub use common::types::{GeneratedKeyPair, KeyPairPaths, KEY_BITS};
