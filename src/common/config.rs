use std::ffi::OsString;
use std::path::PathBuf;

use super::error::{KeygenError, Result};
use super::types::KeyPairPaths;

/// Overrides the private key destination
pub const PRIVATE_KEY_ENV: &str = "SALLYKEY_PRIVATE_KEY";

/// Overrides the public key destination
pub const PUBLIC_KEY_ENV: &str = "SALLYKEY_PUBLIC_KEY";

/// Where the default file names are placed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputLocation {
    /// The user's home directory
    #[default]
    Home,
    /// Relative to the current working directory
    WorkingDir,
    Dir(PathBuf),
}

impl OutputLocation {
    fn dir(&self) -> Result<PathBuf> {
        match self {
            OutputLocation::Home => dirs::home_dir().ok_or(KeygenError::HomeDirectory),
            OutputLocation::WorkingDir => Ok(PathBuf::from(".")),
            OutputLocation::Dir(dir) => Ok(dir.clone()),
        }
    }
}

/// Resolves both destinations.
///
/// Each path comes from the explicit argument, then the environment, then
/// the default file name under `location`.
pub fn resolve_paths(
    private_key: Option<PathBuf>,
    public_key: Option<PathBuf>,
    location: &OutputLocation,
) -> Result<KeyPairPaths> {
    resolve_with(private_key, public_key, location, |name| std::env::var_os(name))
}

fn resolve_with<F>(
    private_key: Option<PathBuf>,
    public_key: Option<PathBuf>,
    location: &OutputLocation,
    lookup: F,
) -> Result<KeyPairPaths>
where
    F: Fn(&str) -> Option<OsString>,
{
    let from_env = |name: &str| lookup(name).filter(|v| !v.is_empty()).map(PathBuf::from);
    let private_key = private_key.or_else(|| from_env(PRIVATE_KEY_ENV));
    let public_key = public_key.or_else(|| from_env(PUBLIC_KEY_ENV));

    match (private_key, public_key) {
        (Some(private_key), Some(public_key)) => Ok(KeyPairPaths::new(private_key, public_key)),
        (private_key, public_key) => {
            let defaults = KeyPairPaths::in_dir(location.dir()?);
            Ok(KeyPairPaths::new(
                private_key.unwrap_or(defaults.private_key),
                public_key.unwrap_or(defaults.public_key),
            ))
        }
    }
}
