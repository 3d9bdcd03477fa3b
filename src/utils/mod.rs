//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::Result;

/// Join an API path onto a base URL.
///
/// The base is treated as a directory so a path prefix on it is preserved.
pub fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}
