//! Choose the RST version to write

use rion_rst::Version;
use tracing::warn;

/// Pick the version for a new table.
///
/// A declared version is kept when it is one the codec knows, anything else falls back to `default`.
pub fn select_version(declared: Option<u8>, default: Version) -> Version {
    match declared.map(Version::try_from) {
        Some(Ok(version)) => version,
        Some(Err(err)) => {
            warn!("{}, writing version {} instead", err, default);
            default
        }
        None => default,
    }
}
