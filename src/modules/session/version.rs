//! Numeric version-compatibility gate.

use log::{error, warn};

/// Compare the host client version against the required one and return the
/// client version when it is numerically older. Equal strings skip the
/// comparison entirely; parse failures are logged and treated as compatible.
pub(crate) fn check_version(required: &str, client: &str) -> Option<String> {
    if required == client {
        return None;
    }

    match (numeric_version(required), numeric_version(client)) {
        (Ok(required_num), Ok(client_num)) if client_num < required_num => {
            warn!(
                "Required client version is {} but the host supplied {}",
                required, client
            );
            Some(client.to_string())
        }
        (Ok(_), Ok(_)) => None,
        (Err(e), _) | (_, Err(e)) => {
            error!("Error while checking client version: {}", e);
            None
        }
    }
}

/// Digits-only numeric form of a version string ("2.1.0" -> 210).
fn numeric_version(version: &str) -> Result<u64, std::num::ParseIntError> {
    version
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
}
