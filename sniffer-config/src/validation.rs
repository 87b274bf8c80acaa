// sniffer-config/src/validation.rs
//! Custom validation functions for configuration.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Linux caps interface names at 15 bytes (IFNAMSIZ - 1). Dots, dashes and
    // colons show up in VLAN, bridge and alias names.
    static ref INTERFACE_NAME: Regex = Regex::new("^[A-Za-z0-9_.:-]{1,15}$").unwrap();
}

/// Validate that an interface name follows Linux naming conventions.
pub fn validate_interface(name: &str) -> Result<(), ValidationError> {
    if INTERFACE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_interface"))
    }
}

/// Validate a tracing level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid = ["trace", "debug", "info", "warn", "error"]
        .contains(&level.to_lowercase().as_str());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_names() {
        for ok in ["eth0", "en0", "wlp3s0", "br-5f2a", "eth0.100", "any", "lo"] {
            assert!(validate_interface(ok).is_ok(), "{ok}");
        }
        for bad in ["", "this-name-is-too-long", "eth 0", "eth0;rm"] {
            assert!(validate_interface(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn log_levels() {
        assert!(validate_log_level("DEBUG").is_ok());
        assert!(validate_log_level("verbose").is_err());
    }
}
