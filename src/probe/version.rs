//! Version String Encoding
//!
//! Turns the host's free-form version-report string into the integer encoding
//! the threshold comparisons use: "1.16.5" becomes 1165. Strings without a
//! recognisable dotted token encode to 0, which downstream treats as the
//! oldest, least capable server.

use regex::Regex;
use std::sync::LazyLock;

// Dotted numeric token, e.g. "1.16.5" or "1.17". A two component version with
// a single digit minor ("1.9") cannot satisfy the trailing digit groups and
// encodes to 0. Downstream thresholds were tuned against exactly this
// matching behaviour, so the pattern must stay as-is.
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.?\d+").expect("version token pattern is valid"));

/// Encode a version-report string as an integer, e.g. "1.16.5" -> 1165.
///
/// Unrecognisable input encodes to 0. Two component matches like "1.17"
/// are normalised to the three component encoding (117 -> 1170).
pub fn parse_version(raw: &str) -> u32 {
    let token = match VERSION_TOKEN.find(raw) {
        Some(token) => token,
        None => {
            log::warn!("No version token in '{}', encoding as 0", raw);
            return 0;
        }
    };

    let mut version = match token.as_str().replace('.', "").parse::<u32>() {
        Ok(version) => version,
        Err(_) => {
            log::warn!("Version token '{}' does not fit, encoding as 0", token.as_str());
            return 0;
        }
    };

    // Two component versions like 1.17 come out as 117 instead of 1170
    if version < 1000 {
        version *= 10;
    }
    version
}
