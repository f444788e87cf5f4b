use eyre::{bail, Result};

use crate::constants::{LABEL_REGEX, MAX_LABEL_LENGTH};

/// Returns true if the given name is already a valid RFC 1123 DNS label,
/// usable as-is for a Kubernetes resource name.
///
/// ```
/// use stevedore_common::utils::strings::is_valid_label;
///
/// assert!(is_valid_label("svcname1"));
/// assert!(!is_valid_label("Frontend_Service"));
/// ```
pub fn is_valid_label(name: &str) -> bool {
    name.len() <= MAX_LABEL_LENGTH && LABEL_REGEX.is_match(name).unwrap_or(false)
}

/// Normalizes an arbitrary identifier into a valid RFC 1123 DNS label:
/// lowercased, with every invalid character replaced by a dash, leading and
/// trailing dashes trimmed, and the result truncated to the maximum label
/// length. Fails if nothing usable remains.
///
/// ```
/// use stevedore_common::utils::strings::normalize_label;
///
/// let result = normalize_label("My_Service.Name").expect("should normalize");
/// assert_eq!(result, "my-service-name");
/// ```
pub fn normalize_label(name: &str) -> Result<String> {
    let mut label: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect();

    // all characters are ascii at this point, so byte truncation is safe
    if label.len() > MAX_LABEL_LENGTH {
        label.truncate(MAX_LABEL_LENGTH);
    }

    let label = label.trim_matches('-');
    if label.is_empty() {
        bail!("'{name}' contains no characters usable in a dns label");
    }

    Ok(label.to_string())
}
