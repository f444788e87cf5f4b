use fancy_regex::Regex;
use lazy_static::lazy_static;

/// The replica count assigned to services whose plan does not request one.
pub const DEFAULT_REPLICA_COUNT: i32 = 2;

/// Maximum length of a Kubernetes resource name (an RFC 1123 DNS label).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Environment variable overriding the configured output directory.
pub const ENV_OUTPUT_DIR: &str = "STEVEDORE_OUTPUT_DIR";

/// Environment variable overriding the configured container registry URL.
pub const ENV_REGISTRY_URL: &str = "STEVEDORE_REGISTRY_URL";

/// Environment variable overriding the configured container registry namespace.
pub const ENV_REGISTRY_NAMESPACE: &str = "STEVEDORE_REGISTRY_NAMESPACE";

lazy_static! {
    /// Matches a valid RFC 1123 DNS label: lowercase alphanumerics and
    /// interior dashes. Length is checked separately.
    pub static ref LABEL_REGEX: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("failed to compile label regex");
}
