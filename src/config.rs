/// Application-level constants
pub const APP_NAME: &str = "DiagnoAide";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote completion endpoint. Accepts a JSON `{ messages: [...] }` body and
/// returns `{ completion: "..." }`.
pub const COMPLETION_ENDPOINT: &str = "https://api.a0.dev/ai/llm";

/// Timeout for a single completion round trip, in seconds.
pub const COMPLETION_TIMEOUT_SECS: u64 = 60;

/// Fixed access code for the login gate.
///
/// This is a soft gate, not a security boundary: the code is compared in
/// the clear, with no hashing, lockout, or attempt counting. Anyone with
/// the binary can read it. Real deployments should replace this with a
/// token exchange.
pub const ACCESS_CODE: &str = "DGSK-2838";

/// Number dialed by the emergency escalation flow.
pub const EMERGENCY_NUMBER: &str = "911";

/// Dialer URL for the platform opener.
pub fn emergency_dial_url() -> String {
    format!("tel:{EMERGENCY_NUMBER}")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,diagnoaide_lib=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_diagnoaide() {
        assert_eq!(APP_NAME, "DiagnoAide");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn completion_endpoint_is_https() {
        assert!(COMPLETION_ENDPOINT.starts_with("https://"));
    }

    #[test]
    fn emergency_dial_url_is_tel_scheme() {
        assert_eq!(emergency_dial_url(), "tel:911");
    }
}
