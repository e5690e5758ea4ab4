//! Client Configuration
//!
//! Compile-time settings baked into the WASM bundle.

/// Backend origin. Override with `ITASK_API_URL` at build time,
/// the default targets a local dev server.
pub fn api_base_url() -> &'static str {
    option_env!("ITASK_API_URL").unwrap_or("http://localhost:5000")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
