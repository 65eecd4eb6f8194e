//! API-key handling for the hosted backend.
//!
//! The service authenticates anonymous read access with a project API key
//! sent both as an `apikey` header and as a bearer token.

/// API key for the job-board backend.
///
/// # Examples
///
/// ```rust
/// use vaga_link::ApiKey;
///
/// // Hosted project with an anon key
/// let key = ApiKey::key("eyJhbGc...".to_string());
///
/// // Self-hosted instance without auth
/// let key = ApiKey::none();
/// ```
#[derive(Debug, Clone)]
pub enum ApiKey {
    /// Project API key (anon role)
    Key(String),

    /// No authentication (self-hosted, open instance)
    None,
}

impl ApiKey {
    /// Create an API-key credential
    pub fn key(key: String) -> Self {
        Self::Key(key)
    }

    /// No authentication
    pub fn none() -> Self {
        Self::None
    }

    /// Attach authentication headers to an HTTP request builder
    ///
    /// The hosted service expects the key twice: `apikey: <key>` and
    /// `Authorization: Bearer <key>`.
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Key(key) => request.header("apikey", key).bearer_auth(key),
            Self::None => request,
        }
    }

    /// Check if a key is configured
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_creation() {
        let key = ApiKey::key("secret".to_string());
        assert!(key.is_configured());

        let none = ApiKey::none();
        assert!(!none.is_configured());
    }

    #[test]
    fn test_apply_to_request() {
        let key = ApiKey::key("secret".to_string());
        let client = reqwest::Client::new();
        let request = key.apply_to_request(client.get("http://localhost:54321"));
        // RequestBuilder does not expose headers for inspection; building it
        // is enough to prove the call composes.
        assert!(request.build().is_ok());
    }
}
