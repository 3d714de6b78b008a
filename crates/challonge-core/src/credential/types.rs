//! Credential type definitions

use serde::{Deserialize, Serialize};

use super::scheme::{basic_value, AuthMaterial, AuthScheme};
use crate::error::{CoreError, Result};
use crate::secret::SecretString;

/// Whether a credential must carry a username
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernamePolicy {
    /// Username must be non-empty (Basic auth needs both halves)
    #[default]
    Required,
    /// Key-only credentials are accepted
    Optional,
}

/// Username and API key identifying a caller to the Challonge API.
///
/// Both fields are fixed at construction. A credential with an empty API key
/// cannot exist; [`Credential::new`] rejects it with
/// [`CoreError::InvalidCredential`].
#[derive(Debug, Clone)]
pub struct Credential {
    username: String,
    api_key: SecretString,
}

impl Credential {
    /// Create a credential, requiring a non-empty username
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_policy(username, api_key, UsernamePolicy::Required)
    }

    /// Create a credential under an explicit username policy
    pub fn with_policy(
        username: impl Into<String>,
        api_key: impl Into<String>,
        policy: UsernamePolicy,
    ) -> Result<Self> {
        let username = username.into();
        let api_key = SecretString::new(api_key);

        if api_key.is_empty() {
            return Err(CoreError::InvalidCredential(
                "API key must not be empty".to_string(),
            ));
        }

        if policy == UsernamePolicy::Required && username.trim().is_empty() {
            return Err(CoreError::InvalidCredential(
                "username must not be empty".to_string(),
            ));
        }

        if username.contains(':') {
            return Err(CoreError::InvalidCredential(
                "username must not contain ':'".to_string(),
            ));
        }

        Ok(Self { username, api_key })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the API key (use carefully - never log it)
    pub fn api_key(&self) -> &str {
        self.api_key.expose()
    }

    pub fn has_username(&self) -> bool {
        !self.username.trim().is_empty()
    }

    /// Basic-Auth `Authorization` header value for `username:api_key`
    pub fn auth_header_value(&self) -> String {
        basic_value(&self.username, self.api_key.expose())
    }

    /// Authentication material for the given scheme
    pub fn authorize(&self, scheme: &AuthScheme) -> AuthMaterial {
        scheme.material(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::decode_basic;

    #[test]
    fn test_create_valid() {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        assert_eq!(credential.username(), "alice");
        assert_eq!(credential.api_key(), "sk_live_123");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = Credential::new("alice", "").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredential(_)));

        let err = Credential::with_policy("alice", "  ", UsernamePolicy::Optional).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredential(_)));
    }

    #[test]
    fn test_empty_username_rejected_by_default() {
        let err = Credential::new("", "sk_live_123").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredential(_)));
    }

    #[test]
    fn test_empty_username_allowed_when_optional() {
        let credential =
            Credential::with_policy("", "sk_live_123", UsernamePolicy::Optional).unwrap();
        assert!(!credential.has_username());
        assert_eq!(credential.api_key(), "sk_live_123");
    }

    #[test]
    fn test_username_with_colon_rejected() {
        let err = Credential::new("al:ice", "sk_live_123").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredential(_)));
    }

    #[test]
    fn test_error_does_not_leak_key() {
        let err = Credential::new("", "sk_live_secret").unwrap_err();
        assert!(!err.to_string().contains("sk_live_secret"));
    }

    #[test]
    fn test_auth_header_value() {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        assert_eq!(
            credential.auth_header_value(),
            "Basic YWxpY2U6c2tfbGl2ZV8xMjM="
        );
    }

    #[test]
    fn test_auth_header_value_deterministic() {
        let credential = Credential::new("bob", "k").unwrap();
        assert_eq!(credential.auth_header_value(), credential.auth_header_value());
        assert_eq!(credential.auth_header_value(), "Basic Ym9iOms=");
    }

    #[test]
    fn test_auth_header_round_trip() {
        let pairs = [
            ("alice", "sk_live_123"),
            ("tournament-organizer", "aB3/+=xyz"),
            ("ünïcode", "ключ"),
        ];
        for (username, api_key) in pairs {
            let credential = Credential::new(username, api_key).unwrap();
            let (u, k) = decode_basic(&credential.auth_header_value()).unwrap();
            assert_eq!(u, username);
            assert_eq!(k, api_key);
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        let debug = format!("{:?}", credential);
        assert!(debug.contains("alice"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("sk_live_123"));
    }

    #[test]
    fn test_shared_across_threads() {
        let credential = std::sync::Arc::new(Credential::new("alice", "sk_live_123").unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let credential = credential.clone();
                std::thread::spawn(move || credential.auth_header_value())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Basic YWxpY2U6c2tfbGl2ZV8xMjM=");
        }
    }
}
