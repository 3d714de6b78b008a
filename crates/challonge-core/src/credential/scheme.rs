//! Authentication scheme handling

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::types::Credential;
use crate::error::{CoreError, Result};
use crate::secret::SecretString;

/// Query parameter Challonge v1 reads the key from
pub const DEFAULT_QUERY_PARAM: &str = "api_key";

/// How a credential is attached to outbound requests
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthScheme {
    /// HTTP Basic authentication with `username:api_key`
    #[default]
    Basic,
    /// API key in a query parameter
    QueryKey { param: String },
    /// Raw API key in a custom header
    Header { name: String },
}

impl AuthScheme {
    /// Query-string scheme using the standard `api_key` parameter
    pub fn query_key() -> Self {
        AuthScheme::QueryKey {
            param: DEFAULT_QUERY_PARAM.to_string(),
        }
    }

    /// Whether the scheme needs the username half of the credential
    pub fn requires_username(&self) -> bool {
        matches!(self, AuthScheme::Basic)
    }

    /// Check that a credential can be used with this scheme
    pub fn validate(&self, credential: &Credential) -> Result<()> {
        if self.requires_username() && !credential.has_username() {
            return Err(CoreError::InvalidCredential(
                "Basic authentication requires a username".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the request material for a credential
    pub fn material(&self, credential: &Credential) -> AuthMaterial {
        match self {
            AuthScheme::Basic => AuthMaterial::Header {
                name: "Authorization".to_string(),
                value: SecretString::new(credential.auth_header_value()),
            },
            AuthScheme::QueryKey { param } => AuthMaterial::Query {
                name: param.clone(),
                value: SecretString::new(credential.api_key()),
            },
            AuthScheme::Header { name } => AuthMaterial::Header {
                name: name.clone(),
                value: SecretString::new(credential.api_key()),
            },
        }
    }

    /// Human-readable name, safe for logs
    pub fn label(&self) -> &'static str {
        match self {
            AuthScheme::Basic => "basic",
            AuthScheme::QueryKey { .. } => "query",
            AuthScheme::Header { .. } => "header",
        }
    }
}

/// Authentication material ready to attach to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMaterial {
    Header { name: String, value: SecretString },
    Query { name: String, value: SecretString },
}

impl AuthMaterial {
    /// Header or query parameter name
    pub fn name(&self) -> &str {
        match self {
            AuthMaterial::Header { name, .. } | AuthMaterial::Query { name, .. } => name,
        }
    }

    pub fn value(&self) -> &SecretString {
        match self {
            AuthMaterial::Header { value, .. } | AuthMaterial::Query { value, .. } => value,
        }
    }
}

pub(super) fn basic_value(username: &str, api_key: &str) -> String {
    let pair = Zeroizing::new(format!("{}:{}", username, api_key));
    format!("Basic {}", STANDARD.encode(pair.as_bytes()))
}

/// Recover `(username, api_key)` from a Basic `Authorization` value
pub fn decode_basic(value: &str) -> Result<(String, String)> {
    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| CoreError::InvalidCredential("not a Basic auth value".to_string()))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| CoreError::InvalidCredential("malformed base64".to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| CoreError::InvalidCredential("credential is not UTF-8".to_string()))?;

    let (username, api_key) = decoded
        .split_once(':')
        .ok_or_else(|| CoreError::InvalidCredential("missing ':' separator".to_string()))?;

    Ok((username.to_string(), api_key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::UsernamePolicy;

    #[test]
    fn test_basic_material() {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        let material = AuthScheme::Basic.material(&credential);
        assert_eq!(
            material,
            AuthMaterial::Header {
                name: "Authorization".to_string(),
                value: SecretString::new("Basic YWxpY2U6c2tfbGl2ZV8xMjM="),
            }
        );
    }

    #[test]
    fn test_query_material() {
        let credential =
            Credential::with_policy("", "sk_live_123", UsernamePolicy::Optional).unwrap();
        let material = credential.authorize(&AuthScheme::query_key());
        assert_eq!(
            material,
            AuthMaterial::Query {
                name: "api_key".to_string(),
                value: SecretString::new("sk_live_123"),
            }
        );
    }

    #[test]
    fn test_header_material() {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        let scheme = AuthScheme::Header {
            name: "Authorization".to_string(),
        };
        match credential.authorize(&scheme) {
            AuthMaterial::Header { name, value } => {
                assert_eq!(name, "Authorization");
                assert_eq!(value.expose(), "sk_live_123");
            }
            other => panic!("Expected header material, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_requires_username() {
        let credential =
            Credential::with_policy("", "sk_live_123", UsernamePolicy::Optional).unwrap();
        assert!(AuthScheme::Basic.validate(&credential).is_err());
        assert!(AuthScheme::query_key().validate(&credential).is_ok());
    }

    #[test]
    fn test_decode_basic_rejects_garbage() {
        assert!(decode_basic("Bearer abc").is_err());
        assert!(decode_basic("Basic !!!").is_err());
        // "alice" without a separator
        assert!(decode_basic("Basic YWxpY2U=").is_err());
    }

    #[test]
    fn test_decode_keeps_colons_in_key() {
        let credential = Credential::new("alice", "a:b:c").unwrap();
        let (username, api_key) = decode_basic(&credential.auth_header_value()).unwrap();
        assert_eq!(username, "alice");
        assert_eq!(api_key, "a:b:c");
    }

    #[test]
    fn test_material_debug_redacted() {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        let material = AuthScheme::query_key().material(&credential);
        let debug = format!("{:?}", material);
        assert!(!debug.contains("sk_live_123"));
        assert!(debug.contains("api_key"));

        // Copies stay redacted too
        let copy = material.clone();
        assert!(!format!("{:?}", copy).contains("sk_live_123"));
        assert_eq!(copy.name(), "api_key");
        assert_eq!(copy.value().expose(), "sk_live_123");
    }

    #[test]
    fn test_scheme_serde() {
        let json = serde_json::to_string(&AuthScheme::query_key()).unwrap();
        assert_eq!(json, r#"{"type":"query_key","param":"api_key"}"#);
        let parsed: AuthScheme = serde_json::from_str(r#"{"type":"basic"}"#).unwrap();
        assert_eq!(parsed, AuthScheme::Basic);
    }
}
