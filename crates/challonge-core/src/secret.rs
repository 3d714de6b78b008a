//! Secret values that are wiped from memory when dropped

use zeroize::{Zeroize, ZeroizeOnDrop};

/// API key or other secret string - automatically zeroed when dropped
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    /// Wrap a secret value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the secret value (use carefully - never log it)
    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expose() {
        let secret = SecretString::new("sk_live_123");
        assert_eq!(secret.expose(), "sk_live_123");
    }

    #[test]
    fn test_whitespace_is_empty() {
        assert!(SecretString::new("   ").is_empty());
        assert!(SecretString::new("").is_empty());
        assert!(!SecretString::new("k").is_empty());
    }

    #[test]
    fn test_debug_redacted() {
        let secret = SecretString::new("sk_live_123");
        let debug = format!("{:?}", secret);
        assert_eq!(debug, "[REDACTED]");
        assert!(!debug.contains("sk_live"));
    }
}
