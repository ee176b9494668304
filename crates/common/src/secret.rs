//! Redacted wrapper for credential material

use std::fmt;
use zeroize::Zeroize;

/// Credential material: a workspace key secret or a bearer access token.
///
/// Redacted in Debug/Display so credentials never reach logs or error
/// messages; the backing string is zeroized on drop.
pub struct SecretString(String);

impl SecretString {
    /// Wrap credential material.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value (use sparingly)
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether any material is present. Credential selection treats an
    /// empty string the same as an unset credential.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_debug_and_display() {
        let secret = SecretString::new("key-secret-ABC123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn exposes_inner_value() {
        let secret = SecretString::new("key-secret-ABC123");
        assert_eq!(secret.expose(), "key-secret-ABC123");
    }

    #[test]
    fn empty_material_is_detectable() {
        assert!(SecretString::new("").is_empty());
        assert!(!SecretString::new("x").is_empty());
    }

    #[test]
    fn converts_from_str_and_string() {
        let from_str: SecretString = "tok".into();
        let from_string: SecretString = String::from("tok").into();
        assert_eq!(from_str.expose(), from_string.expose());
    }

    #[test]
    fn clone_preserves_value() {
        let secret = SecretString::new("original");
        let copy = secret.clone();
        drop(secret);
        assert_eq!(copy.expose(), "original");
    }
}
